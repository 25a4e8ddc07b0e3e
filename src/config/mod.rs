// ClipDeck - Module config
// Lecture de la configuration utilisateur
//
// La configuration est un fichier TOML situe dans le dossier de
// configuration de la plateforme (ex: ~/.config/clipdeck/config.toml).
// Il est cree avec ses valeurs par defaut commentees au premier lancement.
//
// # Sous-modules
// - `settings` : structure Settings (historique, estompage, theme,
//                service de collage, chemins) avec valeurs par defaut
//                et validation des plages.
//
// # Utilisation
// ```rust,ignore
// let settings = Settings::load(&Settings::default_config_path());
// // Les valeurs manquantes utilisent les defauts
// ```

/// Structure de configuration et valeurs par defaut de l'application.
pub mod settings;
