// ClipDeck - Constantes globales
//
// Ce module centralise les constantes de l'application :
// - Valeurs par defaut de la configuration
// - Geometrie des listes (icone, espacement des libelles)
// - Noms de fichiers et repertoires
// - Version du format de persistance
//
// Les constantes sont utilisees par les modules config, history,
// storage et ui pour garantir la coherence des valeurs.

/// Version du format des fichiers history.json / favorites.json
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Nombre max d'entrees dans l'historique par defaut
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Borne haute de la limite d'historique (0 = illimite)
pub const MAX_HISTORY_LIMIT: usize = 10_000;

/// Intervalle de scrutation du presse-papiers (ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;

/// Delai avant le premier palier d'estompage (minutes)
pub const DEFAULT_FADE_DELAY_MINUTES: u32 = 10;

/// Assombrissement par palier d'estompage
pub const DEFAULT_FADE_STEP: u8 = 16;

/// Nombre max de paliers d'estompage
pub const DEFAULT_FADE_LEVELS: u32 = 6;

/// Service de collage par defaut
pub const DEFAULT_PASTE_SERVICE_URL: &str = "http://sprunge.us";

/// Largeur reservee au numero de favori (cellules)
pub const ICON_WIDTH: usize = 3;

/// Espacement standard entre libelles (cellules)
pub const LABEL_SPACING: usize = 1;

/// Marqueur de troncature des titres
pub const ELLIPSIS: &str = "…";

/// Nom du dossier application
pub const APP_DIR_NAME: &str = "clipdeck";

/// Nom du fichier d'historique
pub const HISTORY_FILENAME: &str = "history.json";

/// Nom du fichier des favoris
pub const FAVORITES_FILENAME: &str = "favorites.json";

/// Nom du fichier de configuration
pub const CONFIG_FILENAME: &str = "config.toml";

/// Sous-dossier des journaux
pub const LOG_DIR_NAME: &str = "logs";

/// Nom du fichier journal
pub const LOG_FILENAME: &str = "clipdeck.log";

/// Origine affichee quand l'application source est inconnue
pub const UNKNOWN_ORIGIN: &str = "unknown";
