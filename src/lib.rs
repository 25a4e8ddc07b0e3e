// ClipDeck - Arbre de modules (crate library)
//
// Ce fichier constitue le point d'entree de la crate library de ClipDeck.
// Il re-exporte tous les modules pour permettre l'acces depuis le binaire
// et faciliter les tests.
//
// # Modules
// - `app`       : orchestrateur, commandes, menu contextuel, glisser-deposer
// - `cli`       : options de ligne de commande
// - `clipboard` : lecture/ecriture et surveillance du presse-papiers
// - `config`    : lecture/ecriture de la configuration utilisateur
// - `constants` : constantes globales (limites, noms de fichiers, largeurs)
// - `error`     : types d'erreur centralises (CdError, CdResult)
// - `history`   : historique et favoris en memoire
// - `logging`   : initialisation de tracing
// - `paste`     : publication sur un service de collage
// - `storage`   : persistance JSON sur disque
// - `ui`        : interface terminal (crossterm)

/// Orchestrateur principal de l'application.
pub mod app;
/// Options de ligne de commande.
pub mod cli;
/// Acces et surveillance du presse-papiers.
pub mod clipboard;
/// Configuration utilisateur.
pub mod config;
/// Constantes globales de l'application.
pub mod constants;
/// Types d'erreur centralises.
pub mod error;
/// Historique et favoris en memoire.
pub mod history;
/// Journalisation dans un fichier.
pub mod logging;
/// Service de collage web.
pub mod paste;
/// Persistance des listes sur disque.
pub mod storage;
/// Interface terminal.
pub mod ui;
