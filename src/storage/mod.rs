// ClipDeck - Module storage
// Persistance de l'historique et des favoris sur disque
//
// # Sous-modules
// - `format`  : document JSON versionne contenant les entrees d'une liste
// - `gateway` : trait PersistenceGateway et implementation fichier JSON
//               avec ecriture atomique (temp+rename)
//
// # Fichiers
// ```text
// <data_dir>/history.json    captures, plus recente en tete
// <data_dir>/favorites.json  favoris, dans l'ordre choisi par l'utilisateur
// ```

/// Format JSON versionne des listes.
pub mod format;
/// Chargement et sauvegarde des listes.
pub mod gateway;
