// ClipDeck - Module history
// Listes ordonnees de l'historique et des favoris, en memoire
//
// Ce module contient le coeur de l'application. Il est independant
// de la plateforme et de l'interface (aucun appel terminal ou systeme).
//
// # Sous-modules
// - `entry`     : types ClipEntry, FavoriteEntry, DisplayColor, EntryId
// - `ordered`   : sequence generique OrderedEntryList (insertion en tete,
//                 ajout, deplacement, suppression compactee, plafond)
// - `ring`      : historique plafonne et dedoublonne, estompage par age
// - `favorites` : favoris reordonnables et numerotes, titres tronques
// - `truncate`  : mesure et troncature des textes a la largeur d'affichage
//
// # Architecture
// Chaque liste possede exclusivement ses entrees. Promouvoir une capture
// en favori copie ses champs dans un nouveau FavoriteEntry.

/// Types des entrees de l'historique et des favoris.
pub mod entry;
/// Favoris reordonnables avec numerotation dense.
pub mod favorites;
/// Sequence ordonnee generique.
pub mod ordered;
/// Historique plafonne, plus recent en tete.
pub mod ring;
/// Troncature des titres a la largeur d'affichage.
pub mod truncate;
