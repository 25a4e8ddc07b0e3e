// ClipDeck - Module paste
// Publication d'un texte sur un service de collage web
//
// Le coeur ne connait que le trait `PasteService`. L'URL retournee est
// ecrite dans le presse-papiers et ajoutee a l'historique, avec le
// nom du service comme origine.

use crate::error::CdResult;

/// Client sprunge (formulaire multipart).
pub mod sprunge;

/// Service de collage distant.
pub trait PasteService {
    /// Publie `text` et retourne l'URL du collage.
    fn paste(&self, text: &str) -> CdResult<String>;
    /// Nom court du service (origine des URL dans l'historique).
    fn name(&self) -> &str;
}

#[cfg(test)]
pub use fake::FakePasteService;
