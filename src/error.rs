// ClipDeck - Types d'erreur centralises
//
// Ce module definit l'enumeration `CdError` et le type alias
// `CdResult<T>` utilises dans toute l'application.
//
// # Categories d'erreurs
// - `Clipboard` : echec d'acces au presse-papiers
// - `Storage` : erreur de lecture/ecriture des listes persistees
// - `Config` : fichier de configuration illisible
// - `Paste` : echec d'envoi vers le service de collage
// - `Terminal` : echec d'initialisation ou de rendu du terminal
//
// Chaque variante s'affiche avec un prefixe entre crochets pour
// faciliter le diagnostic dans les journaux.

use thiserror::Error;

/// Enumeration de toutes les erreurs possibles dans ClipDeck.
#[derive(Debug, Error)]
pub enum CdError {
    /// Erreur d'acces au presse-papiers
    #[error("[Clipboard] {0}")]
    Clipboard(String),
    /// Erreur de lecture/ecriture des listes
    #[error("[Storage] {0}")]
    Storage(String),
    /// Erreur de configuration
    #[error("[Config] {0}")]
    Config(String),
    /// Erreur du service de collage
    #[error("[Paste] {0}")]
    Paste(String),
    /// Erreur du terminal
    #[error("[Terminal] {0}")]
    Terminal(String),
    #[error("[Storage] {0}")]
    Io(#[from] std::io::Error),
    #[error("[Storage] {0}")]
    Json(#[from] serde_json::Error),
    #[error("[Config] {0}")]
    Toml(#[from] toml::de::Error),
    #[error("[Paste] {0}")]
    Http(#[from] reqwest::Error),
}

/// Type Result specialise pour ClipDeck.
pub type CdResult<T> = Result<T, CdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefix() {
        let e = CdError::Clipboard("no display".into());
        assert_eq!(e.to_string(), "[Clipboard] no display");
        let e = CdError::Paste("timeout".into());
        assert_eq!(e.to_string(), "[Paste] timeout");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let e: CdError = io.into();
        assert!(e.to_string().starts_with("[Storage]"));
    }
}
