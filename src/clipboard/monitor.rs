// ClipDeck - Surveillance du presse-papiers
// Detection des changements par scrutation a chaque tick.
//
// Le moniteur compare le texte courant du presse-papiers au dernier
// texte vu. Un changement produit une nouvelle capture, sauf :
// - si le texte est celui que ClipDeck vient lui-meme d'ecrire
//   (choix d'une entree, URL de collage) ;
// - si la capture est en pause : le texte est alors seulement memorise,
//   pour ne pas etre capture a la reprise.
//
// # Securite
// Seule la longueur du texte est journalisee.

use crate::clipboard::ClipboardSource;

/// Etat de la detection des changements.
#[derive(Debug, Default)]
pub struct ClipboardMonitor {
    last_seen: Option<String>,
    paused: bool,
}

impl ClipboardMonitor {
    /// Cree un moniteur actif ou en pause.
    pub fn new(paused: bool) -> Self {
        Self {
            paused,
            ..Self::default()
        }
    }

    /// Memorise le contenu courant sans le capturer (demarrage).
    pub fn prime(&mut self, source: &mut dyn ClipboardSource) {
        self.last_seen = source.read_text();
    }

    /// Lit le presse-papiers et retourne le texte s'il doit etre capture.
    pub fn poll(&mut self, source: &mut dyn ClipboardSource) -> Option<String> {
        let text = source.read_text()?;
        if self.last_seen.as_deref() == Some(text.as_str()) {
            return None;
        }
        self.last_seen = Some(text.clone());
        if self.paused {
            tracing::debug!(len = text.len(), "capture paused, clipboard change skipped");
            return None;
        }
        tracing::debug!(len = text.len(), "clipboard change captured");
        Some(text)
    }

    /// Signale un texte ecrit par l'application elle-meme.
    ///
    /// Il devient le dernier texte vu et ne sera donc pas capture.
    pub fn mark_own(&mut self, text: &str) {
        tracing::trace!(len = text.len(), "own clipboard write");
        self.last_seen = Some(text.to_string());
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
