// ClipDeck - Module clipboard
// Lecture et ecriture du presse-papiers
//
// Ce module fournit :
// - le trait `ClipboardSource` consomme par l'application (lecture du
//   texte courant, ecriture d'un texte) ;
// - `system` : implementation sur le presse-papiers systeme (copypasta),
//   avec repli en memoire quand aucun presse-papiers n'est disponible ;
// - `monitor` : detection des changements par scrutation periodique.
//
// # Securite
// Le contenu du presse-papiers n'est jamais journalise, seule sa
// taille l'est.

use crate::error::CdResult;

/// Scrutation des changements du presse-papiers.
pub mod monitor;
/// Presse-papiers systeme via copypasta.
pub mod system;

/// Acces au presse-papiers texte.
pub trait ClipboardSource {
    /// Texte courant ; `None` si le presse-papiers est vide ou illisible.
    fn read_text(&mut self) -> Option<String>;
    /// Remplace le contenu du presse-papiers.
    fn write_text(&mut self, text: &str) -> CdResult<()>;
    /// Libelle de l'application a l'origine du contenu courant.
    fn origin(&self) -> String {
        crate::constants::UNKNOWN_ORIGIN.to_string()
    }
}

/// Presse-papiers en memoire (repli sans serveur graphique, tests).
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSource for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.content.clone().filter(|t| !t.is_empty())
    }

    fn write_text(&mut self, text: &str) -> CdResult<()> {
        self.content = Some(text.to_string());
        Ok(())
    }
}
