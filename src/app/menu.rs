// ClipDeck - Menu contextuel
//
// Le menu s'ouvre par clic droit sur l'entree selectionnee, et
// seulement si aucun menu n'est deja ouvert. Chaque element porte la
// commande a executer, qui designe l'entree par identite.

use crate::app::commands::{ActiveList, Command};
use crate::history::entry::EntryId;

/// Etat du menu contextuel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Idle,
    MenuOpen,
}

/// Element de menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub label: String,
    /// Touche de raccourci dans le menu
    pub shortcut: Option<char>,
    pub command: Command,
}

impl MenuItem {
    fn new(label: impl Into<String>, shortcut: Option<char>, command: Command) -> Self {
        Self {
            label: label.into(),
            shortcut,
            command,
        }
    }
}

/// Construit le menu d'une entree de la liste donnee.
pub fn build_menu(list: ActiveList, id: EntryId, service: &str) -> Vec<MenuItem> {
    let paste_label = format!("Coller sur {}", service);
    match list {
        ActiveList::Favorites => vec![
            MenuItem::new(paste_label, Some('p'), Command::PasteFavorite(id)),
            MenuItem::new("Modifier le titre", Some('e'), Command::EditTitle(id)),
            MenuItem::new("Supprimer", None, Command::RemoveFavorite(id)),
        ],
        ActiveList::History => vec![
            MenuItem::new(paste_label, Some('p'), Command::PasteClip(id)),
            MenuItem::new("Ajouter aux favoris", Some('f'), Command::PromoteToFavorite(id)),
            MenuItem::new("Supprimer", None, Command::RemoveClip(id)),
        ],
    }
}
