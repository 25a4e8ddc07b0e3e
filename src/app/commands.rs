// ClipDeck - Commandes de l'application
//
// Chaque action de l'utilisateur (clavier, souris, menu) et chaque
// evenement interne (capture du presse-papiers, redimensionnement) est
// traduit en une `Command`, executee par `App::handle` sur le thread
// unique de l'interface.
//
// # Designation des entrees
// Les commandes issues d'un menu designent leur entree par identite
// (`EntryId`) et non par index : la liste peut changer entre la
// construction du menu et le choix de l'utilisateur. Les commandes
// clavier portent sur l'entree selectionnee de la liste active.

use crate::app::drag::DragPayload;
use crate::history::entry::EntryId;
use crate::ui::ScreenPoint;

/// Liste ayant le focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveList {
    #[default]
    History,
    Favorites,
}

impl ActiveList {
    /// L'autre liste.
    pub fn toggled(self) -> Self {
        match self {
            Self::History => Self::Favorites,
            Self::Favorites => Self::History,
        }
    }
}

/// Suite a donner apres une commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Action executee par le controleur.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Nouveau texte lu dans le presse-papiers
    CaptureClip { text: String, origin: String },

    // selection
    Select { list: ActiveList, index: usize },
    SelectPrev,
    SelectNext,
    /// `None` bascule vers l'autre liste
    SwitchList(Option<ActiveList>),

    // choix d'une entree (copie dans le presse-papiers)
    PickSelected,
    PickClip(EntryId),
    PickFavorite(EntryId),
    /// Favori portant ce numero (touches 1 a 9)
    PickFavoriteNumber(usize),

    // historique
    PromoteSelected,
    PromoteToFavorite(EntryId),
    RemoveSelected,
    RemoveClip(EntryId),
    ClearHistory,

    // favoris
    RemoveFavorite(EntryId),
    MoveFavorite { from: usize, to: usize },
    MoveSelectedUp,
    MoveSelectedDown,
    BeginDrag { index: usize },
    DropFavorite { payload: DragPayload, drop_index: Option<usize> },
    EditSelectedTitle,
    EditTitle(EntryId),
    CommitTitle { id: EntryId, title: String },

    // service de collage
    PasteSelected,
    PasteClip(EntryId),
    PasteFavorite(EntryId),

    // menu contextuel
    OpenMenu { point: ScreenPoint, list: ActiveList, index: usize },
    MenuClosed,

    TogglePause,
    Resize { view_width: usize },
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled() {
        assert_eq!(ActiveList::History.toggled(), ActiveList::Favorites);
        assert_eq!(ActiveList::Favorites.toggled(), ActiveList::History);
        assert_eq!(ActiveList::default(), ActiveList::History);
    }
}
