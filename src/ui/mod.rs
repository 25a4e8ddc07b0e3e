// ClipDeck - Module UI
// Interface terminal (crossterm) a deux panneaux
//
// Ce module definit le contrat entre le controleur `App` et la couche
// de presentation, puis son implementation en terminal.
//
// # Sous-modules
// - `keys`     : traduction des touches en commandes
// - `layout`   : geometrie des panneaux et resolution pointeur -> index
// - `prompt`   : edition d'une ligne de texte (titre d'un favori)
// - `terminal` : boucle d'evenements, rendu et presentateur terminal
// - `theme`    : palettes de couleurs (clair/sombre)
//
// # Architecture
// `App` possede les listes et ne connait que le trait `Presenter` :
// demandes de rafraichissement, debut de glisser, affichage d'un menu,
// edition d'un titre. Le terminal lit ensuite l'etat de `App` pour
// dessiner.

use crate::app::drag::{DragOutcome, DragPayload};
use crate::app::menu::MenuItem;
use crate::history::entry::EntryId;

/// Traduction des touches en commandes.
pub mod keys;
/// Geometrie des panneaux.
pub mod layout;
/// Edition d'une ligne de texte.
pub mod prompt;
/// Boucle d'evenements et rendu terminal.
pub mod terminal;
/// Palettes de couleurs pour les themes clair et sombre.
pub mod theme;

/// Zone a redessiner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    History,
    Favorites,
    Status,
    All,
}

/// Position dans le terminal (colonne, ligne).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub column: u16,
    pub row: u16,
}

impl ScreenPoint {
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }
}

/// Apercu affiche sous le pointeur pendant un glisser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPreview {
    pub label: String,
}

/// Services de presentation consommes par `App`.
pub trait Presenter {
    /// Demande le rafraichissement d'une zone.
    fn request_redraw(&mut self, region: Region);
    /// Commence un glisser-deposer.
    fn begin_drag(&mut self, payload: DragPayload, preview: DragPreview) -> DragOutcome;
    /// Affiche un menu contextuel ; le choix revient sous forme de commande.
    fn show_popup_menu(&mut self, point: ScreenPoint, items: Vec<MenuItem>);
    /// Ouvre l'edition du titre d'un favori.
    fn edit_title(&mut self, id: EntryId, current: &str);
}

#[cfg(test)]
pub use recording::RecordingPresenter;
