// ClipDeck - Geometrie de l'ecran
//
// L'ecran est partage en deux panneaux cote a cote (historique a
// gauche, favoris a droite) separes par une colonne de bordure, plus
// une barre d'etat sur la derniere ligne. Chaque panneau commence par
// une ligne d'en-tete ; les entrees occupent les lignes suivantes.
//
// # Resolution pointeur -> index
// `Pane::item_at` convertit une position du pointeur en index d'entree
// en tenant compte du defilement. Une position hors panneau, sur
// l'en-tete ou sous la derniere entree ne resout aucun index.

use crate::ui::ScreenPoint;

/// Rectangle d'un panneau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pane {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Pane {
    /// Le point est-il dans le panneau (en-tete compris) ?
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.column >= self.x
            && p.column < self.x.saturating_add(self.width)
            && p.row >= self.y
            && p.row < self.y.saturating_add(self.height)
    }

    /// Nombre de lignes disponibles pour les entrees.
    pub fn visible_rows(&self) -> usize {
        self.height.saturating_sub(1) as usize
    }

    /// Ligne ecran de la premiere entree.
    pub fn items_top(&self) -> u16 {
        self.y.saturating_add(1)
    }

    /// Index de l'entree sous le pointeur.
    pub fn item_at(&self, p: ScreenPoint, offset: usize, len: usize) -> Option<usize> {
        if !self.contains(p) || p.row < self.items_top() {
            return None;
        }
        let index = offset + (p.row - self.items_top()) as usize;
        (index < len).then_some(index)
    }

    /// Ligne ecran d'une entree, si elle est visible.
    pub fn row_of(&self, index: usize, offset: usize) -> Option<u16> {
        let rel = index.checked_sub(offset)?;
        if rel >= self.visible_rows() {
            return None;
        }
        Some(self.items_top() + rel as u16)
    }
}

/// Decoupage complet de l'ecran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub history: Pane,
    pub favorites: Pane,
    /// Colonne de la bordure entre les panneaux
    pub separator: u16,
    pub status_row: u16,
    pub width: u16,
}

impl Layout {
    /// Calcule la disposition pour un terminal de `cols` x `rows`.
    pub fn compute(cols: u16, rows: u16) -> Self {
        let height = rows.saturating_sub(1);
        let left = cols / 2;
        Self {
            history: Pane { x: 0, y: 0, width: left, height },
            favorites: Pane {
                x: left.saturating_add(1),
                y: 0,
                width: cols.saturating_sub(left).saturating_sub(1),
                height,
            },
            separator: left,
            status_row: height,
            width: cols,
        }
    }

    /// Largeur de vue des favoris, utilisee pour tronquer les titres.
    pub fn favorites_view_width(&self) -> usize {
        self.favorites.width as usize
    }
}

/// Ajuste le defilement pour que `selected` reste visible.
pub fn scroll_offset(selected: usize, offset: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    if selected < offset {
        selected
    } else if selected >= offset + visible {
        selected + 1 - visible
    } else {
        offset
    }
}
