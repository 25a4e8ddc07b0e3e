// ClipDeck - Glisser-deposer des favoris
//
// Le geste se deroule en deux evenements successifs :
// 1. debut : la liste fournit un `DragPayload` (texte + index d'origine),
//    une valeur autonome et non une reference vers l'entree ;
// 2. depot : l'interface resout un index de depot depuis la position du
//    pointeur, puis l'application deplace l'entree.
//
// # Index de depot
// Deposer sur l'entree k insere a l'index k (retrait puis insertion :
// l'entree glissee prend la place de l'entree survolee). Un depot sous
// la derniere entree, hors du panneau ou abandonne vise le dernier
// index : ce n'est jamais une erreur.

use crate::history::favorites::FavoriteList;

/// Contenu transporte pendant le glisser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub text: String,
    pub origin_index: usize,
}

/// Resultat du geste rendu par l'interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Depot immediat (`None` : aucun index resolu)
    Dropped(Option<usize>),
    /// Le depot arrivera plus tard sous forme de `Command::DropFavorite`
    Pending,
}

/// Position de la ligne indiquant ou l'entree sera deposee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropIndicator {
    /// Au-dessus de l'entree survolee
    Before(usize),
    /// Sous la derniere entree
    AfterLast(usize),
    /// En haut d'une liste vide
    Top,
}

/// Index final du depot pour une liste de `len` entrees.
pub fn resolve_drop_index(drop_index: Option<usize>, len: usize) -> usize {
    let last = len.saturating_sub(1);
    match drop_index {
        Some(i) if i < len => i,
        _ => last,
    }
}

/// Ligne de depot a afficher pendant le survol.
pub fn drop_indicator(hover: Option<usize>, len: usize) -> DropIndicator {
    if len == 0 {
        return DropIndicator::Top;
    }
    match hover {
        Some(i) if i < len => DropIndicator::Before(i),
        _ => DropIndicator::AfterLast(len - 1),
    }
}

/// Retrouve l'index actuel de l'entree glissee.
///
/// La liste a pu changer depuis le debut du geste : l'index d'origine
/// n'est retenu que s'il designe toujours le meme texte, sinon le
/// premier favori de meme texte est utilise.
pub fn locate_payload(list: &FavoriteList, payload: &DragPayload) -> Option<usize> {
    match list.get(payload.origin_index) {
        Some(e) if e.text == payload.text => Some(payload.origin_index),
        _ => list.iter().position(|e| e.text == payload.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_drop_index() {
        assert_eq!(resolve_drop_index(Some(1), 3), 1);
        assert_eq!(resolve_drop_index(Some(3), 3), 2);
        assert_eq!(resolve_drop_index(None, 3), 2);
        assert_eq!(resolve_drop_index(None, 0), 0);
    }

    #[test]
    fn test_drop_indicator() {
        assert_eq!(drop_indicator(Some(0), 3), DropIndicator::Before(0));
        assert_eq!(drop_indicator(Some(7), 3), DropIndicator::AfterLast(2));
        assert_eq!(drop_indicator(None, 3), DropIndicator::AfterLast(2));
        assert_eq!(drop_indicator(Some(0), 0), DropIndicator::Top);
    }

    #[test]
    fn test_locate_payload_after_mutation() {
        let mut list = FavoriteList::new(80);
        for t in ["a", "b", "c"] {
            list.add_favorite(t, "app", None);
        }
        let payload = DragPayload { text: "c".into(), origin_index: 2 };
        assert_eq!(locate_payload(&list, &payload), Some(2));
        list.remove_item(0);
        assert_eq!(locate_payload(&list, &payload), Some(1));
        list.remove_item(1);
        assert_eq!(locate_payload(&list, &payload), None);
    }
}
