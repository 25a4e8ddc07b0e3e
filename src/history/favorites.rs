// ClipDeck - Liste des favoris
// Liste ordonnee librement par l'utilisateur, numerotee
//
// Ce module implemente les favoris au-dessus de
// `OrderedEntryList<FavoriteEntry>`.
//
// # Numerotation
// Apres chaque ajout, deplacement ou suppression, `renumber_all`
// reaffecte `position = index` : les numeros forment toujours la
// permutation dense 0..N-1 dans l'ordre de la liste.
//
// # Titres affiches
// Le titre de chaque favori est tronque a la largeur de la vue
// courante (`view_width`). `relayout` recalcule tous les titres
// apres un redimensionnement.

use crate::history::entry::{EntryId, FavoriteEntry};
use crate::history::ordered::OrderedEntryList;
use crate::history::truncate::{available_title_width, truncate_end};

/// Favoris en memoire.
#[derive(Debug)]
pub struct FavoriteList {
    entries: OrderedEntryList<FavoriteEntry>,
    view_width: usize,
}

impl FavoriteList {
    /// Cree une liste vide affichee dans une vue de `view_width` cellules.
    pub fn new(view_width: usize) -> Self {
        Self {
            entries: OrderedEntryList::new(),
            view_width,
        }
    }

    /// Ajoute un favori en fin de liste.
    pub fn add_favorite(
        &mut self,
        text: impl Into<String>,
        origin: impl Into<String>,
        title: Option<String>,
    ) -> EntryId {
        let mut entry = FavoriteEntry::new(text, origin, title);
        entry.position = self.entries.len();
        entry.display_title = truncate_end(&entry.title, self.title_width());
        let id = self.entries.push_back(entry);
        self.renumber_all();
        id
    }

    /// Deplace un favori (retrait puis insertion) et renumerote.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let moved = self.entries.move_item(from, to);
        self.renumber_all();
        moved
    }

    /// Remonte le favori d'un cran. Retourne son nouvel index.
    pub fn move_up(&mut self, index: usize) -> Option<usize> {
        let index = self.entries.clamp_index(index)?;
        let target = index.saturating_sub(1);
        self.move_item(index, target);
        Some(target)
    }

    /// Descend le favori d'un cran. Retourne son nouvel index.
    pub fn move_down(&mut self, index: usize) -> Option<usize> {
        let index = self.entries.clamp_index(index)?;
        let target = (index + 1).min(self.entries.len() - 1);
        self.move_item(index, target);
        Some(target)
    }

    /// Reaffecte `position = index` pour chaque favori.
    pub fn renumber_all(&mut self) {
        let mut changed = false;
        for (i, entry) in self.entries.iter_mut().enumerate() {
            if entry.position != i {
                entry.position = i;
                changed = true;
            }
        }
        if changed {
            self.entries.mark_dirty();
        }
    }

    /// Supprime le favori a l'index donne puis renumerote.
    pub fn remove_item(&mut self, index: usize) -> Option<FavoriteEntry> {
        let removed = self.entries.remove(index);
        self.renumber_all();
        removed
    }

    /// Change le titre et recalcule le titre affiche.
    pub fn set_title(&mut self, index: usize, title: impl Into<String>) -> bool {
        let width = self.title_width();
        let Some(index) = self.entries.clamp_index(index) else {
            return false;
        };
        let Some(entry) = self.entries.get_mut(index) else {
            return false;
        };
        entry.title = title.into();
        entry.display_title = truncate_end(&entry.title, width);
        self.entries.mark_dirty();
        true
    }

    /// Recalcule les titres affiches pour une nouvelle largeur de vue.
    pub fn relayout(&mut self, view_width: usize) {
        self.view_width = view_width;
        let width = self.title_width();
        for entry in self.entries.iter_mut() {
            entry.display_title = truncate_end(&entry.title, width);
        }
    }

    /// Largeur disponible pour les titres.
    pub fn title_width(&self) -> usize {
        available_title_width(self.view_width)
    }

    pub fn view_width(&self) -> usize {
        self.view_width
    }

    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.index_of(id)
    }

    /// Favori portant ce numero.
    pub fn by_position(&self, position: usize) -> Option<&FavoriteEntry> {
        self.entries.iter().find(|e| e.position == position)
    }

    pub fn get(&self, index: usize) -> Option<&FavoriteEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FavoriteEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FavoriteEntry] {
        self.entries.as_slice()
    }

    /// Recharge les favoris dans l'ordre persiste.
    ///
    /// L'ordre du fichier fait foi ; les numeros sont recalcules.
    pub fn load_from(&mut self, entries: Vec<FavoriteEntry>) {
        self.entries.load_from(entries);
        self.relayout(self.view_width);
        self.renumber_all();
        self.entries.reset_dirty();
    }

    pub fn is_dirty(&self) -> bool {
        self.entries.is_dirty()
    }

    pub fn reset_dirty(&mut self) {
        self.entries.reset_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ELLIPSIS, ICON_WIDTH, LABEL_SPACING};
    use crate::history::truncate::display_width;

    fn titles(list: &FavoriteList) -> Vec<&str> {
        list.iter().map(|e| e.title.as_str()).collect()
    }

    fn assert_renumbered(list: &FavoriteList) {
        for (i, e) in list.iter().enumerate() {
            assert_eq!(e.position, i);
        }
    }

    fn abc() -> FavoriteList {
        let mut list = FavoriteList::new(80);
        for t in ["A", "B", "C"] {
            list.add_favorite(t, "app", None);
        }
        list
    }

    #[test]
    fn test_add_appends_with_position() {
        let list = abc();
        assert_eq!(titles(&list), vec!["A", "B", "C"]);
        assert_renumbered(&list);
    }

    #[test]
    fn test_add_no_dedupe() {
        let mut list = FavoriteList::new(80);
        list.add_favorite("same", "app", None);
        list.add_favorite("same", "app", None);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_move_scenario() {
        let mut list = abc();
        list.move_item(0, 2);
        assert_eq!(titles(&list), vec!["B", "C", "A"]);
        assert_renumbered(&list);
        assert_eq!(list.get(2).unwrap().position, 2);
    }

    #[test]
    fn test_move_identity() {
        let mut list = abc();
        list.move_item(1, 1);
        assert_eq!(titles(&list), vec!["A", "B", "C"]);
        assert_renumbered(&list);
    }

    #[test]
    fn test_renumber_after_every_operation() {
        let mut list = FavoriteList::new(80);
        let ops: [(&str, usize, usize); 6] =
            [("add", 0, 0), ("add", 0, 0), ("add", 0, 0), ("move", 2, 0), ("remove", 1, 0), ("move", 0, 5)];
        for (op, a, b) in ops {
            match op {
                "add" => {
                    list.add_favorite(format!("f{}", list.len()), "app", None);
                }
                "move" => {
                    list.move_item(a, b);
                }
                _ => {
                    list.remove_item(a);
                }
            }
            assert_renumbered(&list);
        }
        assert_eq!(titles(&list), vec!["f1", "f2"]);
    }

    #[test]
    fn test_move_up_down() {
        let mut list = abc();
        assert_eq!(list.move_down(0), Some(1));
        assert_eq!(titles(&list), vec!["B", "A", "C"]);
        assert_eq!(list.move_up(2), Some(1));
        assert_eq!(titles(&list), vec!["B", "C", "A"]);
        assert_eq!(list.move_up(0), Some(0));
        assert_eq!(list.move_down(2), Some(2));
        assert_eq!(titles(&list), vec!["B", "C", "A"]);
        assert_renumbered(&list);
    }

    #[test]
    fn test_remove_item() {
        let mut list = abc();
        assert_eq!(list.remove_item(0).unwrap().title, "A");
        assert_eq!(titles(&list), vec!["B", "C"]);
        assert_renumbered(&list);
    }

    #[test]
    fn test_set_title_fits() {
        let mut list = abc();
        assert!(list.set_title(1, "Short"));
        let e = list.get(1).unwrap();
        assert_eq!(e.title, "Short");
        assert_eq!(e.display_title, "Short");
    }

    #[test]
    fn test_set_title_truncated() {
        let view = 20;
        let mut list = FavoriteList::new(view);
        list.add_favorite("x", "app", None);
        let long = "A title much longer than the available width";
        list.set_title(0, long);
        let e = list.get(0).unwrap();
        let available = view - ICON_WIDTH - 4 * LABEL_SPACING;
        assert!(display_width(&e.display_title) <= available);
        assert!(e.display_title.ends_with(ELLIPSIS));
        let prefix = e.display_title.trim_end_matches(ELLIPSIS);
        assert!(long.starts_with(prefix) && prefix.len() < long.len());
    }

    #[test]
    fn test_relayout() {
        let mut list = FavoriteList::new(80);
        list.add_favorite("x", "app", Some("Twenty characters!!!".into()));
        assert_eq!(list.get(0).unwrap().display_title, "Twenty characters!!!");
        list.relayout(17);
        assert!(list.get(0).unwrap().display_title.ends_with(ELLIPSIS));
        list.relayout(80);
        assert_eq!(list.get(0).unwrap().display_title, "Twenty characters!!!");
    }

    #[test]
    fn test_load_from_renumbers() {
        let mut entries = vec![
            FavoriteEntry::new("one", "app", None),
            FavoriteEntry::new("two", "app", None),
        ];
        entries[0].position = 7;
        entries[1].position = 3;
        let mut list = FavoriteList::new(80);
        list.load_from(entries);
        assert_eq!(titles(&list), vec!["one", "two"]);
        assert_renumbered(&list);
        assert!(!list.is_dirty());
    }

    #[test]
    fn test_by_position() {
        let list = abc();
        assert_eq!(list.by_position(2).unwrap().title, "C");
        assert!(list.by_position(3).is_none());
    }
}
