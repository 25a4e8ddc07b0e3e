// ClipDeck - Liste ordonnee d'entrees
// Sequence partagee par l'historique et les favoris
//
// Ce module implemente le stockage en memoire d'une liste ordonnee :
// l'ordre d'insertion est l'ordre d'affichage.
//
// # Invariants
// - Aucun trou d'index apres une mutation : la suppression compacte.
// - Chaque entree recoit une identite unique a l'insertion.
//
// # Indices invalides
// Les indices proviennent de l'etat de l'interface. Un index hors
// bornes est ramene a la borne valide la plus proche au lieu d'etre
// rejete ; seule une liste vide rend les operations sans effet.
//
// # Dirty flag
// Le flag `dirty` est positionne a chaque modification et remis a
// zero apres une sauvegarde reussie (via `reset_dirty`).

use crate::history::entry::{EntryId, ListEntry};

/// Liste ordonnee possedant ses entrees.
#[derive(Debug)]
pub struct OrderedEntryList<T> {
    entries: Vec<T>,
    next_id: u64,
    dirty: bool,
}

impl<T> Default for OrderedEntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            dirty: false,
        }
    }
}

impl<T: ListEntry> OrderedEntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&mut self, entry: &mut T) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        entry.assign_id(id);
        id
    }

    /// Insere une entree en tete (index 0).
    pub fn insert_top(&mut self, mut entry: T) -> EntryId {
        let id = self.stamp(&mut entry);
        self.entries.insert(0, entry);
        self.dirty = true;
        id
    }

    /// Ajoute une entree en fin de liste.
    pub fn push_back(&mut self, mut entry: T) -> EntryId {
        let id = self.stamp(&mut entry);
        self.entries.push(entry);
        self.dirty = true;
        id
    }

    /// Supprime l'entree a l'index donne (ramene dans les bornes).
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let index = self.clamp_index(index)?;
        self.dirty = true;
        Some(self.entries.remove(index))
    }

    /// Supprime la premiere entree dont le texte est identique.
    pub fn remove_by_text(&mut self, text: &str) -> Option<T> {
        let index = self.entries.iter().position(|e| e.text() == text)?;
        self.remove(index)
    }

    /// Deplace une entree : retrait a `from` puis insertion a `to`.
    ///
    /// `to` est calcule sur la sequence apres retrait ; au-dela de la fin,
    /// l'entree est placee en dernier. Retourne false si la liste est vide.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        let Some(from) = self.clamp_index(from) else {
            return false;
        };
        let entry = self.entries.remove(from);
        let to = to.min(self.entries.len());
        self.entries.insert(to, entry);
        if from != to {
            self.dirty = true;
        }
        true
    }

    /// Supprime les entrees au-dela de `limit` (les plus anciennes en fin).
    /// Retourne le nombre d'entrees supprimees.
    pub fn truncate_to(&mut self, limit: usize) -> usize {
        let removed = self.entries.len().saturating_sub(limit);
        if removed > 0 {
            self.entries.truncate(limit);
            self.dirty = true;
        }
        removed
    }

    /// Vide la liste.
    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.dirty = true;
        }
    }

    /// Index courant de l'entree portant cette identite.
    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    /// Ramene un index dans les bornes ; None si la liste est vide.
    pub fn clamp_index(&self, index: usize) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(index.min(self.entries.len() - 1))
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.entries.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Reconstruit la liste a partir d'entrees chargees, avec de nouvelles identites.
    pub fn load_from(&mut self, entries: Vec<T>) {
        self.entries.clear();
        for mut entry in entries {
            self.stamp(&mut entry);
            self.entries.push(entry);
        }
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn reset_dirty(&mut self) {
        self.dirty = false;
    }
}
