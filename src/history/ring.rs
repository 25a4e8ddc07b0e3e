// ClipDeck - Historique des captures
// Liste plafonnee, plus recente en tete, sans doublon
//
// Ce module implemente l'historique du presse-papiers au-dessus de
// `OrderedEntryList<ClipEntry>`.
//
// # Deduplication
// `add_clip` retire d'abord toute entree de meme texte puis insere la
// nouvelle en tete : une copie repetee remonte simplement en tete.
//
// # Capacite
// Apres chaque insertion, les entrees les plus anciennes (fin de liste)
// sont supprimees jusqu'a respecter la limite. Une limite de 0 signifie
// illimite.
//
// # Estompage
// `update_colors` assombrit la couleur des captures selon leur age,
// par paliers de `delay_minutes`.

use crate::history::entry::{ClipEntry, DisplayColor, EntryId};
use crate::history::ordered::OrderedEntryList;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Parametres d'estompage des captures anciennes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadePolicy {
    pub enabled: bool,
    pub delay_minutes: u32,
    pub step: u8,
    pub levels: u32,
}

impl FadePolicy {
    /// Couleur d'une capture de l'age donne.
    pub fn color_for(&self, base: DisplayColor, age_minutes: u64) -> DisplayColor {
        if !self.enabled || self.delay_minutes == 0 {
            return base;
        }
        let level = (age_minutes / self.delay_minutes as u64).min(self.levels as u64);
        let amount = (level * self.step as u64).min(u8::MAX as u64) as u8;
        base.darken(amount)
    }
}

/// Historique du presse-papiers en memoire.
#[derive(Debug)]
pub struct HistoryRing {
    entries: OrderedEntryList<ClipEntry>,
    limit: usize,
}

impl HistoryRing {
    /// Cree un historique plafonne a `limit` entrees (0 = illimite).
    pub fn new(limit: usize) -> Self {
        Self {
            entries: OrderedEntryList::new(),
            limit,
        }
    }

    /// Ajoute une capture en tete, apres suppression de son doublon eventuel.
    pub fn add_clip(
        &mut self,
        text: impl Into<String>,
        origin: impl Into<String>,
        added_at: DateTime<Utc>,
    ) -> EntryId {
        let entry = ClipEntry::new(text, origin, added_at);
        self.entries.remove_by_text(&entry.text);
        let id = self.entries.insert_top(entry);
        self.cap(self.limit);
        id
    }

    /// Supprime les entrees les plus anciennes au-dela de `limit`.
    pub fn cap(&mut self, limit: usize) -> usize {
        if limit == 0 {
            return 0;
        }
        self.entries.truncate_to(limit)
    }

    /// Change la limite et l'applique immediatement.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.cap(limit);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Remonte une capture en tete et remet sa date a jour.
    pub fn promote_to_top(&mut self, index: usize, now: DateTime<Utc>) -> Option<EntryId> {
        let index = self.entries.clamp_index(index)?;
        self.entries.move_item(index, 0);
        let entry = self.entries.get_mut(0)?;
        entry.added_at = now;
        let id = entry.id;
        self.entries.mark_dirty();
        Some(id)
    }

    /// Supprime la capture a l'index donne (ramene dans les bornes).
    pub fn remove(&mut self, index: usize) -> Option<ClipEntry> {
        self.entries.remove(index)
    }

    /// Vide l'historique.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Recalcule la couleur d'affichage de chaque capture.
    /// Retourne `true` si au moins une couleur a change.
    pub fn update_colors(&mut self, now: DateTime<Utc>, fade: &FadePolicy, base: DisplayColor) -> bool {
        let mut changed = false;
        for entry in self.entries.iter_mut() {
            let color = fade.color_for(base, entry.age_minutes(now));
            if entry.display_color != color {
                entry.display_color = color;
                changed = true;
            }
        }
        changed
    }

    pub fn index_of(&self, id: EntryId) -> Option<usize> {
        self.entries.index_of(id)
    }

    pub fn get(&self, index: usize) -> Option<&ClipEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipEntry> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ClipEntry] {
        self.entries.as_slice()
    }

    /// Recharge l'historique depuis la persistance, puis applique la limite.
    ///
    /// Pour un texte present plusieurs fois, seule la premiere occurrence
    /// (la plus recente) est gardee. Une liste nettoyee est marquee modifiee.
    pub fn load_from(&mut self, entries: Vec<ClipEntry>) {
        let total = entries.len();
        let mut seen = HashSet::new();
        let unique: Vec<ClipEntry> = entries
            .into_iter()
            .filter(|e| seen.insert(e.text.clone()))
            .collect();
        let duplicates = total - unique.len();
        self.entries.load_from(unique);
        if duplicates > 0 {
            tracing::warn!(duplicates, "duplicate clips dropped from loaded history");
            self.entries.mark_dirty();
        }
        self.cap(self.limit);
    }

    pub fn is_dirty(&self) -> bool {
        self.entries.is_dirty()
    }

    pub fn reset_dirty(&mut self) {
        self.entries.reset_dirty();
    }
}
