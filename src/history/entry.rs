// ClipDeck - Entrees de l'historique et des favoris
//
// Ce module definit les types de donnees fondamentaux des deux listes :
// - `ClipEntry` : capture du presse-papiers (texte, origine, date, couleur)
// - `FavoriteEntry` : favori epingle (texte, origine, titre, numero)
// - `DisplayColor` : couleur d'affichage calculee par l'estompage
// - `EntryId` : identite locale au processus, attribuee par la liste
//
// # Serialisation
// Les champs persistes sont derives via serde. L'identite, la couleur
// et le titre tronque sont des projections d'affichage et ne sont
// jamais ecrits sur disque.
//
// # Deduplication
// La deduplication de l'historique compare uniquement `text`, pas
// l'origine ni la date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identite d'une entree, stable tant que l'entree vit dans sa liste.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EntryId(pub u64);

/// Couleur RGB d'affichage d'une entree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DisplayColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Assombrit chaque composante de `amount`, sans passer sous zero.
    pub fn darken(self, amount: u8) -> Self {
        Self {
            r: self.r.saturating_sub(amount),
            g: self.g.saturating_sub(amount),
            b: self.b.saturating_sub(amount),
        }
    }
}

impl Default for DisplayColor {
    fn default() -> Self {
        Self::new(230, 230, 230)
    }
}

/// Acces commun aux entrees pour `OrderedEntryList`.
pub trait ListEntry {
    fn id(&self) -> EntryId;
    fn assign_id(&mut self, id: EntryId);
    fn text(&self) -> &str;
}

/// Une capture du presse-papiers dans l'historique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipEntry {
    #[serde(skip)]
    pub id: EntryId,
    /// Contenu texte
    pub text: String,
    /// Application source
    pub origin: String,
    /// Date d'ajout (remise a jour quand l'entree remonte en tete)
    pub added_at: DateTime<Utc>,
    /// Couleur calculee par l'estompage
    #[serde(skip)]
    pub display_color: DisplayColor,
}

impl ClipEntry {
    pub fn new(text: impl Into<String>, origin: impl Into<String>, added_at: DateTime<Utc>) -> Self {
        Self {
            id: EntryId::default(),
            text: text.into(),
            origin: origin.into(),
            added_at,
            display_color: DisplayColor::default(),
        }
    }

    /// Age de l'entree en minutes entieres (jamais negatif).
    pub fn age_minutes(&self, now: DateTime<Utc>) -> u64 {
        (now - self.added_at).num_minutes().max(0) as u64
    }

    /// Retourne une description relative de l'age.
    pub fn age_display(&self, now: DateTime<Utc>) -> String {
        let mins = self.age_minutes(now);
        if mins < 1 {
            "A l'instant".to_string()
        } else if mins < 60 {
            format!("Il y a {} min", mins)
        } else if mins < 1440 {
            format!("Il y a {}h", mins / 60)
        } else {
            format!("Il y a {}j", mins / 1440)
        }
    }
}

impl ListEntry for ClipEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn assign_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Un favori epingle par l'utilisateur.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(skip)]
    pub id: EntryId,
    /// Contenu texte
    pub text: String,
    /// Application source
    pub origin: String,
    /// Titre modifiable
    pub title: String,
    /// Titre tronque a la largeur de la vue
    #[serde(skip)]
    pub display_title: String,
    /// Numero du favori, egal a son index apres chaque reordonnancement
    #[serde(default)]
    pub position: usize,
}

impl FavoriteEntry {
    /// Cree un favori. Sans titre, la premiere ligne du texte est utilisee.
    pub fn new(text: impl Into<String>, origin: impl Into<String>, title: Option<String>) -> Self {
        let text = text.into();
        let title = title.unwrap_or_else(|| default_title(&text));
        Self {
            id: EntryId::default(),
            display_title: title.clone(),
            text,
            origin: origin.into(),
            title,
            position: 0,
        }
    }

    /// Copie une capture de l'historique dans un nouveau favori.
    pub fn from_clip(clip: &ClipEntry) -> Self {
        Self::new(clip.text.clone(), clip.origin.clone(), None)
    }
}

impl ListEntry for FavoriteEntry {
    fn id(&self) -> EntryId {
        self.id
    }

    fn assign_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Titre par defaut : premiere ligne non vide du texte.
pub fn default_title(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("")
        .to_string()
}
