// ClipDeck - Passerelle de persistance
// Chargement et sauvegarde d'une liste ordonnee
//
// Le coeur ne connait que le trait `PersistenceGateway<T>`. L'implementation
// fournie, `JsonFileGateway`, ecrit un document JSON par liste.
//
// # Robustesse
// - Un fichier absent se charge comme une liste vide.
// - L'ecriture est atomique (fichier temporaire + rename) pour eviter
//   la corruption en cas de crash.
// - Les echecs sont remontes a l'appelant, qui les journalise et garde
//   son etat en memoire.

use crate::error::CdResult;
use crate::storage::format;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Source et destination persistante d'une liste ordonnee.
pub trait PersistenceGateway<T> {
    /// Charge la liste dans son ordre d'affichage.
    fn load(&self) -> CdResult<Vec<T>>;
    /// Remplace le contenu persiste par `entries`.
    fn save(&self, entries: &[T]) -> CdResult<()>;
}

/// Liste persistee dans un fichier JSON.
#[derive(Debug)]
pub struct JsonFileGateway<T> {
    path: PathBuf,
    _entries: PhantomData<fn() -> T>,
}

impl<T> JsonFileGateway<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entries: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T: Serialize + DeserializeOwned> PersistenceGateway<T> for JsonFileGateway<T> {
    fn load(&self) -> CdResult<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read(&self.path)?;
        format::decode_entries(&data)
    }

    fn save(&self, entries: &[T]) -> CdResult<()> {
        let data = format::encode_entries(entries)?;

        // Ecriture atomique : temp file + rename
        let tmp_path = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp_path, &data)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryGateway;


#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::entry::{ClipEntry, FavoriteEntry};
    use chrono::Utc;

    #[test]
    fn test_json_roundtrip_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = JsonFileGateway::<FavoriteEntry>::new(dir.path().join("favorites.json"));
        let favs = vec![
            FavoriteEntry::new("b", "app", Some("B".into())),
            FavoriteEntry::new("a", "app", Some("A".into())),
        ];
        gateway.save(&favs).unwrap();
        let loaded = gateway.load().unwrap();
        let titles: Vec<_> = loaded.iter().map(|f| f.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = JsonFileGateway::<ClipEntry>::new(dir.path().join("history.json"));
        assert!(gateway.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_and_no_tmp_left() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("history.json");
        let gateway = JsonFileGateway::<ClipEntry>::new(&path);
        gateway.save(&[ClipEntry::new("x", "app", Utc::now())]).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupted_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, b"not json").unwrap();
        let gateway = JsonFileGateway::<ClipEntry>::new(&path);
        assert!(gateway.load().is_err());
    }
}
