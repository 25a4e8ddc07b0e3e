// ClipDeck - Format des fichiers de listes
// Document JSON versionne
//
// Chaque liste est ecrite dans son propre fichier :
//
// ```text
// {
//   "version": 1,
//   "entries": [ { ...champs persistes de l'entree... }, ... ]
// }
// ```
//
// L'ordre du tableau `entries` est l'ordre d'affichage. Les champs
// d'affichage (identite, couleur, titre tronque) ne sont pas ecrits.
// Une version inconnue est refusee pour ne pas ecraser un fichier
// produit par une version plus recente.

use crate::constants::STORE_FORMAT_VERSION;
use crate::error::{CdError, CdResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct DocumentRef<'a, T> {
    version: u32,
    entries: &'a [T],
}

#[derive(Deserialize)]
struct Document<T> {
    version: u32,
    entries: Vec<T>,
}

/// Serialise une liste d'entrees.
pub fn encode_entries<T: Serialize>(entries: &[T]) -> CdResult<Vec<u8>> {
    let doc = DocumentRef {
        version: STORE_FORMAT_VERSION,
        entries,
    };
    Ok(serde_json::to_vec_pretty(&doc)?)
}

/// Deserialise une liste d'entrees.
pub fn decode_entries<T: DeserializeOwned>(data: &[u8]) -> CdResult<Vec<T>> {
    let doc: Document<T> = serde_json::from_slice(data)?;
    if doc.version != STORE_FORMAT_VERSION {
        return Err(CdError::Storage(format!(
            "Unsupported store version: {}",
            doc.version
        )));
    }
    Ok(doc.entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::entry::{ClipEntry, FavoriteEntry};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_clips_keep_order_and_fields() {
        let t = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let clips = vec![ClipEntry::new("first", "term", t), ClipEntry::new("second", "editor", t)];
        let data = encode_entries(&clips).unwrap();
        let decoded: Vec<ClipEntry> = decode_entries(&data).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[0].text, "first");
        assert_eq!(decoded[1].origin, "editor");
        assert_eq!(decoded[1].added_at, t);
    }

    #[test]
    fn test_favorite_title_persisted() {
        let favs = vec![FavoriteEntry::new("body", "app", Some("My title".into()))];
        let data = encode_entries(&favs).unwrap();
        let decoded: Vec<FavoriteEntry> = decode_entries(&data).unwrap();
        assert_eq!(decoded[0].title, "My title");
        assert!(decoded[0].display_title.is_empty());
    }

    #[test]
    fn test_unknown_version() {
        let data = br#"{"version": 99, "entries": []}"#;
        let result: CdResult<Vec<FavoriteEntry>> = decode_entries(data);
        assert!(matches!(result, Err(CdError::Storage(_))));
    }

    #[test]
    fn test_truncated_document() {
        let result: CdResult<Vec<ClipEntry>> = decode_entries(b"{\"version\": 1, \"entr");
        assert!(matches!(result, Err(CdError::Json(_))));
    }
}
