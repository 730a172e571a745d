use crate::habits::{default_habits, Habit};
use crate::profile::UserProfile;
use crate::stickers::StickerBook;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The one JSON document everything lives in: the profile, the habit
/// definitions, and every recorded sticker.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub(crate) struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) profile: Option<UserProfile>,
    #[serde(default = "default_habits")]
    pub(crate) habits: Vec<Habit>,
    #[serde(default)]
    pub(crate) stickers: StickerBook,
    /// Raw error code recorded by the last attempted sync against the
    /// hosted service, if it failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_sync_error: Option<String>,
}

impl Book {
    pub(crate) fn starter() -> Book {
        Book {
            profile: None,
            habits: default_habits(),
            stickers: StickerBook::default(),
            last_sync_error: None,
        }
    }

    /// A missing file is not an error; it means a fresh book.
    pub(crate) fn load(path: &Path) -> Result<Book, StoreError> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.to_owned(),
                source,
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Book::starter()),
            Err(source) => Err(StoreError::Read {
                path: path.to_owned(),
                source,
            }),
        }
    }

    pub(crate) fn save(&self, path: &Path) -> Result<(), StoreError> {
        let mut json =
            serde_json::to_string_pretty(self).map_err(|source| StoreError::Encode { source })?;
        json.push('\n');
        fs::write(path, json).map_err(|source| StoreError::Write {
            path: path.to_owned(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("{} is not a valid sticker book", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode the sticker book")]
    Encode { source: serde_json::Error },
    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gets_default_habits() {
        let book: Book = serde_json::from_str("{}").expect("empty document parses");
        assert_eq!(book, Book::starter());
        assert!(!book.habits.is_empty());
    }

    #[test]
    fn test_explicitly_empty_habits_stay_empty() {
        let book: Book = serde_json::from_str(r#"{"habits":[]}"#).expect("document parses");
        assert!(book.habits.is_empty());
    }

    #[test]
    fn test_missing_file_is_a_fresh_book() {
        let book =
            Book::load(Path::new("/nonexistent/stickercal.json")).expect("missing file is fine");
        assert_eq!(book, Book::starter());
    }

    #[test]
    fn test_book_json_round_trip() {
        let mut book = Book::starter();
        book.last_sync_error = Some("auth/too-many-requests".to_owned());
        let json = serde_json::to_string(&book).expect("book serializes");
        let back: Book = serde_json::from_str(&json).expect("book deserializes");
        assert_eq!(back, book);
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let err = serde_json::from_str::<Book>("not json").expect_err("garbage rejected");
        assert!(err.is_syntax());
    }
}
