use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// One row of `notes ⟕ folders ⟕ notes_tags ⟕ tags`. A note with several
/// tags produces several rows; the folder and tag columns are null when the
/// outer join found nothing.
#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub note_id: i64,
    pub title: String,
    pub content: String,
    pub folder_id: Option<i64>,
    pub folder_name: Option<String>,
    pub tag_id: Option<i64>,
    pub tag_name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<Folder>,
    pub tags: Vec<Tag>,
}

/// Outcome of a single-entity lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}

/// Filters accepted by the note listing. `None` means "not applied".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub search_term: Option<String>,
    pub folder_id: Option<i64>,
    pub tag_id: Option<i64>,
}

/// A validated note ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub folder_id: Option<i64>,
    pub tag_ids: Vec<i64>,
}

/// A validated note update. `content`, `folder_id` and `tag_ids` are only
/// written when `Some`; `folder_id: Some(None)` detaches the folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteUpdate {
    pub title: String,
    pub content: Option<String>,
    pub folder_id: Option<Option<i64>>,
    pub tag_ids: Option<Vec<i64>>,
}
