use super::*;
use crate::services::prelude::*;
use serde::Deserializer;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteQuery {
    pub search_term: Option<String>,
    pub folder_id: Option<i64>,
    pub tag_id: Option<i64>,
}

impl From<NoteQuery> for NoteFilter {
    fn from(query: NoteQuery) -> Self {
        NoteFilter {
            search_term: query.search_term.filter(|term| !term.trim().is_empty()),
            folder_id: query.folder_id,
            tag_id: query.tag_id,
        }
    }
}

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Body of `POST /notes` and `PUT /notes/:id`. Both `folderId` and
/// `folder_id` are accepted.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, alias = "folder_id", deserialize_with = "double_option")]
    pub folder_id: Option<Option<i64>>,
    pub tags: Option<Vec<i64>>,
}

impl NoteInput {
    fn title(&self) -> Result<String, AppError> {
        match &self.title {
            Some(title) if !title.trim().is_empty() => Ok(title.clone()),
            _ => Err(AppError::missing_field("title")),
        }
    }

    pub fn into_new_note(self) -> Result<NewNote, AppError> {
        let title = self.title()?;
        Ok(NewNote {
            title,
            content: self.content.unwrap_or_default(),
            folder_id: self.folder_id.flatten(),
            tag_ids: self.tags.unwrap_or_default(),
        })
    }

    pub fn into_update(self) -> Result<NoteUpdate, AppError> {
        let title = self.title()?;
        Ok(NoteUpdate {
            title,
            content: self.content,
            folder_id: self.folder_id,
            tag_ids: self.tags,
        })
    }
}

pub async fn list_notes(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NoteQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let filter = NoteFilter::from(query);
    let notes = state.repo.list_notes(&filter).await?;
    debug!(count = notes.len(), ?filter, "listed notes");
    Ok(Json(notes))
}

pub async fn get_note(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Note>, AppError> {
    state.repo.get_note(id).await?.or_not_found().map(Json)
}

pub async fn create_note(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NoteInput>,
) -> Result<Response, AppError> {
    let new_note = input.into_new_note()?;
    let note = state.repo.create_note(&new_note).await?;
    info!(note_id = note.id, "note created");
    Ok(created(format!("/notes/{}", note.id), note))
}

pub async fn update_note(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
    JsonBody(input): JsonBody<NoteInput>,
) -> Result<Json<Note>, AppError> {
    let update = input.into_update()?;
    let note = state.repo.update_note(id, &update).await?.or_not_found()?;
    info!(note_id = id, "note updated");
    Ok(Json(note))
}

pub async fn delete_note(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<StatusCode, AppError> {
    if !state.repo.delete_note(id).await? {
        return Err(AppError::NotFound);
    }
    info!(note_id = id, "note deleted");
    Ok(StatusCode::NO_CONTENT)
}
