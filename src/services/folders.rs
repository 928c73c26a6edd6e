use super::*;
use crate::services::prelude::*;

pub async fn get_folders(State(state): State<AppState>) -> Result<Json<Vec<Folder>>, AppError> {
    Ok(Json(state.repo.get_folders().await?))
}
pub async fn get_folder(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Folder>, AppError> {
    state.repo.get_folder(id).await?.or_not_found().map(Json)
}
pub async fn create_folder(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Response, AppError> {
    let name = input.into_name()?;
    let folder = state.repo.create_folder(&name).await?;
    info!(folder_id = folder.id, "folder created");
    Ok(created(format!("/folders/{}", folder.id), folder))
}
pub async fn rename_folder(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Json<Folder>, AppError> {
    let name = input.into_name()?;
    state.repo.rename_folder(id, &name).await?.or_not_found().map(Json)
}
pub async fn delete_folder(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<StatusCode, AppError> {
    if !state.repo.delete_folder(id).await? {
        return Err(AppError::NotFound);
    }
    info!(folder_id = id, "folder deleted");
    Ok(StatusCode::NO_CONTENT)
}
