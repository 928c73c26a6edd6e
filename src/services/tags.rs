use super::*;
use crate::services::prelude::*;

pub async fn get_tags(State(state): State<AppState>) -> Result<Json<Vec<Tag>>, AppError> {
    Ok(Json(state.repo.get_tags().await?))
}
pub async fn get_tag(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<Json<Tag>, AppError> {
    state.repo.get_tag(id).await?.or_not_found().map(Json)
}
pub async fn create_tag(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Response, AppError> {
    let name = input.into_name()?;
    let tag = state.repo.create_tag(&name).await?;
    info!(tag_id = tag.id, "tag created");
    Ok(created(format!("/tags/{}", tag.id), tag))
}
pub async fn rename_tag(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
    JsonBody(input): JsonBody<NameInput>,
) -> Result<Json<Tag>, AppError> {
    let name = input.into_name()?;
    state.repo.rename_tag(id, &name).await?.or_not_found().map(Json)
}
pub async fn delete_tag(
    State(state): State<AppState>,
    PathParams(id): PathParams<i64>,
) -> Result<StatusCode, AppError> {
    if !state.repo.delete_tag(id).await? {
        return Err(AppError::NotFound);
    }
    info!(tag_id = id, "tag deleted");
    Ok(StatusCode::NO_CONTENT)
}
