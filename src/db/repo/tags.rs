use super::SqliteRepository;
use crate::db::models::{Lookup, Tag};

impl SqliteRepository {
    pub async fn get_tags(&self) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>("SELECT id, name FROM tags ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }
    pub async fn get_tag(&self, id: i64) -> Result<Lookup<Tag>, sqlx::Error> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(tag.into())
    }
    pub async fn create_tag(&self, name: &str) -> Result<Tag, sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query_as::<_, Tag>(
            "INSERT INTO tags (name, created_at, updated_at) VALUES (?, ?, ?) RETURNING id, name",
        )
        .bind(name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }
    pub async fn rename_tag(&self, id: i64, name: &str) -> Result<Lookup<Tag>, sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        let tag = sqlx::query_as::<_, Tag>(
            "UPDATE tags SET name = ?, updated_at = ? WHERE id = ? RETURNING id, name",
        )
        .bind(name)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(tag.into())
    }
    /// Removes the tag and, through the foreign key cascade, its note links.
    pub async fn delete_tag(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
