use super::SqliteRepository;
use crate::db::models::{Folder, Lookup};

impl SqliteRepository {
    pub async fn get_folders(&self) -> Result<Vec<Folder>, sqlx::Error> {
        sqlx::query_as::<_, Folder>("SELECT id, name FROM folders ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
    }
    pub async fn get_folder(&self, id: i64) -> Result<Lookup<Folder>, sqlx::Error> {
        let folder = sqlx::query_as::<_, Folder>("SELECT id, name FROM folders WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(folder.into())
    }
    pub async fn create_folder(&self, name: &str) -> Result<Folder, sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, created_at) VALUES (?, ?) RETURNING id, name",
        )
        .bind(name)
        .bind(now)
        .fetch_one(&self.pool)
        .await
    }
    pub async fn rename_folder(&self, id: i64, name: &str) -> Result<Lookup<Folder>, sqlx::Error> {
        let folder = sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(folder.into())
    }
    /// Notes in the folder are kept and lose their folder (`ON DELETE SET NULL`).
    pub async fn delete_folder(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM folders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
