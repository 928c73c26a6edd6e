use super::SqliteRepository;
use crate::db::models::{FlatRow, Lookup, NewNote, Note, NoteFilter, NoteUpdate};
use crate::db::utils::{dedup_ids, like_pattern};
use crate::hydrate::{hydrate, hydrate_one};
use sqlx::{QueryBuilder, Sqlite};

const NOTE_ROWS: &str = "SELECT n.id AS note_id, n.title, n.content,
        f.id AS folder_id, f.name AS folder_name,
        t.id AS tag_id, t.name AS tag_name
 FROM notes n
 LEFT JOIN folders f ON n.folder_id = f.id
 LEFT JOIN notes_tags nt ON n.id = nt.note_id
 LEFT JOIN tags t ON t.id = nt.tag_id";

/// SQLite's `LOWER` only folds ASCII, so the searchable copy of the title
/// is lowercased here and stored next to it.
fn search_key(title: &str) -> String {
    title.to_lowercase()
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &NoteFilter) {
    let mut keyword = " WHERE ";
    let search_term = filter
        .search_term
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty());
    if let Some(term) = search_term {
        builder
            .push(keyword)
            .push("n.title_search LIKE ")
            .push_bind(like_pattern(&search_key(term)))
            .push(" ESCAPE '\\'");
        keyword = " AND ";
    }
    if let Some(folder_id) = filter.folder_id {
        builder
            .push(keyword)
            .push("n.folder_id = ")
            .push_bind(folder_id);
        keyword = " AND ";
    }
    // Select notes that carry the tag rather than the matching join rows, so
    // each note still comes back with all of its tags.
    if let Some(tag_id) = filter.tag_id {
        builder
            .push(keyword)
            .push("n.id IN (SELECT note_id FROM notes_tags WHERE tag_id = ")
            .push_bind(tag_id)
            .push(")");
    }
}

impl SqliteRepository {
    async fn link_tags_tx(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        note_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), sqlx::Error> {
        for tag_id in dedup_ids(tag_ids) {
            sqlx::query("INSERT OR IGNORE INTO notes_tags (note_id, tag_id) VALUES (?, ?)")
                .bind(note_id)
                .bind(tag_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
    pub async fn list_notes(&self, filter: &NoteFilter) -> Result<Vec<Note>, sqlx::Error> {
        let mut builder = QueryBuilder::<Sqlite>::new(NOTE_ROWS);
        push_filter(&mut builder, filter);
        builder.push(" ORDER BY n.id ASC, t.id ASC");
        let rows = builder
            .build_query_as::<FlatRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(hydrate(rows))
    }
    pub async fn get_note(&self, id: i64) -> Result<Lookup<Note>, sqlx::Error> {
        let query = format!("{} WHERE n.id = ? ORDER BY t.id ASC", NOTE_ROWS);
        let rows = sqlx::query_as::<_, FlatRow>(&query)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(hydrate_one(rows))
    }
    pub async fn create_note(&self, note: &NewNote) -> Result<Note, sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO notes (title, title_search, content, folder_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&note.title)
        .bind(search_key(&note.title))
        .bind(&note.content)
        .bind(note.folder_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;
        let id = result.last_insert_rowid();
        self.link_tags_tx(&mut tx, id, &note.tag_ids).await?;
        tx.commit().await?;
        self.get_note(id)
            .await?
            .into_option()
            .ok_or(sqlx::Error::RowNotFound)
    }
    pub async fn update_note(
        &self,
        id: i64,
        update: &NoteUpdate,
    ) -> Result<Lookup<Note>, sqlx::Error> {
        let now = chrono::Utc::now().timestamp();
        let mut tx = self.pool.begin().await?;
        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE notes SET title = ");
        builder
            .push_bind(update.title.clone())
            .push(", title_search = ")
            .push_bind(search_key(&update.title))
            .push(", updated_at = ")
            .push_bind(now);
        if let Some(content) = &update.content {
            builder.push(", content = ").push_bind(content.clone());
        }
        if let Some(folder_id) = update.folder_id {
            builder.push(", folder_id = ").push_bind(folder_id);
        }
        builder.push(" WHERE id = ").push_bind(id);
        let result = builder.build().execute(&mut *tx).await?;
        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(Lookup::NotFound);
        }
        if let Some(tag_ids) = &update.tag_ids {
            sqlx::query("DELETE FROM notes_tags WHERE note_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            self.link_tags_tx(&mut tx, id, tag_ids).await?;
        }
        tx.commit().await?;
        self.get_note(id).await
    }
    pub async fn delete_note(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
