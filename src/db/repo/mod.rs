use sqlx::sqlite::SqlitePool;

#[derive(Clone)]
pub struct SqliteRepository {
    pub pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

mod folders;
mod notes;
mod tags;
