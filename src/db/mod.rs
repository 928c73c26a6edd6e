mod migrations;
mod models;
mod repo;
mod utils;

pub use migrations::{init_db, init_memory_db};
pub use models::{FlatRow, Folder, Lookup, NewNote, Note, NoteFilter, NoteUpdate, Tag};
pub use repo::SqliteRepository;
