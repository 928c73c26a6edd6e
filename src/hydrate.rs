//! Folding joined note rows back into nested notes.
//!
//! The note listing query fans out one row per note/tag pair. This module
//! regroups those rows by note id, keeps the first folder it sees, and
//! collects each distinct tag once, in the order it first appeared.

use std::collections::{HashMap, HashSet};

use crate::db::{FlatRow, Folder, Lookup, Note, Tag};

struct NoteAccumulator {
    note: Note,
    seen_tags: HashSet<i64>,
}

impl NoteAccumulator {
    fn start(row: &FlatRow) -> Self {
        Self {
            note: Note {
                id: row.note_id,
                title: row.title.clone(),
                content: row.content.clone(),
                folder: None,
                tags: Vec::new(),
            },
            seen_tags: HashSet::new(),
        }
    }

    fn absorb(&mut self, row: FlatRow) {
        if self.note.folder.is_none() {
            if let Some(id) = row.folder_id {
                self.note.folder = Some(Folder {
                    id,
                    name: row.folder_name.unwrap_or_default(),
                });
            }
        }
        if let Some(id) = row.tag_id {
            if self.seen_tags.insert(id) {
                self.note.tags.push(Tag {
                    id,
                    name: row.tag_name.unwrap_or_default(),
                });
            }
        }
    }
}

/// Groups rows by `note_id`. Rows for one note do not have to be adjacent;
/// notes come out in order of first appearance.
pub fn hydrate<I>(rows: I) -> Vec<Note>
where
    I: IntoIterator<Item = FlatRow>,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut notes: Vec<NoteAccumulator> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.note_id).or_insert_with(|| {
            notes.push(NoteAccumulator::start(&row));
            notes.len() - 1
        });
        notes[slot].absorb(row);
    }

    notes.into_iter().map(|acc| acc.note).collect()
}

/// Hydrates the rows of a single-note query.
pub fn hydrate_one<I>(rows: I) -> Lookup<Note>
where
    I: IntoIterator<Item = FlatRow>,
{
    hydrate(rows).into_iter().next().into()
}
