use super::memory::MemoryStore;
use super::RecordStore;
use crate::data;
use crate::model::{Collection, ContentItem, Counselor, Student};

/// The three collections a session works with.
#[derive(Debug, Clone, Default)]
pub struct Campus {
    pub students: MemoryStore<Student>,
    pub counselors: MemoryStore<Counselor>,
    pub content: MemoryStore<ContentItem>,
}

impl Campus {
    pub fn empty() -> Self {
        Self::default()
    }

    /// A campus populated with the bundled mock datasets.
    pub fn seeded() -> Self {
        Self {
            students: MemoryStore::with_records(data::mock_students()),
            counselors: MemoryStore::with_records(data::initial_counselors()),
            content: MemoryStore::with_records(data::mock_content()),
        }
    }

    pub fn len_of(&self, collection: Collection) -> usize {
        match collection {
            Collection::Students => self.students.len(),
            Collection::Counselors => self.counselors.len(),
            Collection::Content => self.content.len(),
        }
    }
}
