use super::RecordStore;
use crate::error::{CounselError, Result};
use crate::model::Record;

/// `Vec`-backed record store.
#[derive(Debug, Clone)]
pub struct MemoryStore<R: Record> {
    records: Vec<R>,
    simulate_write_error: bool,
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            simulate_write_error: false,
        }
    }
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<R>) -> Self {
        Self {
            records,
            simulate_write_error: false,
        }
    }

    /// Enable commit failure simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }
}

impl<R: Record> RecordStore<R> for MemoryStore<R> {
    fn records(&self) -> &[R] {
        &self.records
    }

    fn commit(&mut self, records: Vec<R>) -> Result<()> {
        if self.simulate_write_error {
            return Err(CounselError::Store("Simulated write error".to_string()));
        }
        self.records = records;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Counselor, Student, UserStatus};

    pub fn counselor(id: u32, email: &str, college: &str, status: UserStatus) -> Counselor {
        Counselor {
            id,
            email: email.to_string(),
            college: college.to_string(),
            status,
            first_name: "Test".to_string(),
            last_name: format!("Counselor{}", id),
            birthdate: None,
            starting_shift: None,
            ending_shift: None,
            college_assignment: college.to_string(),
        }
    }

    pub fn student(id: u32, email: &str, college: &str, status: UserStatus) -> Student {
        Student {
            id,
            email: email.to_string(),
            college: college.to_string(),
            status,
        }
    }

    pub struct StoreFixture {
        pub counselors: MemoryStore<Counselor>,
        pub students: MemoryStore<Student>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                counselors: MemoryStore::new(),
                students: MemoryStore::new(),
            }
        }

        /// Counselors 101, 102 and 103, the last one inactive.
        pub fn with_three_counselors(mut self) -> Self {
            self.counselors = MemoryStore::with_records(vec![
                counselor(101, "john.doe@umake.edu.ph", "CLAS", UserStatus::Active),
                counselor(102, "jane.smith@umake.edu.ph", "CBFS", UserStatus::Active),
                counselor(103, "albert.lee@umake.edu.ph", "IOA", UserStatus::Inactive),
            ]);
            self
        }

        pub fn with_student(mut self, id: u32, email: &str, college: &str) -> Self {
            self.students
                .append(student(id, email, college, UserStatus::Active))
                .unwrap();
            self
        }
    }
}
