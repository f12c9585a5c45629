//! Seed data for a fresh session.
//!
//! Nothing is persisted, so every session starts from these datasets. Accessors hand out
//! owned copies; the statics themselves are never mutated.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;

use crate::model::{ContentItem, ContentStatus, Counselor, Student, UserStatus};

const BASE_STUDENTS: &[(u32, &str, UserStatus)] = &[
    (1, "johndelacruz@umake.edu.ph", UserStatus::Active),
    (2, "isabella.cruz@umake.edu.ph", UserStatus::Active),
    (3, "ramon.villanueva@umake.edu.ph", UserStatus::Active),
    (4, "clarisse.delarosa@umake.edu.ph", UserStatus::Active),
    (5, "miguel.santos@umake.edu.ph", UserStatus::Active),
    (6, "jasmine.mercado@umake.edu.ph", UserStatus::Active),
    (7, "adrian.bautista@umake.edu.ph", UserStatus::Inactive),
];

/// Number of generated students appended after the base list.
pub const GENERATED_STUDENTS: u32 = 15;

static MOCK_STUDENTS: Lazy<Vec<Student>> = Lazy::new(|| {
    let base = BASE_STUDENTS.iter().map(|(id, email, status)| Student {
        id: *id,
        email: email.to_string(),
        college: "COS".to_string(),
        status: *status,
    });
    // Every fifth generated student is inactive.
    let generated = (0..GENERATED_STUDENTS).map(|i| Student {
        id: 10 + i,
        email: format!("adrian.bautista{}@umake.edu.ph", i),
        college: "COS".to_string(),
        status: if i % 5 == 0 {
            UserStatus::Inactive
        } else {
            UserStatus::Active
        },
    });
    base.chain(generated).collect()
});

static INITIAL_COUNSELORS: Lazy<Vec<Counselor>> = Lazy::new(|| {
    vec![
        counselor(
            101,
            "john.doe@umake.edu.ph",
            "CLAS",
            UserStatus::Active,
            ("John", "Doe"),
            (1985, 5, 20),
            (8, 17),
        ),
        counselor(
            102,
            "jane.smith@umake.edu.ph",
            "CBFS",
            UserStatus::Active,
            ("Jane", "Smith"),
            (1990, 11, 15),
            (9, 18),
        ),
        counselor(
            103,
            "albert.lee@umake.edu.ph",
            "IOA",
            UserStatus::Inactive,
            ("Albert", "Lee"),
            (1975, 1, 1),
            (7, 16),
        ),
    ]
});

static MOCK_CONTENT: Lazy<Vec<ContentItem>> = Lazy::new(|| {
    vec![
        content(
            1,
            "Tips for a Productive Study Session",
            "Guidance",
            "Sir John Doe",
            (2025, 10, 15),
            ContentStatus::Published,
        ),
        content(
            2,
            "Upcoming Student Events Calendar",
            "Events",
            "Admin Team",
            (2025, 10, 10),
            ContentStatus::Published,
        ),
        content(
            3,
            "Mental Health Awareness - Part 2",
            "Wellness",
            "Dr. Jane Smith",
            (2025, 10, 1),
            ContentStatus::Draft,
        ),
        content(
            4,
            "College Application Deadlines Q&A",
            "Admissions",
            "Sir John Doe",
            (2025, 9, 28),
            ContentStatus::Published,
        ),
        content(
            5,
            "Archived Tutorial: Using the Library",
            "Tutorial",
            "Librarian",
            (2025, 9, 15),
            ContentStatus::Archived,
        ),
    ]
});

/// Consultations per weekday (Mon–Fri).
pub const CONSULTATION_STATS: &[(&str, u32)] = &[
    ("Mon", 950),
    ("Tue", 500),
    ("Wed", 680),
    ("Thu", 550),
    ("Fri", 1150),
];

/// Share of students per classification, in percent.
pub const CLASSIFICATION: &[(&str, u32)] = &[
    ("In-Class", 30),
    ("Struggling", 15),
    ("Excelling", 25),
    ("Tuning", 30),
];

pub const ENGAGEMENT: &[(&str, u32)] = &[
    ("Mon", 450),
    ("Tue", 720),
    ("Wed", 300),
    ("Thu", 1050),
    ("Fri", 1000),
];

pub fn mock_students() -> Vec<Student> {
    MOCK_STUDENTS.clone()
}

pub fn initial_counselors() -> Vec<Counselor> {
    INITIAL_COUNSELORS.clone()
}

pub fn mock_content() -> Vec<ContentItem> {
    MOCK_CONTENT.clone()
}

fn counselor(
    id: u32,
    email: &str,
    college: &str,
    status: UserStatus,
    (first_name, last_name): (&str, &str),
    (year, month, day): (i32, u32, u32),
    (start_hour, end_hour): (u32, u32),
) -> Counselor {
    Counselor {
        id,
        email: email.to_string(),
        college: college.to_string(),
        status,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        birthdate: NaiveDate::from_ymd_opt(year, month, day),
        starting_shift: NaiveTime::from_hms_opt(start_hour, 0, 0),
        ending_shift: NaiveTime::from_hms_opt(end_hour, 0, 0),
        college_assignment: college.to_string(),
    }
}

fn content(
    id: u32,
    title: &str,
    category: &str,
    author: &str,
    (year, month, day): (i32, u32, u32),
    status: ContentStatus,
) -> ContentItem {
    ContentItem {
        id,
        title: title.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn students_are_base_plus_generated() {
        let students = mock_students();
        assert_eq!(students.len(), 7 + GENERATED_STUDENTS as usize);
        assert_eq!(students[7].id, 10);
        assert_eq!(students.last().unwrap().id, 24);
        assert_eq!(students[7].email, "adrian.bautista0@umake.edu.ph");
    }

    #[test]
    fn every_fifth_generated_student_is_inactive() {
        let inactive: Vec<u32> = mock_students()
            .iter()
            .filter(|s| s.status == UserStatus::Inactive)
            .map(|s| s.id)
            .collect();
        assert_eq!(inactive, vec![7, 10, 15, 20]);
    }

    #[test]
    fn student_ids_are_unique() {
        let mut ids: Vec<u32> = mock_students().iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), mock_students().len());
    }

    #[test]
    fn counselors_keep_college_in_sync() {
        let counselors = initial_counselors();
        assert_eq!(
            counselors.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![101, 102, 103]
        );
        assert!(counselors.iter().all(|c| c.college == c.college_assignment));
        assert_eq!(
            counselors[0].birthdate,
            NaiveDate::from_ymd_opt(1985, 5, 20)
        );
    }

    #[test]
    fn content_has_every_status() {
        let content = mock_content();
        assert_eq!(content.len(), 5);
        assert!(content.iter().any(|c| c.status == ContentStatus::Draft));
        assert!(content.iter().any(|c| c.status == ContentStatus::Archived));
    }

    #[test]
    fn classification_sums_to_one_hundred() {
        let total: u32 = CLASSIFICATION.iter().map(|(_, v)| v).sum();
        assert_eq!(total, 100);
    }
}
