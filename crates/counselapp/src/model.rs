//! # Domain Model
//!
//! The admin console manages three flat collections: [`Student`]s, [`Counselor`]s and
//! [`ContentItem`]s. Every record carries a stable integer [`RecordId`] that never changes
//! after creation; there are no relationships between records beyond list membership.
//!
//! ## Statuses
//!
//! People ([`Student`], [`Counselor`]) are [`UserStatus::Active`] or [`UserStatus::Inactive`].
//! Content moves through [`ContentStatus::Draft`], [`ContentStatus::Published`] and
//! [`ContentStatus::Archived`]. Filtering works across both families through the unified
//! [`Status`] enum, so one `FilterState` type serves every collection.
//!
//! ## The Denormalized College Field
//!
//! Counselors carry both `college_assignment` (authoritative, what the form edits) and
//! `college` (what the listing table shows and search matches against). The two must be
//! equal after every create and edit; [`Counselor::sync_college`] restores the invariant.
//!
//! ## The [`Record`] Trait
//!
//! The filter composer and the store are generic over [`Record`], which exposes exactly the
//! parts of a record that filtering needs: its id, its status, its category (the college for
//! people, the topic for content) and the fields free-text search looks at.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CounselError;

pub type RecordId = u32;

/// College codes accepted for student colleges and counselor assignments, with the
/// full names shown on the dashboard.
pub const COLLEGES: &[(&str, &str)] = &[
    ("CLAS", "College of Liberal Arts and Sciences (CLAS)"),
    ("CHK", "College of Human Kinetics (CHK)"),
    ("IOA", "Institute of Accountancy (IOA)"),
    ("IIHS", "Institute of Imaging Health Science (IIHS)"),
    ("IAD", "Institute of Arts and Design (IAD)"),
    ("CBFS", "College of Business and Financial Science (CBFS)"),
    (
        "CCSE",
        "College of Construction Sciences and Engineering (CCSE)",
    ),
    (
        "CCAPS",
        "College of Continuing, Advanced, and Professional Studies (CCAPS)",
    ),
    ("CAL", "College of Arts and Letters (CAL)"),
    ("COE", "College of Engineering (COE)"),
    ("COED", "College of Education (COED)"),
    ("COL", "College of Law (COL)"),
    ("COM", "College of Medicine (COM)"),
    ("CON", "College of Nursing (CON)"),
    ("COP", "College of Pharmacy (COP)"),
    ("COPA", "College of Public Administration (COPA)"),
    ("CST", "College of Science and Technology (CST)"),
    ("COS", "College of Science (COS)"),
];

pub fn is_known_college(code: &str) -> bool {
    COLLEGES.iter().any(|(c, _)| *c == code)
}

/// Look up a college by code (exact) or by full name.
pub fn find_college(query: &str) -> Option<(&'static str, &'static str)> {
    COLLEGES
        .iter()
        .find(|(code, name)| *code == query || *name == query)
        .copied()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Students,
    Counselors,
    Content,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::Students,
        Collection::Counselors,
        Collection::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Students => "students",
            Collection::Counselors => "counselors",
            Collection::Content => "content",
        }
    }

    /// Only counselor records can be created, edited or deleted.
    pub fn is_editable(&self) -> bool {
        matches!(self, Collection::Counselors)
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CounselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "students" | "student" => Ok(Collection::Students),
            "counselors" | "counselor" => Ok(Collection::Counselors),
            "content" | "contents" => Ok(Collection::Content),
            other => Err(CounselError::UnknownValue(format!(
                "collection '{}' (expected students, counselors or content)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserStatus::Active => f.write_str("Active"),
            UserStatus::Inactive => f.write_str("Inactive"),
        }
    }
}

impl FromStr for UserStatus {
    type Err = CounselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(UserStatus::Active),
            "inactive" => Ok(UserStatus::Inactive),
            other => Err(CounselError::UnknownValue(format!("user status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentStatus {
    Published,
    Draft,
    Archived,
}

impl fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentStatus::Published => f.write_str("Published"),
            ContentStatus::Draft => f.write_str("Draft"),
            ContentStatus::Archived => f.write_str("Archived"),
        }
    }
}

impl FromStr for ContentStatus {
    type Err = CounselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "published" => Ok(ContentStatus::Published),
            "draft" => Ok(ContentStatus::Draft),
            "archived" => Ok(ContentStatus::Archived),
            other => Err(CounselError::UnknownValue(format!(
                "content status '{}'",
                other
            ))),
        }
    }
}

/// Status of any record, used by the status filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Status {
    User(UserStatus),
    Content(ContentStatus),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::User(s) => write!(f, "{}", s),
            Status::Content(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for Status {
    type Err = CounselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(user) = s.parse::<UserStatus>() {
            return Ok(Status::User(user));
        }
        s.parse::<ContentStatus>()
            .map(Status::Content)
            .map_err(|_| CounselError::UnknownValue(format!("status '{}'", s.trim())))
    }
}

impl From<UserStatus> for Status {
    fn from(s: UserStatus) -> Self {
        Status::User(s)
    }
}

impl From<ContentStatus> for Status {
    fn from(s: ContentStatus) -> Self {
        Status::Content(s)
    }
}

/// What the store and the filter composer need to know about a record.
pub trait Record: Clone + fmt::Debug {
    const COLLECTION: Collection;

    fn id(&self) -> RecordId;

    fn status(&self) -> Status;

    /// The field the category filter compares against, exactly.
    fn category(&self) -> &str;

    /// Fields free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub email: String,
    pub college: String,
    pub status: UserStatus,
}

impl Record for Student {
    const COLLECTION: Collection = Collection::Students;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> Status {
        Status::User(self.status)
    }

    fn category(&self) -> &str {
        &self.college
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.email, &self.college]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counselor {
    pub id: RecordId,
    pub email: String,
    /// Display copy of `college_assignment`.
    pub college: String,
    pub status: UserStatus,
    pub first_name: String,
    pub last_name: String,
    pub birthdate: Option<NaiveDate>,
    pub starting_shift: Option<NaiveTime>,
    pub ending_shift: Option<NaiveTime>,
    pub college_assignment: String,
}

impl Counselor {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn sync_college(&mut self) {
        if self.college != self.college_assignment {
            self.college = self.college_assignment.clone();
        }
    }
}

impl Record for Counselor {
    const COLLECTION: Collection = Collection::Counselors;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> Status {
        Status::User(self.status)
    }

    fn category(&self) -> &str {
        &self.college_assignment
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.email, &self.college]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: RecordId,
    pub title: String,
    pub category: String,
    pub author: String,
    pub date: NaiveDate,
    pub status: ContentStatus,
}

impl Record for ContentItem {
    const COLLECTION: Collection = Collection::Content;

    fn id(&self) -> RecordId {
        self.id
    }

    fn status(&self) -> Status {
        Status::Content(self.status)
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.category]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_parses_singular_and_plural() {
        assert_eq!("Students".parse::<Collection>().unwrap(), Collection::Students);
        assert_eq!("counselor".parse::<Collection>().unwrap(), Collection::Counselors);
        assert_eq!("contents".parse::<Collection>().unwrap(), Collection::Content);
        assert!("teachers".parse::<Collection>().is_err());
    }

    #[test]
    fn only_counselors_are_editable() {
        assert!(Collection::Counselors.is_editable());
        assert!(!Collection::Students.is_editable());
        assert!(!Collection::Content.is_editable());
    }

    #[test]
    fn status_parses_both_families() {
        assert_eq!(
            "inactive".parse::<Status>().unwrap(),
            Status::User(UserStatus::Inactive)
        );
        assert_eq!(
            "Draft".parse::<Status>().unwrap(),
            Status::Content(ContentStatus::Draft)
        );
        assert!("Pending".parse::<Status>().is_err());
    }

    #[test]
    fn status_display_matches_labels() {
        assert_eq!(Status::User(UserStatus::Active).to_string(), "Active");
        assert_eq!(Status::Content(ContentStatus::Archived).to_string(), "Archived");
    }

    #[test]
    fn status_serializes_as_plain_label() {
        let json = serde_json::to_string(&Status::User(UserStatus::Inactive)).unwrap();
        assert_eq!(json, "\"Inactive\"");
    }

    #[test]
    fn sync_college_copies_assignment() {
        let mut c = Counselor {
            id: 1,
            email: "a@b.edu".into(),
            college: "CLAS".into(),
            status: UserStatus::Active,
            first_name: "A".into(),
            last_name: "B".into(),
            birthdate: None,
            starting_shift: None,
            ending_shift: None,
            college_assignment: "IOA".into(),
        };
        c.sync_college();
        assert_eq!(c.college, "IOA");
        assert_eq!(c.full_name(), "A B");
    }

    #[test]
    fn counselor_category_is_the_assignment() {
        let c = Counselor {
            id: 1,
            email: "a@b.edu".into(),
            college: "stale".into(),
            status: UserStatus::Active,
            first_name: String::new(),
            last_name: String::new(),
            birthdate: None,
            starting_shift: None,
            ending_shift: None,
            college_assignment: "COS".into(),
        };
        assert_eq!(c.category(), "COS");
        assert_eq!(c.full_name(), "");
    }

    #[test]
    fn college_lookup_by_code_or_name() {
        assert!(is_known_college("COS"));
        assert!(!is_known_college("cos"));
        assert_eq!(find_college("IOA").unwrap().0, "IOA");
        assert_eq!(
            find_college("College of Law (COL)").unwrap().0,
            "COL"
        );
        assert!(find_college("Nowhere").is_none());
    }
}
