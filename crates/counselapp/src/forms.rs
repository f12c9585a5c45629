//! # Counselor Forms
//!
//! Form input arrives as plain strings, exactly as typed. Nothing enters the store until it
//! has been validated into typed values here.
//!
//! - [`CounselorForm`]: the full create/edit form. [`CounselorForm::validate`] turns it into
//!   a [`CounselorDraft`] for creation.
//! - [`CounselorPatch`]: only the fields an edit changed. [`CounselorPatch::validate`] turns
//!   it into [`CounselorChanges`], which merge onto an existing record.
//!
//! ## Field Rules
//!
//! | Field | Required | Format |
//! |-------|----------|--------|
//! | `email` | yes | `local@domain`, one `@`, both sides non-empty |
//! | `college_assignment` | yes | comma-separated known college codes (`COS, CBFS`) |
//! | `birthdate` | no | `YYYY-MM-DD`, not in the future |
//! | `starting_shift`, `ending_shift` | no | `HH:MM` |
//! | `first_name`, `last_name` | no | trimmed |
//! | `status` | edit only | `Active` or `Inactive` |
//!
//! Every failing field is reported, not just the first one.

use chrono::{Local, NaiveDate, NaiveTime};

use crate::error::{CounselError, ValidationError};
use crate::model::{is_known_college, Counselor, UserStatus};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

/// Form field names accepted by [`CounselorForm::set`], in form order.
pub const FORM_FIELDS: &[&str] = &[
    "first_name",
    "last_name",
    "email",
    "birthdate",
    "starting_shift",
    "ending_shift",
    "college_assignment",
    "status",
];

/// Raw counselor form input.
///
/// `status` is only meaningful when editing; new counselors always start active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounselorForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: String,
    pub starting_shift: String,
    pub ending_shift: String,
    pub college_assignment: String,
    pub status: String,
}

/// A validated create form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounselorDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub birthdate: Option<NaiveDate>,
    pub starting_shift: Option<NaiveTime>,
    pub ending_shift: Option<NaiveTime>,
    pub college_assignment: String,
}

impl CounselorForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form pre-filled with an existing record, as the edit screen shows it.
    pub fn from_counselor(c: &Counselor) -> Self {
        Self {
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            email: c.email.clone(),
            birthdate: c
                .birthdate
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            starting_shift: fmt_time(c.starting_shift),
            ending_shift: fmt_time(c.ending_shift),
            college_assignment: c.college_assignment.clone(),
            status: c.status.to_string(),
        }
    }

    pub fn with(mut self, field: &str, value: &str) -> Result<Self, CounselError> {
        self.set(field, value)?;
        Ok(self)
    }

    /// Set one field by name. Accepts snake_case and camelCase names.
    pub fn set(&mut self, field: &str, value: &str) -> Result<(), CounselError> {
        let slot = match canonical_field(field)? {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "email" => &mut self.email,
            "birthdate" => &mut self.birthdate,
            "starting_shift" => &mut self.starting_shift,
            "ending_shift" => &mut self.ending_shift,
            "college_assignment" => &mut self.college_assignment,
            _ => &mut self.status,
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn get(&self, field: &str) -> Result<&str, CounselError> {
        let value = match canonical_field(field)? {
            "first_name" => &self.first_name,
            "last_name" => &self.last_name,
            "email" => &self.email,
            "birthdate" => &self.birthdate,
            "starting_shift" => &self.starting_shift,
            "ending_shift" => &self.ending_shift,
            "college_assignment" => &self.college_assignment,
            _ => &self.status,
        };
        Ok(value.as_str())
    }

    pub fn validate(&self) -> Result<CounselorDraft, ValidationError> {
        let mut errors = ValidationError::default();

        let email = check_email(&self.email, &mut errors);
        let college_assignment = check_assignment(&self.college_assignment, &mut errors);
        let birthdate = check_birthdate(&self.birthdate, &mut errors);
        let starting_shift = check_time("starting_shift", &self.starting_shift, &mut errors);
        let ending_shift = check_time("ending_shift", &self.ending_shift, &mut errors);

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CounselorDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email,
            birthdate,
            starting_shift,
            ending_shift,
            college_assignment,
        })
    }

    /// The fields that differ from `original`.
    pub fn diff(&self, original: &CounselorForm) -> CounselorPatch {
        let changed = |new: &String, old: &String| (new != old).then(|| new.clone());
        CounselorPatch {
            first_name: changed(&self.first_name, &original.first_name),
            last_name: changed(&self.last_name, &original.last_name),
            email: changed(&self.email, &original.email),
            birthdate: changed(&self.birthdate, &original.birthdate),
            starting_shift: changed(&self.starting_shift, &original.starting_shift),
            ending_shift: changed(&self.ending_shift, &original.ending_shift),
            college_assignment: changed(&self.college_assignment, &original.college_assignment),
            status: changed(&self.status, &original.status),
        }
    }
}

/// Raw edit input: `None` means "leave unchanged".
///
/// An empty string on an optional field (birthdate, shifts) clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounselorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<String>,
    pub starting_shift: Option<String>,
    pub ending_shift: Option<String>,
    pub college_assignment: Option<String>,
    pub status: Option<String>,
}

/// A validated patch, ready to merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounselorChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub birthdate: Option<Option<NaiveDate>>,
    pub starting_shift: Option<Option<NaiveTime>>,
    pub ending_shift: Option<Option<NaiveTime>>,
    pub college_assignment: Option<String>,
    pub status: Option<UserStatus>,
}

impl CounselorPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(status: UserStatus) -> Self {
        Self {
            status: Some(status.to_string()),
            ..Default::default()
        }
    }

    pub fn with(mut self, field: &str, value: &str) -> Result<Self, CounselError> {
        let slot = match canonical_field(field)? {
            "first_name" => &mut self.first_name,
            "last_name" => &mut self.last_name,
            "email" => &mut self.email,
            "birthdate" => &mut self.birthdate,
            "starting_shift" => &mut self.starting_shift,
            "ending_shift" => &mut self.ending_shift,
            "college_assignment" => &mut self.college_assignment,
            _ => &mut self.status,
        };
        *slot = Some(value.to_string());
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<CounselorChanges, ValidationError> {
        let mut errors = ValidationError::default();

        let email = self.email.as_deref().map(|v| check_email(v, &mut errors));
        let college_assignment = self
            .college_assignment
            .as_deref()
            .map(|v| check_assignment(v, &mut errors));
        let birthdate = self
            .birthdate
            .as_deref()
            .map(|v| check_birthdate(v, &mut errors));
        let starting_shift = self
            .starting_shift
            .as_deref()
            .map(|v| check_time("starting_shift", v, &mut errors));
        let ending_shift = self
            .ending_shift
            .as_deref()
            .map(|v| check_time("ending_shift", v, &mut errors));
        let status = self.status.as_deref().and_then(|v| match v.parse::<UserStatus>() {
            Ok(s) => Some(s),
            Err(_) => {
                errors.push("status", format!("'{}' is not Active or Inactive", v.trim()));
                None
            }
        });

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CounselorChanges {
            first_name: self.first_name.as_deref().map(|v| v.trim().to_string()),
            last_name: self.last_name.as_deref().map(|v| v.trim().to_string()),
            email,
            birthdate,
            starting_shift,
            ending_shift,
            college_assignment,
            status,
        })
    }
}

impl CounselorChanges {
    /// Shallow-merge onto `counselor`, keeping the display college in sync.
    pub fn apply(self, counselor: &mut Counselor) {
        if let Some(v) = self.first_name {
            counselor.first_name = v;
        }
        if let Some(v) = self.last_name {
            counselor.last_name = v;
        }
        if let Some(v) = self.email {
            counselor.email = v;
        }
        if let Some(v) = self.birthdate {
            counselor.birthdate = v;
        }
        if let Some(v) = self.starting_shift {
            counselor.starting_shift = v;
        }
        if let Some(v) = self.ending_shift {
            counselor.ending_shift = v;
        }
        if let Some(v) = self.college_assignment {
            counselor.college_assignment = v;
        }
        if let Some(v) = self.status {
            counselor.status = v;
        }
        counselor.sync_college();
    }
}

fn canonical_field(field: &str) -> Result<&'static str, CounselError> {
    let normalized: String = field
        .trim()
        .chars()
        .flat_map(|c| {
            if c.is_ascii_uppercase() {
                vec!['_', c.to_ascii_lowercase()]
            } else if c == '-' {
                vec!['_']
            } else {
                vec![c]
            }
        })
        .collect();
    FORM_FIELDS
        .iter()
        .find(|f| **f == normalized)
        .copied()
        .ok_or_else(|| CounselError::UnknownValue(format!("form field '{}'", field.trim())))
}

fn fmt_time(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn check_email(raw: &str, errors: &mut ValidationError) -> String {
    let email = raw.trim();
    if email.is_empty() {
        errors.push("email", "is required");
        return String::new();
    }
    let mut parts = email.split('@');
    let well_formed = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        _ => false,
    };
    if !well_formed {
        errors.push("email", format!("'{}' is not a valid address", email));
    }
    email.to_string()
}

fn check_assignment(raw: &str, errors: &mut ValidationError) -> String {
    let codes: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    if codes.is_empty() {
        errors.push("college_assignment", "is required");
        return String::new();
    }
    let unknown: Vec<&str> = codes
        .iter()
        .copied()
        .filter(|c| !is_known_college(c))
        .collect();
    if !unknown.is_empty() {
        errors.push(
            "college_assignment",
            format!("unknown college code(s): {}", unknown.join(", ")),
        );
    }
    codes.join(", ")
}

fn check_birthdate(raw: &str, errors: &mut ValidationError) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) if date > Local::now().date_naive() => {
            errors.push("birthdate", "is in the future");
            None
        }
        Ok(date) => Some(date),
        Err(_) => {
            errors.push("birthdate", format!("'{}' is not a YYYY-MM-DD date", raw));
            None
        }
    }
}

fn check_time(field: &'static str, raw: &str, errors: &mut ValidationError) -> Option<NaiveTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveTime::parse_from_str(raw, TIME_FORMAT) {
        Ok(t) => Some(t),
        Err(_) => {
            errors.push(field, format!("'{}' is not an HH:MM time", raw));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    fn valid_form() -> CounselorForm {
        CounselorForm {
            first_name: " Maria ".into(),
            last_name: "Reyes".into(),
            email: "maria.reyes@umake.edu.ph".into(),
            birthdate: "1988-03-14".into(),
            starting_shift: "08:30".into(),
            ending_shift: "17:30".into(),
            college_assignment: "COS".into(),
            status: String::new(),
        }
    }

    #[test]
    fn valid_form_produces_typed_draft() {
        let draft = valid_form().validate().unwrap();
        assert_eq!(draft.first_name, "Maria");
        assert_eq!(draft.birthdate, NaiveDate::from_ymd_opt(1988, 3, 14));
        assert_eq!(draft.starting_shift, NaiveTime::from_hms_opt(8, 30, 0));
        assert_eq!(draft.college_assignment, "COS");
    }

    #[test]
    fn email_and_assignment_are_enough() {
        let form = CounselorForm::new()
            .with("email", "a@x.edu")
            .unwrap()
            .with("collegeAssignment", "COS")
            .unwrap();
        let draft = form.validate().unwrap();
        assert_eq!(draft.birthdate, None);
        assert_eq!(draft.first_name, "");
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let err = CounselorForm::new().validate().unwrap_err();
        assert!(err.has_field("email"));
        assert!(err.has_field("college_assignment"));
        assert_eq!(err.fields.len(), 2);
    }

    #[test]
    fn malformed_values_are_all_reported() {
        let form = CounselorForm {
            email: "not-an-email".into(),
            birthdate: "20/05/1985".into(),
            starting_shift: "8am".into(),
            ending_shift: "25:00".into(),
            college_assignment: "COS, XYZ".into(),
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        for field in [
            "email",
            "birthdate",
            "starting_shift",
            "ending_shift",
            "college_assignment",
        ] {
            assert!(err.has_field(field), "missing error for {}", field);
        }
    }

    #[test]
    fn email_with_two_ats_is_rejected() {
        let form = valid_form().with("email", "a@b@c.edu").unwrap();
        assert!(form.validate().unwrap_err().has_field("email"));
    }

    #[test]
    fn future_birthdate_is_rejected() {
        let form = valid_form().with("birthdate", "2999-01-01").unwrap();
        assert!(form.validate().unwrap_err().has_field("birthdate"));
    }

    #[test]
    fn combined_assignment_is_normalized() {
        let form = valid_form().with("college_assignment", "COS,CBFS").unwrap();
        assert_eq!(form.validate().unwrap().college_assignment, "COS, CBFS");
    }

    #[test]
    fn field_names_accept_camel_and_kebab_case() {
        let mut form = CounselorForm::new();
        form.set("firstName", "A").unwrap();
        form.set("ending-shift", "10:00").unwrap();
        assert_eq!(form.get("first_name").unwrap(), "A");
        assert_eq!(form.get("endingShift").unwrap(), "10:00");
        assert!(form.set("nickname", "x").is_err());
    }

    #[test]
    fn prefilled_form_round_trips_the_record() {
        let original = data::initial_counselors().remove(0);
        let form = CounselorForm::from_counselor(&original);
        assert_eq!(form.birthdate, "1985-05-20");
        assert_eq!(form.starting_shift, "08:00");
        assert_eq!(form.status, "Active");
        assert!(form.diff(&form.clone()).is_empty());
    }

    #[test]
    fn diff_reports_only_changed_fields() {
        let original = CounselorForm::from_counselor(&data::initial_counselors()[1]);
        let edited = original.clone().with("status", "Inactive").unwrap();
        let patch = edited.diff(&original);
        assert_eq!(patch, CounselorPatch::status(UserStatus::Inactive));
    }

    #[test]
    fn patch_validates_only_present_fields() {
        let patch = CounselorPatch::new().with("email", "").unwrap();
        assert!(patch.validate().unwrap_err().has_field("email"));

        let changes = CounselorPatch::status(UserStatus::Inactive)
            .validate()
            .unwrap();
        assert_eq!(changes.status, Some(UserStatus::Inactive));
        assert_eq!(changes.email, None);
    }

    #[test]
    fn patch_rejects_unknown_status() {
        let patch = CounselorPatch::new().with("status", "Retired").unwrap();
        assert!(patch.validate().unwrap_err().has_field("status"));
    }

    #[test]
    fn empty_optional_clears_value() {
        let mut counselor = data::initial_counselors().remove(0);
        let changes = CounselorPatch::new()
            .with("birthdate", "")
            .unwrap()
            .validate()
            .unwrap();
        changes.apply(&mut counselor);
        assert_eq!(counselor.birthdate, None);
    }

    #[test]
    fn apply_syncs_display_college() {
        let mut counselor = data::initial_counselors().remove(0);
        let changes = CounselorPatch::new()
            .with("college_assignment", "COE")
            .unwrap()
            .validate()
            .unwrap();
        changes.apply(&mut counselor);
        assert_eq!(counselor.college_assignment, "COE");
        assert_eq!(counselor.college, "COE");
    }
}
