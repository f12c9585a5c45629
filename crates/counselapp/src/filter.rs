//! Record filtering.
//!
//! A [`FilterState`] holds the three criteria the management table exposes: a free-text
//! query, a category (college or content topic) and a status. [`matches`] decides whether
//! one record passes; [`filter_records`] applies it to a whole collection.
//!
//! The criteria are conjunctive. An unset criterion matches everything, so the default
//! state is the identity filter. Filtering never reorders and never fabricates records.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CounselError;
use crate::model::{Record, Status};

/// Which criterion a `set_filter`/`clear_filter` call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Query,
    Category,
    Status,
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterField::Query => f.write_str("query"),
            FilterField::Category => f.write_str("category"),
            FilterField::Status => f.write_str("status"),
        }
    }
}

impl FromStr for FilterField {
    type Err = CounselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "query" | "search" | "q" => Ok(FilterField::Query),
            "category" | "college" => Ok(FilterField::Category),
            "status" => Ok(FilterField::Status),
            other => Err(CounselError::UnknownValue(format!(
                "filter field '{}' (expected query, category or status)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub text_query: String,
    pub category: Option<String>,
    pub status: Option<Status>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.text_query = query.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<Status>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.normalized_query().is_empty() && self.category.is_none() && self.status.is_none()
    }

    /// The query as matching uses it: trimmed and lower-cased.
    pub fn normalized_query(&self) -> String {
        self.text_query.trim().to_lowercase()
    }

    /// Set one criterion from its textual form.
    ///
    /// A status value must parse; a blank category or status clears the criterion.
    pub fn set(&mut self, field: FilterField, value: &str) -> Result<(), CounselError> {
        match field {
            FilterField::Query => self.text_query = value.to_string(),
            FilterField::Category => {
                let value = value.trim();
                self.category = (!value.is_empty()).then(|| value.to_string());
            }
            FilterField::Status => {
                self.status = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
        }
        Ok(())
    }

    pub fn clear(&mut self, field: FilterField) {
        match field {
            FilterField::Query => self.text_query.clear(),
            FilterField::Category => self.category = None,
            FilterField::Status => self.status = None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Does `record` pass every criterion set in `state`?
pub fn matches<R: Record>(record: &R, state: &FilterState) -> bool {
    if let Some(category) = &state.category {
        if record.category() != category {
            return false;
        }
    }
    if let Some(status) = state.status {
        if record.status() != status {
            return false;
        }
    }
    let query = state.normalized_query();
    if !query.is_empty()
        && !record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    {
        return false;
    }
    true
}

/// The records passing `state`, in source order.
pub fn filter_records<R: Record>(records: &[R], state: &FilterState) -> Vec<R> {
    records
        .iter()
        .filter(|r| matches(*r, state))
        .cloned()
        .collect()
}
