//! Dashboard datasets.
//!
//! The dashboard shows three charts for one college over one time range: consultations per
//! period, the student classification split, and engagement per period. Charts are drawn by
//! the UI; this module only selects and shapes the numbers.
//!
//! Every college reuses the base series from [`crate::data`], scaled by a fixed
//! per-college percentage (the first college is unscaled). The monthly range reports four
//! weekly buckets derived from the weekly totals.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::data;
use crate::error::{CounselError, Result};
use crate::model::{
    find_college, Collection, ContentStatus, Record, Status, UserStatus, COLLEGES,
};
use crate::store::campus::Campus;
use crate::store::RecordStore;

const MONTHLY_CONSULTATION_PCT: [u32; 4] = [90, 100, 110, 100];
const MONTHLY_ENGAGEMENT_PCT: [u32; 4] = [95, 105, 85, 115];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimeRange {
    #[default]
    Weekly,
    Monthly,
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeRange::Weekly => f.write_str("Weekly"),
            TimeRange::Monthly => f.write_str("Monthly"),
        }
    }
}

impl FromStr for TimeRange {
    type Err = CounselError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(TimeRange::Weekly),
            "monthly" | "month" => Ok(TimeRange::Monthly),
            other => Err(CounselError::UnknownValue(format!(
                "time range '{}' (expected weekly or monthly)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataPoint {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardDataset {
    pub college: String,
    pub range: TimeRange,
    pub consultation: Vec<DataPoint>,
    /// Percent shares; always sums to 100.
    pub classification: Vec<DataPoint>,
    pub engagement: Vec<DataPoint>,
}

impl DashboardDataset {
    pub fn consultation_total(&self) -> u32 {
        self.consultation.iter().map(|p| p.value).sum()
    }
}

/// Datasets for `college` (code or full name; `None` picks the first college).
pub fn dataset(college: Option<&str>, range: TimeRange) -> Result<DashboardDataset> {
    let (code, name) = match college {
        Some(query) => find_college(query.trim())
            .ok_or_else(|| CounselError::UnknownValue(format!("college '{}'", query.trim())))?,
        None => COLLEGES[0],
    };
    let pct = college_scale(code);

    let weekly = |series: &[(&str, u32)]| -> Vec<DataPoint> {
        series
            .iter()
            .map(|(label, value)| DataPoint {
                label: label.to_string(),
                value: value * pct / 100,
            })
            .collect()
    };
    let consultation = weekly(data::CONSULTATION_STATS);
    let engagement = weekly(data::ENGAGEMENT);

    let (consultation, engagement) = match range {
        TimeRange::Weekly => (consultation, engagement),
        TimeRange::Monthly => (
            monthly(&consultation, &MONTHLY_CONSULTATION_PCT),
            monthly(&engagement, &MONTHLY_ENGAGEMENT_PCT),
        ),
    };

    Ok(DashboardDataset {
        college: name.to_string(),
        range,
        consultation,
        classification: data::CLASSIFICATION
            .iter()
            .map(|(label, value)| DataPoint {
                label: label.to_string(),
                value: *value,
            })
            .collect(),
        engagement,
    })
}

fn college_scale(code: &str) -> u32 {
    let idx = COLLEGES.iter().position(|(c, _)| *c == code).unwrap_or(0) as u32;
    100 - (idx * 7) % 40
}

fn monthly(weekly: &[DataPoint], pct: &[u32; 4]) -> Vec<DataPoint> {
    let total: u32 = weekly.iter().map(|p| p.value).sum();
    pct.iter()
        .enumerate()
        .map(|(i, p)| DataPoint {
            label: format!("Week {}", i + 1),
            value: total * p / 100,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: Status,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSummary {
    pub collection: Collection,
    pub total: usize,
    pub by_status: Vec<StatusCount>,
}

/// Record counts per status for every collection.
pub fn summary(campus: &Campus) -> Vec<CollectionSummary> {
    let people = [UserStatus::Active, UserStatus::Inactive].map(Status::from);
    let content = [
        ContentStatus::Published,
        ContentStatus::Draft,
        ContentStatus::Archived,
    ]
    .map(Status::from);

    vec![
        summarize(campus.students.records(), &people),
        summarize(campus.counselors.records(), &people),
        summarize(campus.content.records(), &content),
    ]
}

fn summarize<R: Record>(records: &[R], statuses: &[Status]) -> CollectionSummary {
    CollectionSummary {
        collection: R::COLLECTION,
        total: records.len(),
        by_status: statuses
            .iter()
            .map(|status| StatusCount {
                status: *status,
                count: records.iter().filter(|r| r.status() == *status).count(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_college_is_unscaled_weekly() {
        let ds = dataset(None, TimeRange::Weekly).unwrap();
        assert_eq!(ds.college, COLLEGES[0].1);
        let values: Vec<u32> = ds.consultation.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![950, 500, 680, 550, 1150]);
        assert_eq!(ds.engagement[3].value, 1050);
    }

    #[test]
    fn college_accepts_code_or_full_name() {
        let by_code = dataset(Some("COL"), TimeRange::Weekly).unwrap();
        let by_name = dataset(Some("College of Law (COL)"), TimeRange::Weekly).unwrap();
        assert_eq!(by_code, by_name);
    }

    #[test]
    fn unknown_college_is_rejected() {
        assert!(matches!(
            dataset(Some("Hogwarts"), TimeRange::Weekly),
            Err(CounselError::UnknownValue(_))
        ));
    }

    #[test]
    fn other_colleges_are_scaled_down() {
        let base = dataset(None, TimeRange::Weekly).unwrap();
        let other = dataset(Some("CHK"), TimeRange::Weekly).unwrap();
        assert!(other.consultation_total() < base.consultation_total());
    }

    #[test]
    fn monthly_has_four_week_buckets() {
        let ds = dataset(None, TimeRange::Monthly).unwrap();
        let labels: Vec<&str> = ds.consultation.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Week 1", "Week 2", "Week 3", "Week 4"]);
        // Week 2 is the unadjusted weekly total.
        assert_eq!(ds.consultation[1].value, 3830);
        assert_eq!(ds.engagement.len(), 4);
    }

    #[test]
    fn classification_is_the_same_split_everywhere() {
        let a = dataset(None, TimeRange::Weekly).unwrap();
        let b = dataset(Some("COS"), TimeRange::Monthly).unwrap();
        assert_eq!(a.classification, b.classification);
        assert_eq!(a.classification.iter().map(|p| p.value).sum::<u32>(), 100);
    }

    #[test]
    fn range_parses() {
        assert_eq!("Monthly".parse::<TimeRange>().unwrap(), TimeRange::Monthly);
        assert!("daily".parse::<TimeRange>().is_err());
    }

    #[test]
    fn summary_counts_seeded_campus() {
        let summaries = summary(&Campus::seeded());
        let students = &summaries[0];
        assert_eq!(students.collection, Collection::Students);
        assert_eq!(students.total, 22);
        assert_eq!(students.by_status[1].count, 4);

        let counselors = &summaries[1];
        assert_eq!(counselors.by_status[0].count, 2);
        assert_eq!(counselors.by_status[1].count, 1);

        let content = &summaries[2];
        let counts: Vec<usize> = content.by_status.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![3, 1, 1]);
    }
}
