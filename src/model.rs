// src/model.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One normalized procurement listing. Every field is always populated with
/// some string value (possibly empty), whether the record was scraped or
/// substituted from the sample table; the persisted document is flat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RfpRecord {
    pub title: String,
    pub agency: String,
    pub posted_date: String,
    pub due_date: String,
    pub notice_id: String,
    pub description: String,
    pub source: String, // e.g., "Indiana IDOA"
    pub url: String,
}

/// The persisted artifact of one collection run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CollectionResult {
    pub collected_at: DateTime<Utc>,
    pub total_rfps: usize,
    pub rfps: Vec<RfpRecord>,
}

impl CollectionResult {
    /// `total_rfps` is recomputed from the records here, never supplied by
    /// callers, so it cannot drift from `rfps.len()`.
    pub fn new(rfps: Vec<RfpRecord>) -> Self {
        Self {
            collected_at: Utc::now(),
            total_rfps: rfps.len(),
            rfps,
        }
    }
}

/// Collector outcome with provenance. The persisted document does not carry
/// this distinction (the `source` label is identical either way); callers
/// log it instead. See DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collected {
    Live(Vec<RfpRecord>),
    Fallback(Vec<RfpRecord>),
}

impl Collected {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Collected::Fallback(_))
    }

    pub fn records(&self) -> &[RfpRecord] {
        match self {
            Collected::Live(r) | Collected::Fallback(r) => r,
        }
    }

    pub fn into_records(self) -> Vec<RfpRecord> {
        match self {
            Collected::Live(r) | Collected::Fallback(r) => r,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> RfpRecord {
        RfpRecord {
            title: title.to_string(),
            agency: "Agency".to_string(),
            posted_date: "2024-02-01".to_string(),
            due_date: String::new(),
            notice_id: "X-0001".to_string(),
            description: String::new(),
            source: "Test".to_string(),
            url: String::new(),
        }
    }

    #[test]
    fn total_matches_record_count() {
        let r = CollectionResult::new(vec![record("a"), record("b")]);
        assert_eq!(r.total_rfps, 2);
        assert_eq!(r.total_rfps, r.rfps.len());
    }

    #[test]
    fn provenance_does_not_change_records() {
        let recs = vec![record("a")];
        let live = Collected::Live(recs.clone());
        let fallback = Collected::Fallback(recs.clone());
        assert!(!live.is_fallback());
        assert!(fallback.is_fallback());
        assert_eq!(live.into_records(), fallback.into_records());
    }
}
