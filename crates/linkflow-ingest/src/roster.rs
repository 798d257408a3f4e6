//! Tabular blob → member records.

use linkflow_core::{Member, UNSPECIFIED_CATEGORY};
use linkflow_graph::tags::extract_tags;
use tracing::warn;

use crate::scan::split_line;

/// Outcome of one roster ingestion.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    pub members: Vec<Member>,
    /// Rows skipped for having fewer than the required field count.
    pub dropped: usize,
}

/// Required field count per row: name, company, role, phone, email,
/// description, category.
const MIN_FIELDS: usize = 7;

/// Parse a comma-delimited roster blob into member records.
///
/// The first line is a header and is skipped. Data rows keep their 1-based
/// position as the member id (`member_3` is always the third data row), so
/// ids stay stable across re-ingestions of the same export. Short rows are
/// dropped, not errors; the count is reported for diagnostics.
pub fn parse_roster(blob: &str) -> IngestReport {
    let mut report = IngestReport::default();

    for (index, line) in blob.trim().lines().enumerate() {
        if index == 0 {
            continue; // header
        }

        let fields = split_line(line);
        if fields.len() < MIN_FIELDS {
            report.dropped += 1;
            continue;
        }

        // The raw description drives tag extraction; the stored copy is trimmed.
        let description = fields[5].clone();

        report.members.push(Member {
            id: format!("member_{index}"),
            name: fields[0].trim().to_string(),
            company: fields[1].trim().to_string(),
            role: fields[2].trim().to_string(),
            phone: fields[3].trim().to_string(),
            email: fields[4].trim().to_string(),
            tags: extract_tags(&description),
            description: description.trim().to_string(),
            category: {
                let category = fields[6].trim();
                if category.is_empty() {
                    UNSPECIFIED_CATEGORY.to_string()
                } else {
                    category.to_string()
                }
            },
            photo_url: Some(format!("/faces/face_{index}.jpg")),
            special_role: None,
        });
    }

    if report.dropped > 0 {
        warn!(dropped = report.dropped, "roster rows skipped as malformed");
    }

    report
}
