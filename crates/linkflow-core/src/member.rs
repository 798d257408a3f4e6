//! The member record — one roster entry, immutable within a session.

use serde::{Deserialize, Serialize};

/// Sentinel category for rows with a blank category field.
pub const UNSPECIFIED_CATEGORY: &str = "기타";

/// One person in the roster.
///
/// Constructed once per row during ingestion; the `tags` field is derived
/// from `description` at that point and not recomputed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub description: String,
    /// Coarse classification, possibly composite ("제약/바이오").
    pub category: String,
    /// Keywords extracted from the description, at most 5.
    pub tags: Vec<String>,
    pub photo_url: Option<String>,
    /// Honorary position (회장, 부회장, ...), independent of `role`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_role: Option<String>,
}
