//! The pairwise graph builder and category catalog.

use std::collections::BTreeSet;

use linkflow_core::Member;
use serde::Serialize;
use tracing::debug;

use crate::style::{category_color, node_size};

/// Strength of every category-affinity link.
const CATEGORY_STRENGTH: f64 = 0.3;
/// Per-shared-tag strength of a keyword link.
const KEYWORD_STRENGTH_STEP: f64 = 0.1;

/// Discriminates the two edge classes. A pair may carry one of each; they
/// represent different relationship semantics and are weighted separately by
/// the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Category,
    Keyword,
}

/// A member wrapped with rendering attributes for the force layout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    pub name: String,
    pub company: String,
    pub role: String,
    pub category: String,
    pub photo_url: Option<String>,
    /// Display size, from role seniority.
    pub val: u32,
    /// Display color, from category.
    pub color: String,
    pub member: Member,
    // Position fields owned by the frontend simulation; fx/fy pin a node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,
}

/// An edge between two member ids.
#[derive(Debug, Clone, Serialize)]
pub struct GraphLink {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: LinkKind,
    pub strength: f64,
}

/// The complete force-graph payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GraphData {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

/// First `/`-segment of a composite category.
fn leading_segment(category: &str) -> &str {
    category.split('/').next().unwrap_or(category)
}

/// Two categories are affine when they are equal, or either full string
/// contains the other's leading segment. The split-then-contain rule is
/// asymmetric on purpose: 의료기관/솔루션 relates to plain 의료기관 even
/// though the full strings differ.
fn categories_affine(a: &str, b: &str) -> bool {
    a == b || a.contains(leading_segment(b)) || b.contains(leading_segment(a))
}

/// Build the complete node and link sets for a roster.
///
/// Nodes come out in input order. Links are emitted category-first, then
/// keyword, each over the i<j pair enumeration, so repeated builds over the
/// same roster are structurally identical. The pair scan is quadratic, which
/// is fine at the tens-to-hundreds roster sizes this serves (see DESIGN.md
/// for the scaling note).
pub fn build_graph(members: &[Member]) -> GraphData {
    let nodes = members
        .iter()
        .map(|member| GraphNode {
            id: member.id.clone(),
            name: member.name.clone(),
            company: member.company.clone(),
            role: member.role.clone(),
            category: member.category.clone(),
            photo_url: member.photo_url.clone(),
            val: node_size(&member.role),
            color: category_color(&member.category).to_string(),
            member: member.clone(),
            x: None,
            y: None,
            fx: None,
            fy: None,
        })
        .collect();

    let mut links = Vec::new();

    // Strong links: category affinity.
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            if categories_affine(&members[i].category, &members[j].category) {
                links.push(GraphLink {
                    source: members[i].id.clone(),
                    target: members[j].id.clone(),
                    kind: LinkKind::Category,
                    strength: CATEGORY_STRENGTH,
                });
            }
        }
    }

    // Weak links: shared tags, but only across distinct exact categories.
    // A pair whose categories relate merely by the substring rule can carry
    // both link types; that dual emission is the given business rule.
    for i in 0..members.len() {
        for j in (i + 1)..members.len() {
            if members[i].category == members[j].category {
                continue;
            }
            let shared = members[i]
                .tags
                .iter()
                .filter(|tag| members[j].tags.contains(tag))
                .count();
            if shared > 0 {
                links.push(GraphLink {
                    source: members[i].id.clone(),
                    target: members[j].id.clone(),
                    kind: LinkKind::Keyword,
                    strength: KEYWORD_STRENGTH_STEP * shared as f64,
                });
            }
        }
    }

    debug!(
        nodes = members.len(),
        links = links.len(),
        "graph built"
    );

    GraphData { nodes, links }
}

/// Distinct category labels in use, sorted.
///
/// Composite categories contribute both their segments and the original
/// composite string: 제약/바이오 yields 제약, 바이오, and 제약/바이오, all
/// independently selectable as filters.
pub fn category_catalog(members: &[Member]) -> Vec<String> {
    let mut categories = BTreeSet::new();
    for member in members {
        for segment in member.category.split('/') {
            categories.insert(segment.trim().to_string());
        }
        categories.insert(member.category.clone());
    }
    categories.into_iter().collect()
}
