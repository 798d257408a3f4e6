//! Node display attributes: size from role seniority, color from category.

use once_cell::sync::Lazy;

/// Fallback color for categories outside the known table.
pub const DEFAULT_COLOR: &str = "#6B7280";

// Ordered, not a map: the partial-match fallback walks this table top to
// bottom and returns the first hit, so iteration order is part of the
// contract.
static CATEGORY_COLORS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("의료기기", "#3B82F6"),
        ("솔루션", "#06B6D4"),
        ("투자", "#EF4444"),
        ("법률", "#F97316"),
        ("특허", "#FB923C"),
        ("제약", "#8B5CF6"),
        ("바이오", "#A855F7"),
        ("의료기관", "#10B981"),
        ("비즈니스", "#F59E0B"),
    ]
});

// Seniority tiers, most senior first. First matching tier wins regardless of
// which substring matched, so 이사장 lands in the top tier before the 이사
// tier ever sees it.
const SIZE_TIERS: &[(&[&str], u32)] = &[
    (&["대표", "이사장", "원장", "병원장"], 12),
    (&["부사장", "본부장", "처장", "실장"], 10),
    (&["이사", "전무", "상무"], 9),
    (&["교수", "과장"], 8),
];

/// Default node size for roles outside every tier.
pub const DEFAULT_NODE_SIZE: u32 = 7;

/// Map a role/title string to a rendering size.
pub fn node_size(role: &str) -> u32 {
    for (titles, size) in SIZE_TIERS {
        if titles.iter().any(|title| role.contains(title)) {
            return *size;
        }
    }
    DEFAULT_NODE_SIZE
}

/// Map a category to its display color.
///
/// Exact table match first; otherwise the first table entry related to the
/// category by containment in either direction, which is what makes
/// composite categories like 의료기관/솔루션 pick up the 의료기관 color.
pub fn category_color(category: &str) -> &'static str {
    for &(key, color) in CATEGORY_COLORS.iter() {
        if key == category {
            return color;
        }
    }
    for &(key, color) in CATEGORY_COLORS.iter() {
        if category.contains(key) || key.contains(category) {
            return color;
        }
    }
    DEFAULT_COLOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn executive_titles_get_the_largest_size() {
        assert_eq!(node_size("대표이사"), 12);
        assert_eq!(node_size("병원장"), 12);
        assert_eq!(node_size("재단 이사장"), 12);
    }

    #[test]
    fn tier_priority_beats_substring_overlap() {
        // 이사장 contains 이사, but the senior tier is checked first.
        assert_eq!(node_size("이사장"), 12);
        assert_eq!(node_size("이사"), 9);
        // 원장 also matches inside 병원장; same tier either way.
        assert_eq!(node_size("원장"), 12);
    }

    #[test]
    fn middle_tiers_and_default() {
        assert_eq!(node_size("사업본부장"), 10);
        assert_eq!(node_size("전무"), 9);
        assert_eq!(node_size("교수"), 8);
        assert_eq!(node_size("매니저"), DEFAULT_NODE_SIZE);
        assert_eq!(node_size(""), DEFAULT_NODE_SIZE);
    }

    #[test]
    fn exact_category_match() {
        assert_eq!(category_color("의료기기"), "#3B82F6");
        assert_eq!(category_color("의료기관"), "#10B981");
    }

    #[test]
    fn composite_category_falls_back_to_containment() {
        // 의료기관/솔루션 is not in the table; 의료기기 is checked first but
        // does not match, 솔루션 is contained → its color wins.
        assert_eq!(category_color("의료기관/솔루션"), "#06B6D4");
    }

    #[test]
    fn containment_works_in_both_directions() {
        // A category that is a fragment of a known key.
        assert_eq!(category_color("기기"), "#3B82F6");
    }

    #[test]
    fn unknown_category_gets_the_neutral_color() {
        assert_eq!(category_color("우주항공"), DEFAULT_COLOR);
    }
}
