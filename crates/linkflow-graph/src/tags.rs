//! Keyword extraction from member descriptions.

use once_cell::sync::Lazy;

/// At most this many tags per member.
pub const MAX_TAGS: usize = 5;

// Hand-curated domain vocabulary: sector names, technology terms, medical
// specialties. Declaration order is the output order, so new keywords go
// where they belong thematically, not alphabetically.
static KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "AI", "3D", "프린팅", "수액", "진단", "바이오", "제약", "투자",
        "법률", "소송", "특허", "의료기기", "디지털", "헬스케어", "플랫폼",
        "솔루션", "영상", "데이터", "클라우드", "웨어러블", "로봇", "수술",
        "치료", "암", "신경", "피부", "정신", "치과", "비뇨기", "호흡기",
        "심혈관", "이비인후과", "소화기", "안과", "여성", "소아", "노인",
        "원격", "모니터링", "분석", "연구", "VC", "펀드", "컨설팅",
        "병원", "제조", "수입", "유통", "개발", "스타트업", "글로벌",
    ]
});

/// Extract up to [`MAX_TAGS`] vocabulary keywords from a description.
///
/// Matching is case-insensitive substring containment — no word-boundary
/// checks, so a keyword may match inside a longer token. Results come back
/// in vocabulary order, not order of appearance in the text.
pub fn extract_tags(description: &str) -> Vec<String> {
    let lower = description.to_lowercase();

    KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(&keyword.to_lowercase()))
        .take(MAX_TAGS)
        .map(|keyword| keyword.to_string())
        .collect()
}
