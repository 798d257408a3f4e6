//! Display-side masking for member personal data.

/// How much of a name to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameDisplay {
    Full,
    Partial,
}

/// Mask a name down to its family-name character (김철수 → 김*님).
///
/// Empty names render as 익명 so list views never show a blank label.
pub fn anonymize_name(name: &str, mode: NameDisplay) -> String {
    let name = name.trim();
    if name.is_empty() {
        return "익명".to_string();
    }
    match mode {
        NameDisplay::Full => name.to_string(),
        NameDisplay::Partial => {
            // chars(), not bytes: family names are multi-byte Hangul.
            let first = name.chars().next().unwrap_or('*');
            format!("{first}*님")
        }
    }
}

/// Statistical company display: 삼성전자, 5 → "OO전자 소속 가입자 5명".
///
/// Company names of two characters or fewer cannot be masked without
/// disappearing entirely, so they collapse to the generic OO기업.
pub fn statistical_company_display(company: &str, count: usize) -> String {
    let company = company.trim();
    let masked = if company.chars().count() > 2 {
        let rest: String = company.chars().skip(2).collect();
        format!("OO{rest}")
    } else {
        "OO기업".to_string()
    };
    format!("{masked} 소속 가입자 {count}명")
}
