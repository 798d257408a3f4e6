//! Minimal quote-aware field scanner.

/// Split one line on commas, honoring double-quoted fields.
///
/// Each `"` toggles the in-quotes state and is consumed; a comma only ends a
/// field while outside quotes. There is no escape handling — this matches the
/// exports the admin page pastes in, which never contain literal quotes
/// inside quoted fields.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}
