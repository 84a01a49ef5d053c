/// Fallback avatar text when no initials can be derived.
pub const UNKNOWN_INITIALS: &str = "?";

const MAX_INITIALS: usize = 2;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | '-' | '_')
}

/// Derive the avatar initials for a participant identifier.
///
/// Uses the local part of an email (everything before the first `@`, or the
/// whole label when that part is empty), splits it on runs of whitespace,
/// `.`, `-` and `_`, and takes the uppercased first character of at most two
/// segments. Falls back to `"?"`.
pub fn initials(label: &str) -> String {
    let name_part = match label.split('@').next() {
        Some(local) if !local.is_empty() => local,
        _ => label,
    };

    let initials: String = name_part
        .split(is_separator)
        .filter_map(|segment| segment.chars().next())
        .take(MAX_INITIALS)
        .collect::<String>()
        .to_uppercase();

    if initials.is_empty() {
        UNKNOWN_INITIALS.to_string()
    } else {
        initials
    }
}
