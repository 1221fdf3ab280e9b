//! Shared string helpers.

/// Normalizes a game name for storage and lookup.
///
/// Only surrounding whitespace is removed. Case is preserved, so "Valorant"
/// and "valorant" remain distinct entries.
#[must_use]
pub fn normalize_game_name(input: &str) -> &str {
    input.trim()
}

/// Renders an optional filter as ` (label: value)`, or nothing when the
/// filter is absent or empty.
#[must_use]
pub fn filter_suffix(label: &str, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => format!(" ({label}: {value})"),
        _ => String::new(),
    }
}

/// Renders items as a bulleted list, one per line.
#[must_use]
pub fn bullet_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("• {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncates a string to a maximum number of characters with ellipsis.
#[must_use]
pub fn truncate_string(input: &str, max_chars: usize) -> String {
    if input.chars().count() <= max_chars {
        input.to_string()
    } else {
        let kept: String = input.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_game_name() {
        assert_eq!(normalize_game_name("  Apex Legends \n"), "Apex Legends");
        assert_eq!(normalize_game_name("VALORANT"), "VALORANT");
    }

    #[test]
    fn test_filter_suffix() {
        assert_eq!(filter_suffix("store", Some("epic")), " (store: epic)");
        assert_eq!(filter_suffix("store", Some("")), "");
        assert_eq!(filter_suffix("source", None), "");
    }

    #[test]
    fn test_bullet_list() {
        assert_eq!(bullet_list(&["Apex", "Zelda"]), "• Apex\n• Zelda");
        assert_eq!(bullet_list::<&str>(&[]), "");
    }

    #[test]
    fn test_truncate_string() {
        let input = "This is a very long string that should be truncated";
        assert_eq!(truncate_string(input, 20), "This is a very lo...");
        assert_eq!(truncate_string("Short", 20), "Short");
        assert_eq!(truncate_string("ééééé", 4), "é...");
    }
}
