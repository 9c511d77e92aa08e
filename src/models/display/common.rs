//! Common display utilities and helpers

/// Truncate string to max length with ellipsis
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Checkmark for true, blank for false
pub fn check(flag: bool) -> String {
    if flag {
        "\u{2713}".to_string()
    } else {
        String::new()
    }
}
