//! Shared utility functions.

/// First `max_chars` characters of `s` on a single line, for log previews.
///
/// Newlines are replaced by spaces and `...` is appended when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars).collect();
    format!("{}...", cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_short_text_unchanged() {
        assert_eq!(preview("hi", 10), "hi");
    }

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\nb", 10), "a b");
    }

    #[test]
    fn preview_cuts_on_char_boundary() {
        assert_eq!(preview("🧘🧘🧘", 2), "🧘🧘...");
    }
}
