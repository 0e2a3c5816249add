pub fn truncate(text: &str, max_len: usize) -> String {
    let char_count = text.chars().count();

    if char_count <= max_len {
        text.to_string()
    } else if max_len <= 3 {
        // For very small max_len, just take first chars without "..."
        text.chars().take(max_len).collect()
    } else {
        let truncated: String = text.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Left-aligns `text` in a field of `width` characters.
pub fn pad(text: &str, width: usize) -> String {
    let char_count = text.chars().count();
    if char_count >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - char_count))
    }
}

/// Collapses line breaks and runs of whitespace so a cell stays on one line.
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Jane Doe", 20), "Jane Doe");
        assert_eq!(truncate("Jane Doe", 6), "Jan...");
        assert_eq!(truncate("Jane Doe", 2), "Ja");
    }

    #[test]
    fn test_pad_counts_chars() {
        assert_eq!(pad("Zoë", 5), "Zoë  ");
        assert_eq!(pad("Counsellor", 4), "Counsellor");
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("first\nsecond   third"), "first second third");
    }
}
