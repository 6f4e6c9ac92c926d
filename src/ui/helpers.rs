//! UI helper functions

/// Greedy word wrap to a column width. Always yields at least one line.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.len() + 1 + word.len() <= max_width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_string()),
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_empty_input() {
        assert_eq!(wrap_text("", 12), vec![""]);
    }

    #[test]
    fn test_wrap_fits_one_line() {
        assert_eq!(wrap_text("learn to juggle", 20), vec!["learn to juggle"]);
    }

    #[test]
    fn test_wrap_splits_on_words() {
        assert_eq!(
            wrap_text("take a walk around the block", 12),
            vec!["take a walk", "around the", "block"]
        );
    }

    #[test]
    fn test_wrap_zero_width_passthrough() {
        assert_eq!(wrap_text("anything", 0), vec!["anything"]);
    }
}
