//! Display width of runes and strings

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns a rune occupies: 2 for wide/CJK, 0 for zero-width and control
pub fn rune_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Columns a string occupies
pub fn str_width(s: &str) -> usize {
    s.chars().map(rune_width).sum()
}

/// Truncate a string to fit within max_width, adding ellipsis if needed
pub fn truncate(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        ".".repeat(max_width)
    } else {
        let mut result = String::new();
        let mut current_width = 0;
        for c in s.chars() {
            let char_width = rune_width(c);
            if current_width + char_width + 3 > max_width {
                break;
            }
            result.push(c);
            current_width += char_width;
        }
        result.push_str("...");
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rune_width() {
        assert_eq!(rune_width('a'), 1);
        assert_eq!(rune_width('世'), 2);
        assert_eq!(rune_width('\u{0301}'), 0);
        assert_eq!(rune_width('\n'), 0);
    }

    #[test]
    fn test_str_width() {
        assert_eq!(str_width("abc"), 3);
        assert_eq!(str_width("日本語"), 6);
        assert_eq!(str_width(""), 0);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 5), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("hello", 2), "..");
    }
}
