//! Greedy word wrap

use super::width::{rune_width, str_width};

/// Split text into display lines
///
/// A `\n` always ends a line. With `max_width > 0`, words move to a new line
/// when they don't fit in what is left of the current one. Only words are
/// charged against the line's budget: spaces stay on the line they follow
/// without consuming columns, so a line may run past `max_width`. A word
/// wider than `max_width` on its own is broken between runes.
/// `max_width == 0` splits on `\n` only.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.split('\n').map(str::to_string).collect();
    }

    let mut wrapper = Wrapper {
        max_width,
        remaining: max_width,
        lines: Vec::new(),
        line: String::new(),
        word: String::new(),
    };
    for c in text.chars() {
        if c == '\n' {
            wrapper.place_word();
            wrapper.break_line();
        } else if c.is_whitespace() {
            wrapper.place_word();
            wrapper.line.push(c);
        } else {
            wrapper.word.push(c);
        }
    }
    wrapper.place_word();
    wrapper.lines.push(wrapper.line);
    wrapper.lines
}

struct Wrapper {
    max_width: usize,
    remaining: usize,
    lines: Vec<String>,
    line: String,
    word: String,
}

impl Wrapper {
    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.line));
        self.remaining = self.max_width;
    }

    fn place_word(&mut self) {
        if self.word.is_empty() {
            return;
        }
        let word = std::mem::take(&mut self.word);
        let width = str_width(&word);

        if width > self.remaining && !self.line.is_empty() {
            self.break_line();
        }
        if width <= self.max_width {
            self.line.push_str(&word);
            self.remaining = self.remaining.saturating_sub(width);
            return;
        }

        for c in word.chars() {
            let w = rune_width(c);
            if w > self.remaining && !self.line.is_empty() {
                self.break_line();
            }
            self.line.push(c);
            self.remaining = self.remaining.saturating_sub(w);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits() {
        assert_eq!(wrap("hello world", 20), vec!["hello world"]);
        assert_eq!(wrap("", 5), vec![""]);
    }

    #[test]
    fn test_wrap_blank_line() {
        assert_eq!(wrap("aa bb\n\ncc dd", 10), vec!["aa bb", "", "cc dd"]);
    }

    #[test]
    fn test_wrap_keeps_spaces() {
        assert_eq!(wrap("hello world test", 8), vec!["hello ", "world ", "test"]);
        assert_eq!(wrap("aaaa bbbb", 4), vec!["aaaa ", "bbbb"]);
    }

    #[test]
    fn test_wrap_spaces_are_free() {
        assert_eq!(wrap("a b c", 3), vec!["a b c"]);
        assert_eq!(wrap("aa bb cc", 6), vec!["aa bb cc"]);
        assert_eq!(wrap("aa bb cc", 5), vec!["aa bb ", "cc"]);
    }

    #[test]
    fn test_wrap_long_word_breaks() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("x abcdef", 3), vec!["x ", "abc", "def"]);
    }

    #[test]
    fn test_wrap_wide_runes() {
        assert_eq!(wrap("日本 語", 4), vec!["日本 ", "語"]);
        assert_eq!(wrap("日本語", 3), vec!["日", "本", "語"]);
    }

    #[test]
    fn test_wrap_zero_width_disables() {
        assert_eq!(wrap("one two\nthree", 0), vec!["one two", "three"]);
    }

    #[test]
    fn test_wrap_trailing_newline() {
        assert_eq!(wrap("a\n", 4), vec!["a", ""]);
    }
}
