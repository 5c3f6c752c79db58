//! Literal and identifier rendering.

use std::borrow::Cow;

use super::Printer;

impl Printer {
    pub(super) fn emit_identifier(&mut self, name: &str) {
        // No mangling: the emitted Lua shares the identifier namespace of
        // the C subset we accept.
        self.write(name);
    }

    pub(super) fn emit_string_literal(&mut self, value: &str) {
        self.write("\"");
        match escape_string(value) {
            Cow::Borrowed(s) => self.write(s),
            Cow::Owned(s) => self.write(&s),
        }
        self.write("\"");
    }

    /// Integer literals arrive as exact decimal text from the frontend
    /// (sign folded in) and pass through verbatim.
    pub(super) fn emit_int_literal(&mut self, text: &str) {
        self.write(text);
    }

    pub(super) fn emit_float_literal(&mut self, value: f64) {
        self.write(&value.to_string());
    }

    /// Lua has no character type; recover the ordinal from a one-char
    /// string at runtime.
    pub(super) fn emit_char_literal(&mut self, value: char) {
        self.write("string.byte(\"");
        let mut buf = [0u8; 4];
        match escape_string(value.encode_utf8(&mut buf)) {
            Cow::Borrowed(s) => self.write(s),
            Cow::Owned(s) => self.write(&s),
        }
        self.write("\")");
    }
}

/// Escape a string for a double-quoted Lua literal.
///
/// Escapes backslash, quote, forward slash, and the control characters
/// `\b \f \n \r \t`; everything else passes through untouched. Returns
/// the input unchanged when nothing needs escaping, which is the common
/// case for literals the frontend has already cooked.
pub(crate) fn escape_string(input: &str) -> Cow<'_, str> {
    match first_escape(input.as_bytes()) {
        None => Cow::Borrowed(input),
        Some(pos) => {
            let mut out = String::with_capacity(input.len() + 8);
            out.push_str(&input[..pos]);
            for c in input[pos..].chars() {
                match c {
                    '\\' => out.push_str("\\\\"),
                    '"' => out.push_str("\\\""),
                    '/' => out.push_str("\\/"),
                    '\u{8}' => out.push_str("\\b"),
                    '\u{c}' => out.push_str("\\f"),
                    '\n' => out.push_str("\\n"),
                    '\r' => out.push_str("\\r"),
                    '\t' => out.push_str("\\t"),
                    other => out.push(other),
                }
            }
            Cow::Owned(out)
        }
    }
}

/// Position of the first byte that needs escaping, if any.
fn first_escape(bytes: &[u8]) -> Option<usize> {
    // The three structural characters dominate real literals; control
    // characters only show up once the frontend has cooked `\n` escapes
    // into raw bytes.
    let structural = memchr::memchr3(b'\\', b'"', b'/', bytes);
    let control = bytes.iter().position(|b| b.is_ascii_control());
    match (structural, control) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

#[cfg(test)]
mod tests {
    use super::escape_string;

    #[test]
    fn clean_strings_are_borrowed() {
        assert!(matches!(
            escape_string("hello world"),
            std::borrow::Cow::Borrowed("hello world")
        ));
    }

    #[test]
    fn every_escape_in_the_table_is_applied() {
        assert_eq!(
            escape_string("\\ \" / \u{8} \u{c} \n \r \t"),
            "\\\\ \\\" \\/ \\b \\f \\n \\r \\t"
        );
    }

    #[test]
    fn escapes_past_a_clean_prefix() {
        assert_eq!(escape_string("usage: %s\n"), "usage: %s\\n");
    }
}
