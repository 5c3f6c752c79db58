//! Append-only output buffer with indentation tracking.
//!
//! All emission goes through this writer; once text is written it is never
//! revised, which is what forces the closure-wrapping lowerings in the
//! printer (there is no seeking back to patch up already-emitted text).

/// One indentation step.
const INDENT: &str = "    ";

/// Accumulates emitted Lua source.
#[derive(Debug, Default)]
pub struct SourceWriter {
    output: String,
    indent: usize,
}

impl SourceWriter {
    pub fn new() -> Self {
        SourceWriter::default()
    }

    /// Append raw text.
    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Append a newline.
    pub fn write_line(&mut self) {
        self.output.push('\n');
    }

    /// Append the current indentation.
    pub fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }

    /// Append the current indentation followed by `text`.
    pub fn write_indented(&mut self, text: &str) {
        self.write_indent();
        self.write(text);
    }

    /// Must be paired with a later `decrease_indent`.
    pub fn increase_indent(&mut self) {
        self.indent += 1;
    }

    pub fn decrease_indent(&mut self) {
        debug_assert!(self.indent > 0, "unbalanced indent pop");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Bytes written so far. Used to detect statements that emitted nothing.
    pub fn len(&self) -> usize {
        self.output.len()
    }

    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// True when the last emitted byte is a newline. Lets statement
    /// loops avoid doubling the line break after multi-line constructs.
    pub fn ends_with_newline(&self) -> bool {
        self.output.ends_with('\n')
    }

    /// Consume the writer and return the accumulated output.
    pub fn finish(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_are_appended_in_order() {
        let mut w = SourceWriter::new();
        w.write("local x");
        w.write(" = 1");
        w.write_line();
        assert_eq!(w.finish(), "local x = 1\n");
    }

    #[test]
    fn indentation_is_four_spaces_per_level() {
        let mut w = SourceWriter::new();
        w.increase_indent();
        w.write_indented("a");
        w.write_line();
        w.increase_indent();
        w.write_indented("b");
        w.decrease_indent();
        w.decrease_indent();
        assert_eq!(w.finish(), "    a\n        b");
    }

    #[test]
    fn len_tracks_emitted_bytes() {
        let mut w = SourceWriter::new();
        assert!(w.is_empty());
        w.write("end");
        assert_eq!(w.len(), 3);
    }
}
