//! Include-directive forwarding.
//!
//! Each `#include` the frontend saw in the main file becomes a Lua module
//! load: the header name maps to a `.lua` path (angle-bracket includes
//! resolve into the shim directory), emitted either as a `dofile`
//! statement or, when configured, as the referenced file's text inlined
//! in place.

use irradiant_ast::IncludeDirective;

use super::Printer;

impl Printer {
    pub(super) fn emit_include(&mut self, directive: &IncludeDirective) {
        if !directive.in_main_file {
            tracing::trace!(name = %directive.name, "ignoring include outside the main file");
            return;
        }

        let path = self.module_path(directive);
        if self.options.inline_includes {
            self.emit_inline_module(&path);
        } else {
            self.write("dofile \"");
            self.write(&path);
            self.write("\"");
            self.write_line();
        }
    }

    /// `stdio.h` → `stdio.lua`; angle-bracket form → `<shim_dir>/stdio.lua`.
    fn module_path(&self, directive: &IncludeDirective) -> String {
        let stem = match directive.name.rfind('.') {
            Some(dot) => &directive.name[..dot],
            None => directive.name.as_str(),
        };
        if directive.angled {
            format!("{}/{}.lua", self.options.shim_dir, stem)
        } else {
            format!("{stem}.lua")
        }
    }

    /// Inline the module's text, framed by comments naming the path. A
    /// failed read degrades to a comment; emission never aborts over it.
    fn emit_inline_module(&mut self, path: &str) {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                self.write("-- begin inline: ");
                self.write(path);
                self.write_line();
                self.write(&text);
                if !text.ends_with('\n') {
                    self.write_line();
                }
                self.write("-- end inline: ");
                self.write(path);
                self.write_line();
            }
            Err(err) => {
                tracing::debug!(%path, %err, "failed to inline module");
                self.write("-- failed to inline: ");
                self.write(path);
                self.write_line();
            }
        }
    }
}
