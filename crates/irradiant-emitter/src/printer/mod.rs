//! Recursive-descent Lua printer.
//!
//! One `Printer` emits one translation unit. The `impl` blocks are split
//! by concern:
//!
//! - `literals` — strings, numbers, characters, identifiers
//! - `expressions` — expression lowering
//! - `statements` — statement lowering
//! - `declarations` — top-level driver and entry-point wrapper
//! - `modules` — include-directive forwarding

mod declarations;
mod expressions;
mod literals;
mod modules;
mod statements;

use rustc_hash::FxHashSet;

use irradiant_ast::{Decl, TranslationUnit};

use crate::options::EmitOptions;
use crate::writer::SourceWriter;

/// Streams one translation unit out as Lua source.
pub struct Printer {
    writer: SourceWriter,
    options: EmitOptions,
    /// Names of function-typed declarations seen anywhere in the unit,
    /// feeding the function-pointer lowering.
    known_functions: FxHashSet<String>,
    /// Set once the entry-point function definition has been emitted.
    entry_name: Option<String>,
    /// Per-unit counter disambiguating nested switch dispatch tables.
    /// Never reset mid-unit, so synthesized names stay unique.
    switch_counter: u32,
    /// Set while descending into a condition subtree; consumed by the
    /// first assignment found so it gets wrapped in a closure.
    in_condition: bool,
}

impl Printer {
    pub fn new(options: EmitOptions) -> Self {
        Printer {
            writer: SourceWriter::new(),
            options,
            known_functions: FxHashSet::default(),
            entry_name: None,
            switch_counter: 0,
            in_condition: false,
        }
    }

    /// Emit one translation unit: include loads, then every main-file
    /// declaration in order, then the entry-point wrapper if the unit
    /// defines one.
    pub fn emit_unit(&mut self, unit: &TranslationUnit) {
        // Function names from the whole unit (headers included) so
        // references to them can be recognized during lowering.
        for item in &unit.items {
            if let Decl::Function(func) = &item.decl {
                self.known_functions.insert(func.name.clone());
            }
        }

        for directive in &unit.includes {
            self.emit_include(directive);
        }

        for item in &unit.items {
            if !item.in_main_file {
                tracing::trace!("skipping declaration outside the main file");
                continue;
            }
            self.emit_decl(&item.decl);
        }

        self.emit_entry_wrapper();
    }

    /// Consume the printer and return the emitted source.
    pub fn finish(self) -> String {
        self.writer.finish()
    }

    /// Emit a whole unit in one call.
    pub fn emit_to_string(unit: &TranslationUnit, options: EmitOptions) -> String {
        let mut printer = Printer::new(options);
        printer.emit_unit(unit);
        printer.finish()
    }

    /// Render a single expression. Mainly a test surface.
    pub fn expr_to_string(expr: &irradiant_ast::Expr) -> String {
        let mut printer = Printer::new(EmitOptions::default());
        printer.emit_expr(expr);
        printer.finish()
    }

    /// Render a single statement at depth zero. Mainly a test surface.
    pub fn stmt_to_string(stmt: &irradiant_ast::Stmt) -> String {
        let mut printer = Printer::new(EmitOptions::default());
        printer.emit_stmt(stmt);
        printer.finish()
    }

    // =========================================================================
    // Output helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_indent(&mut self) {
        self.writer.write_indent();
    }

    pub(super) fn write_indented(&mut self, text: &str) {
        self.writer.write_indented(text);
    }
}
