//! Top-level declaration driver and entry-point synthesis.

use irradiant_ast::{Decl, FunctionDecl, VarDecl};

use super::Printer;

impl Printer {
    pub(super) fn emit_decl(&mut self, decl: &Decl) {
        match decl {
            Decl::Function(func) => self.emit_function(func),
            Decl::Variable(var) => self.emit_global_variable(var),
        }
    }

    fn emit_function(&mut self, func: &FunctionDecl) {
        let Some(body) = &func.body else {
            // Prototypes carry no code; the defining declaration will.
            tracing::debug!(name = %func.name, "skipping bodyless function declaration");
            return;
        };

        if func.is_entry_point {
            self.entry_name = Some(func.name.clone());
        }

        tracing::debug!(name = %func.name, "emitting function");
        self.write_indented("function ");
        self.write(&func.name);
        self.write("(");
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(param);
        }
        self.write(")");
        self.write_line();
        self.emit_scope(body);
        self.write_indented("end");
        self.write_line();
    }

    fn emit_global_variable(&mut self, var: &VarDecl) {
        // Anonymous declarations (bare struct declarations and the like)
        // have nothing to bind.
        if var.name.is_empty() {
            tracing::debug!("skipping unnamed top-level declaration");
            return;
        }

        self.write_indent();
        self.write(&var.name);
        self.write(" = ");
        match &var.init {
            Some(init) => self.emit_expr(init),
            None => self.write("nil"),
        }
        self.write_line();
    }

    /// Bridge C's `main(argc, argv)` convention to Lua's `arg` sequence:
    /// the script name moves to index 1 so the vector matches argv, and
    /// `#arg` then plays argc.
    pub(super) fn emit_entry_wrapper(&mut self) {
        let Some(entry) = self.entry_name.take() else {
            return;
        };
        self.write("return (function() table.insert(arg, 1, arg[0]); return ");
        self.write(&entry);
        self.write("(#arg, arg) end)()");
        self.write_line();
    }
}
