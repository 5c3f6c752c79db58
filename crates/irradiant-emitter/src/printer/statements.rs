//! Statement lowering.
//!
//! Every statement emitter starts at an indented line position (it writes
//! its own leading indent) and ends without a trailing newline; the
//! enclosing loop adds the line break. Multi-line constructs indent their
//! inner lines through the writer's matched push/pop pairs.

use irradiant_ast::{Expr, Stmt, VarDecl};

use super::Printer;

impl Printer {
    pub(crate) fn emit_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(stmts) => self.emit_block(stmts),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => self.emit_if(cond, then_branch, else_branch.as_deref()),
            Stmt::While { cond, body } => self.emit_while(cond, body),
            Stmt::DoWhile { body, cond } => self.emit_do_while(body, cond),
            Stmt::For {
                init,
                cond,
                incr,
                body,
            } => self.emit_for(init.as_deref(), cond.as_ref(), incr.as_ref(), body),
            Stmt::Switch { selector, body } => self.emit_switch(selector, body),
            Stmt::Case { .. } | Stmt::Default { .. } => {
                // Labels are only meaningful inside a switch body, where
                // emit_switch consumes them directly.
                tracing::debug!("skipping case label outside a switch body");
            }
            Stmt::Decl(decls) => self.emit_decl_stmt(decls),
            Stmt::Return(value) => self.emit_return(value.as_ref()),
            Stmt::Empty => {}
            Stmt::Expr(expr) => self.emit_expr_stmt(expr),
        }
    }

    /// Emit one statement followed by a newline, skipping no-ops and
    /// statements that lowered to nothing.
    pub(super) fn emit_stmt_line(&mut self, stmt: &Stmt) {
        if matches!(stmt, Stmt::Empty) {
            return;
        }
        let before = self.writer.len();
        self.emit_stmt(stmt);
        if self.writer.len() > before && !self.writer.ends_with_newline() {
            self.write_line();
        }
    }

    /// Block body: children each on their own line, one level deeper.
    pub(super) fn emit_block(&mut self, stmts: &[Stmt]) {
        self.writer.increase_indent();
        for stmt in stmts {
            self.emit_stmt_line(stmt);
        }
        self.writer.decrease_indent();
    }

    /// A nested scope: a block body, or a single statement indented one
    /// level (`if (x) return;` without braces).
    pub(super) fn emit_scope(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Block(stmts) => self.emit_block(stmts),
            other => {
                self.writer.increase_indent();
                self.emit_stmt_line(other);
                self.writer.decrease_indent();
            }
        }
    }

    fn emit_if(&mut self, cond: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) {
        self.write_indented("if ");
        self.emit_condition(cond);
        self.write(" then");
        self.write_line();
        self.emit_scope(then_branch);

        // `else if` chains flatten to `elseif` so the whole chain closes
        // with a single `end`.
        let mut else_branch = else_branch;
        while let Some(stmt) = else_branch {
            if let Stmt::If {
                cond,
                then_branch,
                else_branch: next,
            } = stmt
            {
                self.write_indented("elseif ");
                self.emit_condition(cond);
                self.write(" then");
                self.write_line();
                self.emit_scope(then_branch);
                else_branch = next.as_deref();
            } else {
                self.write_indented("else");
                self.write_line();
                self.emit_scope(stmt);
                else_branch = None;
            }
        }
        self.write_indented("end");
    }

    fn emit_while(&mut self, cond: &Expr, body: &Stmt) {
        self.write_indented("while ");
        self.emit_condition(cond);
        self.write(" do");
        self.write_line();
        self.emit_scope(body);
        self.write_indented("end");
    }

    /// C's do/while runs while the condition holds; Lua's repeat/until
    /// runs until it holds. Negating the condition bridges the two.
    fn emit_do_while(&mut self, body: &Stmt, cond: &Expr) {
        self.write_indented("repeat");
        self.write_line();
        self.emit_scope(body);
        self.write_indented("until not (");
        self.emit_condition(cond);
        self.write(")");
    }

    /// `for` lowers to `while`: init before the loop, increment as the
    /// last statement of the body. Lua's loop primitive only has the one
    /// boolean slot.
    fn emit_for(
        &mut self,
        init: Option<&Stmt>,
        cond: Option<&Expr>,
        incr: Option<&Expr>,
        body: &Stmt,
    ) {
        if let Some(init) = init {
            self.emit_stmt_line(init);
        }
        self.write_indented("while ");
        match cond {
            Some(cond) => self.emit_condition(cond),
            None => self.write("true"),
        }
        self.write(" do");
        self.write_line();

        self.writer.increase_indent();
        match body {
            Stmt::Block(stmts) => {
                for stmt in stmts {
                    self.emit_stmt_line(stmt);
                }
            }
            other => self.emit_stmt_line(other),
        }
        if let Some(incr) = incr {
            if self.expr_is_unsupported(incr) {
                tracing::debug!("skipping unsupported loop increment");
            } else {
                self.write_indent();
                self.emit_expr(incr);
                self.write_line();
            }
        }
        self.writer.decrease_indent();
        self.write_indented("end");
    }

    /// Switch lowers to a dispatch table of closures keyed by label.
    ///
    /// Chained empty `case` labels alias one shared closure, reproducing
    /// C fallthrough for the no-intervening-statement shape. A case that
    /// has its own statements and then falls into the next label is not
    /// representable here; its body stands alone.
    fn emit_switch(&mut self, selector: &Expr, body: &Stmt) {
        self.switch_counter += 1;
        let table = format!("__switch{}", self.switch_counter);

        self.write_indented("local ");
        self.write(&table);
        self.write(" = {}");
        self.write_line();

        let stmts = match body {
            Stmt::Block(stmts) => stmts.as_slice(),
            other => std::slice::from_ref(other),
        };

        let mut default_body: Option<&Stmt> = None;
        for stmt in stmts {
            match stmt {
                Stmt::Case { label, body } => {
                    if let Some(found) = self.emit_case(&table, label, body) {
                        default_body = Some(found);
                    }
                }
                Stmt::Default { body } => match body.as_ref() {
                    // `default: case 5: ...` puts case labels under the
                    // default; both share the chain's handler.
                    Stmt::Case {
                        label,
                        body: inner,
                    } => {
                        self.emit_case(&table, label, inner);
                        default_body = Some(case_chain_body(body));
                    }
                    handler => default_body = Some(handler),
                },
                Stmt::Empty => {}
                _ => {
                    tracing::debug!("skipping statement between case labels in a switch body");
                }
            }
        }

        self.write_indented("if ");
        self.write(&table);
        self.write("[");
        self.emit_expr(selector);
        self.write("] ~= nil then");
        self.write_line();
        self.writer.increase_indent();
        self.write_indent();
        self.write(&table);
        self.write("[");
        self.emit_expr(selector);
        self.write("]()");
        self.write_line();
        self.writer.decrease_indent();
        if let Some(body) = default_body {
            self.write_indented("else");
            self.write_line();
            self.emit_scope(body);
        }
        self.write_indented("end");
    }

    /// Populate the dispatch table for one case label. Returns the
    /// default handler when a `default` is grouped into the chain.
    ///
    /// A chain of empty labels nests in the AST; recursing into the inner
    /// label first means its closure exists before the outer labels alias
    /// it (`t[outer] = t[inner]`), so all labels in the chain share one
    /// closure rather than three copies of the body. A `default` inside
    /// the chain (`case 2: default: body`) shares that same handler and
    /// is reported back so the dispatch's else branch runs it too.
    fn emit_case<'a>(&mut self, table: &str, label: &Expr, body: &'a Stmt) -> Option<&'a Stmt> {
        match body {
            Stmt::Case {
                label: inner_label,
                body: inner_body,
            } => {
                let default = self.emit_case(table, inner_label, inner_body);
                self.emit_case_alias(table, label, inner_label);
                default
            }
            Stmt::Default { body: inner } => {
                match inner.as_ref() {
                    Stmt::Case {
                        label: inner_label,
                        body: inner_body,
                    } => {
                        self.emit_case(table, inner_label, inner_body);
                        self.emit_case_alias(table, label, inner_label);
                    }
                    handler => self.emit_case_closure(table, label, handler),
                }
                Some(case_chain_body(inner))
            }
            handler => {
                self.emit_case_closure(table, label, handler);
                None
            }
        }
    }

    /// `t[outer] = t[inner]`.
    fn emit_case_alias(&mut self, table: &str, label: &Expr, inner_label: &Expr) {
        self.write_indented(table);
        self.write("[");
        self.emit_expr(label);
        self.write("] = ");
        self.write(table);
        self.write("[");
        self.emit_expr(inner_label);
        self.write("]");
        self.write_line();
    }

    /// `t[label] = function() ... end`.
    fn emit_case_closure(&mut self, table: &str, label: &Expr, body: &Stmt) {
        self.write_indented(table);
        self.write("[");
        self.emit_expr(label);
        self.write("] = function()");
        self.write_line();
        self.emit_scope(body);
        self.write_indented("end");
        self.write_line();
    }

    /// One `local` per declaration statement, with a single parallel
    /// initializer list when any declared variable has one; uninitialized
    /// slots pad with `nil` to keep names and values aligned.
    fn emit_decl_stmt(&mut self, decls: &[VarDecl]) {
        let named: Vec<&VarDecl> = decls.iter().filter(|d| !d.name.is_empty()).collect();
        if named.is_empty() {
            return;
        }

        self.write_indented("local ");
        for (i, decl) in named.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&decl.name);
        }

        if named.iter().any(|d| d.init.is_some()) {
            self.write(" = ");
            for (i, decl) in named.iter().enumerate() {
                if i > 0 {
                    self.write(", ");
                }
                match &decl.init {
                    Some(init) => self.emit_expr(init),
                    None => self.write("nil"),
                }
            }
        }
    }

    fn emit_return(&mut self, value: Option<&Expr>) {
        self.write_indented("return");
        if let Some(value) = value {
            self.write(" ");
            self.emit_expr(value);
        }
    }

    fn emit_expr_stmt(&mut self, expr: &Expr) {
        if self.expr_is_unsupported(expr) {
            tracing::debug!("skipping unsupported expression statement");
            return;
        }
        self.write_indent();
        self.emit_expr(expr);
    }
}

/// Innermost handler of a label chain: peels `case` and `default`
/// wrappers until the shared statements are reached.
fn case_chain_body(stmt: &Stmt) -> &Stmt {
    match stmt {
        Stmt::Case { body, .. } | Stmt::Default { body } => case_chain_body(body),
        other => other,
    }
}
