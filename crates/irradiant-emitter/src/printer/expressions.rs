//! Expression lowering.
//!
//! Each method renders one expression node as a self-contained Lua
//! expression, recursing into children in strict left-to-right order so
//! the emitted program preserves the source's side-effect ordering.

use irradiant_ast::{BinaryOp, Expr, UnaryOp};

use super::Printer;

impl Printer {
    pub(crate) fn emit_expr(&mut self, expr: &Expr) {
        if self.in_condition {
            match expr {
                // The flag survives parentheses around the condition.
                Expr::Paren(_) => {}
                // First assignment found in condition position gets the
                // closure wrap; the flag is consumed so assignments
                // nested inside the wrapped closure are left alone.
                Expr::Binary { op, .. } if op.is_assignment() => {
                    self.in_condition = false;
                    self.emit_condition_assignment(expr);
                    return;
                }
                _ => self.in_condition = false,
            }
        }

        match expr {
            Expr::Call { callee, args } => self.emit_call(callee, args),
            Expr::Binary { op, left, right } => self.emit_binary(*op, left, right),
            Expr::Unary { op, operand } => self.emit_unary(*op, operand),
            Expr::Subscript { base, index } => self.emit_subscript(base, index),
            Expr::Conditional {
                cond,
                then_value,
                else_value,
            } => self.emit_conditional(cond, then_value, else_value),
            Expr::Paren(inner) => {
                self.write("(");
                self.emit_expr(inner);
                self.write(")");
            }
            Expr::InitList(elements) => self.emit_init_list(elements),
            Expr::Ident { name, .. } => self.emit_identifier(name),
            Expr::StringLit(value) => self.emit_string_literal(value),
            Expr::IntLit(text) => self.emit_int_literal(text),
            Expr::FloatLit(value) => self.emit_float_literal(*value),
            Expr::CharLit(value) => self.emit_char_literal(*value),
        }
    }

    /// Emit an expression in condition position (`if`/`while`/`for`
    /// conditions and a `do`'s trailing condition). An assignment found
    /// here is wrapped in a closure, because Lua assignments are
    /// statements with no value.
    pub(crate) fn emit_condition(&mut self, expr: &Expr) {
        self.in_condition = true;
        self.emit_expr(expr);
        self.in_condition = false;
    }

    fn emit_call(&mut self, callee: &Expr, args: &[Expr]) {
        self.emit_expr(callee);
        self.write("(");
        let mut first = true;
        for arg in args {
            if !first {
                self.write(", ");
            }
            self.emit_expr(arg);
            first = false;
        }
        self.write(")");
    }

    fn emit_binary(&mut self, op: BinaryOp, left: &Expr, right: &Expr) {
        // Bitwise operators have no Lua spelling; lower to the bit
        // support module. The compound forms re-emit the destination as
        // the assignment target — safe only for side-effect-free
        // destinations, which is all the frontend hands us today.
        if let Some(func) = bit_call(op) {
            if op.is_assignment() {
                self.warn_effectful_destination(left);
                self.emit_expr(left);
                self.write(" = ");
            }
            self.write(func);
            self.write("(");
            self.emit_expr(left);
            self.write(", ");
            self.emit_expr(right);
            self.write(")");
            return;
        }

        if op == BinaryOp::Comma {
            self.emit_expr(left);
            self.write(", ");
            self.emit_expr(right);
            return;
        }

        // `a += b` becomes `a = a + b`.
        if let Some(base) = op.compound_base() {
            self.warn_effectful_destination(left);
            self.emit_expr(left);
            self.write(" = ");
            self.emit_expr(left);
            self.write(" ");
            self.write(operator_text(base));
            self.write(" ");
            self.emit_expr(right);
            return;
        }

        self.emit_expr(left);
        self.write(" ");
        self.write(operator_text(op));
        self.write(" ");
        self.emit_expr(right);
    }

    fn emit_unary(&mut self, op: UnaryOp, operand: &Expr) {
        match op {
            UnaryOp::Neg => {
                self.write("-");
                self.emit_expr(operand);
            }
            UnaryOp::LogicalNot => {
                self.write("not ");
                self.emit_expr(operand);
            }
            UnaryOp::BitNot => {
                self.write("bit.bnot(");
                self.emit_expr(operand);
                self.write(")");
            }
            UnaryOp::PreInc | UnaryOp::PreDec => {
                self.emit_prefix_step(operand, step_token(op));
            }
            UnaryOp::PostInc | UnaryOp::PostDec => {
                self.emit_postfix_step(operand, step_token(op));
            }
            UnaryOp::Deref | UnaryOp::AddrOf => {
                // Lua functions are first-class values, so taking or
                // dereferencing a function pointer collapses to the bare
                // name. Anything else has no lowering.
                match self.find_function_ident(operand) {
                    Some(name) => self.emit_identifier(name),
                    None => {
                        tracing::debug!("skipping unary {:?} of a non-function operand", op);
                    }
                }
            }
        }
    }

    /// `a[i]` → `a[(i)+1]`. Lua tables are 1-based; the parentheses keep
    /// low-precedence index expressions from binding against the `+1`.
    fn emit_subscript(&mut self, base: &Expr, index: &Expr) {
        self.emit_expr(base);
        self.write("[(");
        self.emit_expr(index);
        self.write(")+1]");
    }

    /// `c ? a : b` → `(function() if c then return a else return b end end)()`.
    fn emit_conditional(&mut self, cond: &Expr, then_value: &Expr, else_value: &Expr) {
        self.write("(function() if ");
        self.emit_expr(cond);
        self.write(" then return ");
        self.emit_expr(then_value);
        self.write(" else return ");
        self.emit_expr(else_value);
        self.write(" end end)()");
    }

    fn emit_init_list(&mut self, elements: &[Expr]) {
        self.write("{");
        let mut first = true;
        for element in elements {
            if !first {
                self.write(", ");
            }
            self.emit_expr(element);
            first = false;
        }
        self.write("}");
    }

    /// `++x` → `(function() x = x + 1; return x end)()`.
    fn emit_prefix_step(&mut self, operand: &Expr, token: &str) {
        self.write("(function() ");
        self.emit_expr(operand);
        self.write(" = ");
        self.emit_expr(operand);
        self.write(" ");
        self.write(token);
        self.write(" 1; return ");
        self.emit_expr(operand);
        self.write(" end)()");
    }

    /// `x++` → `(function() local old = x; x = x + 1; return old end)()`.
    /// The temporary captures the pre-step value the surrounding
    /// expression must observe.
    fn emit_postfix_step(&mut self, operand: &Expr, token: &str) {
        self.write("(function() local old = ");
        self.emit_expr(operand);
        self.write("; ");
        self.emit_expr(operand);
        self.write(" = ");
        self.emit_expr(operand);
        self.write(" ");
        self.write(token);
        self.write(" 1; return old end)()");
    }

    /// An assignment in condition position: perform it inside a closure
    /// and return the assigned value. The destination's text is emitted
    /// again as the return value, so it must be side-effect-free.
    fn emit_condition_assignment(&mut self, expr: &Expr) {
        let Expr::Binary { left, .. } = expr else {
            // Callers only route assignments here.
            return;
        };
        self.warn_effectful_destination(left);
        self.write("(function() ");
        self.emit_expr(expr);
        self.write("; return ");
        self.emit_expr(left);
        self.write(" end)()");
    }

    /// Search an operand subtree for an identifier resolved to a
    /// function-typed declaration, looking through parentheses, nested
    /// unary operators, and subscripts.
    fn find_function_ident<'e>(&self, expr: &'e Expr) -> Option<&'e str> {
        match expr {
            Expr::Ident { name, is_function } => {
                if *is_function || self.known_functions.contains(name) {
                    Some(name)
                } else {
                    None
                }
            }
            Expr::Paren(inner) => self.find_function_ident(inner),
            Expr::Unary { operand, .. } => self.find_function_ident(operand),
            Expr::Subscript { base, .. } => self.find_function_ident(base),
            _ => None,
        }
    }

    /// An expression that would emit no text at all: a deref/addr-of
    /// whose operand is not a function designator. Statement emission
    /// checks this so it can skip the whole line.
    pub(super) fn expr_is_unsupported(&self, expr: &Expr) -> bool {
        match expr {
            Expr::Unary {
                op: UnaryOp::Deref | UnaryOp::AddrOf,
                operand,
            } => self.find_function_ident(operand).is_none(),
            _ => false,
        }
    }

    /// Compound and condition-position assignments re-emit the
    /// destination text; flag the risky case where the destination is
    /// more than a plain name.
    fn warn_effectful_destination(&self, dest: &Expr) {
        let mut dest = dest;
        while let Expr::Paren(inner) = dest {
            dest = inner;
        }
        if !matches!(dest, Expr::Ident { .. }) {
            tracing::debug!(
                "assignment destination is not a plain identifier; \
                 its text is emitted twice and must be side-effect-free"
            );
        }
    }
}

/// Lua spelling for the directly mappable binary operators.
fn operator_text(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Rem => "%",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "~=",
        BinaryOp::LogicalAnd => "and",
        BinaryOp::LogicalOr => "or",
        BinaryOp::Assign => "=",
        // Comma, bitwise, and compound forms are rewritten before the
        // operator token is needed; reaching here is an emitter bug.
        other => unreachable!("operator {other:?} has no direct Lua spelling"),
    }
}

/// Bit support-module routine for a bitwise operator or its
/// compound-assignment form.
fn bit_call(op: BinaryOp) -> Option<&'static str> {
    match op {
        BinaryOp::BitAnd | BinaryOp::BitAndAssign => Some("bit.band"),
        BinaryOp::BitOr | BinaryOp::BitOrAssign => Some("bit.bor"),
        BinaryOp::BitXor | BinaryOp::BitXorAssign => Some("bit.bxor"),
        BinaryOp::Shl | BinaryOp::ShlAssign => Some("bit.lshift"),
        BinaryOp::Shr | BinaryOp::ShrAssign => Some("bit.rshift"),
        _ => None,
    }
}

/// `+` for increments, `-` for decrements.
fn step_token(op: UnaryOp) -> &'static str {
    match op {
        UnaryOp::PreDec | UnaryOp::PostDec => "-",
        _ => "+",
    }
}

#[cfg(test)]
mod tests {
    use irradiant_ast::BinaryOp;

    use super::operator_text;

    #[test]
    #[should_panic(expected = "no direct Lua spelling")]
    fn rewritten_operators_never_get_a_direct_token() {
        operator_text(BinaryOp::Comma);
    }
}
