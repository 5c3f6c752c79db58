//! Expression lowering tests: literal rendering, operator mapping, and
//! the closure rewrites for increments, ternaries, and condition-position
//! assignments.

use irradiant_ast::{BinaryOp, Expr, Stmt, UnaryOp};
use irradiant_emitter::Printer;

fn emit(expr: &Expr) -> String {
    Printer::expr_to_string(expr)
}

#[test]
fn identifiers_render_verbatim() {
    assert_eq!(emit(&Expr::ident("foo")), "foo");
    assert_eq!(emit(&Expr::ident("argc")), "argc");
}

#[test]
fn rendering_is_idempotent() {
    let expr = Expr::binary(Expr::ident("a"), BinaryOp::Add, Expr::int("1"));
    assert_eq!(emit(&expr), emit(&expr));
}

#[test]
fn string_literals_are_quoted_and_escaped() {
    assert_eq!(emit(&Expr::string("hello")), "\"hello\"");
    assert_eq!(emit(&Expr::string("line\n")), "\"line\\n\"");
    assert_eq!(emit(&Expr::string("a\\b\"c/d")), "\"a\\\\b\\\"c\\/d\"");
    assert_eq!(emit(&Expr::string("\u{8}\u{c}\r\t")), "\"\\b\\f\\r\\t\"");
}

#[test]
fn integer_literals_keep_exact_text_and_sign() {
    assert_eq!(emit(&Expr::int("0")), "0");
    assert_eq!(emit(&Expr::int("-42")), "-42");
    // Wider than any machine integer; passes through untouched.
    assert_eq!(
        emit(&Expr::int("340282366920938463463374607431768211455")),
        "340282366920938463463374607431768211455"
    );
}

#[test]
fn float_literals_render_as_decimal() {
    assert_eq!(emit(&Expr::float(2.5)), "2.5");
    assert_eq!(emit(&Expr::float(-0.125)), "-0.125");
}

#[test]
fn char_literals_recover_their_ordinal_from_a_string() {
    assert_eq!(emit(&Expr::char_lit('a')), "string.byte(\"a\")");
    assert_eq!(emit(&Expr::char_lit('\n')), "string.byte(\"\\n\")");
    assert_eq!(emit(&Expr::char_lit('"')), "string.byte(\"\\\"\")");
}

#[test]
fn subscript_adds_one_with_index_parenthesized() {
    let simple = Expr::subscript(Expr::ident("a"), Expr::int("0"));
    assert_eq!(emit(&simple), "a[(0)+1]");

    // The parentheses matter once the index has lower precedence than +.
    let offset = Expr::subscript(
        Expr::ident("argv"),
        Expr::binary(Expr::ident("i"), BinaryOp::Sub, Expr::int("1")),
    );
    assert_eq!(emit(&offset), "argv[(i - 1)+1]");
}

#[test]
fn comparison_and_logical_operators_map_to_lua_spellings() {
    let a = || Expr::ident("a");
    let b = || Expr::ident("b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::Eq, b())), "a == b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::NotEq, b())), "a ~= b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::LogicalAnd, b())), "a and b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::LogicalOr, b())), "a or b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::Rem, b())), "a % b");
    assert_eq!(emit(&Expr::binary(a(), BinaryOp::LtEq, b())), "a <= b");
}

#[test]
fn unary_minus_and_not_map_natively() {
    assert_eq!(emit(&Expr::unary(UnaryOp::Neg, Expr::ident("x"))), "-x");
    assert_eq!(
        emit(&Expr::unary(UnaryOp::LogicalNot, Expr::ident("ok"))),
        "not ok"
    );
}

#[test]
fn bitwise_operators_lower_to_bit_calls() {
    let x = || Expr::ident("x");
    let y = || Expr::ident("y");
    assert_eq!(emit(&Expr::binary(x(), BinaryOp::BitAnd, y())), "bit.band(x, y)");
    assert_eq!(emit(&Expr::binary(x(), BinaryOp::BitOr, y())), "bit.bor(x, y)");
    assert_eq!(emit(&Expr::binary(x(), BinaryOp::BitXor, y())), "bit.bxor(x, y)");
    assert_eq!(emit(&Expr::binary(x(), BinaryOp::Shl, y())), "bit.lshift(x, y)");
    assert_eq!(emit(&Expr::binary(x(), BinaryOp::Shr, y())), "bit.rshift(x, y)");
    assert_eq!(emit(&Expr::unary(UnaryOp::BitNot, x())), "bit.bnot(x)");
}

#[test]
fn bitwise_compound_assignment_reassigns_through_the_call() {
    let expr = Expr::binary(Expr::ident("x"), BinaryOp::BitAndAssign, Expr::ident("mask"));
    assert_eq!(emit(&expr), "x = bit.band(x, mask)");

    let shift = Expr::binary(Expr::ident("x"), BinaryOp::ShlAssign, Expr::int("2"));
    assert_eq!(emit(&shift), "x = bit.lshift(x, 2)");
}

#[test]
fn arithmetic_compound_assignment_expands_to_read_modify_write() {
    let expr = Expr::binary(Expr::ident("i"), BinaryOp::AddAssign, Expr::int("1"));
    assert_eq!(emit(&expr), "i = i + 1");

    let expr = Expr::binary(Expr::ident("total"), BinaryOp::MulAssign, Expr::ident("n"));
    assert_eq!(emit(&expr), "total = total * n");
}

#[test]
fn prefix_step_returns_the_new_value() {
    let expr = Expr::unary(UnaryOp::PreInc, Expr::ident("x"));
    assert_eq!(emit(&expr), "(function() x = x + 1; return x end)()");

    let expr = Expr::unary(UnaryOp::PreDec, Expr::ident("x"));
    assert_eq!(emit(&expr), "(function() x = x - 1; return x end)()");
}

#[test]
fn postfix_step_returns_the_old_value_via_a_temporary() {
    let expr = Expr::unary(UnaryOp::PostInc, Expr::ident("x"));
    assert_eq!(
        emit(&expr),
        "(function() local old = x; x = x + 1; return old end)()"
    );

    let expr = Expr::unary(UnaryOp::PostDec, Expr::ident("n"));
    assert_eq!(
        emit(&expr),
        "(function() local old = n; n = n - 1; return old end)()"
    );
}

#[test]
fn ternary_lowers_to_an_iife() {
    let expr = Expr::conditional(Expr::ident("ok"), Expr::int("1"), Expr::int("2"));
    assert_eq!(
        emit(&expr),
        "(function() if ok then return 1 else return 2 end end)()"
    );
}

#[test]
fn comma_sequences_left_to_right() {
    let expr = Expr::binary(Expr::ident("a"), BinaryOp::Comma, Expr::ident("b"));
    assert_eq!(emit(&expr), "a, b");
}

#[test]
fn calls_render_callee_then_arguments() {
    let call = Expr::call(Expr::ident("printf"), vec![
        Expr::string("%d\n"),
        Expr::ident("n"),
    ]);
    assert_eq!(emit(&call), "printf(\"%d\\n\", n)");

    let empty = Expr::call(Expr::ident("f"), vec![]);
    assert_eq!(emit(&empty), "f()");
}

#[test]
fn operands_appear_in_evaluation_order() {
    let expr = Expr::binary(
        Expr::call(Expr::ident("first"), vec![]),
        BinaryOp::Add,
        Expr::call(Expr::ident("second"), vec![]),
    );
    let out = emit(&expr);
    assert!(out.find("first").unwrap() < out.find("second").unwrap());

    let call = Expr::call(Expr::ident("callee"), vec![Expr::ident("arg0"), Expr::ident("arg1")]);
    let out = emit(&call);
    assert!(out.find("callee").unwrap() < out.find("arg0").unwrap());
    assert!(out.find("arg0").unwrap() < out.find("arg1").unwrap());
}

#[test]
fn init_lists_render_as_table_constructors() {
    let list = Expr::InitList(vec![Expr::int("1"), Expr::int("2"), Expr::int("3")]);
    assert_eq!(emit(&list), "{1, 2, 3}");
}

#[test]
fn parens_are_preserved() {
    let expr = Expr::paren(Expr::binary(Expr::ident("a"), BinaryOp::Add, Expr::ident("b")));
    assert_eq!(emit(&expr), "(a + b)");
}

#[test]
fn deref_of_a_function_identifier_collapses_to_the_name() {
    let expr = Expr::unary(UnaryOp::Deref, Expr::func_ident("example"));
    assert_eq!(emit(&expr), "example");

    // `(*f)()` — the search looks through parentheses.
    let call = Expr::call(
        Expr::paren(Expr::unary(UnaryOp::Deref, Expr::func_ident("f"))),
        vec![],
    );
    assert_eq!(emit(&call), "(f)()");
}

#[test]
fn address_of_a_function_identifier_collapses_to_the_name() {
    let expr = Expr::unary(UnaryOp::AddrOf, Expr::func_ident("handler"));
    assert_eq!(emit(&expr), "handler");
}

#[test]
fn deref_of_anything_else_emits_nothing() {
    let stmt = Stmt::expr(Expr::unary(UnaryOp::Deref, Expr::ident("p")));
    assert_eq!(Printer::stmt_to_string(&stmt), "");
}
