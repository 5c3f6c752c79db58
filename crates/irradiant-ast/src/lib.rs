//! Typed syntax tree for the irradiant C→Lua transpiler.
//!
//! This crate is the contract between the external clang-based frontend and
//! the emitter: the frontend parses and type-resolves a C translation unit,
//! then hands the emitter a fully resolved tree built from these types
//! (serialized as JSON across the process boundary). The emitter never
//! mutates a node; every type here is plain immutable data.
//!
//! The node set deliberately covers only the C subset the transpiler
//! lowers. Anything the frontend cannot express with these variants is
//! dropped before it reaches the emitter.

use serde::{Deserialize, Serialize};

// =============================================================================
// Translation unit
// =============================================================================

/// One parsed-and-resolved C translation unit.
///
/// `includes` carries the preprocessor's inclusion directives in source
/// order; they are emitted before any declaration. `items` carries every
/// top-level declaration the frontend saw, including ones pulled in from
/// headers — the emitter only renders items tagged as main-file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationUnit {
    #[serde(default)]
    pub includes: Vec<IncludeDirective>,
    pub items: Vec<Item>,
}

/// A top-level declaration plus its source-file tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// True when the declaration's location is the primary input file.
    /// Declarations from included headers carry `false` and are skipped.
    #[serde(default)]
    pub in_main_file: bool,
    pub decl: Decl,
}

/// An `#include` directive observed by the frontend's preprocessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeDirective {
    /// The written name, e.g. `stdio.h`.
    pub name: String,
    /// True for `#include <...>`, false for `#include "..."`.
    #[serde(default)]
    pub angled: bool,
    /// Only directives located in the primary input file are honored.
    #[serde(default)]
    pub in_main_file: bool,
}

// =============================================================================
// Declarations
// =============================================================================

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Function(FunctionDecl),
    Variable(VarDecl),
}

/// Function declaration or definition.
///
/// Prototypes carry `body: None` and are skipped by the emitter; the
/// defining declaration carries the lowered body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDecl {
    pub name: String,
    /// Parameter names in declaration order. Types are already resolved
    /// and irrelevant to emission.
    #[serde(default)]
    pub params: Vec<String>,
    pub body: Option<Stmt>,
    /// True for the program entry point (C `main`).
    #[serde(default)]
    pub is_entry_point: bool,
}

/// A single declared variable.
///
/// `name` may be empty for anonymous declarations (e.g. a bare struct
/// declaration); those are skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VarDecl {
    pub name: String,
    pub init: Option<Expr>,
}

// =============================================================================
// Statements
// =============================================================================

/// Statement node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// `{ ... }` compound statement.
    Block(Vec<Stmt>),

    /// `if (cond) then-branch else else-branch`.
    If {
        cond: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// `while (cond) body`.
    While { cond: Expr, body: Box<Stmt> },

    /// `do body while (cond);`.
    DoWhile { body: Box<Stmt>, cond: Expr },

    /// `for (init; cond; incr) body` — every slot optional.
    For {
        init: Option<Box<Stmt>>,
        cond: Option<Expr>,
        incr: Option<Expr>,
        body: Box<Stmt>,
    },

    /// `switch (selector) body`.
    Switch { selector: Expr, body: Box<Stmt> },

    /// `case label:` with its grouped body. A chain of empty fallthrough
    /// labels (`case 0: case 4: case 1: ...`) nests: the outer case's
    /// body is the next `Case`, and the innermost case holds the shared
    /// statements.
    Case { label: Expr, body: Box<Stmt> },

    /// `default:` with its grouped body.
    Default { body: Box<Stmt> },

    /// One declaration statement covering one or more variables,
    /// e.g. `int a = 1, b, c = 3;`.
    Decl(Vec<VarDecl>),

    /// `return;` / `return expr;`.
    Return(Option<Expr>),

    /// `;` — emitted as nothing.
    Empty,

    /// Expression statement.
    Expr(Expr),
}

// =============================================================================
// Expressions
// =============================================================================

/// Expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// `callee(arg, ...)`.
    Call { callee: Box<Expr>, args: Vec<Expr> },

    /// `left op right`, including assignment and compound assignment.
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    /// `op operand` / `operand op` for increments.
    Unary { op: UnaryOp, operand: Box<Expr> },

    /// `base[index]` (0-based in the source language).
    Subscript { base: Box<Expr>, index: Box<Expr> },

    /// `cond ? then_value : else_value`.
    Conditional {
        cond: Box<Expr>,
        then_value: Box<Expr>,
        else_value: Box<Expr>,
    },

    /// `(inner)`.
    Paren(Box<Expr>),

    /// `{ e1, e2, ... }` aggregate initializer.
    InitList(Vec<Expr>),

    /// Reference to a resolved declaration.
    Ident {
        name: String,
        /// True when the referenced declaration has function (or
        /// function-pointer) type; drives the function-pointer lowering.
        #[serde(default)]
        is_function: bool,
    },

    /// String literal, raw bytes as the frontend cooked them.
    StringLit(String),

    /// Integer literal as exact decimal text, sign included. Kept as
    /// text so arbitrary-precision values survive the trip through JSON.
    IntLit(String),

    /// Floating literal.
    FloatLit(f64),

    /// Character literal, e.g. `'a'`.
    CharLit(char),
}

/// Binary operators of the supported C subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    LogicalAnd,
    LogicalOr,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
    ShlAssign,
    ShrAssign,
    Comma,
}

/// Unary operators of the supported C subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `-x`
    Neg,
    /// `!x`
    LogicalNot,
    /// `~x`
    BitNot,
    /// `*x` — supported only for function pointers.
    Deref,
    /// `&x` — supported only for function designators.
    AddrOf,
    /// `++x`
    PreInc,
    /// `--x`
    PreDec,
    /// `x++`
    PostInc,
    /// `x--`
    PostDec,
}

impl BinaryOp {
    /// True for `=` and every compound-assignment operator.
    pub fn is_assignment(self) -> bool {
        self == BinaryOp::Assign || self.compound_base().is_some()
    }

    /// For a compound-assignment operator, the underlying binary operator.
    pub fn compound_base(self) -> Option<BinaryOp> {
        match self {
            BinaryOp::AddAssign => Some(BinaryOp::Add),
            BinaryOp::SubAssign => Some(BinaryOp::Sub),
            BinaryOp::MulAssign => Some(BinaryOp::Mul),
            BinaryOp::DivAssign => Some(BinaryOp::Div),
            BinaryOp::RemAssign => Some(BinaryOp::Rem),
            BinaryOp::BitAndAssign => Some(BinaryOp::BitAnd),
            BinaryOp::BitOrAssign => Some(BinaryOp::BitOr),
            BinaryOp::BitXorAssign => Some(BinaryOp::BitXor),
            BinaryOp::ShlAssign => Some(BinaryOp::Shl),
            BinaryOp::ShrAssign => Some(BinaryOp::Shr),
            _ => None,
        }
    }
}

// =============================================================================
// Constructor helpers
// =============================================================================
//
// Shorthand constructors so trees can be written out readably in tests
// and in frontend adapters.

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident {
            name: name.into(),
            is_function: false,
        }
    }

    /// Identifier reference resolved to a function-typed declaration.
    pub fn func_ident(name: impl Into<String>) -> Self {
        Expr::Ident {
            name: name.into(),
            is_function: true,
        }
    }

    pub fn int(text: impl Into<String>) -> Self {
        Expr::IntLit(text.into())
    }

    pub fn float(value: f64) -> Self {
        Expr::FloatLit(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Expr::StringLit(text.into())
    }

    pub fn char_lit(value: char) -> Self {
        Expr::CharLit(value)
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn assign(left: Expr, right: Expr) -> Self {
        Expr::binary(left, BinaryOp::Assign, right)
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    pub fn subscript(base: Expr, index: Expr) -> Self {
        Expr::Subscript {
            base: Box::new(base),
            index: Box::new(index),
        }
    }

    pub fn conditional(cond: Expr, then_value: Expr, else_value: Expr) -> Self {
        Expr::Conditional {
            cond: Box::new(cond),
            then_value: Box::new(then_value),
            else_value: Box::new(else_value),
        }
    }

    pub fn paren(inner: Expr) -> Self {
        Expr::Paren(Box::new(inner))
    }
}

impl Stmt {
    pub fn block(stmts: Vec<Stmt>) -> Self {
        Stmt::Block(stmts)
    }

    pub fn expr(expr: Expr) -> Self {
        Stmt::Expr(expr)
    }

    pub fn ret(value: Option<Expr>) -> Self {
        Stmt::Return(value)
    }

    pub fn if_then(cond: Expr, then_branch: Stmt) -> Self {
        Stmt::If {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: None,
        }
    }

    pub fn if_else(cond: Expr, then_branch: Stmt, else_branch: Stmt) -> Self {
        Stmt::If {
            cond,
            then_branch: Box::new(then_branch),
            else_branch: Some(Box::new(else_branch)),
        }
    }

    pub fn while_loop(cond: Expr, body: Stmt) -> Self {
        Stmt::While {
            cond,
            body: Box::new(body),
        }
    }

    pub fn do_while(body: Stmt, cond: Expr) -> Self {
        Stmt::DoWhile {
            body: Box::new(body),
            cond,
        }
    }

    pub fn case(label: Expr, body: Stmt) -> Self {
        Stmt::Case {
            label,
            body: Box::new(body),
        }
    }

    pub fn default_case(body: Stmt) -> Self {
        Stmt::Default {
            body: Box::new(body),
        }
    }

    pub fn decl_one(name: impl Into<String>, init: Option<Expr>) -> Self {
        Stmt::Decl(vec![VarDecl {
            name: name.into(),
            init,
        }])
    }
}

impl FunctionDecl {
    pub fn new(name: impl Into<String>, params: Vec<&str>, body: Stmt) -> Self {
        FunctionDecl {
            name: name.into(),
            params: params.into_iter().map(String::from).collect(),
            body: Some(body),
            is_entry_point: false,
        }
    }
}

impl Item {
    /// A main-file item, the common case in tests and adapters.
    pub fn main_file(decl: Decl) -> Self {
        Item {
            in_main_file: true,
            decl,
        }
    }
}
