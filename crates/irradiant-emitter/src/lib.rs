//! Lowering and code emission for the irradiant C→Lua transpiler.
//!
//! The emitter takes a fully resolved [`irradiant_ast::TranslationUnit`]
//! and streams out equivalent Lua source, one declaration at a time, in a
//! single recursive-descent pass. There is no intermediate Lua AST — the
//! tree shape drives emission directly and output is append-only.
//!
//! The interesting work is closing the gaps between the two languages:
//!
//! - array indexing moves from 0-based to 1-based (`a[i]` → `a[(i)+1]`)
//! - bitwise operators lower to `bit.*` calls from the always-loaded
//!   support module
//! - increment/decrement and the ternary operator lower to
//!   immediately-invoked closures so their value and ordering survive
//! - `for` loops lower to `while`, `do`/`while` to `repeat`/`until`
//! - `switch` lowers to a dispatch table of closures, aliasing chained
//!   empty `case` labels so fallthrough stays fallthrough
//!
//! Unsupported constructs are skipped rather than rejected: emission is
//! best-effort by design, and every skip is logged at `debug` level.

mod options;
mod printer;
mod writer;

pub use options::EmitOptions;
pub use printer::Printer;
pub use writer::SourceWriter;
