use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the irradiant binary.
///
/// The heavy lifting — parsing and type-resolving the C source — happens
/// in the external clang-based frontend, which writes the translation
/// unit out as JSON. This binary turns that unit into Lua on stdout.
#[derive(Parser, Debug)]
#[command(
    name = "irradiant",
    version,
    about = "C to Lua transpiler (lowering and code emission)"
)]
pub struct CliArgs {
    /// Frontend-produced translation unit (JSON). Reads stdin when omitted.
    pub input: Option<PathBuf>,

    /// Inline referenced modules as text instead of emitting dofile statements.
    #[arg(long = "inline-includes")]
    pub inline_includes: bool,

    /// Directory holding the Lua shims for angle-bracket includes.
    #[arg(long = "shim-dir")]
    pub shim_dir: Option<String>,
}
