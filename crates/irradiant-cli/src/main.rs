use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use irradiant_ast::TranslationUnit;
use irradiant_emitter::{EmitOptions, Printer};

mod args;
mod tracing_config;

use args::CliArgs;

fn main() -> Result<()> {
    tracing_config::init_tracing();
    let args = CliArgs::parse();

    let source = match &args.input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading translation unit from stdin")?;
            buf
        }
    };

    let unit: TranslationUnit =
        serde_json::from_str(&source).context("decoding translation unit")?;
    tracing::debug!(
        items = unit.items.len(),
        includes = unit.includes.len(),
        "translation unit decoded"
    );

    let defaults = EmitOptions::default();
    let options = EmitOptions {
        inline_includes: args.inline_includes,
        shim_dir: args.shim_dir.unwrap_or(defaults.shim_dir),
    };

    print!("{}", Printer::emit_to_string(&unit, options));
    Ok(())
}
