//! Include-directive forwarding tests: module-path rewriting, dofile
//! emission, and the inline mode with its failure recovery.

use irradiant_ast::{IncludeDirective, TranslationUnit};
use irradiant_emitter::{EmitOptions, Printer};

fn unit_with(includes: Vec<IncludeDirective>) -> TranslationUnit {
    TranslationUnit {
        includes,
        items: vec![],
    }
}

fn directive(name: &str, angled: bool) -> IncludeDirective {
    IncludeDirective {
        name: name.to_string(),
        angled,
        in_main_file: true,
    }
}

#[test]
fn quoted_includes_load_siblings() {
    let unit = unit_with(vec![directive("util.h", false)]);
    let out = Printer::emit_to_string(&unit, EmitOptions::default());
    assert_eq!(out, "dofile \"util.lua\"\n");
}

#[test]
fn angled_includes_resolve_into_the_shim_directory() {
    let unit = unit_with(vec![directive("stdio.h", true), directive("stdlib.h", true)]);
    let out = Printer::emit_to_string(&unit, EmitOptions::default());
    assert_eq!(
        out,
        "dofile \"shim/lua/stdio.lua\"\ndofile \"shim/lua/stdlib.lua\"\n"
    );
}

#[test]
fn extensionless_names_still_get_the_lua_suffix() {
    let unit = unit_with(vec![directive("config", false)]);
    let out = Printer::emit_to_string(&unit, EmitOptions::default());
    assert_eq!(out, "dofile \"config.lua\"\n");
}

#[test]
fn includes_outside_the_main_file_are_ignored() {
    let unit = unit_with(vec![IncludeDirective {
        name: "inner.h".to_string(),
        angled: false,
        in_main_file: false,
    }]);
    let out = Printer::emit_to_string(&unit, EmitOptions::default());
    assert_eq!(out, "");
}

#[test]
fn inline_mode_embeds_the_module_text() {
    let dir = tempfile::tempdir().unwrap();
    let module = dir.path().join("stdio.lua");
    std::fs::write(&module, "printf = print\n").unwrap();

    let options = EmitOptions {
        inline_includes: true,
        shim_dir: dir.path().to_string_lossy().into_owned(),
    };
    let unit = unit_with(vec![directive("stdio.h", true)]);
    let out = Printer::emit_to_string(&unit, options);

    let path = module.to_string_lossy();
    assert_eq!(
        out,
        format!("-- begin inline: {path}\nprintf = print\n-- end inline: {path}\n")
    );
}

#[test]
fn inline_mode_adds_a_missing_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("m.lua"), "x = 1").unwrap();

    let options = EmitOptions {
        inline_includes: true,
        shim_dir: dir.path().to_string_lossy().into_owned(),
    };
    let unit = unit_with(vec![directive("m.h", true)]);
    let out = Printer::emit_to_string(&unit, options);
    assert!(out.contains("x = 1\n-- end inline:"));
}

#[test]
fn inline_failure_degrades_to_a_comment() {
    let dir = tempfile::tempdir().unwrap();
    let options = EmitOptions {
        inline_includes: true,
        shim_dir: dir.path().to_string_lossy().into_owned(),
    };
    let unit = unit_with(vec![directive("missing.h", true)]);
    let out = Printer::emit_to_string(&unit, options);

    let path = dir.path().join("missing.lua");
    assert_eq!(
        out,
        format!("-- failed to inline: {}\n", path.to_string_lossy())
    );
}
