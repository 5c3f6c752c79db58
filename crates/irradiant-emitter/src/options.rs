//! Emission options.

/// Options controlling how a translation unit is emitted.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    /// Inline the text of referenced modules instead of emitting a
    /// `dofile` load statement. Defaults to `false` (reference).
    pub inline_includes: bool,
    /// Directory prefixed onto angle-bracket (`#include <...>`) modules,
    /// where the Lua shims for the C standard headers live.
    pub shim_dir: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            inline_includes: false,
            shim_dir: "shim/lua".to_string(),
        }
    }
}
