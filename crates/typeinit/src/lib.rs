//! Memberwise initializer synthesis for annotated type declarations.
//!
//! ## Crate layout
//! - `core`: the parser-agnostic expansion engine (classification, field
//!   extraction, signature/body synthesis, diagnostics).
//! - [`TypeInit`]: the derive adapter that runs the engine over Rust types
//!   and emits an inherent `new` constructor.

pub use typeinit_core as core;
pub use typeinit_derive::TypeInit;

pub use typeinit_core::{Diagnostic, Expansion, GeneratedInit, Severity, expand};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use typeinit_core::prelude::*;
    pub use typeinit_derive::TypeInit;
}
