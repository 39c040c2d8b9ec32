//! Expansion engine for the `TypeInit` initializer-synthesis annotation.
//!
//! ## Crate layout
//! - `node`: the neutral declaration model and the view traits host trees
//!   adapt into.
//! - `diagnostic`: the closed set of user-facing expansion failures.
//! - `expand`: classification, field extraction, signature and body
//!   synthesis, and the top-level [`expand`] entry point.
//!
//! The engine is parser-agnostic: a host hands it an ordered member list
//! through [`DeclarationView`] and receives back either one generated
//! initializer or one diagnostic. It never parses source text, never
//! resolves types, and holds no state between calls.

pub mod diagnostic;
pub mod expand;
pub mod node;

pub use diagnostic::{Diagnostic, Severity};
pub use expand::{Expansion, GeneratedInit, RecordKind, expand};
pub use node::{
    Decl, DeclKind, DeclarationView, Field, Identifier, Member, MemberKind, MemberView, TypeText,
};

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        diagnostic::{Diagnostic, Severity},
        expand::{Assignment, Expansion, GeneratedInit, RecordKind, expand},
        node::{
            Decl, DeclKind, DeclarationView, Field, Identifier, Member, MemberKind, MemberView,
            TypeText,
        },
    };
}
