mod body;
mod classify;
mod emit;
mod extract;
mod signature;

pub use self::body::{Assignment, build_assignments};
pub use self::classify::{RecordKind, classify};
pub use self::emit::GeneratedInit;
pub use self::extract::extract_fields;
pub use self::signature::build_parameter_list;

use crate::{diagnostic::Diagnostic, node::DeclarationView};
use serde::{Deserialize, Serialize};

///
/// Expansion
///
/// Outcome of one expansion call. Strictly two-branch: either exactly one
/// generated declaration and no diagnostics, or no declarations and exactly
/// one diagnostic. There is no partial output.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Expansion {
    pub generated: Vec<GeneratedInit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Expansion {
    fn success(init: GeneratedInit) -> Self {
        Self {
            generated: vec![init],
            diagnostics: Vec::new(),
        }
    }

    fn failure(diagnostic: Diagnostic) -> Self {
        Self {
            generated: Vec::new(),
            diagnostics: vec![diagnostic],
        }
    }

    /// True when the call produced a declaration.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.generated.is_empty()
    }
}

/// Expand one annotated declaration.
///
/// Pure function of the input view: no caching, no shared state, and
/// byte-identical output for identical inputs. Safe to call concurrently.
pub fn expand(decl: &impl DeclarationView) -> Expansion {
    if classify(decl).is_none() {
        return Expansion::failure(Diagnostic::OnlyClassOrStruct);
    }

    match extract_fields(decl.members()) {
        Ok(fields) => {
            let assignments = build_assignments(&fields);

            Expansion::success(GeneratedInit::new(fields, assignments))
        }
        Err(diagnostic) => Expansion::failure(diagnostic),
    }
}
