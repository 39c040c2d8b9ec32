use crate::{
    expand::{body::Assignment, signature},
    node::Field,
};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// GeneratedInit
///
/// The synthesized initializer: parameter fields and body assignments in
/// matching order. Owned by the host once returned; the expansion keeps no
/// reference to it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GeneratedInit {
    params: Vec<Field>,
    assignments: Vec<Assignment>,
}

impl GeneratedInit {
    pub(crate) fn new(params: Vec<Field>, assignments: Vec<Assignment>) -> Self {
        debug_assert_eq!(params.len(), assignments.len());

        Self {
            params,
            assignments,
        }
    }

    #[must_use]
    pub fn params(&self) -> &[Field] {
        &self.params
    }

    #[must_use]
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }
}

/// Canonical textual rendering: `init(<params>) { <assignments> }`, body
/// statements joined by `"; "`, a zero-field initializer as `init() { }`.
impl fmt::Display for GeneratedInit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "init({})", signature::build_parameter_list(&self.params))?;

        if self.assignments.is_empty() {
            return write!(f, " {{ }}");
        }

        let body = self
            .assignments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, " {{ {body} }}")
    }
}
