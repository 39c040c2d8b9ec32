use crate::node::Identifier;
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Severity
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

///
/// Diagnostic
///
/// Closed set of user-facing expansion failures, one variant per distinct
/// message. Keeping the texts here lets hosts and tests match on identity
/// instead of comparing strings.
///

#[remain::sorted]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
pub enum Diagnostic {
    #[error("stored property `{member}` has no type annotation")]
    MissingTypeAnnotation { member: Identifier },

    #[error("annotation can only be applied to a class or struct")]
    OnlyClassOrStruct,
}

impl Diagnostic {
    #[must_use]
    pub const fn severity(&self) -> Severity {
        Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_fixed() {
        assert_eq!(
            Diagnostic::OnlyClassOrStruct.to_string(),
            "annotation can only be applied to a class or struct"
        );
        assert_eq!(
            Diagnostic::MissingTypeAnnotation {
                member: Identifier::from("speed")
            }
            .to_string(),
            "stored property `speed` has no type annotation"
        );
    }

    #[test]
    fn every_diagnostic_is_an_error() {
        assert_eq!(Diagnostic::OnlyClassOrStruct.severity(), Severity::Error);
    }
}
