use crate::node::{DeclKind, DeclarationView};
use serde::{Deserialize, Serialize};

///
/// RecordKind
///
/// The two supported expansion targets: records with value semantics
/// (copied on assignment) and records with reference semantics (shared on
/// assignment).
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RecordKind {
    Reference,
    Value,
}

/// Classify the annotated declaration.
///
/// Total over every declaration kind: `None` covers everything the
/// expansion does not support (enumerations, protocols, extensions, ...)
/// and is an expected result, not a failure. This is the sole gate; every
/// downstream step is skipped when it returns `None`.
#[must_use]
pub fn classify(decl: &impl DeclarationView) -> Option<RecordKind> {
    match decl.kind() {
        DeclKind::Struct => Some(RecordKind::Value),
        DeclKind::Class => Some(RecordKind::Reference),
        DeclKind::Enum | DeclKind::Extension | DeclKind::Other | DeclKind::Protocol => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Decl;

    #[test]
    fn structs_are_value_records() {
        let decl = Decl::new(DeclKind::Struct);
        assert_eq!(classify(&decl), Some(RecordKind::Value));
    }

    #[test]
    fn classes_are_reference_records() {
        let decl = Decl::new(DeclKind::Class);
        assert_eq!(classify(&decl), Some(RecordKind::Reference));
    }

    #[test]
    fn everything_else_is_unsupported() {
        for kind in [
            DeclKind::Enum,
            DeclKind::Extension,
            DeclKind::Other,
            DeclKind::Protocol,
        ] {
            assert_eq!(classify(&Decl::new(kind)), None);
        }
    }
}
