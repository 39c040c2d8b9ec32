use crate::node::{Identifier, TypeText};
use serde::{Deserialize, Serialize};

///
/// MemberKind
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum MemberKind {
    Computed,
    Other,
    Stored,
}

///
/// MemberView
///
/// Adapter surface for one member-list entry of a host tree.
///

pub trait MemberView {
    fn kind(&self) -> MemberKind;

    /// Identifier text; present for stored and computed members.
    fn name(&self) -> Option<&str>;

    /// Declared type text; present only when the member carries an explicit
    /// type annotation.
    fn type_text(&self) -> Option<&str>;
}

///
/// Member
///
/// Neutral member node. Hosts without their own tree (and the unit tests)
/// build these directly; everything else adapts via [`MemberView`].
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Member {
    /// A member holding a value directly.
    Stored {
        name: Identifier,
        ty: Option<TypeText>,
    },

    /// A member deriving its value from other state; contributes nothing to
    /// the generated initializer.
    Computed { name: Identifier },

    /// Anything else in the member list (methods, nested types, ...).
    Other,
}

impl Member {
    pub fn stored(name: impl Into<Identifier>, ty: impl Into<TypeText>) -> Self {
        Self::Stored {
            name: name.into(),
            ty: Some(ty.into()),
        }
    }

    pub fn stored_untyped(name: impl Into<Identifier>) -> Self {
        Self::Stored {
            name: name.into(),
            ty: None,
        }
    }

    pub fn computed(name: impl Into<Identifier>) -> Self {
        Self::Computed { name: name.into() }
    }
}

impl MemberView for Member {
    fn kind(&self) -> MemberKind {
        match self {
            Self::Stored { .. } => MemberKind::Stored,
            Self::Computed { .. } => MemberKind::Computed,
            Self::Other => MemberKind::Other,
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Stored { name, .. } | Self::Computed { name } => Some(name.as_str()),
            Self::Other => None,
        }
    }

    fn type_text(&self) -> Option<&str> {
        match self {
            Self::Stored { ty, .. } => ty.as_ref().map(TypeText::as_str),
            Self::Computed { .. } | Self::Other => None,
        }
    }
}
