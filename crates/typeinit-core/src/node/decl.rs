use crate::node::{Member, MemberView};
use serde::{Deserialize, Serialize};

///
/// DeclKind
///
/// Host-level declaration tag. A host maps its own node kinds into this
/// closed set; anything without a counterpart maps to `Other`.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DeclKind {
    Class,
    Enum,
    Extension,
    Other,
    Protocol,
    Struct,
}

///
/// DeclarationView
///
/// Adapter surface for the annotated declaration: a kind tag and the member
/// list in source order. The expansion only reads through this trait and
/// never mutates the underlying tree.
///

pub trait DeclarationView {
    type Member: MemberView;

    fn kind(&self) -> DeclKind;

    /// Member-list entries in source declaration order.
    fn members(&self) -> &[Self::Member];
}

///
/// Decl
///
/// Neutral declaration node backing [`DeclarationView`].
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Decl {
    kind: DeclKind,
    members: Vec<Member>,
}

impl Decl {
    #[must_use]
    pub const fn new(kind: DeclKind) -> Self {
        Self {
            kind,
            members: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_members(kind: DeclKind, members: Vec<Member>) -> Self {
        Self { kind, members }
    }

    pub fn push_member(&mut self, member: Member) {
        self.members.push(member);
    }
}

impl DeclarationView for Decl {
    type Member = Member;

    fn kind(&self) -> DeclKind {
        self.kind
    }

    fn members(&self) -> &[Member] {
        &self.members
    }
}
