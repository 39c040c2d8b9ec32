use derive_more::{Deref, Display, From};
use serde::{Deserialize, Serialize};

///
/// Identifier
///
/// Raw identifier text for a member or parameter name.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
pub struct Identifier(String);

impl Identifier {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

///
/// TypeText
///
/// A declared type as an opaque token sequence. The expansion never
/// interprets it; it is echoed verbatim into the generated signature.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, From, Hash, PartialEq, Serialize,
)]
pub struct TypeText(String);

impl TypeText {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeText {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

///
/// Field
///
/// A stored field after extraction: the name/type pair a parameter and an
/// assignment are both synthesized from. Sequence order is declaration
/// order, and downstream synthesis must not reorder it.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: Identifier,
    pub ty: TypeText,
}

impl Field {
    pub fn new(name: impl Into<Identifier>, ty: impl Into<TypeText>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}
