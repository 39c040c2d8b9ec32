use crate::node::{Field, Identifier};
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Assignment
///
/// One member-qualified self-assignment in the generated initializer body.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Assignment {
    target: Identifier,
}

impl Assignment {
    pub fn new(target: impl Into<Identifier>) -> Self {
        Self {
            target: target.into(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Identifier {
        &self.target
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "self.{0} = {0}", self.target)
    }
}

/// One assignment per field, in parameter order.
///
/// The order must match the parameter list exactly: hosts with
/// initialize-before-use rules depend on initialization following the
/// stored-field declaration order.
#[must_use]
pub fn build_assignments(fields: &[Field]) -> Vec<Assignment> {
    fields
        .iter()
        .map(|field| Assignment::new(field.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_self_qualified() {
        assert_eq!(Assignment::new("title").to_string(), "self.title = title");
    }

    #[test]
    fn one_assignment_per_field_in_order() {
        let fields = vec![
            Field::new("id", "Int"),
            Field::new("title", "String"),
            Field::new("author", "String"),
        ];

        let assignments = build_assignments(&fields);
        let targets: Vec<_> = assignments
            .iter()
            .map(|a| a.target().as_str())
            .collect();

        assert_eq!(targets, ["id", "title", "author"]);
    }

    #[test]
    fn empty_fields_produce_empty_body() {
        assert!(build_assignments(&[]).is_empty());
    }
}
