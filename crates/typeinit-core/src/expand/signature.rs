use crate::node::Field;

/// Render the parameter list: `name: Type` pairs joined by `", "`, no
/// leading or trailing separator. Zero fields render as the empty string,
/// which the emitter wraps into an empty `()`.
#[must_use]
pub fn build_parameter_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| format!("{}: {}", field.name, field.ty))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_comma_space() {
        let fields = vec![Field::new("id", "Int"), Field::new("title", "String")];

        assert_eq!(build_parameter_list(&fields), "id: Int, title: String");
    }

    #[test]
    fn single_field_has_no_separator() {
        let fields = vec![Field::new("name", "String")];

        assert_eq!(build_parameter_list(&fields), "name: String");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(build_parameter_list(&[]), "");
    }

    #[test]
    fn type_text_is_echoed_verbatim() {
        let fields = vec![Field::new("tags", "[String: Set<Int>]")];

        assert_eq!(build_parameter_list(&fields), "tags: [String: Set<Int>]");
    }
}
