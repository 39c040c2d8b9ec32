use crate::{
    diagnostic::Diagnostic,
    node::{Field, Identifier, MemberKind, MemberView},
};

/// Collect the stored fields of a classified declaration, in source order.
///
/// Computed members contribute nothing to the initializer and are skipped,
/// as is anything that is not a field at all. A stored member without an
/// explicit type annotation cannot produce a parameter; the first one found
/// aborts extraction so no partially-initializing constructor is ever
/// generated.
pub fn extract_fields<M: MemberView>(members: &[M]) -> Result<Vec<Field>, Diagnostic> {
    let mut fields = Vec::new();

    for member in members {
        if member.kind() != MemberKind::Stored {
            continue;
        }

        let name = member.name().expect("stored member has a name");

        match member.type_text() {
            Some(ty) => fields.push(Field::new(name, ty)),
            None => {
                return Err(Diagnostic::MissingTypeAnnotation {
                    member: Identifier::from(name),
                });
            }
        }
    }

    Ok(fields)
}
