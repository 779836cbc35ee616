use crate::core::{Field, TypeDescriptor};

/// One field as the generator sees it, after embedded structs are flattened.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct FieldDescriptor<'a> {
    pub name: &'a str,
    pub ty: &'a TypeDescriptor,
    pub name_tag: Option<&'a str>,
    pub schema_tag: Option<&'a str>,
}

impl<'a> From<&'a Field> for FieldDescriptor<'a> {
    fn from(field: &'a Field) -> Self {
        FieldDescriptor {
            name: &field.name,
            ty: field.ty.unwrap(),
            name_tag: field.name_tag.as_deref(),
            schema_tag: field.schema_tag.as_deref(),
        }
    }
}

/// Lists the fields of a struct type in declaration order, inlining the
/// members of embedded structs where they are declared.
pub(crate) fn extract_fields(ty: &TypeDescriptor) -> Vec<FieldDescriptor<'_>> {
    let mut fields = Vec::new();
    extract_into(ty, &mut fields);
    fields
}

fn extract_into<'a>(ty: &'a TypeDescriptor, fields: &mut Vec<FieldDescriptor<'a>>) {
    let s = match ty.unwrap() {
        TypeDescriptor::Struct(s) => s,
        _ => return,
    };

    for field in &s.fields {
        let field_ty = field.ty.unwrap();
        if field.embedded && matches!(field_ty, TypeDescriptor::Struct(_)) {
            extract_into(field_ty, fields);
        } else {
            fields.push(FieldDescriptor::from(field));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{NativeKind, StructDescriptor};

    fn string() -> TypeDescriptor {
        TypeDescriptor::Primitive(NativeKind::String)
    }

    fn names(fields: &[FieldDescriptor<'_>]) -> Vec<String> {
        fields.iter().map(|f| f.name.to_string()).collect()
    }

    #[test]
    fn primitive_has_no_fields() {
        assert!(extract_fields(&string()).is_empty());
    }

    #[test]
    fn embedded_fields_are_spliced_in_place() {
        let base = StructDescriptor::new("Base")
            .field(Field::new("id", string()))
            .field(Field::new("created", TypeDescriptor::Primitive(NativeKind::Int64)));
        let outer = StructDescriptor::new("Outer")
            .field(Field::new("first", string()))
            .field(Field::new("Base", TypeDescriptor::pointer(base.into())).embedded())
            .field(Field::new("last", string()));

        let desc = TypeDescriptor::Struct(outer);
        let fields = extract_fields(&desc);

        assert_eq!(names(&fields), vec!["first", "id", "created", "last"]);
    }

    #[test]
    fn nested_embedding_is_depth_first() {
        let deepest = StructDescriptor::new("Deepest").field(Field::new("c", string()));
        let middle = StructDescriptor::new("Middle")
            .field(Field::new("b", string()))
            .field(Field::new("Deepest", deepest.into()).embedded());
        let outer = StructDescriptor::new("Outer")
            .field(Field::new("Middle", middle.into()).embedded())
            .field(Field::new("a", string()));

        let desc = TypeDescriptor::Struct(outer);
        let fields = extract_fields(&desc);

        assert_eq!(names(&fields), vec!["b", "c", "a"]);
    }

    #[test]
    fn embedded_primitive_stays_a_field() {
        let outer = StructDescriptor::new("Outer").field(Field::new("Alias", string()).embedded());

        let desc = TypeDescriptor::Struct(outer);
        let fields = extract_fields(&desc);

        assert_eq!(names(&fields), vec!["Alias"]);
    }

    #[test]
    fn descriptor_carries_unwrapped_type() {
        let outer = StructDescriptor::new("Outer").field(
            Field::new("tags", TypeDescriptor::slice(string()))
                .name_tag("tags,omitempty")
                .es("text"),
        );
        let ty = TypeDescriptor::Struct(outer);

        let fields = extract_fields(&ty);

        assert_eq!(fields[0].ty, &string());
        assert_eq!(fields[0].name_tag, Some("tags,omitempty"));
        assert_eq!(fields[0].schema_tag, Some("text"));
    }
}
