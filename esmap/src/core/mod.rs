use std::fmt;

pub mod action;
pub mod error;
pub mod fields;
pub mod mappable;
pub mod tag;

/// Native scalar kinds a record field can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int128,
    Uint128,
    Float32,
    Float64,
    String,
    Map,
    Unit,
}

/// Shape of a record type as seen by the mapping generator.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDescriptor {
    Primitive(NativeKind),
    Pointer(Box<TypeDescriptor>),
    Array(Box<TypeDescriptor>, usize),
    Slice(Box<TypeDescriptor>),
    Struct(StructDescriptor),
}

#[derive(Clone, Debug, PartialEq)]
pub struct StructDescriptor {
    pub name: String,
    pub fields: Vec<Field>,
}

/// A declared struct field together with its two annotation channels.
///
/// `name_tag` follows the serialization name convention (`"fee,omitempty"`),
/// `schema_tag` holds the Elasticsearch type and modifier flags
/// (`"text,eager_global_ordinals"`).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeDescriptor,
    pub name_tag: Option<String>,
    pub schema_tag: Option<String>,
    pub embedded: bool,
}

impl TypeDescriptor {
    pub fn of<T: mappable::Mappable + ?Sized>() -> Self {
        T::type_descriptor()
    }

    pub fn pointer(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Pointer(Box::new(inner))
    }

    pub fn array(inner: TypeDescriptor, len: usize) -> Self {
        TypeDescriptor::Array(Box::new(inner), len)
    }

    pub fn slice(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Slice(Box::new(inner))
    }

    /// Strips pointer, array and slice layers down to the carried element type.
    /// Elasticsearch has no array type, a list field maps like its elements.
    pub fn unwrap(&self) -> &TypeDescriptor {
        let mut ty = self;
        loop {
            match ty {
                TypeDescriptor::Pointer(inner)
                | TypeDescriptor::Array(inner, _)
                | TypeDescriptor::Slice(inner) => ty = &**inner,
                _ => return ty,
            }
        }
    }

    pub fn is_primitive(&self) -> bool {
        !matches!(self.unwrap(), TypeDescriptor::Struct(_))
    }

    /// Native kind of the carried element type, `None` for structs.
    pub fn kind(&self) -> Option<NativeKind> {
        match self.unwrap() {
            TypeDescriptor::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn name(&self) -> String {
        match self {
            TypeDescriptor::Primitive(kind) => format!("{:?}", kind).to_lowercase(),
            TypeDescriptor::Pointer(inner) => format!("*{}", inner.name()),
            TypeDescriptor::Array(inner, len) => format!("[{}]{}", len, inner.name()),
            TypeDescriptor::Slice(inner) => format!("[]{}", inner.name()),
            TypeDescriptor::Struct(s) => s.name.clone(),
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl From<StructDescriptor> for TypeDescriptor {
    fn from(s: StructDescriptor) -> Self {
        TypeDescriptor::Struct(s)
    }
}

impl StructDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        StructDescriptor {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

impl Field {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Field {
            name: name.into(),
            ty,
            name_tag: None,
            schema_tag: None,
            embedded: false,
        }
    }

    pub fn name_tag(mut self, tag: impl Into<String>) -> Self {
        self.name_tag = Some(tag.into());
        self
    }

    pub fn es(mut self, tag: impl Into<String>) -> Self {
        self.schema_tag = Some(tag.into());
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }
}
