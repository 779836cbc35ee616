use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::core::{NativeKind, TypeDescriptor};

/// Types that can describe their own shape to the mapping generator.
///
/// Usually derived with `#[derive(Mappable)]`. Scalars describe themselves by
/// the kind they serialize as, so anything serde writes as a string has the
/// `String` kind.
pub trait Mappable {
    fn type_descriptor() -> TypeDescriptor;
}

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Mappable for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::Primitive(NativeKind::$kind)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    i128 => Int128,
    usize => Uint,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    u128 => Uint128,
    f32 => Float32,
    f64 => Float64,
    char => String,
    str => String,
    String => String,
    () => Unit,
}

macro_rules! impl_pointer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Mappable + ?Sized> Mappable for $ty {
                fn type_descriptor() -> TypeDescriptor {
                    TypeDescriptor::pointer(T::type_descriptor())
                }
            }
        )*
    };
}

impl_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<T: Mappable> Mappable for Option<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::pointer(T::type_descriptor())
    }
}

impl<T: Mappable> Mappable for [T] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::type_descriptor())
    }
}

impl<T: Mappable, const N: usize> Mappable for [T; N] {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::array(T::type_descriptor(), N)
    }
}

impl<T: Mappable> Mappable for Vec<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::type_descriptor())
    }
}

impl<T: Mappable> Mappable for VecDeque<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::type_descriptor())
    }
}

impl<T: Mappable> Mappable for BTreeSet<T> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::type_descriptor())
    }
}

impl<T: Mappable, S> Mappable for HashSet<T, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::slice(T::type_descriptor())
    }
}

impl<K, V> Mappable for BTreeMap<K, V> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Primitive(NativeKind::Map)
    }
}

impl<K, V, S> Mappable for HashMap<K, V, S> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Primitive(NativeKind::Map)
    }
}

#[cfg(feature = "uuid")]
impl Mappable for uuid::Uuid {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Primitive(NativeKind::String)
    }
}

#[cfg(feature = "chrono")]
impl<Tz: chrono::TimeZone> Mappable for chrono::DateTime<Tz> {
    fn type_descriptor() -> TypeDescriptor {
        TypeDescriptor::Primitive(NativeKind::String)
    }
}

#[cfg(feature = "chrono")]
impl_primitive! {
    chrono::NaiveDate => String,
    chrono::NaiveDateTime => String,
    chrono::NaiveTime => String,
}
