//! Typed label tuples.
//!
//! A metric declares its label dimensions as a Rust tuple type, e.g.
//! `(&'static str, bool)`. Every label-indexed call must then supply a value
//! of exactly that tuple type, and the dimension names must be given as an
//! array of the same length, so arity and type mismatches fail to compile.

use std::hash::Hash;

/// One label value: integer, string, or boolean.
pub trait Field: Clone + Eq + Hash + Send + Sync + 'static {
    /// Render the value for snapshot output.
    fn render(&self) -> String;
}

impl Field for i64 {
    fn render(&self) -> String {
        self.to_string()
    }
}

impl Field for String {
    fn render(&self) -> String {
        self.clone()
    }
}

impl Field for &'static str {
    fn render(&self) -> String {
        (*self).to_string()
    }
}

impl Field for bool {
    fn render(&self) -> String {
        if *self { "true".into() } else { "false".into() }
    }
}

/// A fixed-arity tuple of [`Field`]s used as a cell key.
pub trait Fields: Clone + Eq + Hash + Send + Sync + 'static {
    /// Render each position, in declaration order.
    fn render(&self) -> Vec<String>;
}

/// Dimension names for a label tuple `F`; implemented for `[&str; N]` where
/// `N` is the arity of `F`.
pub trait FieldNames<F: Fields> {
    fn into_names(self) -> Vec<String>;
}

macro_rules! impl_fields {
    ($n:literal; $($T:ident . $idx:tt),*) => {
        impl<$($T: Field),*> Fields for ($($T,)*) {
            fn render(&self) -> Vec<String> {
                vec![$(self.$idx.render()),*]
            }
        }

        impl<'a, $($T: Field),*> FieldNames<($($T,)*)> for [&'a str; $n] {
            fn into_names(self) -> Vec<String> {
                self.iter().map(|s| s.to_string()).collect()
            }
        }
    };
}

impl_fields!(0;);
impl_fields!(1; A.0);
impl_fields!(2; A.0, B.1);
impl_fields!(3; A.0, B.1, C.2);
impl_fields!(4; A.0, B.1, C.2, D.3);
impl_fields!(5; A.0, B.1, C.2, D.3, E.4);
impl_fields!(6; A.0, B.1, C.2, D.3, E.4, G.5);
