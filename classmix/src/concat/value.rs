//! The recursive class-value type and its conversions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Any value accepted by [`crate::concat`].
///
/// The variants mirror the shapes callers pass when composing class names:
/// plain fragments ([`Str`](Self::Str), [`Int`](Self::Int),
/// [`Float`](Self::Float)), nested sequences ([`List`](Self::List)), and
/// boolean-keyed name maps ([`Map`](Self::Map)). [`Null`](Self::Null) and
/// [`Bool`](Self::Bool) flatten to nothing; they exist so optional and
/// conditional inputs can be passed through unchanged.
///
/// The map is insertion-ordered, so keys contribute deterministically in the
/// order they were declared, and its `bool` values make the "included iff
/// exactly `true`" rule a property of the type rather than a runtime check.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClassValue {
    /// Absent input; flattens to nothing.
    #[default]
    Null,
    /// Bare booleans flatten to nothing; a boolean only selects map keys.
    Bool(bool),
    /// Integer fragment, rendered in decimal.
    Int(i64),
    /// Floating-point fragment, rendered with its shortest representation.
    Float(f64),
    /// Literal class-name fragment.
    Str(String),
    /// Ordered sequence of nested class values, flattened depth-first.
    List(Vec<ClassValue>),
    /// Ordered map of class name to inclusion flag; a key contributes iff its
    /// value is `true`.
    Map(IndexMap<String, bool>),
}

impl ClassValue {
    /// Returns `true` when this value is the [`Null`](Self::Null) placeholder.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Truthiness filter applied to list elements before flattening.
    ///
    /// Bare booleans are excluded: `true` never contributes a fragment on its
    /// own, so treating it as truthy would only ever append empty output.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            Self::Null | Self::Bool(_) => false,
            Self::Int(n) => *n != 0,
            Self::Float(x) => *x != 0.0 && !x.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Map(_) => true,
        }
    }
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ClassValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ClassValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for ClassValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T> From<Option<T>> for ClassValue
where
    T: Into<ClassValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T> From<Vec<T>> for ClassValue
where
    T: Into<ClassValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, bool>> for ClassValue {
    fn from(entries: IndexMap<String, bool>) -> Self {
        Self::Map(entries)
    }
}

impl<const N: usize> From<[(&str, bool); N]> for ClassValue {
    fn from(entries: [(&str, bool); N]) -> Self {
        Self::Map(
            entries
                .into_iter()
                .map(|(name, on)| (name.to_owned(), on))
                .collect(),
        )
    }
}
