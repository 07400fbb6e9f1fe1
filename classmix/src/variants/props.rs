//! Caller-supplied selections consumed by the resolver.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ClassmixError, ClassmixResult};
use crate::ClassValue;

/// One selected option for a variant axis.
///
/// Booleans and integers normalize to their textual form
/// (`"true"`/`"false"`/`"0"`) when used as option-map keys, so a boolean
/// variant can declare its options under the `"true"` and `"false"` keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantValue {
    /// Boolean selection.
    Bool(bool),
    /// Numeric selection.
    Int(i64),
    /// Named option key.
    Key(String),
}

impl VariantValue {
    /// Option-map lookup key for this selection.
    #[must_use]
    pub fn lookup_key(&self) -> Cow<'_, str> {
        match self {
            Self::Bool(b) => Cow::Owned(b.to_string()),
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Key(key) => Cow::Borrowed(key),
        }
    }

    /// A blank key falls back to the configured default selection.
    pub(crate) fn is_blank(&self) -> bool {
        matches!(self, Self::Key(key) if key.is_empty())
    }
}

impl From<&str> for VariantValue {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for VariantValue {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl From<bool> for VariantValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for VariantValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for VariantValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Per-call inputs to [`crate::VariantResolver::resolve`].
///
/// Selections are tri-state per axis: a set value, an explicit opt-out via
/// [`unset`](Self::unset) that suppresses the axis entirely, or absent, which
/// falls back to the configured default. The two extra-class fields are
/// appended after all variant output; by convention callers set at most one
/// of them, which [`validate`](Self::validate) can enforce.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Props {
    variants: IndexMap<String, Option<VariantValue>>,
    class: ClassValue,
    #[serde(rename = "className")]
    class_name: ClassValue,
}

impl Props {
    /// Empty props: every axis falls back to its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select `value` for the `name` axis.
    #[must_use]
    pub fn variant(mut self, name: impl Into<String>, value: impl Into<VariantValue>) -> Self {
        self.variants.insert(name.into(), Some(value.into()));
        self
    }

    /// Explicitly opt the `name` axis out, suppressing its contribution even
    /// when a default exists.
    #[must_use]
    pub fn unset(mut self, name: impl Into<String>) -> Self {
        self.variants.insert(name.into(), None);
        self
    }

    /// Extra classes appended after all variant output.
    #[must_use]
    pub fn class(mut self, value: impl Into<ClassValue>) -> Self {
        self.class = value.into();
        self
    }

    /// Alias of [`class`](Self::class) kept for call sites ported from
    /// `className`-style APIs.
    #[must_use]
    pub fn class_name(mut self, value: impl Into<ClassValue>) -> Self {
        self.class_name = value.into();
        self
    }

    /// Enforce the extra-class convention: at most one of `class` and
    /// `class_name` may be supplied.
    ///
    /// The resolver itself stays permissive and concatenates both fields;
    /// call this where the stricter policy is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmixError::ConflictingClassProps`] when both fields are
    /// set.
    pub fn validate(&self) -> ClassmixResult<()> {
        if !self.class.is_null() && !self.class_name.is_null() {
            return Err(ClassmixError::ConflictingClassProps);
        }
        Ok(())
    }

    pub(crate) fn selection(&self, name: &str) -> Option<&Option<VariantValue>> {
        self.variants.get(name)
    }

    pub(crate) fn selections(&self) -> &IndexMap<String, Option<VariantValue>> {
        &self.variants
    }

    pub(crate) fn extra_class(&self) -> &ClassValue {
        &self.class
    }

    pub(crate) fn extra_class_name(&self) -> &ClassValue {
        &self.class_name
    }
}
