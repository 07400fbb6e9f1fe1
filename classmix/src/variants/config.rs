//! Declarative variant configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ClassmixError, ClassmixResult};
use crate::ClassValue;

use super::props::VariantValue;

/// Matcher for one compound-variant condition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Match {
    /// The effective selection must equal this value.
    Value(VariantValue),
    /// The effective selection must be a member of this set.
    AnyOf(Vec<VariantValue>),
}

impl Match {
    pub(crate) fn matches(&self, selected: Option<&VariantValue>) -> bool {
        match self {
            Self::Value(expected) => selected == Some(expected),
            Self::AnyOf(options) => selected.is_some_and(|value| options.contains(value)),
        }
    }

    pub(crate) fn values(&self) -> &[VariantValue] {
        match self {
            Self::Value(expected) => std::slice::from_ref(expected),
            Self::AnyOf(options) => options,
        }
    }
}

impl From<VariantValue> for Match {
    fn from(value: VariantValue) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Match {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Match {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<bool> for Match {
    fn from(value: bool) -> Self {
        Self::Value(value.into())
    }
}

impl From<i32> for Match {
    fn from(value: i32) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Match {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}

impl<T> From<Vec<T>> for Match
where
    T: Into<VariantValue>,
{
    fn from(values: Vec<T>) -> Self {
        Self::AnyOf(values.into_iter().map(Into::into).collect())
    }
}

impl<T, const N: usize> From<[T; N]> for Match
where
    T: Into<VariantValue>,
{
    fn from(values: [T; N]) -> Self {
        Self::AnyOf(values.into_iter().map(Into::into).collect())
    }
}

/// Extra classes applied when a combination of selections holds
/// simultaneously.
///
/// Both `class` and `class_name` are appended on match; callers normally
/// populate only one, mirroring the extra-class convention on
/// [`crate::Props`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompoundVariant {
    when: IndexMap<String, Match>,
    class: ClassValue,
    #[serde(rename = "className")]
    class_name: ClassValue,
}

impl CompoundVariant {
    /// Rule with no conditions; matches every selection until narrowed with
    /// [`when`](Self::when).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require the `variant` axis to satisfy `matcher`.
    #[must_use]
    pub fn when(mut self, variant: impl Into<String>, matcher: impl Into<Match>) -> Self {
        self.when.insert(variant.into(), matcher.into());
        self
    }

    /// Classes appended when every condition holds.
    #[must_use]
    pub fn class(mut self, value: impl Into<ClassValue>) -> Self {
        self.class = value.into();
        self
    }

    /// Alias of [`class`](Self::class) kept for `className`-style call sites.
    #[must_use]
    pub fn class_name(mut self, value: impl Into<ClassValue>) -> Self {
        self.class_name = value.into();
        self
    }

    pub(crate) fn matches(&self, effective: &IndexMap<String, Option<VariantValue>>) -> bool {
        self.when.iter().all(|(name, matcher)| {
            matcher.matches(effective.get(name).and_then(Option::as_ref))
        })
    }

    pub(crate) fn conditions(&self) -> &IndexMap<String, Match> {
        &self.when
    }

    pub(crate) fn class_value(&self) -> &ClassValue {
        &self.class
    }

    pub(crate) fn class_name_value(&self) -> &ClassValue {
        &self.class_name
    }
}

/// Declarative configuration consumed by [`crate::VariantResolver`]:
/// per-axis option maps, default selections, and compound rules.
///
/// Maps are insertion-ordered, so variant and compound contributions appear
/// in declaration order. Configurations are plain serde data and can be
/// deserialized from theme files; see [`from_json_str`](Self::from_json_str).
///
/// # Examples
///
/// ```
/// use classmix::{CompoundVariant, VariantConfig};
///
/// let config = VariantConfig::new()
///     .variant("size", [("sm", "text-sm"), ("lg", "text-lg")])
///     .variant("color", [("red", "text-red")])
///     .default_variant("size", "sm")
///     .compound(
///         CompoundVariant::new()
///             .when("size", "sm")
///             .when("color", "red")
///             .class("sm-red-special"),
///     );
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantConfig {
    variants: IndexMap<String, IndexMap<String, ClassValue>>,
    #[serde(rename = "defaultVariants")]
    default_variants: IndexMap<String, VariantValue>,
    #[serde(rename = "compoundVariants")]
    compound_variants: Vec<CompoundVariant>,
}

impl VariantConfig {
    /// Empty configuration.
    #[must_use]
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Declare the `name` axis with its option map.
    #[must_use]
    pub fn variant<K, V>(
        mut self,
        name: impl Into<String>,
        options: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<ClassValue>,
    {
        self.variants.insert(
            name.into(),
            options
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        self
    }

    /// Fallback selection for the `name` axis when props omit it.
    #[must_use]
    pub fn default_variant(
        mut self,
        name: impl Into<String>,
        value: impl Into<VariantValue>,
    ) -> Self {
        self.default_variants.insert(name.into(), value.into());
        self
    }

    /// Append a compound rule; rules are evaluated in declaration order.
    #[must_use]
    pub fn compound(mut self, compound: CompoundVariant) -> Self {
        self.compound_variants.push(compound);
        self
    }

    /// Check that defaults and compound conditions only reference declared
    /// variants and known option keys.
    ///
    /// Resolution tolerates dangling references by contributing nothing;
    /// call this where misconfiguration should fail loudly instead.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmixError::UnknownVariant`] or
    /// [`ClassmixError::UnknownOption`] for the first dangling reference
    /// found.
    pub fn validate(&self) -> ClassmixResult<()> {
        for (name, value) in &self.default_variants {
            self.check_reference(name, value, "default variants")?;
        }
        for (index, compound) in self.compound_variants.iter().enumerate() {
            let context = format!("compound variant {index}");
            for (name, matcher) in compound.conditions() {
                for value in matcher.values() {
                    self.check_reference(name, value, &context)?;
                }
            }
        }
        Ok(())
    }

    fn check_reference(
        &self,
        name: &str,
        value: &VariantValue,
        context: &str,
    ) -> ClassmixResult<()> {
        let Some(options) = self.variants.get(name) else {
            return Err(ClassmixError::UnknownVariant {
                name: name.to_owned(),
                context: context.to_owned(),
            });
        };
        let key = value.lookup_key();
        if options.contains_key(key.as_ref()) {
            Ok(())
        } else {
            Err(ClassmixError::UnknownOption {
                variant: name.to_owned(),
                option: key.into_owned(),
                context: context.to_owned(),
            })
        }
    }

    /// Deserialize a configuration from a JSON string.
    ///
    /// The wire shape matches the serde derives: a `variants` object of
    /// option maps, `defaultVariants`, and `compoundVariants` entries with
    /// `when` conditions plus `class`/`className` values.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmixError::Config`] when the JSON is malformed.
    #[cfg(feature = "serde_json")]
    pub fn from_json_str(json: &str) -> ClassmixResult<Self> {
        serde_json::from_str(json).map_err(|err| ClassmixError::Config(Box::new(err)))
    }

    /// Deserialize a configuration from an in-memory JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ClassmixError::Config`] when the value has the wrong shape.
    #[cfg(feature = "serde_json")]
    pub fn from_json_value(value: serde_json::Value) -> ClassmixResult<Self> {
        serde_json::from_value(value).map_err(|err| ClassmixError::Config(Box::new(err)))
    }

    pub(crate) fn variants(&self) -> &IndexMap<String, IndexMap<String, ClassValue>> {
        &self.variants
    }

    pub(crate) fn default(&self, name: &str) -> Option<&VariantValue> {
        self.default_variants.get(name)
    }

    pub(crate) fn defaults(&self) -> &IndexMap<String, VariantValue> {
        &self.default_variants
    }

    pub(crate) fn compounds(&self) -> &[CompoundVariant] {
        &self.compound_variants
    }
}
