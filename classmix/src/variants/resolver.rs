//! Resolution of props against a bound configuration.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::concat::concat_iter;
use crate::ClassValue;

use super::config::VariantConfig;
use super::props::{Props, VariantValue};

/// Resolves [`Props`] into a class string against a base class value and an
/// optional [`VariantConfig`].
///
/// Configuration is bound once at construction;
/// [`resolve`](Self::resolve) is then called per render with that call's
/// props.
///
/// # Examples
///
/// ```
/// use classmix::{Props, VariantConfig, VariantResolver};
///
/// let button = VariantResolver::with_config(
///     "btn",
///     VariantConfig::new()
///         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
///         .default_variant("size", "sm"),
/// );
///
/// assert_eq!(button.resolve(&Props::new()), "btn btn-sm");
/// assert_eq!(button.resolve(&Props::new().variant("size", "lg")), "btn btn-lg");
/// assert_eq!(button.resolve(&Props::new().unset("size")), "btn");
/// ```
#[derive(Clone, Debug, Default)]
pub struct VariantResolver {
    base: ClassValue,
    config: Option<VariantConfig>,
}

impl VariantResolver {
    /// Resolver with no variant configuration: output is the base plus any
    /// extra classes from props.
    #[must_use]
    pub fn new(base: impl Into<ClassValue>) -> Self {
        Self {
            base: base.into(),
            config: None,
        }
    }

    /// Resolver bound to `config`.
    #[must_use]
    pub fn with_config(base: impl Into<ClassValue>, config: VariantConfig) -> Self {
        Self {
            base: base.into(),
            config: Some(config),
        }
    }

    /// Resolve `props` into the final class string.
    ///
    /// Output order: base, per-variant contributions in declaration order,
    /// matched compound contributions in declaration order, then the
    /// caller's `class` and `class_name`. Lookups never fail; a selection
    /// with no matching option simply contributes nothing.
    #[must_use]
    pub fn resolve(&self, props: &Props) -> String {
        let Some(config) = self.config.as_ref() else {
            return concat_iter([&self.base, props.extra_class(), props.extra_class_name()]);
        };

        let mut parts: Vec<&ClassValue> = Vec::with_capacity(config.variants().len() + 3);
        parts.push(&self.base);

        for (name, options) in config.variants() {
            let Some(key) = selection_key(props, config, name) else {
                continue;
            };
            match options.get(key.as_ref()) {
                Some(value) => parts.push(value),
                None => {
                    tracing::trace!(variant = %name, option = %key, "no class for selected option");
                }
            }
        }

        let effective = effective_selection(config, props);
        for compound in config.compounds() {
            if compound.matches(&effective) {
                parts.push(compound.class_value());
                parts.push(compound.class_name_value());
            }
        }

        parts.push(props.extra_class());
        parts.push(props.extra_class_name());
        concat_iter(parts)
    }
}

/// Option-map key for one axis: the caller's selection when present and
/// non-blank, otherwise the configured default. `None` when the axis is
/// explicitly opted out or no key applies.
fn selection_key<'a>(
    props: &'a Props,
    config: &'a VariantConfig,
    name: &str,
) -> Option<Cow<'a, str>> {
    match props.selection(name) {
        Some(None) => None,
        Some(Some(value)) if !value.is_blank() => Some(value.lookup_key()),
        _ => config.default(name).map(VariantValue::lookup_key),
    }
}

/// Defaults overridden by every supplied props entry; an explicit opt-out
/// overrides a default with "nothing selected", keeping compound conditions
/// from matching on it.
fn effective_selection(
    config: &VariantConfig,
    props: &Props,
) -> IndexMap<String, Option<VariantValue>> {
    let mut effective: IndexMap<String, Option<VariantValue>> = config
        .defaults()
        .iter()
        .map(|(name, value)| (name.clone(), Some(value.clone())))
        .collect();
    for (name, value) in props.selections() {
        effective.insert(name.clone(), value.clone());
    }
    effective
}
