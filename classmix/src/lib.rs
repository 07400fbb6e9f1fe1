//! Utilities for composing CSS class-name strings in component-based UIs.
//!
//! Three layers, leaf to root:
//!
//! - [`concat`] and [`lite_concat`] flatten heterogeneous [`ClassValue`]
//!   inputs (strings, numbers, nested sequences, boolean-keyed maps) into a
//!   single space-joined string.
//! - [`VariantResolver`] resolves per-call [`Props`] against a declarative
//!   [`VariantConfig`] of variants, defaults, and compound rules.
//! - [`merge_classes`] feeds the flattened result through the external
//!   Tailwind class-merging crate so later conflicting utilities win.
//!
//! All operations are pure, synchronous functions over their arguments; no
//! state is shared between calls.
//!
//! # Examples
//!
//! ```
//! use classmix::{classes, Props, VariantConfig, VariantResolver};
//!
//! let classes = classes!["btn", vec!["btn-wide"], [("disabled", false)]];
//! assert_eq!(classes, "btn btn-wide");
//!
//! let button = VariantResolver::with_config(
//!     "btn",
//!     VariantConfig::new()
//!         .variant("size", [("sm", "btn-sm"), ("lg", "btn-lg")])
//!         .default_variant("size", "sm"),
//! );
//! let resolved = button.resolve(&Props::new().variant("size", "lg").class("mx-2"));
//! assert_eq!(resolved, "btn btn-lg mx-2");
//! ```

mod concat;
mod error;
mod merge;
pub mod variants;

pub use concat::{concat, concat_iter, lite_concat, ClassValue};
pub use error::{ClassmixError, ClassmixResult};
pub use merge::{merge_classes, merge_classes_with_options, tw_join, tw_merge, MergeOptions};
pub use variants::{CompoundVariant, Match, Props, VariantConfig, VariantResolver, VariantValue};
