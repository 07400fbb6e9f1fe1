//! Merge façade over the Tailwind class-merging crate.
//!
//! Composition only: inputs are flattened with [`concat`] and conflict
//! resolution is delegated wholesale to `tailwind_fuse`, whose group-based
//! precedence rules decide which of two conflicting utilities survives. The
//! external crate's configuration entry points are re-exported verbatim.

use crate::concat;
use crate::ClassValue;

pub use tailwind_fuse::merge::MergeOptions;
pub use tailwind_fuse::{tw_join, tw_merge};

/// Flatten `values` and resolve conflicting Tailwind utility classes, last
/// declared wins per group.
///
/// # Examples
///
/// ```
/// use classmix::{merge_classes, ClassValue};
///
/// let classes = merge_classes(&["p-4".into(), "p-8".into()]);
/// assert_eq!(classes, "p-8");
///
/// let classes = merge_classes(&["flex".into(), [("items-center", true)].into()]);
/// assert_eq!(classes, "flex items-center");
/// ```
#[must_use]
pub fn merge_classes(values: &[ClassValue]) -> String {
    tw_merge!(concat(values))
}

/// Like [`merge_classes`], with a custom Tailwind prefix and separator.
///
/// # Examples
///
/// ```ignore
/// use classmix::{merge_classes_with_options, MergeOptions};
///
/// let options = MergeOptions {
///     prefix: "tw-",
///     separator: ":",
/// };
/// let classes = merge_classes_with_options(
///     &["tw-p-4".into(), "tw-p-8".into()],
///     options,
/// );
/// assert_eq!(classes, "tw-p-8");
/// ```
#[must_use]
pub fn merge_classes_with_options(values: &[ClassValue], options: MergeOptions) -> String {
    tailwind_fuse::merge::tw_merge_options(concat(values), options)
}
