//! Recursive flattening of heterogeneous class values.
//!
//! [`concat`] walks each input depth-first and joins the non-empty fragments
//! with single spaces. Nothing is deduplicated here; conflicting utility
//! classes are the [`crate::merge_classes`] façade's concern.

mod value;


pub use value::ClassValue;

/// Flatten `values` into a single space-joined class string.
///
/// Fragments are appended in left-to-right, depth-first order with no
/// leading, trailing, or doubled spaces. Falsy list elements (`false`,
/// [`ClassValue::Null`], zero, empty strings, empty lists) are skipped; map
/// keys contribute in insertion order when their value is `true`. Repeated
/// class names are preserved.
///
/// # Examples
///
/// ```
/// use classmix::{concat, ClassValue};
///
/// let classes = concat(&[
///     "class1".into(),
///     vec!["class2", "class3"].into(),
///     [("class4", true), ("class5", false), ("class6", true)].into(),
/// ]);
/// assert_eq!(classes, "class1 class2 class3 class4 class6");
///
/// assert_eq!(concat(&[]), "");
/// ```
#[must_use]
pub fn concat(values: &[ClassValue]) -> String {
    concat_iter(values)
}

/// Borrowing form of [`concat`] for callers that already hold references.
#[must_use]
pub fn concat_iter<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a ClassValue>,
{
    let mut out = String::new();
    for value in values {
        append_value(&mut out, value);
    }
    out
}

/// Join the `Some` entries of a flat part list with single spaces.
///
/// Lightweight alternative to [`concat`] for call sites that only ever deal
/// in optional string slices and do not need nested structures.
///
/// # Examples
///
/// ```
/// use classmix::lite_concat;
///
/// let classes = lite_concat([Some("class1"), None, Some("class2")]);
/// assert_eq!(classes, "class1 class2");
///
/// assert_eq!(lite_concat([None, None]), "");
/// ```
#[must_use]
pub fn lite_concat<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        push_fragment(&mut out, part);
    }
    out
}

/// Concatenate heterogeneous class values into a single string.
///
/// Each argument is converted with [`ClassValue::from`] and the results are
/// passed to [`concat`].
///
/// # Examples
///
/// ```
/// use classmix::classes;
///
/// let classes = classes!["btn", vec!["btn-lg"], [("disabled", false)]];
/// assert_eq!(classes, "btn btn-lg");
/// ```
#[macro_export]
macro_rules! classes {
    () => {
        ::std::string::String::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::concat(&[$($crate::ClassValue::from($value)),+])
    };
}

/// Append the flattened form of `value` to `out`, separating fragments with
/// single spaces. Top-level scalars bypass the list truthiness filter, so a
/// bare zero still renders as `"0"`.
fn append_value(out: &mut String, value: &ClassValue) {
    match value {
        ClassValue::Null | ClassValue::Bool(_) => {}
        ClassValue::Int(n) => push_fragment(out, &n.to_string()),
        ClassValue::Float(x) => push_fragment(out, &x.to_string()),
        ClassValue::Str(s) => push_fragment(out, s),
        ClassValue::List(items) => {
            for item in items {
                if item.is_truthy() {
                    append_value(out, item);
                }
            }
        }
        ClassValue::Map(entries) => {
            for (name, on) in entries {
                if *on {
                    push_fragment(out, name);
                }
            }
        }
    }
}

fn push_fragment(out: &mut String, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(fragment);
}
