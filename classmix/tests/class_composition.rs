//! End-to-end coverage for the concatenation surface.

use classmix::{classes, concat, lite_concat, ClassValue};
use test_helpers::tokens;

#[test]
fn heterogeneous_inputs_join_without_extra_spaces() {
    let joined = concat(&[
        "class1".into(),
        vec!["class2", "class3"].into(),
        [("class4", true), ("class5", false), ("class6", true)].into(),
    ]);
    assert_eq!(joined, "class1 class2 class3 class4 class6");
    assert_eq!(tokens(&joined).len(), 5);
    assert!(!joined.starts_with(' '));
    assert!(!joined.ends_with(' '));
}

#[test]
fn lite_concat_drops_missing_parts() {
    let joined = lite_concat([
        Some("class1"),
        None,
        Some("class2"),
        None,
        None,
        Some("class3"),
    ]);
    assert_eq!(joined, "class1 class2 class3");
    assert_eq!(lite_concat([None, None, None]), "");
}

#[test]
fn macro_and_slice_forms_agree() {
    let from_macro = classes!["btn", vec!["btn-lg"], [("active", true)]];
    let from_slice = concat(&[
        "btn".into(),
        vec!["btn-lg"].into(),
        ClassValue::from([("active", true)]),
    ]);
    assert_eq!(from_macro, from_slice);
}
