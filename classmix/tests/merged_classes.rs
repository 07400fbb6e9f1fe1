//! Merge façade behaviour. Precedence semantics belong to the external
//! merging crate; these tests only pin the composition.

use classmix::{merge_classes, Props, VariantConfig, VariantResolver};

#[test]
fn conflicting_utilities_resolve_to_the_last_declared() {
    assert_eq!(merge_classes(&["p-4".into(), "p-8".into()]), "p-8");
    assert_eq!(
        merge_classes(&["bg-red-500".into(), "bg-blue-500".into()]),
        "bg-blue-500"
    );
}

#[test]
fn non_conflicting_utilities_are_preserved() {
    assert_eq!(
        merge_classes(&["flex".into(), "items-center".into()]),
        "flex items-center"
    );
}

#[test]
fn nested_values_flatten_before_merging() {
    assert_eq!(
        merge_classes(&[vec!["p-4", "p-8"].into(), [("flex", true)].into()]),
        "p-8 flex"
    );
}

#[test]
fn resolver_output_merges_with_caller_overrides() {
    let button = VariantResolver::with_config(
        "px-4",
        VariantConfig::new()
            .variant("size", [("lg", "px-6")])
            .default_variant("size", "lg"),
    );
    let resolved = button.resolve(&Props::new().class("px-8"));
    assert_eq!(resolved, "px-4 px-6 px-8");
    assert_eq!(merge_classes(&[resolved.into()]), "px-8");
}
