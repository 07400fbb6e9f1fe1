//! Behavioural coverage for variant resolution over builder- and
//! JSON-sourced configurations.

use anyhow::Result;
use classmix::{CompoundVariant, Props, VariantConfig, VariantResolver};
use rstest::rstest;
use test_helpers::BUTTON_THEME_JSON;

fn json_theme() -> Result<VariantResolver> {
    Ok(VariantResolver::with_config(
        "btn",
        VariantConfig::from_json_str(BUTTON_THEME_JSON)?,
    ))
}

fn builder_theme() -> VariantResolver {
    VariantResolver::with_config(
        "btn",
        VariantConfig::new()
            .variant("size", [("sm", "text-sm"), ("lg", "text-lg")])
            .variant("color", [("red", "text-red"), ("blue", "text-blue")])
            .default_variant("size", "sm")
            .compound(
                CompoundVariant::new()
                    .when("size", "sm")
                    .when("color", "red")
                    .class("sm-red-special"),
            )
            .compound(
                CompoundVariant::new()
                    .when("size", ["sm", "lg"])
                    .when("color", "blue")
                    .class_name("blue-any-size"),
            ),
    )
}

#[rstest]
#[case(Props::new(), "btn text-sm")]
#[case(Props::new().variant("size", "lg"), "btn text-lg")]
#[case(Props::new().variant("color", "red"), "btn text-sm text-red sm-red-special")]
#[case(Props::new().variant("color", "blue"), "btn text-sm text-blue blue-any-size")]
#[case(
    Props::new().variant("size", "lg").variant("color", "blue"),
    "btn text-lg text-blue blue-any-size"
)]
#[case(Props::new().unset("size"), "btn")]
#[case(Props::new().variant("size", "lg").class("mx-2"), "btn text-lg mx-2")]
fn json_theme_resolves(#[case] props: Props, #[case] expected: &str) -> Result<()> {
    assert_eq!(json_theme()?.resolve(&props), expected);
    Ok(())
}

#[rstest]
#[case(Props::new())]
#[case(Props::new().variant("size", "lg"))]
#[case(Props::new().variant("color", "red"))]
#[case(Props::new().variant("color", "blue"))]
#[case(Props::new().unset("size").variant("color", "red"))]
#[case(Props::new().variant("size", "lg").class_name("shadow"))]
fn builder_and_json_configurations_agree(#[case] props: Props) -> Result<()> {
    assert_eq!(json_theme()?.resolve(&props), builder_theme().resolve(&props));
    Ok(())
}

#[test]
fn the_fixture_theme_passes_validation() -> Result<()> {
    VariantConfig::from_json_str(BUTTON_THEME_JSON)?.validate()?;
    Ok(())
}

#[test]
fn config_round_trips_through_json() -> Result<()> {
    let config = VariantConfig::from_json_str(BUTTON_THEME_JSON)?;
    let reparsed = VariantConfig::from_json_value(serde_json::to_value(&config)?)?;
    let props = Props::new().variant("color", "red");
    assert_eq!(
        VariantResolver::with_config("btn", config).resolve(&props),
        VariantResolver::with_config("btn", reparsed).resolve(&props),
    );
    Ok(())
}
