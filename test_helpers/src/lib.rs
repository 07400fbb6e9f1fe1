//! Shared fixtures for classmix workspace tests.

/// JSON form of the button theme exercised by the integration tests: two
/// variant axes, a default size, and two compound rules (one exact, one
/// membership-based).
pub const BUTTON_THEME_JSON: &str = r#"{
  "variants": {
    "size": { "sm": "text-sm", "lg": "text-lg" },
    "color": { "red": "text-red", "blue": "text-blue" }
  },
  "defaultVariants": { "size": "sm" },
  "compoundVariants": [
    {
      "when": { "size": "sm", "color": "red" },
      "class": "sm-red-special"
    },
    {
      "when": { "size": ["sm", "lg"], "color": "blue" },
      "className": "blue-any-size"
    }
  ]
}"#;

/// Split a class string into its whitespace-separated tokens.
#[must_use]
pub fn tokens(classes: &str) -> Vec<&str> {
    classes.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::tokens;

    #[rstest]
    #[case("", Vec::new())]
    #[case("a", vec!["a"])]
    #[case("a b  c", vec!["a", "b", "c"])]
    fn tokens_split_on_whitespace(#[case] classes: &str, #[case] expected: Vec<&str>) {
        assert_eq!(tokens(classes), expected);
    }
}
