//! Property-based tests for the settings parser.
//!
//! These tests use proptest to generate random settings content and verify
//! that the parsing rules hold for all inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::settings::parse_settings;
    use proptest::prelude::*;

    proptest! {
        /// Property: comment lines never contribute keys
        #[test]
        fn comment_lines_produce_nothing(
            indent in "[ \t]{0,4}",
            body in "[^\r\n]*",
        ) {
            let content = format!("{}#{}\n", indent, body);
            prop_assert!(parse_settings(&content).is_empty());
        }

        /// Property: keys and values are always trimmed
        #[test]
        fn keys_and_values_are_trimmed(content in "[^\r]{0,200}") {
            for (key, value) in parse_settings(&content) {
                prop_assert_eq!(key.trim(), key.as_str());
                prop_assert_eq!(value.trim(), value.as_str());
            }
        }

        /// Property: a well-formed pair is read back as written
        #[test]
        fn simple_pair_is_read_back(
            key in "[a-z_][a-z0-9_.]{0,15}",
            value in "[a-zA-Z0-9=:/,. -]{0,30}",
            pad in "[ \t]{0,3}",
        ) {
            let content = format!("{}{}{}={}{}\n", pad, key, pad, pad, value);
            let settings = parse_settings(&content);
            prop_assert_eq!(settings.len(), 1);
            prop_assert_eq!(settings.get(&key).map(String::as_str), Some(value.trim()));
        }

        /// Property: parsing is deterministic
        #[test]
        fn parsing_is_deterministic(content in "[^\r]{0,200}") {
            prop_assert_eq!(parse_settings(&content), parse_settings(&content));
        }

        /// Property: never more keys than non-blank lines
        #[test]
        fn at_most_one_key_per_line(content in "[^\r]{0,200}") {
            let lines = content.lines().filter(|l| !l.trim().is_empty()).count();
            prop_assert!(parse_settings(&content).len() <= lines);
        }
    }
}
