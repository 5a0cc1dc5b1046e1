//! Text form of a resolved value, as printed on stdout.

use crate::error::{LookupError, Result};
use serde_yaml::Value;

/// Render a resolved value for printing.
///
/// Scalars print bare (strings without quotes). Sequences, mappings and
/// tagged nodes print as block YAML without the trailing newline.
pub fn render_value(value: &Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => {
            let yaml = serde_yaml::to_string(value)
                .map_err(|source| LookupError::Render { source })?;
            Ok(yaml.trim_end_matches('\n').to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(yaml: &str) -> String {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        render_value(&value).unwrap()
    }

    #[test]
    fn strings_print_without_quotes() {
        assert_eq!(render("\"18-alpine\""), "18-alpine");
        assert_eq!(render("'yes'"), "yes");
        assert_eq!(render("plain text"), "plain text");
    }

    #[test]
    fn multiline_strings_keep_their_lines() {
        assert_eq!(render("|\n  line one\n  line two\n"), "line one\nline two\n");
    }

    #[test]
    fn numbers_print_in_decimal() {
        assert_eq!(render("42"), "42");
        assert_eq!(render("-7"), "-7");
        assert_eq!(render("1.5"), "1.5");
    }

    #[test]
    fn booleans_print_lowercase() {
        assert_eq!(render("true"), "true");
        assert_eq!(render("false"), "false");
    }

    #[test]
    fn scalars_follow_yaml_1_2_core_schema() {
        assert_eq!(render("yes"), "yes");
        assert_eq!(render("off"), "off");
        assert_eq!(render("0755"), "0755");
        assert_eq!(render("True"), "true");
    }

    #[test]
    fn null_prints_empty() {
        assert_eq!(render("~"), "");
    }

    #[test]
    fn collections_print_as_block_yaml() {
        assert_eq!(render("[1, 2]"), "- 1\n- 2");
        assert_eq!(render("{name: web, port: 80}"), "name: web\nport: 80");

        let tagged = render("!Ref {a: 1}");
        assert!(tagged.starts_with("!Ref"), "{tagged}");
        assert!(tagged.contains("a: 1"), "{tagged}");
        assert!(!tagged.ends_with('\n'));
    }
}
