//! Shared utility functions for the keysmith crate.

/// Extract every top-level JSON object from text that may contain other content.
///
/// Uses brace-counting to find each outermost `{...}`. Braces inside string
/// literals are ignored. An unclosed trailing object is dropped.
pub fn extract_json_objects(text: &str) -> Vec<&str> {
    let mut objects = Vec::new();
    let mut depth = 0usize;
    let mut start = None;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in text.char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0
                    && let Some(s) = start.take()
                {
                    objects.push(&text[s..=i]);
                }
            }
            _ => {}
        }
    }

    objects
}

/// Strip list markers such as `-`, `*`, `•`, `1.` or `2)` and surrounding quotes.
pub fn strip_list_marker(line: &str) -> &str {
    let line = line.trim();
    let line = line
        .strip_prefix(['-', '*', '•'])
        .map(str::trim_start)
        .unwrap_or(line);

    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    let line = if digits > 0 {
        let rest = &line[digits..];
        rest.strip_prefix(['.', ')'])
            .map(str::trim_start)
            .unwrap_or(line)
    } else {
        line
    };

    line.trim_matches(|c| c == '"' || c == '\'').trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_objects_simple() {
        let text = r#"{"key": "value"}"#;
        assert_eq!(extract_json_objects(text), vec![r#"{"key": "value"}"#]);
    }

    #[test]
    fn test_extract_json_objects_with_prefix_and_suffix() {
        let text = r#"Here you go: {"key": "value"} hope it helps"#;
        assert_eq!(extract_json_objects(text), vec![r#"{"key": "value"}"#]);
    }

    #[test]
    fn test_extract_json_objects_multiple() {
        let text = "[{\"a\": 1},\n{\"b\": 2}]";
        assert_eq!(extract_json_objects(text), vec![r#"{"a": 1}"#, r#"{"b": 2}"#]);
    }

    #[test]
    fn test_extract_json_objects_nested() {
        let text = r#"{"outer": {"inner": "value"}}"#;
        assert_eq!(
            extract_json_objects(text),
            vec![r#"{"outer": {"inner": "value"}}"#]
        );
    }

    #[test]
    fn test_extract_json_objects_ignores_braces_in_strings() {
        let text = r#"{"hook": "save {now}", "x": "a \"}\" b"}"#;
        assert_eq!(extract_json_objects(text), vec![text]);
    }

    #[test]
    fn test_extract_json_objects_no_json() {
        assert!(extract_json_objects("No JSON here").is_empty());
    }

    #[test]
    fn test_extract_json_objects_unclosed() {
        let text = r#"{"a": 1} {"key": "value""#;
        assert_eq!(extract_json_objects(text), vec![r#"{"a": 1}"#]);
    }

    #[test]
    fn test_strip_list_marker() {
        assert_eq!(strip_list_marker("- zapatillas oferta"), "zapatillas oferta");
        assert_eq!(strip_list_marker("* mate 2"), "mate 2");
        assert_eq!(strip_list_marker("• kit de mate"), "kit de mate");
        assert_eq!(strip_list_marker("12. \"mate imperial\""), "mate imperial");
        assert_eq!(strip_list_marker("3) bombilla"), "bombilla");
        assert_eq!(strip_list_marker("  plain  "), "plain");
        assert_eq!(strip_list_marker("2025 trends"), "2025 trends");
    }
}
