use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Debug;

// CSI sequences (colors, cursor movement) and OSC sequences terminated by BEL or ST.
static ANSI_ESCAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)")
        .expect("ANSI escape pattern is valid")
});

/// Remove terminal escape sequences so the output stays diffable
pub fn strip_ansi(output: &str) -> String {
    ANSI_ESCAPE.replace_all(output, "").into_owned()
}

/// Render a value as a multi-line, colorless string for verbose logging
pub fn colorless<T: Debug + ?Sized>(value: &T) -> String {
    strip_ansi(&format!("{:#?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Response {
        name: Option<String>,
        arn: Option<String>,
    }

    #[test]
    fn test_strip_sgr_colors() {
        let output = "\x1b[1;32mname\x1b[0m: \x1b[33m\"foo\"\x1b[0m";
        assert_eq!(strip_ansi(output), "name: \"foo\"");
    }

    #[test]
    fn test_strip_osc_hyperlink() {
        let output = "\x1b]8;;https://example.com\x07link\x1b]8;;\x07";
        assert_eq!(strip_ansi(output), "link");
    }

    #[test]
    fn test_strip_no_escapes() {
        let output = "nothing colored here";
        assert_eq!(strip_ansi(output), "nothing colored here");
    }

    #[test]
    fn test_colorless_renders_all_fields() {
        let response = Response {
            name: Some("foo".to_string()),
            arn: None,
        };
        let rendered = colorless(&response);
        assert!(rendered.starts_with("Response {\n"));
        assert!(rendered.contains("name: Some(\n        \"foo\",\n    ),"));
        assert!(rendered.contains("arn: None,"));
        assert!(!rendered.contains('\x1b'));
    }
}
