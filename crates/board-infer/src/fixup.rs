use std::sync::LazyLock;

use regex::Regex;

/// Notion prefixes exported relation cells with its own site URL glued
/// straight onto the value. Only the prefix is stripped; a real link to
/// `https://www.notion.so/...` keeps its separating slash and is untouched.
static NOTION_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://www\.notion\.so([0-9a-zA-Z])").expect("valid notion prefix pattern")
});

/// Normalizes one raw cell value before sampling or conversion.
pub fn fix_value(raw: &str) -> String {
    NOTION_PREFIX.replace(raw, "$1").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_glued_notion_prefix() {
        assert_eq!(fix_value("https://www.notion.soAlpha"), "Alpha");
        assert_eq!(fix_value("https://www.notion.so1234"), "1234");
    }

    #[test]
    fn keeps_real_notion_links() {
        assert_eq!(
            fix_value("https://www.notion.so/workspace/page"),
            "https://www.notion.so/workspace/page"
        );
    }

    #[test]
    fn keeps_ordinary_values() {
        assert_eq!(fix_value("plain text"), "plain text");
        assert_eq!(fix_value(""), "");
    }
}
