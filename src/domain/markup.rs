//! Itinerary markdown to HTML
//!
//! The itinerary text uses a small markdown subset: a bold title line,
//! `#`/`##` headings, `###` day headings, `- ` list lines and plain lines.
//! Rules are plain line substitutions applied in a fixed order; later rules
//! see the output of earlier ones.

use regex::Regex;
use std::sync::OnceLock;

/// Class carried by every day heading so sections can be found again after insertion
pub const DAY_TITLE_CLASS: &str = "day-title";

/// Opening tag emitted for day headings
pub const DAY_TITLE_OPEN: &str = "<h3 class='day-title'>";

/// Decoration placed in front of day heading text
pub const DAY_MARKER: &str = "🌍";

/// Decoration placed in front of list lines
pub const LIST_MARKER: &str = "✨";

/// Line break emitted for every newline left after the heading rules
pub const LINE_BREAK: &str = "<br/>";

fn title_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^\*\*([^\r\n]+?)\*\*").unwrap())
}

fn h2_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^## ([^\r\n]*)").unwrap())
}

fn h1_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^# ([^\r\n]*)").unwrap())
}

fn day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^### ([^\r\n]*)").unwrap())
}

fn list_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?m)^- ([^\r\n]*)").unwrap())
}

/// Render itinerary text into markup.
///
/// # Examples
///
/// ```
/// use wayfare::domain::markup::render_itinerary;
///
/// let html = render_itinerary("**Paris Trip**\n### Day 1\n- Visit tower");
/// assert_eq!(
///     html,
///     "<h1>Paris Trip</h1><br/><h3 class='day-title'>🌍 Day 1</h3><br/>✨ Visit tower"
/// );
/// ```
pub fn render_itinerary(markdown: &str) -> String {
    let markdown = markdown.replace("\r\n", "\n");

    // Only the first bold line becomes the title
    let titled = title_regex().replace(&markdown, "<h1>$1</h1>");

    let html = h2_regex().replace_all(&titled, "<h2>$1</h2>");
    let html = h1_regex().replace_all(&html, "<h1>$1</h1>");
    let html = day_regex().replace_all(&html, format!("{DAY_TITLE_OPEN}{DAY_MARKER} $1</h3>"));
    let html = list_regex().replace_all(&html, format!("{LIST_MARKER} $1"));

    html.replace('\n', LINE_BREAK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_example() {
        let html = render_itinerary("**Paris Trip**\n## Overview\n### Day 1\n- Visit tower");

        assert!(html.contains("<h1>Paris Trip</h1>"));
        assert!(html.contains("<h2>Overview</h2>"));
        assert!(html.contains("<h3 class='day-title'>🌍 Day 1</h3>"));
        assert!(html.contains("✨ Visit tower"));

        assert!(!html.contains("**"));
        assert!(!html.contains("##"));
        assert!(!html.contains("- "));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_only_first_bold_line_becomes_title() {
        let html = render_itinerary("**Goa Getaway**\n**Not a title**\nText with **bold** inside");

        assert_eq!(html.matches("<h1>").count(), 1);
        assert!(html.starts_with("<h1>Goa Getaway</h1>"));
        assert!(html.contains("**Not a title**"));
        assert!(html.contains("**bold**"));
    }

    #[test]
    fn test_title_keeps_rest_of_line() {
        let html = render_itinerary("**Rome** in spring");
        assert_eq!(html, "<h1>Rome</h1> in spring");
    }

    #[test]
    fn test_bold_title_found_on_later_line() {
        let html = render_itinerary("Intro line\n**Kyoto**");
        assert_eq!(html, "Intro line<br/><h1>Kyoto</h1>");
    }

    #[test]
    fn test_no_title_headings_still_apply() {
        let html = render_itinerary("# Trip\n## Budget (₹)\nPlain");

        assert_eq!(html, "<h1>Trip</h1><br/><h2>Budget (₹)</h2><br/>Plain");
    }

    #[test]
    fn test_day_headings_not_matched_by_other_heading_rules() {
        let html = render_itinerary("### Day 1\n### Day 2");

        assert!(!html.contains("<h1>"));
        assert!(!html.contains("<h2>"));
        assert_eq!(html.matches(DAY_TITLE_OPEN).count(), 2);
    }

    #[test]
    fn test_day_count_matches_input() {
        let input = "**T**\n### Day 1\n- a\n### Day 2\nnotes\n### Day 3\n";
        let html = render_itinerary(input);

        let day_lines = input.lines().filter(|l| l.starts_with("### ")).count();
        assert_eq!(day_lines, 3);
        assert_eq!(html.matches(DAY_TITLE_OPEN).count(), day_lines);
    }

    #[test]
    fn test_list_marker_requires_space() {
        let html = render_itinerary("-not a list\n- a list");
        assert_eq!(html, "-not a list<br/>✨ a list");
    }

    #[test]
    fn test_unsupported_constructs_pass_through() {
        let input = "| a | b |\n|---|---|\n`code`\n  - nested";
        let html = render_itinerary(input);

        assert_eq!(
            html,
            "| a | b |<br/>|---|---|<br/>`code`<br/>  - nested"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_itinerary(""), "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let html = render_itinerary("**Lima**\r\n## Overview\r\n### Day 1\r\n- Market");

        assert_eq!(
            html,
            "<h1>Lima</h1><br/><h2>Overview</h2><br/><h3 class='day-title'>🌍 Day 1</h3><br/>✨ Market"
        );
        assert!(!html.contains('\r'));
    }

    #[test]
    fn test_lone_carriage_return_is_not_captured() {
        let html = render_itinerary("## Overview\r");
        assert!(html.starts_with("<h2>Overview</h2>"));
    }

    #[test]
    fn test_heading_without_text_after_marker_is_literal() {
        // `##` alone has no trailing space, so it is not a heading
        let html = render_itinerary("##\n#");
        assert_eq!(html, "##<br/>#");
    }
}
