//! Output formatting utilities

use crate::application::PlanSummary;
use crate::domain::Outline;
use crate::infrastructure::Config;

/// Format an itinerary outline for display
pub fn format_outline(outline: &Outline) -> String {
    let mut output = String::new();

    if let Some(title) = &outline.title {
        output.push_str(&format!("{}\n", title));
    }

    if outline.days.is_empty() {
        output.push_str("No day-by-day plan found\n");
        return output;
    }

    for day in &outline.days {
        let noun = if day.items == 1 { "activity" } else { "activities" };
        output.push_str(&format!("  {}  ({} {})\n", day.heading, day.items, noun));
    }

    output
}

/// One-line summary of what a plan run produced
pub fn format_summary(summary: &PlanSummary) -> String {
    format!(
        "{} days, {} photos, {} hotels",
        summary.days, summary.images, summary.hotels
    )
}

/// Format config values as `key = value` lines
pub fn format_config(config: &Config) -> String {
    format!(
        "api_base = {}\nimage_count = {}\nhotel_count = {}\ntimeout_secs = {}\noutput = {}\n",
        config.api_base,
        config.image_count,
        config.hotel_count,
        config.timeout_secs,
        config.output.display()
    )
}
