//! Offline rendering of a saved itinerary

use crate::domain::{Outline, Page};
use crate::error::Result;
use crate::infrastructure::HtmlDocument;
use std::fs;
use std::path::Path;

/// Render an itinerary markdown file into a page and export it.
///
/// The destination shown in the document title is taken from the outline
/// title when the file has one.
pub fn render_file(input: &Path, output: &Path) -> Result<Outline> {
    let markdown = fs::read_to_string(input)?;
    let outline = Outline::from_markdown(&markdown);

    let page = render_page(&markdown, outline.title.as_deref());
    HtmlDocument::new(&page).write_to(output)?;

    Ok(outline)
}

/// Build a page holding just the rendered itinerary
pub fn render_page(markdown: &str, destination: Option<&str>) -> Page {
    let mut page = Page::new();
    page.output_visible = true;
    page.show_itinerary(markdown);
    page.destination = destination.map(str::to_string);
    page
}
