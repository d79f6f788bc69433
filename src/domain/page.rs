//! Trip page state
//!
//! `Page` holds every region the planning flow touches, so the flow works on
//! an explicit value instead of ambient page globals.

use crate::domain::hotel::{escape_html, hotel_list_html, Hotel};
use crate::domain::layout::{gallery_html, place_gallery, place_hotels};
use crate::domain::markup::render_itinerary;
use crate::domain::region::{NodeId, Region};

/// Visible state of the trip page
#[derive(Debug, Default)]
pub struct Page {
    /// Rendered itinerary plus inserted blocks
    pub result: Region,
    /// Markdown the result region was rendered from
    pub itinerary: Option<String>,
    /// Destination the page currently shows
    pub destination: Option<String>,
    /// Background image URL
    pub background: Option<String>,
    /// Gallery image URLs
    pub gallery: Vec<String>,
    pub gallery_hidden: bool,
    pub hotels: Vec<Hotel>,
    pub hotels_hidden: bool,
    pub output_visible: bool,
    pub loading: bool,
    pub controls_visible: bool,
    /// Inline error shown in place of the itinerary
    pub error: Option<String>,
}

impl Page {
    pub fn new() -> Self {
        Page {
            gallery_hidden: true,
            hotels_hidden: true,
            ..Page::default()
        }
    }

    /// Reset for a new submission
    pub fn begin_loading(&mut self) {
        self.output_visible = true;
        self.loading = true;
        self.controls_visible = false;
        self.gallery_hidden = true;
        self.hotels_hidden = true;
        self.gallery.clear();
        self.hotels.clear();
        self.error = None;
        self.itinerary = None;
        self.result.clear();
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Render itinerary markdown into the result region and wire its day
    /// sections. Returns the number of day headings.
    pub fn show_itinerary(&mut self, markdown: &str) -> usize {
        self.error = None;
        self.itinerary = Some(markdown.to_string());
        self.result.set_markup(&render_itinerary(markdown));
        let days = self.result.wire_day_sections();
        self.controls_visible = true;
        days
    }

    /// Replace the result region with an inline error
    pub fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.result.clear();
        self.result.append_block(
            "error",
            format!(
                "<div class=\"error\"><strong>Error:</strong> {}</div>",
                escape_html(message)
            ),
        );
    }

    /// Point the background at a landscape of the destination
    pub fn set_background(&mut self, city: &str) {
        let query = urlencoding::encode(&format!("{city} landscape")).into_owned();
        self.background = Some(format!("https://source.unsplash.com/1600x900/?{query}"));
        self.destination = Some(city.to_string());
    }

    /// Show gallery images. Nothing is inserted for an empty list.
    pub fn show_gallery(&mut self, city: &str, urls: Vec<String>) -> Option<NodeId> {
        self.gallery = urls;
        if self.gallery.is_empty() {
            return None;
        }

        self.gallery_hidden = false;
        Some(place_gallery(
            &mut self.result,
            gallery_html(city, &self.gallery),
        ))
    }

    /// Place the hotel list; it stays hidden when empty.
    pub fn show_hotels(&mut self, hotels: Vec<Hotel>) -> NodeId {
        self.hotels = hotels;
        self.hotels_hidden = self.hotels.is_empty();

        let id = place_hotels(&mut self.result, hotel_list_html(&self.hotels));
        if self.hotels_hidden {
            self.result.set_hidden(id, true);
        }
        id
    }
}
