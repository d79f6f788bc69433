//! Itinerary outline for terminal output
//!
//! Walks the itinerary as regular markdown to pull out the title and the day
//! headings with the number of list items under each.

use pulldown_cmark::{Event, HeadingLevel, Parser as MdParser, Tag, TagEnd};

/// One day of the itinerary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOutline {
    pub heading: String,
    pub items: usize,
}

/// Title plus days
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    pub title: Option<String>,
    pub days: Vec<DayOutline>,
}

impl Outline {
    pub fn from_markdown(markdown: &str) -> Self {
        let mut outline = Outline::default();

        let mut heading: Option<(HeadingLevel, String)> = None;
        let mut strong: Option<String> = None;
        let mut list_depth = 0usize;

        for event in MdParser::new(markdown) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    heading = Some((level, String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((level, text)) = heading.take() {
                        let text = text.trim().to_string();
                        match level {
                            HeadingLevel::H3 => outline.days.push(DayOutline {
                                heading: text,
                                items: 0,
                            }),
                            HeadingLevel::H1 if outline.title.is_none() => {
                                outline.title = Some(text);
                            }
                            _ => {}
                        }
                    }
                }
                Event::Start(Tag::Strong) => {
                    if outline.title.is_none() && heading.is_none() {
                        strong = Some(String::new());
                    }
                }
                Event::End(TagEnd::Strong) => {
                    if let Some(text) = strong.take() {
                        if outline.title.is_none() && !text.trim().is_empty() {
                            outline.title = Some(text.trim().to_string());
                        }
                    }
                }
                Event::Start(Tag::List(_)) => list_depth += 1,
                Event::End(TagEnd::List(_)) => list_depth = list_depth.saturating_sub(1),
                Event::Start(Tag::Item) => {
                    // Nested items count towards their top-level item only
                    if list_depth == 1 {
                        if let Some(day) = outline.days.last_mut() {
                            day.items += 1;
                        }
                    }
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = heading.as_mut() {
                        buf.push_str(&text);
                    } else if let Some(buf) = strong.as_mut() {
                        buf.push_str(&text);
                    }
                }
                _ => {}
            }
        }

        outline
    }
}
