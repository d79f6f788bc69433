//! Placement of the gallery and hotel blocks inside the result region
//!
//! Hotels are positioned by scanning block text for "Budget" and "Safety".
//! This couples placement to the wording of the backend's section headings;
//! if those are renamed the hotels fall back to the end of the region.

use crate::domain::hotel::escape_html;
use crate::domain::region::{Node, NodeId, NodeKind, Region};

/// Block id of the gallery inside a region
pub const GALLERY_BLOCK: &str = "gallery";

/// Block id of the hotel list inside a region
pub const HOTELS_BLOCK: &str = "hotels";

/// Where the hotel block goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelAnchor {
    /// Immediately before this element
    Before(NodeId),
    /// After every other node
    End,
}

/// Markup for the gallery block
pub fn gallery_html(city: &str, urls: &[String]) -> String {
    let alt = escape_html(&format!("{city} photo"));
    let images: String = urls
        .iter()
        .map(|url| {
            format!(
                "<img src=\"{}\" loading=\"lazy\" alt=\"{}\" class=\"gallery-img fade-in\">",
                escape_html(url),
                alt
            )
        })
        .collect();
    format!("<h2>📸 Destination Photos</h2><div class=\"gallery-grid\">{images}</div>")
}

/// Insert the gallery right after the first top-level heading, or first
/// when the region has none.
pub fn place_gallery(region: &mut Region, html: String) -> NodeId {
    let index = region
        .nodes()
        .iter()
        .position(|n| matches!(n.kind, NodeKind::Heading { level: 1 }))
        .map(|pos| pos + 1)
        .unwrap_or(0);

    region.insert_block(index, GALLERY_BLOCK, html)
}

/// Decide where hotels go among the region's element children.
///
/// With Budget ahead of Safety the hotels go right before Safety. Otherwise
/// they go before the first element after Budget, so text trailing the
/// Budget element stays with it.
pub fn hotel_anchor(region: &Region) -> HotelAnchor {
    let blocks: Vec<&Node> = region.elements().collect();
    let find = |word: &str| {
        blocks
            .iter()
            .position(|n| n.text_content().to_lowercase().contains(word))
    };

    match (find("budget"), find("safety")) {
        (Some(b), Some(s)) if s > b => HotelAnchor::Before(blocks[s].id),
        (Some(b), _) => blocks
            .get(b + 1)
            .map_or(HotelAnchor::End, |next| HotelAnchor::Before(next.id)),
        (None, _) => HotelAnchor::End,
    }
}

/// Insert the hotel block at its anchor
pub fn place_hotels(region: &mut Region, html: String) -> NodeId {
    let anchor = hotel_anchor(region);
    tracing::debug!(?anchor, "placing hotels");

    match anchor {
        HotelAnchor::Before(id) => {
            let index = region.position(id).unwrap_or(region.nodes().len());
            region.insert_block(index, HOTELS_BLOCK, html)
        }
        HotelAnchor::End => region.append_block(HOTELS_BLOCK, html),
    }
}
