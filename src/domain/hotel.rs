//! Hotel recommendations

use serde::{Deserialize, Deserializer};

/// A hotel returned by the hotels endpoint
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hotel {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "string_or_number")]
    pub price: Option<String>,

    #[serde(default, deserialize_with = "string_or_number")]
    pub rating: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub image: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

/// Accept `"4.4"` as well as `4.4`; empty strings count as absent
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Scalar> = Option::deserialize(deserializer)?;
    Ok(value
        .map(|v| match v {
            Scalar::Text(s) => s,
            Scalar::Number(n) => n.to_string(),
        })
        .filter(|s| !s.is_empty()))
}

impl Hotel {
    pub fn new(name: &str, image: &str) -> Self {
        Hotel {
            name: name.to_string(),
            price: None,
            rating: None,
            description: None,
            image: image.to_string(),
        }
    }

    /// Card markup; missing optional fields render empty
    pub fn to_card_html(&self) -> String {
        format!(
            "<div class=\"hotel-card fade-in\">\
             <img src=\"{image}\" alt=\"{name}\">\
             <div class=\"hotel-name\">{name}</div>\
             <div class=\"hotel-price\">💰 {price}</div>\
             <div class=\"hotel-rating\">⭐ {rating}</div>\
             <div class=\"hotel-description\">{description}</div>\
             </div>",
            image = escape_html(&self.image),
            name = escape_html(&self.name),
            price = escape_html(self.price.as_deref().unwrap_or("")),
            rating = escape_html(self.rating.as_deref().unwrap_or("")),
            description = escape_html(self.description.as_deref().unwrap_or("")),
        )
    }
}

/// Markup for the whole hotel block
pub fn hotel_list_html(hotels: &[Hotel]) -> String {
    let cards: String = hotels.iter().map(Hotel::to_card_html).collect();
    format!("<h2>🏨 Where to Stay</h2><div class=\"hotel-list\">{cards}</div>")
}

/// Escape text for use in element content and quoted attributes
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
