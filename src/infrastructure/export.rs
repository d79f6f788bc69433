//! Standalone HTML export of a trip page

use crate::domain::hotel::escape_html;
use crate::domain::Page;
use crate::error::Result;
use std::fs;
use std::path::Path;

const STYLE: &str = "body{margin:0;font-family:system-ui,-apple-system,Segoe UI,Arial,sans-serif;color:#f8fafc;background:#0f172a}\
.bg{position:fixed;inset:0;z-index:-1;background-size:cover;background-position:center;filter:brightness(.45)}\
.container{max-width:960px;margin:0 auto;padding:32px 24px}\
.hidden{display:none}\
.day-title{cursor:pointer;user-select:none}\
.gallery-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:10px}\
.gallery-img{width:100%;height:140px;object-fit:cover;border-radius:8px}\
.hotel-list{display:grid;grid-template-columns:repeat(auto-fill,minmax(240px,1fr));gap:14px}\
.hotel-card{background:rgba(15,23,42,.8);border-radius:10px;padding:12px}\
.hotel-card img{width:100%;height:140px;object-fit:cover;border-radius:6px}\
.hotel-name{font-weight:600;margin-top:8px}\
.error{color:#fca5a5}";

// Day headings toggle the members serialized with their ordinal as `data-day`
const COLLAPSE_SCRIPT: &str = "document.querySelectorAll('.day-title').forEach(function(day,i){\
day.addEventListener('click',function(){\
document.querySelectorAll('[data-day=\"'+i+'\"]').forEach(function(x){x.classList.toggle('hidden');});});});";

/// A complete HTML document built from a page
pub struct HtmlDocument<'a> {
    page: &'a Page,
}

impl<'a> HtmlDocument<'a> {
    pub fn new(page: &'a Page) -> Self {
        HtmlDocument { page }
    }

    /// Document title: the destination when known
    pub fn title(&self) -> String {
        match &self.page.destination {
            Some(city) => format!("Travel Plan: {}", city),
            None => "Travel Plan".to_string(),
        }
    }

    pub fn render(&self) -> String {
        let mut s = String::new();
        s.push_str("<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\">");
        s.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
        s.push_str(&format!("<title>{}</title>", escape_html(&self.title())));
        s.push_str(&format!("<style>{}</style></head><body>", STYLE));

        match &self.page.background {
            Some(url) => s.push_str(&format!(
                "<div class=\"bg\" style=\"background-image:url(&quot;{}&quot;)\"></div>",
                escape_html(url)
            )),
            None => s.push_str("<div class=\"bg\"></div>"),
        }

        s.push_str("<main class=\"container\"><div id=\"result\">");
        s.push_str(&self.page.result.to_html());
        s.push_str("</div></main>");
        s.push_str(&format!("<script>{}</script>", COLLAPSE_SCRIPT));
        s.push_str("</body></html>\n");
        s
    }

    /// Write the document, creating parent directories as needed
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, self.render())?;
        tracing::info!(path = %path.display(), "exported trip page");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hotel;
    use tempfile::TempDir;

    fn sample_page() -> Page {
        let mut page = Page::new();
        page.show_itinerary("**Goa**\n### Day 1\n- Beach");
        page.set_background("Goa");
        page
    }

    #[test]
    fn test_render_contains_result_markup() {
        let page = sample_page();
        let html = HtmlDocument::new(&page).render();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<div id=\"result\"><h1>Goa</h1>"));
        assert!(html.contains("<h3 class='day-title'>🌍 Day 1</h3>"));
        assert!(html.contains(".hidden{display:none}"));
        assert!(html.contains("<script>"));
    }

    #[test]
    fn test_title_uses_destination() {
        let page = sample_page();
        assert_eq!(HtmlDocument::new(&page).title(), "Travel Plan: Goa");
        assert_eq!(HtmlDocument::new(&Page::new()).title(), "Travel Plan");
    }

    #[test]
    fn test_background_included() {
        let page = sample_page();
        let html = HtmlDocument::new(&page).render();
        assert!(html.contains("source.unsplash.com/1600x900/?Goa%20landscape"));
    }

    #[test]
    fn test_collapsed_state_is_exported() {
        let mut page = sample_page();
        let day = page.result.day_titles()[0];
        page.result.click(day);

        let html = HtmlDocument::new(&page).render();
        assert!(html.contains("<span class=\"hidden\" data-day=\"0\">✨ Beach</span>"));
    }

    #[test]
    fn test_late_blocks_are_not_collected_into_a_day() {
        let mut page = Page::new();
        page.show_itinerary("**Trip**\n### Day 1\n- a");
        page.show_hotels(vec![Hotel::new("Inn", "inn.jpg")]);
        page.show_gallery("Goa", vec!["g.jpg".to_string()]);

        let html = HtmlDocument::new(&page).render();

        // hotels land after the last day but stay outside its section
        let day = html.find("🌍 Day 1").unwrap();
        let hotels = html.find("<section id=\"hotels\">").unwrap();
        assert!(day < hotels);
        assert!(html.contains("<section id=\"gallery\">"));
        assert!(html.contains("<span data-day=\"0\">✨ a</span>"));
        assert_eq!(html.matches("<section id=\"hotels\" data-day").count(), 0);
    }

    #[test]
    fn test_hidden_empty_hotels_stay_outside_sections() {
        let mut page = Page::new();
        page.show_itinerary("### Day 1\n- a");
        page.show_hotels(vec![]);

        let html = HtmlDocument::new(&page).render();
        assert!(html.contains("<section id=\"hotels\" class=\"hidden\"><h2>"));
    }

    #[test]
    fn test_script_toggles_by_section_attribute() {
        assert!(COLLAPSE_SCRIPT.contains("[data-day="));
        assert!(!COLLAPSE_SCRIPT.contains("nextSibling"));
    }

    #[test]
    fn test_write_to_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("trip.html");

        let page = sample_page();
        HtmlDocument::new(&page).write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("<h1>Goa</h1>"));
    }
}
