//! Plan trip use case
//!
//! Mirrors a form submission: fetch the itinerary, render it, then fetch the
//! gallery and hotels side by side and lay them out around the itinerary.

use crate::domain::{Page, TripQuery};
use crate::error::Result;
use crate::infrastructure::PlannerApi;

/// What a successful run put on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanSummary {
    pub days: usize,
    pub images: usize,
    pub hotels: usize,
}

/// Service for planning a trip against a planner backend
pub struct PlanTripService<A: PlannerApi> {
    api: A,
    image_count: usize,
    hotel_count: usize,
}

impl<A: PlannerApi> PlanTripService<A> {
    pub fn new(api: A, image_count: usize, hotel_count: usize) -> Self {
        PlanTripService {
            api,
            image_count,
            hotel_count,
        }
    }

    /// Run the whole flow against `page`.
    ///
    /// An itinerary failure is shown inline in the page and also returned.
    /// Gallery and hotel failures are only logged; those sections stay
    /// hidden.
    pub async fn execute(&self, query: &TripQuery, page: &mut Page) -> Result<PlanSummary> {
        page.begin_loading();

        let result = self.load(query, page).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, "itinerary request failed");
            page.show_error(&e.inline_message());
        }

        page.finish_loading();
        result
    }

    async fn load(&self, query: &TripQuery, page: &mut Page) -> Result<PlanSummary> {
        let markdown = self.api.plan(&query.to_request()).await?;

        let days = page.show_itinerary(&markdown);
        page.set_background(&query.destination);

        let (images, hotels) = tokio::join!(
            self.api.images(&query.destination, self.image_count),
            self.api.hotels(&query.destination, self.hotel_count),
        );

        let mut summary = PlanSummary {
            days,
            ..PlanSummary::default()
        };

        match images {
            Ok(urls) => {
                summary.images = urls.len();
                page.show_gallery(&query.destination, urls);
            }
            Err(e) => tracing::warn!(error = %e, "image load error"),
        }

        match hotels {
            Ok(hotels) => {
                summary.hotels = hotels.len();
                page.show_hotels(hotels);
            }
            Err(e) => tracing::warn!(error = %e, "hotel load error"),
        }

        Ok(summary)
    }
}
