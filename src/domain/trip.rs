//! Trip query submitted to the planner

use crate::error::{Result, WayfareError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated travel query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    pub from: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub interests: String,
}

/// Body sent to the planning endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub from_city: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
    pub days: i64,
    pub interests: String,
}

impl TripQuery {
    /// Build a query from raw form values.
    ///
    /// Origin, destination and both dates are required; text fields are
    /// trimmed first so whitespace-only input counts as missing.
    pub fn parse(
        from: &str,
        destination: &str,
        start_date: &str,
        end_date: &str,
        interests: &str,
    ) -> Result<Self> {
        let from = from.trim();
        let destination = destination.trim();
        let start_date = start_date.trim();
        let end_date = end_date.trim();

        if from.is_empty() || destination.is_empty() || start_date.is_empty() || end_date.is_empty()
        {
            return Err(WayfareError::InvalidQuery(
                "Please fill all fields.".to_string(),
            ));
        }

        Ok(TripQuery {
            from: from.to_string(),
            destination: destination.to_string(),
            start_date: parse_date(start_date)?,
            end_date: parse_date(end_date)?,
            interests: interests.trim().to_string(),
        })
    }

    /// Trip length in days, never less than one
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    pub fn to_request(&self) -> PlanRequest {
        PlanRequest {
            from_city: self.from.clone(),
            destination: self.destination.clone(),
            start_date: self.start_date.format("%Y-%m-%d").to_string(),
            end_date: self.end_date.format("%Y-%m-%d").to_string(),
            days: self.days(),
            interests: self.interests.clone(),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| WayfareError::InvalidQuery(format!("Invalid date format: {}", value)))
}
