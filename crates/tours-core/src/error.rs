//! Error types for tour lookup and booking.

use thiserror::Error;

/// Client-input failures raised while resolving and booking tours.
///
/// Every variant is a rejection of caller input, never a transient or fatal
/// condition. The `Display` strings are the exact user-facing messages the
/// HTTP services return.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The country input resolved to no canonical key.
    #[error("Invalid country: '{0}'. Please enter a valid country.")]
    InvalidCountry(String),

    /// The month input resolved to no canonical key.
    #[error("Invalid month: '{0}'. Please enter a valid month.")]
    InvalidMonth(String),

    /// Both keys resolved, but the combination has no tours.
    #[error("No tour available for this selection.")]
    NoToursForSelection,

    /// No tour with the requested name exists in the resolved bucket.
    #[error("Invalid tour name: '{0}'. Please choose from the available tours.")]
    TourNotFound(String),

    /// The party size was not a positive integer.
    #[error("Invalid number of people: '{0}'. Must be at least 1.")]
    InvalidPartySize(u32),
}
