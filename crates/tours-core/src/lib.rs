//! Core library for the safari tour services.
//!
//! Owns the built-in tour catalog, the key-matching policies used to resolve
//! free-form country and month input, and the lookup/booking logic shared by
//! the HTTP frontends. The catalog is immutable and bookings are priced but
//! never persisted, so everything here is plain synchronous code.

pub mod catalog;
pub mod display;
pub mod error;
pub mod matcher;
pub mod service;

pub use catalog::{Catalog, TourRecord};
pub use display::{capitalize_first, title_case};
pub use error::TourError;
pub use matcher::{best_match, similarity, MatchMode, DEFAULT_THRESHOLD};
pub use service::{BookingConfirmation, BookingRequest, TourSelection, TourService, CURRENCY};
