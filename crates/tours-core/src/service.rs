//! Tour lookup and booking over the catalog.

use tracing::debug;

use crate::catalog::{Catalog, TourRecord};
use crate::error::TourError;
use crate::matcher::MatchMode;

/// Currency tag attached to every confirmation.
pub const CURRENCY: &str = "USD";

/// A resolved (country, month) selection and its tours.
///
/// Borrows the canonical keys and the record list from the catalog; callers
/// get read-only access for the lifetime of the service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourSelection<'a> {
    /// Canonical (lowercase) country key.
    pub country: &'a str,
    /// Canonical (lowercase) month key.
    pub month: &'a str,
    pub tours: &'a [TourRecord],
}

/// A booking to price: raw country/month/tour input plus pass-through
/// requester identity. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub full_name: String,
    pub passport_or_id: String,
    pub country: String,
    pub month: String,
    pub tour_name: String,
    pub number_of_people: u32,
}

/// Priced confirmation for a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub full_name: String,
    pub passport_or_id: String,
    /// Canonical (lowercase) country key.
    pub country: String,
    /// Canonical (lowercase) month key.
    pub month: String,
    pub tour_name: String,
    pub destination: String,
    pub dates: Vec<String>,
    pub number_of_people: u32,
    pub price_per_person: u32,
    pub total_cost: u64,
    pub currency: &'static str,
}

/// Lookup and booking over an immutable catalog with a fixed match policy.
///
/// Holds no mutable state, so one instance can serve any number of
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct TourService {
    catalog: Catalog,
    mode: MatchMode,
}

impl TourService {
    pub fn new(catalog: Catalog, mode: MatchMode) -> Self {
        Self { catalog, mode }
    }

    /// Resolve both inputs to canonical keys.
    ///
    /// Failures echo the input exactly as the caller passed it.
    fn resolve_keys<'a>(&'a self, country: &str, month: &str) -> Result<(&'a str, &'a str), TourError> {
        let country_key = self
            .mode
            .resolve(country, self.catalog.country_keys())
            .ok_or_else(|| TourError::InvalidCountry(country.to_string()))?;
        let month_key = self
            .mode
            .resolve(month, self.catalog.month_keys())
            .ok_or_else(|| TourError::InvalidMonth(month.to_string()))?;

        debug!(
            input_country = country,
            input_month = month,
            country = country_key,
            month = month_key,
            "Resolved selection keys"
        );

        Ok((country_key, month_key))
    }

    /// Find the tours for a (country, month) selection.
    ///
    /// Both keys resolving is not enough on its own: the catalog may lack
    /// that combination, or hold an empty bucket for it, and either case is
    /// `NoToursForSelection`.
    pub fn find_tours(&self, country: &str, month: &str) -> Result<TourSelection<'_>, TourError> {
        let (country_key, month_key) = self.resolve_keys(country, month)?;

        match self.catalog.tours(country_key, month_key) {
            Some(tours) if !tours.is_empty() => Ok(TourSelection {
                country: country_key,
                month: month_key,
                tours,
            }),
            _ => Err(TourError::NoToursForSelection),
        }
    }

    /// Price a booking for the named tour.
    ///
    /// The tour name must match a record in the resolved bucket exactly
    /// (case-sensitive, the same way records are keyed). There is no
    /// capacity tracking: a booking never fails as "fully booked".
    pub fn book(&self, request: &BookingRequest) -> Result<BookingConfirmation, TourError> {
        if request.number_of_people == 0 {
            return Err(TourError::InvalidPartySize(request.number_of_people));
        }

        let (country_key, month_key) = self.resolve_keys(&request.country, &request.month)?;

        let tour = self
            .catalog
            .tours(country_key, month_key)
            .unwrap_or_default()
            .iter()
            .find(|tour| tour.tour_name == request.tour_name)
            .ok_or_else(|| TourError::TourNotFound(request.tour_name.clone()))?;

        Ok(BookingConfirmation {
            full_name: request.full_name.clone(),
            passport_or_id: request.passport_or_id.clone(),
            country: country_key.to_string(),
            month: month_key.to_string(),
            tour_name: tour.tour_name.clone(),
            destination: tour.destination.clone(),
            dates: tour.dates.clone(),
            number_of_people: request.number_of_people,
            price_per_person: tour.price_per_person,
            total_cost: u64::from(tour.price_per_person) * u64::from(request.number_of_people),
            currency: CURRENCY,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn fuzzy_service() -> TourService {
        TourService::new(Catalog::builtin(), MatchMode::fuzzy())
    }

    fn exact_service() -> TourService {
        TourService::new(Catalog::builtin(), MatchMode::Exact)
    }

    fn booking(country: &str, month: &str, tour_name: &str, people: u32) -> BookingRequest {
        BookingRequest {
            full_name: "Jane".to_string(),
            passport_or_id: "P1".to_string(),
            country: country.to_string(),
            month: month.to_string(),
            tour_name: tour_name.to_string(),
            number_of_people: people,
        }
    }

    #[test]
    fn test_find_tours_tolerates_typos() {
        let service = fuzzy_service();
        let selection = service.find_tours("kenye", "jan").unwrap();

        assert_eq!(selection.country, "kenya");
        assert_eq!(selection.month, "january");
        let names: Vec<&str> = selection.tours.iter().map(|t| t.tour_name.as_str()).collect();
        assert_eq!(names, vec!["Masai Mara Safari", "Amboseli Adventure"]);
    }

    #[test]
    fn test_find_tours_is_deterministic() {
        let service = fuzzy_service();
        let first = service.find_tours("kenye", "jan").unwrap();
        let second = service.find_tours("kenye", "jan").unwrap();

        assert_eq!(first.country, second.country);
        assert_eq!(first.month, second.month);
        assert_eq!(first.tours, second.tours);
    }

    #[test]
    fn test_find_tours_invalid_country_echoes_input() {
        let service = fuzzy_service();
        assert_eq!(
            service.find_tours("xyzzy", "january"),
            Err(TourError::InvalidCountry("xyzzy".to_string()))
        );
    }

    #[test]
    fn test_find_tours_invalid_month_echoes_input() {
        let service = fuzzy_service();
        assert_eq!(
            service.find_tours("kenya", "notamonth"),
            Err(TourError::InvalidMonth("notamonth".to_string()))
        );
    }

    #[test]
    fn test_find_tours_missing_combination() {
        // Both keys valid on their own, but tanzania never lists january.
        let mut map = BTreeMap::new();
        let mut kenya = BTreeMap::new();
        kenya.insert("January".to_string(), Catalog::builtin().tours("kenya", "january").unwrap().to_vec());
        map.insert("Kenya".to_string(), kenya);
        let mut tanzania = BTreeMap::new();
        tanzania.insert("March".to_string(), Catalog::builtin().tours("tanzania", "march").unwrap().to_vec());
        map.insert("Tanzania".to_string(), tanzania);

        let service = TourService::new(Catalog::from_map(map), MatchMode::Exact);
        assert_eq!(
            service.find_tours("tanzania", "january"),
            Err(TourError::NoToursForSelection)
        );
    }

    #[test]
    fn test_find_tours_empty_bucket() {
        let mut map = BTreeMap::new();
        let mut kenya = BTreeMap::new();
        kenya.insert("January".to_string(), Vec::new());
        map.insert("Kenya".to_string(), kenya);

        let service = TourService::new(Catalog::from_map(map), MatchMode::Exact);
        assert_eq!(
            service.find_tours("kenya", "january"),
            Err(TourError::NoToursForSelection)
        );
    }

    #[test]
    fn test_exact_mode_accepts_case_variants_only() {
        let service = exact_service();

        let selection = service.find_tours("Kenya", "JANUARY").unwrap();
        assert_eq!(selection.country, "kenya");
        assert_eq!(selection.tours.len(), 2);

        assert_eq!(
            service.find_tours("kenye", "january"),
            Err(TourError::InvalidCountry("kenye".to_string()))
        );
    }

    #[test]
    fn test_book_computes_total_cost() {
        let service = exact_service();
        let confirmation = service
            .book(&booking("Tanzania", "January", "Serengeti Safari", 3))
            .unwrap();

        assert_eq!(confirmation.full_name, "Jane");
        assert_eq!(confirmation.passport_or_id, "P1");
        assert_eq!(confirmation.country, "tanzania");
        assert_eq!(confirmation.month, "january");
        assert_eq!(confirmation.destination, "Serengeti National Park");
        assert_eq!(confirmation.dates, vec!["10th - 15th January"]);
        assert_eq!(confirmation.number_of_people, 3);
        assert_eq!(confirmation.price_per_person, 800);
        assert_eq!(confirmation.total_cost, 2400);
        assert_eq!(confirmation.currency, "USD");
    }

    #[test]
    fn test_book_unknown_tour_name() {
        let service = exact_service();
        assert_eq!(
            service.book(&booking("Kenya", "January", "Moon Walk", 2)),
            Err(TourError::TourNotFound("Moon Walk".to_string()))
        );
    }

    #[test]
    fn test_book_tour_name_is_case_sensitive() {
        let service = exact_service();
        assert_eq!(
            service.book(&booking("Tanzania", "January", "serengeti safari", 2)),
            Err(TourError::TourNotFound("serengeti safari".to_string()))
        );
    }

    #[test]
    fn test_book_rejects_zero_people() {
        let service = exact_service();
        assert_eq!(
            service.book(&booking("Tanzania", "January", "Serengeti Safari", 0)),
            Err(TourError::InvalidPartySize(0))
        );
    }

    #[test]
    fn test_book_empty_bucket_reports_tour_not_found() {
        // Booking has no "no tours" outcome: an empty bucket simply cannot
        // contain the requested name.
        let mut map = BTreeMap::new();
        let mut kenya = BTreeMap::new();
        kenya.insert("January".to_string(), Vec::new());
        map.insert("Kenya".to_string(), kenya);

        let service = TourService::new(Catalog::from_map(map), MatchMode::Exact);
        assert_eq!(
            service.book(&booking("Kenya", "January", "Masai Mara Safari", 2)),
            Err(TourError::TourNotFound("Masai Mara Safari".to_string()))
        );
    }

    #[test]
    fn test_book_with_fuzzy_mode_resolves_typos() {
        let service = fuzzy_service();
        let confirmation = service
            .book(&booking("tanzani", "jan", "Serengeti Safari", 2))
            .unwrap();

        assert_eq!(confirmation.country, "tanzania");
        assert_eq!(confirmation.month, "january");
        assert_eq!(confirmation.total_cost, 1600);
    }
}
