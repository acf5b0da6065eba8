//! Compiled-in tour catalog keyed by country and month.
//!
//! The catalog is built once at process start and never mutated, so it can
//! be shared across request handlers without synchronization.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// One bookable tour offering within a (country, month) bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourRecord {
    pub tour_name: String,
    /// Length of the tour in days.
    pub duration: u32,
    /// Price per traveler in whole US dollars.
    pub price_per_person: u32,
    pub highlights: Vec<String>,
    pub destination: String,
    /// Human-readable date ranges the tour runs on.
    pub dates: Vec<String>,
}

/// Seed row for the compiled-in catalog.
struct TourSeed {
    country: &'static str,
    month: &'static str,
    tour_name: &'static str,
    duration: u32,
    price_per_person: u32,
    highlights: &'static [&'static str],
    destination: &'static str,
    dates: &'static [&'static str],
}

/// The complete tour inventory: three countries, three months, two tours per
/// (country, month) bucket.
const TOUR_DATA: &[TourSeed] = &[
    // Kenya
    TourSeed {
        country: "Kenya",
        month: "January",
        tour_name: "Masai Mara Safari",
        duration: 3,
        price_per_person: 500,
        highlights: &["Big Five", "Game Drives"],
        destination: "Masai Mara",
        dates: &["15th - 20th January"],
    },
    TourSeed {
        country: "Kenya",
        month: "January",
        tour_name: "Amboseli Adventure",
        duration: 2,
        price_per_person: 400,
        highlights: &["Mount Kilimanjaro", "Elephants"],
        destination: "Amboseli National Park",
        dates: &["22nd - 25th January"],
    },
    TourSeed {
        country: "Kenya",
        month: "February",
        tour_name: "Lake Nakuru & Naivasha Tour",
        duration: 2,
        price_per_person: 350,
        highlights: &["Flamingos", "Boat Rides"],
        destination: "Lake Nakuru",
        dates: &["5th - 7th February"],
    },
    TourSeed {
        country: "Kenya",
        month: "February",
        tour_name: "Tsavo National Park Safari",
        duration: 3,
        price_per_person: 450,
        highlights: &["Lions", "Red Elephants"],
        destination: "Tsavo National Park",
        dates: &["18th - 21st February"],
    },
    TourSeed {
        country: "Kenya",
        month: "March",
        tour_name: "Nairobi National Park Day Tour",
        duration: 1,
        price_per_person: 200,
        highlights: &["Urban Safari", "Giraffe Center"],
        destination: "Nairobi National Park",
        dates: &["3rd - 3rd March"],
    },
    TourSeed {
        country: "Kenya",
        month: "March",
        tour_name: "Diani Beach Relaxation",
        duration: 4,
        price_per_person: 600,
        highlights: &["Beach Experience", "Water Sports"],
        destination: "Diani Beach",
        dates: &["12th - 16th March"],
    },
    // Tanzania
    TourSeed {
        country: "Tanzania",
        month: "January",
        tour_name: "Serengeti Safari",
        duration: 4,
        price_per_person: 800,
        highlights: &["Great Migration", "Game Drives"],
        destination: "Serengeti National Park",
        dates: &["10th - 15th January"],
    },
    TourSeed {
        country: "Tanzania",
        month: "January",
        tour_name: "Mount Kilimanjaro Trek",
        duration: 7,
        price_per_person: 1500,
        highlights: &["Climbing", "Scenic Views"],
        destination: "Mount Kilimanjaro",
        dates: &["20th - 30th January"],
    },
    TourSeed {
        country: "Tanzania",
        month: "February",
        tour_name: "Zanzibar Beach Holiday",
        duration: 5,
        price_per_person: 900,
        highlights: &["White Sand Beaches", "Dolphin Tours"],
        destination: "Zanzibar",
        dates: &["7th - 12th February"],
    },
    TourSeed {
        country: "Tanzania",
        month: "February",
        tour_name: "Ngorongoro Crater Safari",
        duration: 3,
        price_per_person: 750,
        highlights: &["Wildlife Spotting", "Crater Views"],
        destination: "Ngorongoro Crater",
        dates: &["19th - 22nd February"],
    },
    TourSeed {
        country: "Tanzania",
        month: "March",
        tour_name: "Tarangire National Park Safari",
        duration: 2,
        price_per_person: 500,
        highlights: &["Elephants", "Baobab Trees"],
        destination: "Tarangire National Park",
        dates: &["2nd - 4th March"],
    },
    TourSeed {
        country: "Tanzania",
        month: "March",
        tour_name: "Mikumi National Park Safari",
        duration: 3,
        price_per_person: 600,
        highlights: &["Lions", "Scenic Safari"],
        destination: "Mikumi National Park",
        dates: &["15th - 18th March"],
    },
    // South Africa
    TourSeed {
        country: "South Africa",
        month: "January",
        tour_name: "Kruger National Park Safari",
        duration: 3,
        price_per_person: 700,
        highlights: &["Big Five", "Luxury Lodges"],
        destination: "Kruger National Park",
        dates: &["8th - 12th January"],
    },
    TourSeed {
        country: "South Africa",
        month: "January",
        tour_name: "Cape Town & Table Mountain",
        duration: 2,
        price_per_person: 500,
        highlights: &["Cable Car", "Wine Tasting"],
        destination: "Cape Town",
        dates: &["15th - 17th January"],
    },
    TourSeed {
        country: "South Africa",
        month: "February",
        tour_name: "Garden Route Adventure",
        duration: 5,
        price_per_person: 900,
        highlights: &["Scenic Views", "Wildlife"],
        destination: "Garden Route",
        dates: &["9th - 14th February"],
    },
    TourSeed {
        country: "South Africa",
        month: "February",
        tour_name: "Johannesburg & Soweto Tour",
        duration: 1,
        price_per_person: 250,
        highlights: &["Apartheid Museum", "History"],
        destination: "Johannesburg",
        dates: &["20th - 20th February"],
    },
    TourSeed {
        country: "South Africa",
        month: "March",
        tour_name: "Victoria Falls & Zambezi River",
        duration: 3,
        price_per_person: 800,
        highlights: &["Waterfalls", "River Cruise"],
        destination: "Victoria Falls",
        dates: &["5th - 8th March"],
    },
    TourSeed {
        country: "South Africa",
        month: "March",
        tour_name: "Drakensberg Mountains Hike",
        duration: 4,
        price_per_person: 600,
        highlights: &["Scenic Trails", "Nature"],
        destination: "Drakensberg Mountains",
        dates: &["22nd - 26th March"],
    },
];

/// Immutable nested mapping from canonical country key to month key to an
/// ordered list of tours.
///
/// Keys are case-folded to lowercase at construction. The set of valid month
/// keys is derived once, as the union of month keys across all countries, so
/// a (country, month) pair can be individually valid yet map to no tours.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: BTreeMap<String, BTreeMap<String, Vec<TourRecord>>>,
    months: Vec<String>,
}

impl Catalog {
    /// Build the compiled-in catalog.
    pub fn builtin() -> Self {
        let mut map: BTreeMap<String, BTreeMap<String, Vec<TourRecord>>> = BTreeMap::new();
        for seed in TOUR_DATA {
            map.entry(seed.country.to_string())
                .or_default()
                .entry(seed.month.to_string())
                .or_default()
                .push(TourRecord {
                    tour_name: seed.tour_name.to_string(),
                    duration: seed.duration,
                    price_per_person: seed.price_per_person,
                    highlights: seed.highlights.iter().map(|h| h.to_string()).collect(),
                    destination: seed.destination.to_string(),
                    dates: seed.dates.iter().map(|d| d.to_string()).collect(),
                });
        }
        Self::from_map(map)
    }

    /// Build a catalog from a nested country → month → tours mapping.
    ///
    /// Keys are case-folded to lowercase; the month key set is derived here.
    pub fn from_map(map: BTreeMap<String, BTreeMap<String, Vec<TourRecord>>>) -> Self {
        let mut countries: BTreeMap<String, BTreeMap<String, Vec<TourRecord>>> = BTreeMap::new();
        let mut months = BTreeSet::new();

        for (country, by_month) in map {
            let mut folded: BTreeMap<String, Vec<TourRecord>> = BTreeMap::new();
            for (month, tours) in by_month {
                let month = month.to_lowercase();
                months.insert(month.clone());
                folded.insert(month, tours);
            }
            countries.insert(country.to_lowercase(), folded);
        }

        Self {
            countries,
            months: months.into_iter().collect(),
        }
    }

    /// Canonical country keys in sorted order.
    pub fn country_keys(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Canonical month keys in sorted order (union across all countries).
    pub fn month_keys(&self) -> impl Iterator<Item = &str> {
        self.months.iter().map(String::as_str)
    }

    /// Look up the tours for a canonical (country, month) pair.
    ///
    /// Returns `None` when either key is absent, which is distinct from a
    /// present-but-empty bucket.
    pub fn tours(&self, country: &str, month: &str) -> Option<&[TourRecord]> {
        self.countries
            .get(country)?
            .get(month)
            .map(Vec::as_slice)
    }
}
