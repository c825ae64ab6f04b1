//! Quickbook entity records and response envelopes.
//!
//! Field names follow the wire contract. Abbreviated (non-`full`) listings
//! omit most fields, so everything beyond the identifiers defaults rather
//! than failing to decode.

use serde::Deserialize;

/// A single Cineworld site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cinema {
    /// Cinema identifier.
    #[serde(default)]
    pub id: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Web page for the cinema.
    #[serde(default)]
    pub cinema_url: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Postcode.
    #[serde(default)]
    pub postcode: String,
    /// Telephone number.
    #[serde(default)]
    pub telephone: String,
}

/// A film in the listings catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Film {
    /// EDI catalogue identifier, distinct from [`Film::id`].
    #[serde(default)]
    pub edi: u32,
    /// Film title.
    #[serde(default)]
    pub title: String,
    /// Internal film identifier.
    #[serde(default)]
    pub id: u32,
    /// Age classification (e.g. `12A`).
    #[serde(default)]
    pub classification: String,
    /// Advisory text accompanying the classification.
    #[serde(default)]
    pub advisory: String,
    /// Poster image URL.
    #[serde(default)]
    pub poster_url: String,
    /// Still image URL.
    #[serde(default)]
    pub still_url: String,
    /// Web page for the film.
    #[serde(default)]
    pub film_url: String,
}

/// A film category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Category code, used as the `category` filter value.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A promotional event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Event {
    /// Event code, used as the `event` filter value.
    #[serde(default)]
    pub code: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A film distributor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Distributor {
    /// Distributor identifier.
    #[serde(default)]
    pub id: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

/// A single screening of a film at a cinema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Performance {
    /// Start time as the API sends it, never parsed.
    #[serde(default)]
    pub time: String,
    /// Whether tickets are still available.
    #[serde(default)]
    pub available: bool,
    /// Performance type (e.g. `reg`, `vip`).
    #[serde(default, rename = "type")]
    pub performance_type: String,
    /// Direct booking URL.
    #[serde(default)]
    pub booking_url: String,
    /// Whether the screening is subtitled.
    #[serde(default)]
    pub subtitled: bool,
    /// Whether the screening is audio described.
    #[serde(default, rename = "ad")]
    pub audio_described: bool,
}

/// Envelope for `quickbook/cinemas`.
#[derive(Debug, Deserialize)]
pub(crate) struct CinemasResponse {
    /// Cinema list (absent or null when there is no data).
    #[serde(default)]
    cinemas: Option<Vec<Cinema>>,
}

impl CinemasResponse {
    /// Extracts the payload, normalizing absent data to an empty list.
    pub(crate) fn into_items(self) -> Vec<Cinema> {
        self.cinemas.unwrap_or_default()
    }
}

/// Envelope for `quickbook/films`.
#[derive(Debug, Deserialize)]
pub(crate) struct FilmsResponse {
    /// Film list (absent or null when there is no data).
    #[serde(default)]
    films: Option<Vec<Film>>,
}

impl FilmsResponse {
    pub(crate) fn into_items(self) -> Vec<Film> {
        self.films.unwrap_or_default()
    }
}

/// Envelope for `quickbook/dates`.
#[derive(Debug, Deserialize)]
pub(crate) struct DatesResponse {
    /// `YYYYMMDD` date strings (absent or null when there is no data).
    #[serde(default)]
    dates: Option<Vec<String>>,
}

impl DatesResponse {
    pub(crate) fn into_items(self) -> Vec<String> {
        self.dates.unwrap_or_default()
    }
}

/// Envelope for `quickbook/performances`.
#[derive(Debug, Deserialize)]
pub(crate) struct PerformancesResponse {
    /// Performance list (absent or null when there is no data).
    #[serde(default)]
    performances: Option<Vec<Performance>>,
}

impl PerformancesResponse {
    pub(crate) fn into_items(self) -> Vec<Performance> {
        self.performances.unwrap_or_default()
    }
}

/// Envelope for `quickbook/categories`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    /// Category list (absent or null when there is no data).
    #[serde(default)]
    categories: Option<Vec<Category>>,
}

impl CategoriesResponse {
    pub(crate) fn into_items(self) -> Vec<Category> {
        self.categories.unwrap_or_default()
    }
}

/// Envelope for `quickbook/events`.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsResponse {
    /// Event list (absent or null when there is no data).
    #[serde(default)]
    events: Option<Vec<Event>>,
}

impl EventsResponse {
    pub(crate) fn into_items(self) -> Vec<Event> {
        self.events.unwrap_or_default()
    }
}

/// Envelope for `distributors`.
#[derive(Debug, Deserialize)]
pub(crate) struct DistributorsResponse {
    /// Distributor list (absent or null when there is no data).
    #[serde(default)]
    distributors: Option<Vec<Distributor>>,
}

impl DistributorsResponse {
    pub(crate) fn into_items(self) -> Vec<Distributor> {
        self.distributors.unwrap_or_default()
    }
}
