//! `CineworldApi` trait definition.
#![allow(clippy::future_not_send)]

use crate::error::Result;

use super::params::{CinemaFilter, DateFilter, FilmFilter, PerformanceQuery};
use super::types::{Category, Cinema, Distributor, Event, Film, Performance};

/// Cineworld quickbook API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(CineworldApi: Send)]
pub trait LocalCineworldApi {
    /// Lists cinemas matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn cinemas(&self, filter: &CinemaFilter) -> Result<Vec<Cinema>>;

    /// Lists films matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn films(&self, filter: &FilmFilter) -> Result<Vec<Film>>;

    /// Lists dates (as `YYYYMMDD` strings) with performances matching the
    /// filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn dates(&self, filter: &DateFilter) -> Result<Vec<String>>;

    /// Lists performances for a cinema, film, and date.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, if `cinema_id`, `film_id`,
    /// or `date` is missing, or if the HTTP request or JSON decoding fails.
    async fn performances(&self, query: &PerformanceQuery) -> Result<Vec<Performance>>;

    /// Lists all film categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn categories(&self) -> Result<Vec<Category>>;

    /// Lists all events.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn events(&self) -> Result<Vec<Event>>;

    /// Lists all film distributors.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is unset, or if the HTTP request or
    /// JSON decoding fails.
    async fn distributors(&self) -> Result<Vec<Distributor>>;
}
