//! Cineworld quickbook API client module.
//!
//! Handles HTTP requests to the quickbook endpoints and decodes their JSON
//! envelopes into typed records. The lone `distributors` endpoint lives
//! outside the `quickbook/` namespace on the wire but belongs to the same
//! client.

mod api;
mod client;
mod params;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{CineworldApi, LocalCineworldApi};
pub use client::{CineworldClient, CineworldClientBuilder};
pub use params::{CinemaFilter, DateFilter, FilmFilter, PerformanceQuery, Territory};
pub use types::{Category, Cinema, Distributor, Event, Film, Performance};
