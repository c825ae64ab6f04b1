//! Typed client library for the Cineworld quickbook listings API.
//!
//! Wraps the GET endpoints under `http://www.cineworld.com/api/` and decodes
//! their JSON envelopes into plain records.

/// Error types shared by all API operations.
pub mod error;

/// Quickbook API client.
pub mod quickbook;
