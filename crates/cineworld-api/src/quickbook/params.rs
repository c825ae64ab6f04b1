//! Quickbook request parameter types and query assembly.

use std::fmt::Display;

use crate::error::{CineworldError, Result};

/// Market region selector for listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Territory {
    /// The default territory. Emits no query parameter.
    #[default]
    UnitedKingdom,
    /// Irish listings. The only member that emits a territory parameter.
    Ireland,
}

impl Territory {
    /// Wire value for the territory parameter.
    const fn description(self) -> &'static str {
        match self {
            Self::UnitedKingdom => "GB",
            Self::Ireland => "IE",
        }
    }
}

/// Filters for the cinemas listing.
#[derive(Debug, Clone, Default)]
pub struct CinemaFilter {
    /// Market territory.
    pub territory: Territory,
    /// Request the full cinema record instead of the abbreviated listing.
    pub full_details: bool,
    /// Restrict to cinemas showing any of these film EDIs.
    pub film_edis: Vec<u32>,
    /// Restrict to cinemas with performances on these `YYYYMMDD` dates.
    pub dates: Vec<String>,
    /// Restrict to a single cinema.
    pub cinema_id: Option<u32>,
    /// Restrict to a film category code.
    pub category_code: Option<String>,
    /// Restrict to an event code.
    pub event_code: Option<String>,
    /// Restrict to a distributor.
    pub distributor_id: Option<u32>,
}

impl CinemaFilter {
    pub(crate) fn filters(&self) -> FilterSet<'_> {
        FilterSet {
            territory: self.territory,
            full_details: self.full_details,
            film_edis: &self.film_edis,
            dates: &self.dates,
            cinema_id: self.cinema_id,
            category_code: self.category_code.as_deref(),
            event_code: self.event_code.as_deref(),
            distributor_id: self.distributor_id,
            ..FilterSet::default()
        }
    }
}

/// Filters for the films listing.
#[derive(Debug, Clone, Default)]
pub struct FilmFilter {
    /// Market territory.
    pub territory: Territory,
    /// Request the full film record instead of the abbreviated listing.
    pub full_details: bool,
    /// Restrict to films with performances on these `YYYYMMDD` dates.
    pub dates: Vec<String>,
    /// Restrict to films showing at any of these cinemas.
    pub cinema_ids: Vec<u32>,
    /// Restrict to a film category code.
    pub category_code: Option<String>,
    /// Restrict to an event code.
    pub event_code: Option<String>,
    /// Restrict to a single film.
    pub film_id: Option<u32>,
    /// Restrict to a distributor.
    pub distributor_id: Option<u32>,
}

impl FilmFilter {
    pub(crate) fn filters(&self) -> FilterSet<'_> {
        FilterSet {
            territory: self.territory,
            full_details: self.full_details,
            dates: &self.dates,
            cinema_ids: &self.cinema_ids,
            category_code: self.category_code.as_deref(),
            event_code: self.event_code.as_deref(),
            film_id: self.film_id,
            distributor_id: self.distributor_id,
            ..FilterSet::default()
        }
    }
}

/// Filters for the dates listing.
#[derive(Debug, Clone, Default)]
pub struct DateFilter {
    /// Market territory.
    pub territory: Territory,
    /// Restrict to a single cinema.
    pub cinema_id: Option<u32>,
    /// Restrict to a single film.
    pub film_id: Option<u32>,
    /// Restrict to a film category code.
    pub category_code: Option<String>,
    /// Restrict to an event code.
    pub event_code: Option<String>,
    /// Restrict to a distributor.
    pub distributor_id: Option<u32>,
}

impl DateFilter {
    pub(crate) fn filters(&self) -> FilterSet<'_> {
        FilterSet {
            territory: self.territory,
            cinema_id: self.cinema_id,
            film_id: self.film_id,
            category_code: self.category_code.as_deref(),
            event_code: self.event_code.as_deref(),
            distributor_id: self.distributor_id,
            ..FilterSet::default()
        }
    }
}

/// Query for the performances listing.
///
/// `cinema_id`, `film_id`, and `date` are required by the endpoint and are
/// validated, in that order, before any request is sent.
#[derive(Debug, Clone, Default)]
pub struct PerformanceQuery {
    /// The cinema to list performances for. Required.
    pub cinema_id: Option<u32>,
    /// The film to list performances for. Required.
    pub film_id: Option<u32>,
    /// Performance date, `YYYYMMDD`. Required, non-empty.
    pub date: Option<String>,
    /// Market territory.
    pub territory: Territory,
    /// Marketing campaign tag, appended verbatim when non-empty.
    pub campaign: Option<String>,
}

impl PerformanceQuery {
    /// Checks the required fields in the order cinema, film, date.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.cinema_id.is_none() {
            return Err(CineworldError::InvalidArgument("cinema_id"));
        }
        if self.film_id.is_none() {
            return Err(CineworldError::InvalidArgument("film_id"));
        }
        if self.date.as_deref().is_none_or(str::is_empty) {
            return Err(CineworldError::InvalidArgument("date"));
        }
        Ok(())
    }

    pub(crate) fn filters(&self) -> FilterSet<'_> {
        FilterSet {
            territory: self.territory,
            cinema_id: self.cinema_id,
            film_id: self.film_id,
            performance_date: self.date.as_deref(),
            ..FilterSet::default()
        }
    }
}

/// The shared assembly routine's full input set.
///
/// Slots are applied in a fixed order; a later slot targeting the same
/// parameter name replaces the earlier entry's value. That is what lets the
/// late `cinema_ids`, `film_id`, and `performance_date` slots win over their
/// earlier counterparts.
#[derive(Debug, Default)]
pub(crate) struct FilterSet<'a> {
    pub(crate) territory: Territory,
    pub(crate) full_details: bool,
    pub(crate) film_edis: &'a [u32],
    pub(crate) dates: &'a [String],
    pub(crate) cinema_id: Option<u32>,
    pub(crate) category_code: Option<&'a str>,
    pub(crate) event_code: Option<&'a str>,
    pub(crate) distributor_id: Option<u32>,
    pub(crate) cinema_ids: &'a [u32],
    pub(crate) film_id: Option<u32>,
    pub(crate) performance_date: Option<&'a str>,
}

impl FilterSet<'_> {
    /// Applies the filter slots to the query map in assembly order.
    pub(crate) fn apply(&self, query: &mut QueryMap) {
        if self.territory == Territory::Ireland {
            // sic: the live API expects this spelling
            query.insert_text("terriroty", self.territory.description());
        }
        if self.full_details {
            query.insert_raw("full", String::from("true"));
        }
        if !self.film_edis.is_empty() {
            query.insert_list("film", self.film_edis);
        }
        if !self.dates.is_empty() {
            query.insert_list("date", self.dates);
        }
        if let Some(id) = self.cinema_id {
            query.insert_raw("cinema", id.to_string());
        }
        if let Some(code) = self.category_code.filter(|c| !c.is_empty()) {
            query.insert_text("category", code);
        }
        if let Some(code) = self.event_code.filter(|c| !c.is_empty()) {
            query.insert_text("event", code);
        }
        if let Some(id) = self.distributor_id {
            query.insert_raw("distributor", id.to_string());
        }
        if !self.cinema_ids.is_empty() {
            query.insert_list("cinema", self.cinema_ids);
        }
        if let Some(id) = self.film_id {
            query.insert_raw("film", id.to_string());
        }
        if let Some(date) = self.performance_date.filter(|d| !d.is_empty()) {
            query.insert_text("date", date);
        }
    }
}

/// Ordered query-parameter map seeded with the mandatory `key` parameter.
///
/// Values are stored fully encoded. A collapsed list entry carries literal
/// `&name=value` fragments, so the rendered query string reconstitutes
/// repeated keys on the wire. Re-inserting a name replaces the existing
/// entry's value in place.
#[derive(Debug)]
pub(crate) struct QueryMap {
    pairs: Vec<(&'static str, String)>,
}

impl QueryMap {
    /// Creates a map holding only the `key` parameter.
    pub(crate) fn new(api_key: &str) -> Self {
        Self {
            pairs: vec![("key", urlencoding::encode(api_key).into_owned())],
        }
    }

    /// Inserts an already-encoded value.
    pub(crate) fn insert_raw(&mut self, name: &'static str, value: String) {
        if let Some(pair) = self.pairs.iter_mut().find(|(n, _)| *n == name) {
            pair.1 = value;
        } else {
            self.pairs.push((name, value));
        }
    }

    /// Inserts a text value, percent-encoding it.
    fn insert_text(&mut self, name: &'static str, value: &str) {
        self.insert_raw(name, urlencoding::encode(value).into_owned());
    }

    /// Collapses a list into one entry whose value embeds a `&name=value`
    /// fragment for every element after the first. Input order is kept and
    /// duplicates are not removed; a single element yields a plain value.
    fn insert_list<T: Display>(&mut self, name: &'static str, items: &[T]) {
        let mut iter = items.iter();
        let Some(first) = iter.next() else {
            return;
        };
        let mut value = encode_component(first);
        for item in iter {
            value.push('&');
            value.push_str(name);
            value.push('=');
            value.push_str(&encode_component(item));
        }
        self.insert_raw(name, value);
    }

    /// Renders the `name=value` pairs joined with `&`.
    pub(crate) fn into_query_string(self) -> String {
        let mut out = String::new();
        for (name, value) in self.pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(name);
            out.push('=');
            out.push_str(&value);
        }
        out
    }
}

/// Percent-encodes a single query-value component.
fn encode_component<T: Display>(value: &T) -> String {
    urlencoding::encode(&value.to_string()).into_owned()
}
