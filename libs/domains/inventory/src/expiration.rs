//! Expiration dates: clients send `DD/MM/YYYY`, the store keeps a `DATE`
//! and reads come back as `YYYY-MM-DD`.
//!
//! The canonical form is accepted on input too, so a product read from the
//! API can be sent back unchanged.

use chrono::NaiveDate;

use crate::error::{StoreError, StoreResult};

const INPUT_FORMAT: &str = "%d/%m/%Y";
const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Parse an expiration in either accepted form. Impossible dates such as
/// `31/02/2024` fail with [`StoreError::DateParseError`], as does anything
/// that is not exactly two-digit day and month with a four-digit year.
pub fn parse(input: &str) -> StoreResult<NaiveDate> {
    [INPUT_FORMAT, CANONICAL_FORMAT]
        .into_iter()
        .find_map(|layout| parse_strict(input, layout))
        .ok_or(StoreError::DateParseError)
}

/// chrono accepts unpadded fields and short years; the layout must round-trip.
fn parse_strict(input: &str, layout: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, layout)
        .ok()
        .filter(|date| date.format(layout).to_string() == input)
}

pub fn format(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// `DD/MM/YYYY` (or already canonical) → `YYYY-MM-DD`
pub fn normalize(input: &str) -> StoreResult<String> {
    parse(input).map(format)
}
