//! KMA surface observation response parser
//!
//! Parses the marker-delimited fixed-field text responses of the KMA API
//! hub's hourly surface observation service into weather observations.
//! The response wraps whitespace-separated observation lines between
//! `#START7777` and `#7777END` markers, with comment lines starting with
//! `#` interleaved.

pub mod parser;

#[cfg(test)]
pub mod tests;

pub use parser::KmaResponseParser;
