//! Encoded-polyline decoding for route geometries.
//!
//! Routes arrive from the directions service as compact ASCII polylines
//! (delta-coded, zig-zag signed, 5-bit chunks offset by 63). This module
//! decodes them into coordinate sequences for drawing; the planner core
//! only ever works with the decoded points.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Decoding failure for a malformed polyline string.
///
/// The decoder never returns a partial point sequence; any of these means
/// the whole input is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Byte outside the valid encoding range (`?`..`~`).
    #[error("invalid polyline byte 0x{byte:02x} at offset {at}")]
    InvalidByte { byte: u8, at: usize },
    /// Input ended in the middle of a 5-bit chunk sequence.
    #[error("polyline truncated mid-value at offset {at}")]
    TruncatedValue { at: usize },
    /// More continuation chunks than any coordinate delta can occupy.
    #[error("polyline value too long at offset {at}")]
    ValueTooLong { at: usize },
    /// A latitude delta decoded cleanly but its longitude is missing.
    #[error("polyline ended after latitude of point {point}")]
    MissingLongitude { point: usize },
}

/// A route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    /// Creates a polyline from already-decoded points.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }
}

/// Decodes an encoded polyline string into an ordered point sequence.
///
/// An empty string decodes to an empty polyline. Coordinates are
/// accumulated in hundred-thousandths of a degree, so output is exact to
/// 1e-5 degrees.
pub fn decode(encoded: &str) -> Result<Polyline, DecodeError> {
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut index = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while index < bytes.len() {
        lat += decode_delta(bytes, &mut index)?;
        if index >= bytes.len() {
            return Err(DecodeError::MissingLongitude {
                point: points.len(),
            });
        }
        lng += decode_delta(bytes, &mut index)?;

        points.push(GeoPoint::new(lat as f64 * 1e-5, lng as f64 * 1e-5));
    }

    Ok(Polyline::new(points))
}

/// Decodes one signed delta starting at `*index`, advancing the cursor.
///
/// Each byte carries 5 payload bits (little-endian) plus a continuation
/// bit (0x20); the assembled value is zig-zag decoded.
fn decode_delta(bytes: &[u8], index: &mut usize) -> Result<i64, DecodeError> {
    let mut shift = 0u32;
    let mut result: i64 = 0;

    loop {
        let Some(&raw) = bytes.get(*index) else {
            return Err(DecodeError::TruncatedValue { at: *index });
        };
        if !(63..=126).contains(&raw) {
            return Err(DecodeError::InvalidByte {
                byte: raw,
                at: *index,
            });
        }
        *index += 1;

        let chunk = (raw - 63) as i64;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk & 0x20 == 0 {
            break;
        }
        // Deltas are 32-bit values: at most 7 chunks of 5 bits.
        if shift >= 35 {
            return Err(DecodeError::ValueTooLong { at: *index });
        }
    }

    if result & 1 == 1 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}
