//! Credential decoding and expiry validation (panic-free).
//!
//! A credential is a three-segment dot-separated token. Only the middle
//! segment is read: base64url-decoded, then parsed as a JSON object carrying a
//! numeric `exp` (seconds since epoch). The header is not inspected and the
//! signature is not verified; this module judges expiry, not authenticity.
//!
//! Decoding rules:
//! - Padding on the payload segment is optional.
//! - The standard alphabet (`+`, `/`) is folded into the URL-safe one.
//! - Any failure is a [`DecodeError`], which [`is_valid`] collapses to `false`.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, NO_PAD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Largest magnitude (ms since epoch) a timestamp may have before it is
/// treated as out of range.
pub const MAX_TIME_MS: f64 = 8.64e15;

const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    NO_PAD
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Why a present credential could not be turned into a claim set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected 3 segments, got {0}")]
    Segments(usize),
    #[error("payload segment is not valid base64url")]
    Base64,
    #[error("payload is not a claim set: {0}")]
    Json(String),
}

impl DecodeError {
    /// Stable short code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            DecodeError::Segments(_) => "SEGMENTS",
            DecodeError::Base64 => "BASE64",
            DecodeError::Json(_) => "JSON",
        }
    }
}

/// Decoded claim set. Only `exp` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Expiration, seconds since epoch (may be fractional).
    pub exp: f64,
    /// Remaining claims, untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Claims {
    /// Expiration instant in whole milliseconds since epoch, or `None` when it
    /// falls outside the representable time range.
    pub fn expiration_ms(&self) -> Option<f64> {
        let ms = (self.exp * 1000.0).trunc();
        if ms.is_finite() && ms.abs() <= MAX_TIME_MS {
            Some(ms)
        } else {
            None
        }
    }

    /// Strictly-in-the-future check. Equality counts as expired.
    pub fn is_live_at(&self, now: SystemTime) -> bool {
        match self.expiration_ms() {
            Some(exp_ms) => exp_ms > unix_millis(now),
            None => false,
        }
    }
}

/// Decode the claim set of a token.
pub fn decode_claims(token: &str) -> Result<Claims, DecodeError> {
    let segments: Vec<&str> = token.split('.').collect();
    let [_header, payload, _signature] = segments.as_slice() else {
        return Err(DecodeError::Segments(segments.len()));
    };

    let payload: String = payload
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            c => c,
        })
        .collect();

    let raw = PAYLOAD_ENGINE
        .decode(payload.as_bytes())
        .map_err(|_| DecodeError::Base64)?;

    serde_json::from_slice(&raw).map_err(|e| DecodeError::Json(e.to_string()))
}

/// `true` iff a credential is present, decodes, and has not expired at `now`.
///
/// An empty string is treated as absent.
pub fn is_valid(credential: Option<&str>, now: SystemTime) -> bool {
    let Some(token) = credential.filter(|t| !t.is_empty()) else {
        return false;
    };

    match decode_claims(token) {
        Ok(claims) => claims.is_live_at(now),
        Err(e) => {
            tracing::trace!(code = e.code(), error = %e, "credential decode failed");
            false
        }
    }
}

/// Whole milliseconds since epoch; negative before it.
fn unix_millis(t: SystemTime) -> f64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_millis() as f64,
        Err(e) => -(e.duration().as_millis() as f64),
    }
}
