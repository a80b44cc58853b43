//! Observation wire encoding

use serde::ser::Error as _;

use crate::app::models::CanonicalObservation;
use crate::{Error, Result};

/// Serializes a canonical observation into a message payload
pub trait ObservationEncoder {
    fn encode(&self, observation: &CanonicalObservation) -> Result<Vec<u8>>;
}

/// JSON encoding using the FITS field names
///
/// `DateTime` is written as an RFC 3339 UTC timestamp. Non-finite values
/// have no JSON representation and are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl ObservationEncoder for JsonEncoder {
    fn encode(&self, observation: &CanonicalObservation) -> Result<Vec<u8>> {
        let context = || {
            format!(
                "site {} type {} at {}",
                observation.site_id, observation.type_id, observation.timestamp
            )
        };

        if !observation.value.is_finite() || !observation.error.is_finite() {
            return Err(Error::encode(
                context(),
                serde_json::Error::custom(format!("non-finite value {}", observation.value)),
            ));
        }

        serde_json::to_vec(observation).map_err(|e| Error::encode(context(), e))
    }
}
