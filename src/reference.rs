//! Notification payload linking a queue message to a stored object.
//!
//! The payload is a fixed-schema JSON record with an explicit format version.
//! Decoding rejects anything that does not match the schema exactly, so a
//! consumer can never silently extract the wrong field from a drifted
//! producer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bumped whenever the wire shape changes incompatibly.
pub const REFERENCE_FORMAT_VERSION: u32 = 1;

/// Identifies one stored object by (bucket, key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectReference {
    pub bucket: String,
    pub key: String,
}

#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("malformed object reference: {reason}")]
    Malformed { reason: String },
}

/// On-the-wire shape. Kept separate from [`ObjectReference`] so the version
/// field never leaks into application code.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct WireReference {
    version: u32,
    bucket: String,
    key: String,
}

impl ObjectReference {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Serialize into the versioned wire record.
    pub fn encode(&self) -> String {
        let wire = WireReference {
            version: REFERENCE_FORMAT_VERSION,
            bucket: self.bucket.clone(),
            key: self.key.clone(),
        };
        // A struct of two strings and an integer always serializes.
        serde_json::to_string(&wire).expect("serializing an object reference cannot fail")
    }

    /// Parse a message body back into a reference.
    ///
    /// Fails with [`ReferenceError::Malformed`] on invalid JSON, missing or
    /// unknown fields, and version mismatch.
    pub fn decode(body: &str) -> Result<Self, ReferenceError> {
        let wire: WireReference =
            serde_json::from_str(body).map_err(|e| ReferenceError::Malformed {
                reason: e.to_string(),
            })?;

        if wire.version != REFERENCE_FORMAT_VERSION {
            return Err(ReferenceError::Malformed {
                reason: format!(
                    "unsupported reference version {} (expected {})",
                    wire.version, REFERENCE_FORMAT_VERSION
                ),
            });
        }

        Ok(Self {
            bucket: wire.bucket,
            key: wire.key,
        })
    }
}
