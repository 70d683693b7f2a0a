//! Dataset metadata for generation provenance and seeding

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Metadata identifying one generation run
///
/// The UUID doubles as the RNG seed source, so a dataset can be regenerated
/// bit-for-bit from its metadata alone. UUIDs are JSON-safe (serialized as
/// strings), which keeps seeds intact across language boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetMetadata {
    /// Unique identifier for this run (also the RNG seed source)
    pub id: Uuid,

    /// Optional proper name for the run
    ///
    /// Most runs use only the auto-generated `catalog_name()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DatasetMetadata {
    /// Derive a u64 seed from the UUID for RNG initialization
    ///
    /// Uses the first 8 bytes of the UUID, so the same UUID always yields
    /// the same seed.
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    /// Generate a short catalog designation from the UUID
    ///
    /// Format: two uppercase letters + 4 digits (e.g. "JV-4729").
    /// Deterministic: the same UUID always produces the same designation.
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }

    /// Returns the display name: proper name if set, otherwise catalog name
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }

    /// Create metadata with a random UUID
    pub fn new_random() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
        }
    }

    /// Create metadata with a specific UUID
    ///
    /// Useful for restoring a run from previously saved metadata.
    pub fn with_id(id: Uuid) -> Self {
        Self { id, name: None }
    }

    /// Create metadata with a deterministic UUID derived from a seed string
    ///
    /// The same `seed_name` always produces the same UUID, and therefore the
    /// same RNG seed. This does NOT set the display name; use `with_name()`
    /// for that.
    pub fn from_seed_name(seed_name: &str) -> Self {
        Self {
            id: Uuid::new_v5(&Uuid::NAMESPACE_OID, seed_name.as_bytes()),
            name: None,
        }
    }

    /// Set a proper name for this run (builder pattern)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
