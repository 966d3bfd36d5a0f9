//! Service model
//!
//! An organizational department of the commune. Read-only in this
//! application; the canonical service names double as the controlled
//! vocabulary targeted by the service-name normalizer.

use serde::{Deserialize, Serialize};

use super::ids::ServiceId;

/// A municipal service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMunicipal {
    /// Unique identifier
    pub id: ServiceId,

    /// Canonical service name
    pub nom: String,

    /// Head of service
    pub responsable: String,

    /// Contact email
    pub email: String,
}

impl ServiceMunicipal {
    /// Create a new service with a fresh ID
    pub fn new(
        nom: impl Into<String>,
        responsable: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: ServiceId::new(),
            nom: nom.into(),
            responsable: responsable.into(),
            email: email.into(),
        }
    }
}
