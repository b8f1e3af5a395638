//! Collaborator records referenced by the pipeline but owned elsewhere.
//!
//! The order and client tables live in the external row store. These are the
//! boundary DTOs: loosely-shaped rows are converted into them on ingestion so
//! malformed fields never reach the aggregator or the exporters.

use serde::{Deserialize, Serialize};

use crate::hebrew;

/// The engagement an exported meeting list belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRef {
    /// Order identifier.
    pub id: String,
    /// Order title; exports fall back to a placeholder when absent.
    pub title: Option<String>,
    /// Client display name.
    pub client_name: Option<String>,
    /// Agreed/contracted total units, when the order specifies one.
    pub agreed_hours: Option<f64>,
}

impl OrderRef {
    /// Creates an order reference with only an id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            client_name: None,
            agreed_hours: None,
        }
    }

    /// Builder method to set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder method to set the client name.
    pub fn with_client_name(mut self, name: impl Into<String>) -> Self {
        self.client_name = Some(name.into());
        self
    }

    /// Builder method to set the agreed hours.
    pub fn with_agreed_hours(mut self, hours: f64) -> Self {
        self.agreed_hours = Some(hours);
        self
    }

    /// The title to render, falling back to the Hebrew placeholder.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(hebrew::DEFAULT_ORDER_TITLE)
    }
}

/// A client row, as needed for export context (email lookup).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRef {
    /// Client display name.
    pub name: String,
    /// Email address; exports proceed with an empty recipient when absent.
    pub email: Option<String>,
}
