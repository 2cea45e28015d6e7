//! USB endpoint selection
//!
//! The host enumerates every HID endpoint of the device and asks which ones
//! carry lighting reports. Only the vendor collection on interface 1 does.

use serde::Deserialize;

use crate::config::ENDPOINT;

/// HID endpoint as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EndpointDescriptor {
    pub interface: i32,
    pub usage: u16,
    pub usage_page: u16,
    /// Not every platform reports a collection
    #[serde(default)]
    pub collection: Option<u16>,
}

impl EndpointDescriptor {
    pub const fn new(interface: i32, usage: u16, usage_page: u16) -> Self {
        Self {
            interface,
            usage,
            usage_page,
            collection: None,
        }
    }

    #[must_use]
    pub const fn with_collection(mut self, collection: u16) -> Self {
        self.collection = Some(collection);
        self
    }

    /// Parse the host's endpoint object
    pub fn from_json(json: &str) -> Option<Self> {
        serde_json_core::from_str::<Self>(json)
            .ok()
            .map(|(endpoint, _)| endpoint)
    }

    /// Whether this endpoint accepts lighting reports
    pub const fn is_lighting_endpoint(&self) -> bool {
        self.interface == ENDPOINT.interface
            && self.usage == ENDPOINT.usage
            && self.usage_page == ENDPOINT.usage_page
            && matches!(self.collection, Some(c) if c == ENDPOINT.collection)
    }
}

/// Endpoint predicate handed to the host
pub const fn validate(endpoint: &EndpointDescriptor) -> bool {
    endpoint.is_lighting_endpoint()
}
