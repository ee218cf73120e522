//! MobilSoeg profile client
//!
//! Thin async client for the MobilSoeg part of the profile service: saving,
//! updating and removing likes, setting the pickup agency and looking a
//! profile up by agency and loaner id. Each operation is a single HTTP
//! request whose raw response is handed back to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use config::{ClientConfig, ConfigurationError, Settings};
pub use models::{
    FindProfileRequest, RawResponse, RemoveAllLikesRequest, RemoveLikeRequest, SaveLikeRequest,
    UpdateLikeRequest, UpdatePickupAgencyRequest,
};
pub use services::{ProfileClient, ReqwestTransport, Transport, TransportError, TransportFailure};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let client = ProfileClient::new(Some(&ClientConfig::new("http://host/"))).unwrap();
        assert_eq!(client.endpoint(), "http://host/");
    }
}
