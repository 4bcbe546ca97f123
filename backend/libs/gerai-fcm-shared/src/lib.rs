//! Gerai FCM Shared Library
//!
//! Firebase Cloud Messaging delivery for Gerai backend services.
//!
//! It handles:
//! - RS256 assertion signing from a Google service account key
//! - OAuth2 JWT-bearer token exchange against the Google token endpoint
//! - Message delivery through the FCM v1 `messages:send` API

pub mod client;
pub mod errors;
pub mod models;

pub use client::FcmClient;
pub use errors::FcmError;
pub use models::{
    AndroidConfig, AndroidNotification, FcmMessage, FcmMessageBody, FcmNotification,
    ServiceAccountKey,
};
