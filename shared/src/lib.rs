//! Shared library for the schedule Lambda.
//!
//! This crate provides the error taxonomy, configuration, the schedule model and the
//! store and IP lookup clients the handler is built from.

pub mod config;
pub mod error;
pub mod http;
pub mod ip;
pub mod models;
pub mod store;

pub use config::{Config, RouterVariant};
pub use error::{Error, Result};
pub use http::ApiResponse;
pub use ip::{lookup_ip, CheckIpClient, IpLookup, IpLookupResponse};
pub use models::Schedule;
pub use store::{DynamoStore, ScheduleStore};
