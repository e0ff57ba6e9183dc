//! Consul health API client
//!
//! HTTP implementation of [`HealthQueryClient`](crate::core::traits::HealthQueryClient)
//! for the Consul `/v1/health` endpoints.

mod client;
mod types;

pub use client::{ConsulClient, TOKEN_HEADER};
pub use types::ServiceEntry;
