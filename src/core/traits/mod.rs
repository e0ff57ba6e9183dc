//! Core traits module
//!
//! Contains the registry client interface the evaluator is written against

pub mod health_client;

pub use health_client::HealthQueryClient;
