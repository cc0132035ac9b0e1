//! Client for the remote Tutoring Service.
mod client;
mod error;
mod models;

pub use client::{HttpTutorService, TutorService};
pub use error::TransportError;
pub use models::{ChatRequest, ChatResponse, HealthStatus};
