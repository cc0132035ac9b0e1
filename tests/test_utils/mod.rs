//! Test utilities for integration tests
#![allow(dead_code)]
use std::time::Duration;

use tutor::chat::Controller;
use tutor::service::HttpTutorService;

/// A client pointed at `url` with a short timeout so failing tests
/// don't hang.
pub fn test_service(url: &str) -> HttpTutorService {
    HttpTutorService::new(url, Duration::from_secs(5))
}

pub fn test_controller(url: &str) -> Controller<HttpTutorService> {
    Controller::new(test_service(url))
}

/// An address nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
