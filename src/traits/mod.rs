//! Trait abstractions for external collaborators.
//!
//! The only seam today is HTTP: the API client talks to the backend
//! through [`HttpClient`] so tests can swap in a mock transport.

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
