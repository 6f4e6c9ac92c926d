//! Bored API client.

mod client;

pub use client::{ActivitySource, BoredClient, DEFAULT_API_URL};
