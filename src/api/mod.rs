pub mod client;
pub mod dto;

// Re-export commonly used types
pub use client::{ApiError, MashupApi};
