pub mod models;
pub mod validation;

// Re-export commonly used types
pub use models::{Field, MashupForm, MashupRequest};
