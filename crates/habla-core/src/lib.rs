pub mod cache;
pub mod error;
pub mod grammar;
pub mod header;
pub mod language;
pub mod orchestrator;
pub mod postprocess;
pub mod preprocess;
pub mod types;

pub use orchestrator::{ChatMessage, Orchestrator};
