// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod challenge;
pub mod content;
pub mod render;
pub mod runtime;
pub mod selection;
pub mod session;
