//! grep-mcp tool surface.
//!
//! Schemas live in `schemas`, request handling in `dispatch`.

mod dispatch;
mod schemas;

pub use dispatch::GrepService;
