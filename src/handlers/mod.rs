//! MCP tool handlers
//!
//! Each tool family lives in its own file as an `impl ToolbeltServerHandler`
//! block; the `#[tool]` methods in `lib.rs` only forward to these.

pub mod arith;
pub mod currency;
pub mod todo;
