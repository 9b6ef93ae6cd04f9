//! MCP protocol surface
//!
//! - `tools`: static catalog and argument validation
//! - `handler`: `ServerHandler` implementation and error channel mapping

mod handler;
pub mod tools;

pub use handler::{ClojarsServer, SERVER_NAME};
pub use tools::ToolRequest;
