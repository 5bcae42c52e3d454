//! Content-manager agent.
//!
//! An LLM loop that answers channel-management requests by calling the
//! same analytics, research and script tools the CLI exposes.

mod runner;
mod tools;

pub use runner::{Agent, AgentResponse, ToolCallRecord};
pub use tools::{
    parse_tool_call, tool_definitions, ToolCall, ToolContext, ToolOutput, TOOL_NAMES,
};
