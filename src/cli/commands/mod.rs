//! CLI command implementations.

mod agent;
mod config;
mod doctor;
mod script;
mod tool;

pub use agent::run_agent;
pub use config::run_config;
pub use doctor::run_doctor;
pub use script::run_script;
pub use tool::run_tool;
