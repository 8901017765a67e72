pub mod cli;
pub mod commands;
mod context;
pub mod orchestrator;
pub mod provisioners;

pub use context::{AppContext, ServiceTarget};
