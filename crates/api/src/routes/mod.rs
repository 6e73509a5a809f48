pub mod mcp;
pub mod metrics;
