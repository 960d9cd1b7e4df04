//! Startup plumbing shared by the grpcmock binaries.

pub mod config;
pub mod tracing;
