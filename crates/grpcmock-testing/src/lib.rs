//! Test utilities for grpcmock.
//!
//! Provides `TestServer`, an in-process tonic server on an ephemeral port.
//! Import from tests only — never in production code.

pub mod grpc;

pub use grpc::TestServer;
