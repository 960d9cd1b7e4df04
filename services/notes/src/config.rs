use serde::Deserialize;

use grpcmock_common::config::Config;

/// Notes mock server configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct NotesConfig {
    /// Address the gRPC server listens on (default `127.0.0.1:5050`).
    /// Env var: `NOTES_GRPC_ADDR`.
    #[serde(default = "default_grpc_addr")]
    pub notes_grpc_addr: String,
}

fn default_grpc_addr() -> String {
    "127.0.0.1:5050".to_owned()
}

impl Config for NotesConfig {}
