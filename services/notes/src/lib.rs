pub mod config;
pub mod demo;
pub mod grpc_server;
