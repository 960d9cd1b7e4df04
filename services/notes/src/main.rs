use std::net::SocketAddr;

use anyhow::Context as _;
use tracing::info;

use grpcmock::GrpcMock;
use grpcmock_common::config::Config;
use grpcmock_common::tracing::init_tracing;
use grpcmock_notes::config::NotesConfig;
use grpcmock_notes::demo;
use grpcmock_notes::grpc_server::notes_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = NotesConfig::from_env()?;
    let addr: SocketAddr = config
        .notes_grpc_addr
        .parse()
        .with_context(|| format!("invalid NOTES_GRPC_ADDR {:?}", config.notes_grpc_addr))?;

    let mock = GrpcMock::new();
    demo::install(&mock);

    info!(%addr, "notes mock server listening");
    tonic::transport::Server::builder()
        .add_service(notes_server(&mock))
        .serve_with_shutdown(addr, shutdown_signal())
        .await
        .context("gRPC server error")?;

    info!("notes mock server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
