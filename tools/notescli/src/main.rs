use anyhow::Context as _;
use clap::Parser;

use grpcmock_common::tracing::init_tracing_stderr;
use notescli::{NotesCli, session};

#[derive(Parser)]
#[command(about = "Read notes from a Notes gRPC server")]
struct Args {
    /// Address of the Notes server (e.g. localhost:5050)
    server_addr: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing_stderr();
    let args = Args::parse();

    let cli = NotesCli::connect(&args.server_addr)
        .await
        .with_context(|| format!("connect to {}", args.server_addr))?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    session::run(&cli, stdin, &mut std::io::stdout()).await?;
    Ok(())
}
