use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is unset: mock table changes and intercepted
/// calls are logged, everything else at `info`.
pub const DEFAULT_DIRECTIVES: &str = "info,grpcmock=debug";

/// Initialize JSON tracing on stdout, filtered by `RUST_LOG` or
/// [`DEFAULT_DIRECTIVES`]. Call once at startup.
///
/// Later calls are ignored.
pub fn init_tracing() {
    init_tracing_with(std::io::stdout);
}

/// Like [`init_tracing`], but logs go to stderr so they stay out of an
/// interactive session on stdout.
pub fn init_tracing_stderr() {
    init_tracing_with(std::io::stderr);
}

fn init_tracing_with<W>(writer: W)
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(writer))
        .try_init();
}
