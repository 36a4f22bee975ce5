use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "taskflow",
    version,
    about = "In-memory task list with a server-rendered web UI"
)]
struct Cli {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on
    #[arg(long, env = "TASKFLOW_PORT", default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskflow=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = taskflow::web::serve(&cli.bind, cli.port).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
