use clap::Parser;
use precis_web::{AppState, ServerConfig};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize text and extract keywords over HTTP", long_about = None)]
pub struct Cli {
    /// Interface to bind
    #[arg(long, default_value = precis_web::config::DEFAULT_HOST)]
    host: String,
    /// Port to listen on
    #[arg(long, short, default_value_t = precis_web::config::DEFAULT_PORT)]
    port: u16,
}

impl Cli {
    fn server_config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let analyzer = precis_textrank::create_analyzer(None)?;
    info!("🧠 Text analyzer initialized successfully (using {})", analyzer.name());

    let state = AppState::new(analyzer, cli.server_config());
    precis_web::serve(state).await?;

    Ok(())
}
