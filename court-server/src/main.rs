use court_server::core::{self, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    court_server::init_logger();
    court_server::print_banner();

    let config = Config::from_env();
    tracing::info!(
        port = config.http_port,
        environment = %config.environment,
        "Starting court server"
    );

    core::run(config).await
}
