use article_search::articles::handlers::router;
use article_search::config::Config;
use article_search::engine::client::ElasticsearchClient;
use article_search::ingestion::seed_index;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            eprintln!(
                "Usage: article-search [--bind <addr:port>] [--es-url <url>] [--index <name>] \
                 [--timeout <secs>] [--log-level <level>] [--seed]"
            );
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!(
        "Using search engine {} (index {})",
        config.es_url,
        config.index
    );

    let client = Arc::new(ElasticsearchClient::from_config(&config));

    // 1. Optional index reset + sample data:
    if config.seed_on_start {
        tracing::info!("Seeding index {}", config.index);
        if let Err(e) = seed_index(&client).await {
            tracing::error!("Failed to initialize index: {:#}", e);
            return Err(e);
        }
    }

    // 2. HTTP Router:
    let app = router(client);

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
