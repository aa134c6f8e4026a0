#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("Server failed: {}", err);
        std::process::exit(1);
    }
}

#[cfg(feature = "ssr")]
async fn run() -> Result<(), Box<dyn std::error::Error>> {
    use axum::ServiceExt;
    use axum::extract::Request;
    use leptos::prelude::*;
    use smartagenda_landing::core::config::Config;
    use smartagenda_landing::server;

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load application config from environment variables
    let config = Config::from_env()?;

    tracing::info!(
        "Config loaded: public_url={}, compression={}",
        config.has_public_url(),
        config.compression
    );

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = server::router(leptos_options, &config);

    tracing::info!("listening on {}", config.display_url(&addr));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
