//! HTTP router: the Leptos pages, the `/pkg` bundle and static files.
//!
//! Trailing slashes are trimmed before routing, so `/foco/` serves the same
//! page (and status) as `/foco`.

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower::Layer;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::app::{App, shell};
use crate::core::config::Config;
use crate::core::content::PublicUrl;

/// Build the application service
pub fn router(leptos_options: LeptosOptions, config: &Config) -> NormalizePath<Router> {
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    // Create ServeDir for pkg with pre-compressed file support
    // This serves .br (brotli) and .gz (gzip) files automatically
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let public_url = PublicUrl::new(config.public_url.clone());

    let app = Router::new()
        // Serve pre-compressed static assets from /pkg
        .nest_service("/pkg", pkg_service)
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(public_url.clone()),
            {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    // Brotli first, gzip as the fallback
    let app = if config.compression {
        app.layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        )
    } else {
        app
    };

    NormalizePathLayer::trim_trailing_slash().layer(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PageVariant;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_options() -> LeptosOptions {
        LeptosOptions::builder().output_name("smartagenda").build()
    }

    async fn get(config: &Config, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = router(test_options(), config).oneshot(request).await.unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_variant_routes_render_ok() {
        let config = Config::default();

        for variant in PageVariant::ALL {
            let (status, body) = get(&config, variant.path()).await;

            assert_eq!(status, StatusCode::OK, "{}", variant.path());
            assert!(body.contains(variant.seo().title), "{}", variant.path());
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_trailing_slash_serves_variant() {
        let (status, body) = get(&Config::default(), "/foco/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(PageVariant::Focus.seo().title));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unknown_path_is_not_found() {
        let (status, body) = get(&Config::default(), "/precos").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Página não encontrada"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_public_url_makes_links_absolute() {
        let config = Config {
            public_url: Some("https://smartagenda.com.br".to_string()),
            compression: false,
        };

        let (status, body) = get(&config, "/campanha").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("https://smartagenda.com.br/campanha"));
        assert!(body.contains("https://smartagenda.com.br/images/banner-conversion.svg"));
    }
}
