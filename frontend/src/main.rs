//! Frontend application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use dioxus::logger::tracing;
        use dioxus::server::axum;

        // fail at startup rather than on the first upload
        let settings = backend::config::ApiSettings::from_env()?;
        tracing::info!("Parsing API at {} (timeout {:?})", settings.api_url, settings.timeout);

        anyhow::Ok(dioxus::server::router(App).layer(axum::middleware::from_fn(
            |request: Request, next: Next| async move {
                tracing::debug!("Request: {} {}", request.method(), request.uri().path());
                let res = next.run(request).await;
                tracing::debug!("Response: {}", res.status());
                res
            },
        )))
    });
}
