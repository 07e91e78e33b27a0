use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::article_session::ArticleSessionStore;
use crate::routes::Route;
const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(ArticleSessionStore::new);

    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            GlobalErrorBoundary {
                boundary_name: "App".to_string(),
                Router::<Route> {}
            }
        }
    }
}
