use common::config::SearchConfig;
use dioxus::prelude::*;

use crate::api::search_api::SearchApi;
use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

/// Root component. The host application supplies the search service and
/// optionally the configuration; everything below reads them from context.
#[component]
pub fn SearchApp(
    search_api: SearchApi,
    #[props(default = config_from_environment())] config: SearchConfig,
) -> Element {
    use_context_provider(|| search_api.clone());
    use_context_provider(|| config);

    rsx! {
        document::Link { rel: "preconnect", href: "https://fonts.googleapis.com" }
        document::Link { rel: "preconnect", href: "https://fonts.gstatic.com" }
        document::Link { rel: "stylesheet", href: "https://fonts.googleapis.com/css2?family=Roboto:ital,wght@0,100..900;1,100..900&display=swap" }

        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}

/// `KESSLER_*` settings: baked in at build time for the web, read from the
/// process environment on desktop and mobile.
pub fn config_from_environment() -> SearchConfig {
    if cfg!(target_arch = "wasm32") {
        SearchConfig::from_build_env()
    } else {
        SearchConfig::from_env()
    }
}

/// Call once before launching, e.g. with [`config_from_environment`];
/// a second call is a no-op.
pub fn init_logging(config: &SearchConfig) {
    if dioxus::logger::init(config.log_level).is_err() {
        dioxus::logger::tracing::debug!("logger already initialized");
    }
}
