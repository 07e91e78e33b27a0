//! Top bar and page layout.

use dioxus::prelude::*;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Theme {
    Light,
    Dark,
}

impl Theme {
    fn class(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Shared layout: brand, theme switch, then the routed page.
#[component]
pub fn Navbar() -> Element {
    let theme = use_signal(|| Theme::Light);

    rsx! {
        div {
            id: "x-nav-container",
            class: "{theme().class()}",

            header {
                id: "x-nav-topbar",
                Link {
                    class: "brand",
                    to: Route::UploadPage {},
                    img { src: asset!("/assets/favicon.svg"), alt: "" }
                    "SummarEase"
                }
                div { style: "flex-grow: 1;" }
                ThemeSwitch { theme }
            }

            main {
                id: "x-page-container",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn ThemeSwitch(mut theme: Signal<Theme>) -> Element {
    rsx! {
        label {
            class: "theme-switch",
            r#for: "light-dark-switch",
            input {
                id: "light-dark-switch",
                r#type: "checkbox",
                role: "switch",
                checked: theme() == Theme::Light,
                onchange: move |_| {
                    let next = theme().toggled();
                    theme.set(next);
                },
            }
            "{theme().label()}"
        }
    }
}
