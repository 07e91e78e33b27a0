use dioxus::prelude::*;

/// Titled box whose body folds away when the title is clicked.
#[component]
pub fn OutputBox(id: String, title: String, #[props(default = true)] open: bool, children: Element) -> Element {
    let mut is_open = use_signal(|| open);

    rsx! {
        section {
            id: "{id}",
            class: if is_open() { "output-box open" } else { "output-box" },
            h2 {
                class: "output-box-title",
                onclick: move |_| is_open.set(!is_open()),
                "{title}"
            }
            if is_open() {
                div {
                    class: "output-box-info",
                    {children}
                }
            }
        }
    }
}
