//! Summary size slider and the PDF / tables switches.

use dioxus::prelude::*;

use crate::data_definitions::display_options::DisplayOptions;

#[component]
pub fn DisplaySettings(options: DisplayOptions, on_change: Callback<DisplayOptions>) -> Element {
    rsx! {
        div {
            class: "display-settings",
            label {
                id: "output-show-document-label",
                r#for: "output-show-document",
                "Show PDF Document? "
                input {
                    id: "output-show-document",
                    name: "output-show-document",
                    r#type: "checkbox",
                    checked: options.show_pdf,
                    onchange: move |e| on_change(options.with_show_pdf(e.checked())),
                }
            }
            label {
                r#for: "tables-and-figures",
                "Tables and Figures "
                input {
                    id: "tables-and-figures",
                    name: "tables-and-figures",
                    r#type: "checkbox",
                    checked: options.show_tables,
                    onchange: move |e| on_change(options.with_show_tables(e.checked())),
                }
            }
            label {
                id: "sos-lbl",
                r#for: "size-of-summary",
                "{options.summary_label()}"
            }
            input {
                id: "size-of-summary",
                class: "slider",
                r#type: "range",
                min: "0",
                max: "100",
                step: "10",
                value: "{options.summary_percent}",
                onchange: move |e| {
                    let Ok(percent) = e.value().parse::<u8>() else {
                        return;
                    };
                    on_change(options.with_summary_percent(percent));
                },
            }
        }
    }
}
