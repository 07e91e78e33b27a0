use common::article::Table;
use dioxus::prelude::*;

use super::output_box::OutputBox;
use super::use_displayed_article;

#[component]
pub fn TablesBox() -> Element {
    let article = use_displayed_article();
    let tables: Vec<(String, Table)> = article.response.article.tables.iter().map(|(id, table)| (id.clone(), table.clone())).collect();

    rsx! {
        OutputBox {
            id: "tables-output",
            title: "TABLES AND FIGURES",
            if tables.is_empty() {
                p { em { "No tables were found in this article." } }
            }
            for (id, table) in tables {
                figure {
                    key: "{id}",
                    id: "{id}",
                    class: "article-table",
                    figcaption {
                        strong { "{table.heading}" }
                        if let Some(description) = table.description.as_ref() {
                            " {description}"
                        }
                    }
                    if !table.rows.is_empty() {
                        table {
                            tbody {
                                for (row_index, row) in table.rows.iter().enumerate() {
                                    tr {
                                        key: "{row_index}",
                                        for (cell_index, cell) in row.iter().enumerate() {
                                            td { key: "{cell_index}", "{cell}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
