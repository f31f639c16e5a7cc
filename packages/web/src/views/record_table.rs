use dioxus::prelude::*;

use ui::{ButtonVariant, ConfiguredViewMore, ViewMore, ViewMoreConfig};

use crate::records::Record;

/// Table whose rows are themselves clickable (they select the record), with
/// "view more" buttons nested inside them.
#[component]
pub fn RecordTable(records: Vec<Record>, details: ViewMoreConfig) -> Element {
    let mut selected = use_signal(|| Option::<u32>::None);
    let mut row_clicks = use_signal(|| 0u32);

    rsx! {
        table {
            class: "record-table",
            thead {
                tr {
                    th { "Name" }
                    th { "Role" }
                    th { "Notes" }
                    th { "" }
                }
            }
            tbody {
                for record in records {
                    tr {
                        key: "{record.id}",
                        class: if selected() == Some(record.id) { "selected" } else { "" },
                        onclick: move |_| {
                            tracing::info!(id = record.id, "row selected");
                            selected.set(Some(record.id));
                            row_clicks += 1;
                        },
                        td { "{record.name}" }
                        td { "{record.role}" }
                        td {
                            if record.notes.is_empty() {
                                span { class: "muted", "none" }
                            } else {
                                ViewMore {
                                    button_text: "{record.notes.len()} notes",
                                    title: "Notes for {record.name}",
                                    variant: ButtonVariant::Text,
                                    ul {
                                        for note in record.notes.iter() {
                                            li { "{note}" }
                                        }
                                    }
                                }
                            }
                        }
                        td {
                            ConfiguredViewMore {
                                config: details.clone(),
                                RecordDetail { record: record.clone() }
                            }
                        }
                    }
                }
            }
        }
        p {
            class: "record-table-status",
            "Row clicks: {row_clicks}"
        }
    }
}

#[component]
fn RecordDetail(record: Record) -> Element {
    rsx! {
        dl {
            class: "record-detail",
            dt { "ID" }
            dd { "{record.id}" }
            dt { "Name" }
            dd { "{record.name}" }
            dt { "Email" }
            dd { a { href: "mailto:{record.email}", "{record.email}" } }
            dt { "Role" }
            dd { "{record.role}" }
        }
    }
}
