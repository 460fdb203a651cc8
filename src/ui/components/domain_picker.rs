use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::domain::{
    catalog::catalog,
    format::{format_fraction, format_pageviews},
    RiskPosture,
};
use crate::ui::theme;

#[derive(Props, Clone, PartialEq)]
pub struct DomainPickerProps {
    pub selected: BTreeSet<String>,
    pub filter: String,
    pub posture: RiskPosture,
    pub on_toggle: EventHandler<String>,
}

/// Catalog table with one checkbox per property, filtered by name or category.
#[component]
pub fn DomainPicker(props: DomainPickerProps) -> Element {
    let needle = props.filter.trim().to_lowercase();
    let rows = catalog()
        .iter()
        .filter(|domain| {
            needle.is_empty()
                || domain.name.to_lowercase().contains(&needle)
                || domain.category.label().to_lowercase().contains(&needle)
        })
        .collect::<Vec<_>>();

    rsx! {
        div {
            class: "{theme::panel_solid()} overflow-hidden",
            if rows.is_empty() {
                p { class: "px-4 py-6 text-sm text-slate-500", "No properties match that filter." }
            } else {
                table {
                    class: "min-w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "{theme::table_header(props.posture)} text-left",
                        tr {
                            th { class: "px-4 py-3 font-medium w-10", "" }
                            th { class: "px-4 py-3 font-medium", "Property" }
                            th { class: "px-4 py-3 font-medium", "Category" }
                            th { class: "px-4 py-3 font-medium text-right", "Pageviews / mo" }
                            th { class: "px-4 py-3 font-medium text-right", "Display CPM" }
                            th { class: "px-4 py-3 font-medium text-right", "Safari" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-800",
                        for domain in rows {
                            DomainRow {
                                key: "{domain.id}",
                                id: domain.id,
                                name: domain.name,
                                category: domain.category.label(),
                                pageviews: format_pageviews(domain.monthly_pageviews),
                                display_cpm: format!("${:.2}", domain.display_cpm),
                                safari: format_fraction(domain.audience.safari_share),
                                checked: props.selected.contains(domain.id),
                                on_toggle: props.on_toggle,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DomainRow(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    pageviews: String,
    display_cpm: String,
    safari: String,
    checked: bool,
    on_toggle: EventHandler<String>,
) -> Element {
    let row_class = if checked {
        "cursor-pointer bg-slate-800/50"
    } else {
        "cursor-pointer hover:bg-slate-800/30"
    };

    rsx! {
        tr {
            class: row_class,
            onclick: move |_| on_toggle.call(id.to_string()),
            td {
                class: "px-4 py-3 text-center",
                input {
                    r#type: "checkbox",
                    class: "h-4 w-4 cursor-pointer accent-indigo-500",
                    checked: checked,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_toggle.call(id.to_string());
                    },
                }
            }
            td { class: "px-4 py-3 font-medium text-slate-100", "{name}" }
            td { class: "px-4 py-3 text-slate-400", "{category}" }
            td { class: "px-4 py-3 text-right text-slate-300", "{pageviews}" }
            td { class: "px-4 py-3 text-right text-slate-300", "{display_cpm}" }
            td { class: "px-4 py-3 text-right text-slate-300", "{safari}" }
        }
    }
}
