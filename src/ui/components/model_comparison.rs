use dioxus::prelude::*;

use crate::domain::{
    format::{format_roi, format_usd_compact},
    ModelComparison, ModelKind,
};

/// Side-by-side cards for every commercial model run against the same scenario.
#[component]
pub fn ModelComparisonCards(comparison: Vec<ModelComparison>, selected: ModelKind) -> Element {
    let best_net = comparison
        .iter()
        .map(|entry| entry.total_net_gain)
        .fold(f64::NEG_INFINITY, f64::max);

    rsx! {
        div { class: "grid gap-4 sm:grid-cols-3",
            for entry in comparison {
                ModelCard {
                    is_best: entry.total_net_gain >= best_net,
                    is_selected: entry.model == selected,
                    entry,
                }
            }
        }
    }
}

#[component]
fn ModelCard(entry: ModelComparison, is_selected: bool, is_best: bool) -> Element {
    let theme = if entry.total_value_suppressed > 0.0 {
        "border-amber-500/40 bg-amber-500/10 text-amber-100"
    } else if is_best {
        "border-emerald-500/40 bg-emerald-500/10 text-emerald-100"
    } else {
        "border-slate-700 bg-slate-900/40 text-slate-200"
    };
    let ring = if is_selected { "ring-2 ring-indigo-400/60" } else { "" };
    let status = if is_selected { "Selected" } else if is_best { "Best net" } else { "" };

    rsx! {
        div {
            class: "rounded-xl border px-4 py-3 {theme} {ring}",
            div {
                class: "flex items-center justify-between",
                span { class: "text-xs font-semibold uppercase tracking-wide", "{entry.model.label()}" }
                span { class: "text-xs font-semibold uppercase", "{status}" }
            }
            p { class: "mt-2 text-2xl font-semibold", "{format_usd_compact(entry.total_net_gain)}" }
            p { class: "mt-1 text-xs opacity-80", "Vendor share {format_usd_compact(entry.total_vendor_share)} · ROI {format_roi(entry.roi_multiple)}" }
            if entry.total_value_suppressed > 0.0 {
                p { class: "mt-1 text-xs opacity-80", "Value suppressed {format_usd_compact(entry.total_value_suppressed)}" }
            }
        }
    }
}
