use dioxus::prelude::*;

use crate::domain::{
    format::{format_usd, format_usd_compact},
    projection::YearTotals,
    ProjectionMonth, RiskPosture,
};
use crate::ui::theme;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Granularity {
    Yearly,
    Monthly,
}

#[component]
pub fn ProjectionTable(
    months: Vec<ProjectionMonth>,
    yearly: Vec<YearTotals>,
    payback_month: Option<u32>,
    posture: RiskPosture,
) -> Element {
    let mut granularity = use_signal(|| Granularity::Yearly);
    let current = granularity();

    rsx! {
        div {
            class: "{theme::panel_solid()} overflow-hidden",
            header {
                class: "flex flex-wrap items-center justify-between gap-2 border-b border-slate-800 px-4 py-3",
                h3 { class: "text-sm font-semibold text-slate-200", "36-month projection" }
                div { class: "flex gap-2",
                    button {
                        class: toggle_class(current == Granularity::Yearly, posture),
                        onclick: move |_| granularity.set(Granularity::Yearly),
                        "By year"
                    }
                    button {
                        class: toggle_class(current == Granularity::Monthly, posture),
                        onclick: move |_| granularity.set(Granularity::Monthly),
                        "By month"
                    }
                }
            }
            if months.is_empty() {
                p { class: "px-4 py-6 text-sm text-slate-500", "No projection available yet." }
            } else if current == Granularity::Yearly {
                table {
                    class: "projection-table min-w-full divide-y divide-slate-800 text-sm",
                    thead {
                        class: "{theme::table_header(posture)} text-left",
                        tr {
                            th { class: "px-4 py-3 font-medium", "Year" }
                            th { class: "px-4 py-3 font-medium text-right", "Incremental" }
                            th { class: "px-4 py-3 font-medium text-right", "Vendor share" }
                            th { class: "px-4 py-3 font-medium text-right", "Net gain" }
                            th { class: "px-4 py-3 font-medium text-right", "Value suppressed" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-slate-800",
                        for year in yearly {
                            tr {
                                class: "hover:bg-slate-800/40",
                                td { class: "px-4 py-3 font-medium text-slate-100", "Year {year.year}" }
                                td { class: "px-4 py-3 text-right text-slate-300", "{format_usd(year.incremental_revenue)}" }
                                td { class: "px-4 py-3 text-right text-slate-300", "{format_usd(year.vendor_share)}" }
                                td { class: "px-4 py-3 text-right {theme::signed_value(year.net_gain)}", "{format_usd(year.net_gain)}" }
                                td { class: "px-4 py-3 text-right text-slate-400", "{format_usd(year.value_suppressed)}" }
                            }
                        }
                    }
                }
            } else {
                div { class: "max-h-[28rem] overflow-y-auto",
                    table {
                        class: "projection-table min-w-full divide-y divide-slate-800 text-sm",
                        thead {
                            class: "sticky top-0 z-10 bg-slate-900 text-left text-xs uppercase tracking-wide text-slate-500",
                            tr {
                                th { class: "px-4 py-3 font-medium", "Month" }
                                th { class: "px-4 py-3 font-medium text-right", "Ramp" }
                                th { class: "px-4 py-3 font-medium text-right", "Incremental" }
                                th { class: "px-4 py-3 font-medium text-right", "Vendor share" }
                                th { class: "px-4 py-3 font-medium text-right", "Net gain" }
                                th { class: "px-4 py-3 font-medium text-right", "Cumulative net" }
                            }
                        }
                        tbody {
                            class: "divide-y divide-slate-800",
                            for month in months {
                                tr {
                                    class: row_class(Some(month.month) == payback_month),
                                    td { class: "px-4 py-2 font-medium text-slate-100", "{month.month}" }
                                    td { class: "px-4 py-2 text-right text-slate-400", {format!("{:.0}%", month.ramp * 100.0)} }
                                    td { class: "px-4 py-2 text-right text-slate-300", "{format_usd_compact(month.incremental_revenue)}" }
                                    td { class: "px-4 py-2 text-right text-slate-300", "{format_usd_compact(month.vendor_share)}" }
                                    td { class: "px-4 py-2 text-right {theme::signed_value(month.publisher_net_gain)}", "{format_usd_compact(month.publisher_net_gain)}" }
                                    td { class: "px-4 py-2 text-right {theme::signed_value(month.cumulative_net_gain)}", "{format_usd_compact(month.cumulative_net_gain)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn toggle_class(active: bool, posture: RiskPosture) -> &'static str {
    if active {
        theme::btn_small_active(posture)
    } else {
        theme::btn_small_inactive()
    }
}

fn row_class(is_payback: bool) -> &'static str {
    if is_payback {
        "bg-emerald-500/10"
    } else {
        "hover:bg-slate-800/40"
    }
}
