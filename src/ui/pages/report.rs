use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        format::{format_fraction, format_roi, format_usd, format_usd_compact},
        recommendations, render_report, AppState, Priority, Recommendation,
    },
    ui::{
        components::{
            kpi_card::KpiCard,
            model_comparison::ModelComparisonCards,
            projection_table::ProjectionTable,
            toast::{push_toast, ToastKind, ToastMessage},
        },
        theme,
    },
    util::persistence::export_report,
};

#[component]
pub fn ReportPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();

    let snapshot = state.with(|st| st.clone());
    let posture = snapshot.posture;

    let Some(lead) = snapshot.lead.clone() else {
        return rsx! {
            div { class: "mx-auto max-w-xl space-y-4 text-center",
                h2 { class: "text-2xl font-semibold text-slate-100", "Your report is almost ready" }
                p { class: "text-sm {theme::text_muted()}", "Tell us who it is for and we will unlock the full projection." }
                button {
                    class: "{theme::btn_primary(posture)}",
                    onclick: move |_| { nav.push(Route::Contact {}); },
                    "Add contact details"
                }
            }
        };
    };

    let projection = match snapshot.projection() {
        Ok(projection) => projection,
        Err(err) => {
            let message = err.to_string();
            return rsx! {
                div { class: "mx-auto max-w-xl space-y-4",
                    div { class: "rounded-xl border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-sm text-rose-200",
                        "The scenario cannot be projected: {message}"
                    }
                    button {
                        class: "{theme::btn_secondary()}",
                        onclick: move |_| { nav.push(Route::Assumptions {}); },
                        "Fix assumptions"
                    }
                }
            };
        }
    };

    let composite = snapshot.composite();
    let advice = recommendations(&composite, &projection);
    let report_text = render_report(Some(&lead), &composite, &projection, &advice);
    let summary = projection.summary.clone();

    let payback = summary
        .payback_month
        .map(|month| format!("Month {month}"))
        .unwrap_or_else(|| "Not within 36 months".to_string());
    let net_gain_caption = summary
        .net_gain_pct
        .map(|pct| format!("{pct:+.1}% on base revenue"))
        .unwrap_or_else(|| "No base revenue to compare".to_string());
    let capi_caption = match projection.capi.cap_threshold {
        Some(threshold) => format!("Campaign cap engages above {}", format_usd_compact(threshold)),
        None => "No campaign cap".to_string(),
    };

    let on_copy = {
        let toasts = toasts.clone();
        let text = report_text.clone();
        move |_| {
            copy_to_clipboard(&text);
            push_toast(toasts.clone(), ToastKind::Info, "Report copied to clipboard.");
        }
    };

    let on_export = {
        let toasts = toasts.clone();
        let text = report_text.clone();
        let stem = format!("{} uplift report", lead.company);
        move |_| match export_report(&stem, &text) {
            Ok(path) => push_toast(
                toasts.clone(),
                ToastKind::Success,
                format!("Saved report to {}", path.display()),
            ),
            Err(err) => {
                log::warn!("Report export failed: {err}");
                push_toast(
                    toasts.clone(),
                    ToastKind::Error,
                    format!("Could not save the report: {err}"),
                );
            }
        }
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "flex flex-wrap items-end justify-between gap-4",
                div { class: "space-y-1",
                    h2 { class: "text-2xl font-semibold text-slate-100", "{lead.company}: identity uplift outlook" }
                    p { class: "text-sm {theme::text_muted()}",
                        "{projection.posture.label()} posture · {projection.scope.label()} · {projection.model.kind().label()}"
                    }
                }
                div { class: "flex gap-2",
                    button { class: "{theme::btn_secondary()}", onclick: on_copy, "Copy report" }
                    button { class: "{theme::btn_primary(posture)}", onclick: on_export, "Save as text" }
                }
            }

            section { class: "grid gap-4 sm:grid-cols-4",
                KpiCard {
                    title: "36-month net gain".to_string(),
                    value: format_usd_compact(summary.total_net_gain),
                    caption: Some(net_gain_caption),
                    posture,
                    negative: summary.total_net_gain < 0.0,
                }
                KpiCard {
                    title: "Incremental revenue".to_string(),
                    value: format_usd_compact(summary.total_incremental),
                    caption: Some(format!("Vendor share {}", format_usd_compact(summary.total_vendor_share))),
                    posture,
                }
                KpiCard {
                    title: "ROI".to_string(),
                    value: format_roi(summary.roi_multiple),
                    caption: Some("Incremental revenue per dollar of vendor share".to_string()),
                    posture,
                }
                KpiCard {
                    title: "Payback".to_string(),
                    value: payback,
                    caption: Some(format!("Value suppressed {}", format_usd_compact(summary.total_value_suppressed))),
                    posture,
                }
            }

            section { class: "grid gap-4 sm:grid-cols-3",
                KpiCard {
                    title: "Addressability uplift".to_string(),
                    value: format!("{}/yr", format_usd_compact(projection.addressability.annual_revenue)),
                    caption: Some(format!(
                        "Match rate {} → {}",
                        format_fraction(projection.addressability.baseline_rate),
                        format_fraction(projection.addressability.improved_rate)
                    )),
                    posture,
                }
                KpiCard {
                    title: "CAPI campaigns".to_string(),
                    value: format!("{}/yr", format_usd_compact(projection.capi.annual_net_to_publisher)),
                    caption: Some(capi_caption),
                    posture,
                }
                KpiCard {
                    title: "ID infrastructure savings".to_string(),
                    value: format!("{}/yr", format_usd(projection.id_infrastructure_savings)),
                    caption: Some("Reported separately from net gain".to_string()),
                    posture,
                }
            }

            ProjectionTable {
                months: projection.months.clone(),
                yearly: summary.yearly.clone(),
                payback_month: summary.payback_month,
                posture,
            }

            section { class: "space-y-3",
                h3 { class: "{theme::section_title()}", "Commercial models compared" }
                ModelComparisonCards {
                    comparison: projection.comparison.clone(),
                    selected: projection.model.kind(),
                }
            }

            section { class: "space-y-3",
                h3 { class: "{theme::section_title()}", "Recommendations" }
                ul { class: "space-y-3",
                    for item in advice {
                        RecommendationItem { item }
                    }
                }
            }
        }
    }
}

#[component]
fn RecommendationItem(item: Recommendation) -> Element {
    let badge = match item.priority {
        Priority::High => "border-rose-500/40 text-rose-200",
        Priority::Medium => "border-amber-500/40 text-amber-200",
        Priority::Low => "border-slate-600 text-slate-300",
    };

    rsx! {
        li { class: "{theme::panel_solid()} px-4 py-3",
            div { class: "flex items-center gap-3",
                span {
                    class: "rounded-full border px-2 py-0.5 text-[10px] font-semibold uppercase tracking-wide {badge}",
                    "{item.priority.label()}"
                }
                p { class: "text-sm font-semibold text-slate-100", "{item.title}" }
            }
            p { class: "mt-1 text-sm text-slate-400", "{item.detail}" }
        }
    }
}

fn copy_to_clipboard(text: &str) {
    let payload = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    let script = format!(
        r#"(async () => {{
            const data = {payload};
            if (navigator.clipboard && navigator.clipboard.writeText) {{
                try {{ await navigator.clipboard.writeText(data); return true; }} catch (_err) {{}}
            }}
            const area = document.createElement('textarea');
            area.value = data;
            area.style.position = 'fixed';
            area.style.opacity = '0';
            document.body.appendChild(area);
            area.select();
            const ok = document.execCommand('copy');
            document.body.removeChild(area);
            return ok;
        }})()"#
    );
    let eval = document::eval(&script);
    spawn(async move {
        if let Err(err) = eval.await {
            log::warn!("Clipboard copy failed: {err:?}");
        }
    });
}
