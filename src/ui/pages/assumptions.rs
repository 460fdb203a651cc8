use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        format::{format_usd, format_usd_compact},
        scenario::{CAMPAIGNS_SLIDER, CAMPAIGN_SPEND_SLIDER, DISPLAY_CPM_SLIDER, VIDEO_CPM_SLIDER},
        AppState, Assumption, DeploymentScope, ModelKind, RiskPosture, SliderSpec,
    },
    ui::theme,
};

#[component]
pub fn AssumptionsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let nav = use_navigator();

    let snapshot = state.with(|st| st.clone());
    let posture = snapshot.posture;
    let composite = snapshot.composite();
    let table = posture.benchmarks();
    let validation = snapshot.projection().err().map(|err| err.to_string());
    let can_continue = validation.is_none();

    let display_cpm = snapshot.scenario.display_cpm.unwrap_or(composite.display_cpm);
    let video_cpm = snapshot.scenario.video_cpm.unwrap_or(composite.video_cpm);
    let auto_scope = DeploymentScope::for_domain_count(snapshot.selected_domains.len());
    let revenue_share_note = format!(
        "{:.1}% of incremental revenue, campaign fees capped at {} each. Override both below.",
        table.revenue_share_rate * 100.0,
        format_usd(table.campaign_cap)
    );

    let mut flat_fee_input = use_signal(|| format!("{:.0}", snapshot.flat_fee.annual_fee));
    let mut cap_share_input =
        use_signal(|| format!("{:.3}", snapshot.annual_cap.base_share_rate));
    let mut cap_amount_input = use_signal(|| format!("{:.0}", snapshot.annual_cap.annual_cap));
    let mut terms_error = use_signal(|| None::<String>);

    let override_rows = Assumption::ALL
        .into_iter()
        .map(|assumption| {
            let raw = snapshot
                .override_inputs
                .get(assumption.key())
                .cloned()
                .unwrap_or_default();
            let default = format_assumption(assumption, assumption.read(table));
            (assumption, raw, default)
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "space-y-8",
            section { class: "space-y-2",
                h2 { class: "text-2xl font-semibold text-slate-100", "Tune the scenario" }
                p { class: "text-sm {theme::text_muted()}",
                    "Benchmarks follow the selected posture. Adjust the sliders or override any benchmark; the report recalculates from these inputs."
                }
            }

            section { class: "{theme::panel_solid()} p-6 space-y-5",
                h3 { class: "{theme::section_title()}", "Posture & scope" }
                div { class: "flex flex-wrap gap-2",
                    for option in RiskPosture::ALL {
                        button {
                            class: choice_class(option == posture, posture),
                            onclick: move |_| state.with_mut(|st| st.posture = option),
                            "{option.label()}"
                        }
                    }
                }
                div { class: "flex flex-wrap gap-2",
                    button {
                        class: choice_class(snapshot.scope_override.is_none(), posture),
                        onclick: move |_| state.with_mut(|st| st.scope_override = None),
                        "Auto ({auto_scope.label()})"
                    }
                    for option in DeploymentScope::ALL {
                        button {
                            class: choice_class(snapshot.scope_override == Some(option), posture),
                            onclick: move |_| state.with_mut(|st| st.scope_override = Some(option)),
                            "{option.label()}"
                        }
                    }
                }
            }

            section { class: "{theme::panel_solid()} p-6 space-y-5",
                h3 { class: "{theme::section_title()}", "Revenue inputs" }
                div { class: "grid gap-6 sm:grid-cols-2",
                    SliderField {
                        spec: DISPLAY_CPM_SLIDER,
                        value: display_cpm,
                        display: format!("${display_cpm:.2}"),
                        overridden: snapshot.scenario.display_cpm.is_some(),
                        on_change: move |value: f64| state.with_mut(|st| st.scenario.display_cpm = Some(value)),
                        on_reset: move |_| state.with_mut(|st| st.scenario.display_cpm = None),
                    }
                    SliderField {
                        spec: VIDEO_CPM_SLIDER,
                        value: video_cpm,
                        display: format!("${video_cpm:.2}"),
                        overridden: snapshot.scenario.video_cpm.is_some(),
                        on_change: move |value: f64| state.with_mut(|st| st.scenario.video_cpm = Some(value)),
                        on_reset: move |_| state.with_mut(|st| st.scenario.video_cpm = None),
                    }
                    SliderField {
                        spec: CAMPAIGNS_SLIDER,
                        value: snapshot.scenario.campaigns_per_year as f64,
                        display: snapshot.scenario.campaigns_per_year.to_string(),
                        overridden: false,
                        on_change: move |value: f64| state.with_mut(|st| st.scenario.campaigns_per_year = value.round() as u32),
                        on_reset: move |_| {},
                    }
                    SliderField {
                        spec: CAMPAIGN_SPEND_SLIDER,
                        value: snapshot.scenario.avg_campaign_spend,
                        display: format_usd(snapshot.scenario.avg_campaign_spend),
                        overridden: false,
                        on_change: move |value: f64| state.with_mut(|st| st.scenario.avg_campaign_spend = value),
                        on_reset: move |_| {},
                    }
                }
                p { class: "text-xs {theme::text_muted()}",
                    "Annual CAPI spend: {format_usd_compact(snapshot.scenario.annual_spend())}"
                }
            }

            section { class: "{theme::panel_solid()} p-6 space-y-5",
                h3 { class: "{theme::section_title()}", "Commercial model" }
                div { class: "flex flex-wrap gap-2",
                    for kind in ModelKind::ALL {
                        button {
                            class: choice_class(kind == snapshot.model_kind, posture),
                            onclick: move |_| state.with_mut(|st| st.model_kind = kind),
                            "{kind.label()}"
                        }
                    }
                }
                match snapshot.model_kind {
                    ModelKind::RevenueShare => rsx! {
                        p { class: "text-sm text-slate-400",
                            "{revenue_share_note}"
                        }
                    },
                    ModelKind::FlatFee => rsx! {
                        div { class: "max-w-xs",
                            label { class: "{theme::label_class()}", "Annual fee (USD)" }
                            input {
                                class: "mt-1 w-full {theme::input_class(posture)}",
                                value: flat_fee_input(),
                                oninput: move |evt| {
                                    let raw = evt.value();
                                    match parse_amount(&raw) {
                                        Some(fee) => {
                                            state.with_mut(|st| st.flat_fee.annual_fee = fee);
                                            terms_error.set(None);
                                        }
                                        None => terms_error.set(Some(format!("Annual fee must be a number, got `{raw}`"))),
                                    }
                                    flat_fee_input.set(raw);
                                },
                            }
                        }
                    },
                    ModelKind::AnnualCap => rsx! {
                        div { class: "grid max-w-xl gap-4 sm:grid-cols-2",
                            div {
                                label { class: "{theme::label_class()}", "Base share (0-1)" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(posture)}",
                                    value: cap_share_input(),
                                    oninput: move |evt| {
                                        let raw = evt.value();
                                        match parse_amount(&raw) {
                                            Some(rate) => {
                                                state.with_mut(|st| st.annual_cap.base_share_rate = rate);
                                                terms_error.set(None);
                                            }
                                            None => terms_error.set(Some(format!("Base share must be a number, got `{raw}`"))),
                                        }
                                        cap_share_input.set(raw);
                                    },
                                }
                            }
                            div {
                                label { class: "{theme::label_class()}", "Annual cap (USD)" }
                                input {
                                    class: "mt-1 w-full {theme::input_class(posture)}",
                                    value: cap_amount_input(),
                                    oninput: move |evt| {
                                        let raw = evt.value();
                                        match parse_amount(&raw) {
                                            Some(cap) => {
                                                state.with_mut(|st| st.annual_cap.annual_cap = cap);
                                                terms_error.set(None);
                                            }
                                            None => terms_error.set(Some(format!("Annual cap must be a number, got `{raw}`"))),
                                        }
                                        cap_amount_input.set(raw);
                                    },
                                }
                            }
                        }
                    },
                }
                if let Some(message) = terms_error() {
                    p { class: "text-sm text-rose-300", "{message}" }
                }
            }

            section { class: "{theme::panel_solid()} p-6 space-y-4",
                div { class: "flex items-center justify-between",
                    h3 { class: "{theme::section_title()}", "Benchmark overrides" }
                    if !snapshot.override_inputs.is_empty() {
                        button {
                            class: "{theme::btn_small_inactive()}",
                            onclick: move |_| state.with_mut(|st| st.override_inputs.clear()),
                            "Clear overrides"
                        }
                    }
                }
                div { class: "grid gap-4 sm:grid-cols-3",
                    for (assumption, raw, default) in override_rows {
                        div {
                            label { class: "{theme::label_class()}", "{assumption.label()}" }
                            input {
                                class: "mt-1 w-full {theme::input_class(posture)}",
                                placeholder: "{default}",
                                value: "{raw}",
                                oninput: move |evt| state.with_mut(|st| st.set_override_input(assumption, evt.value())),
                            }
                        }
                    }
                }
            }

            if let Some(message) = validation {
                div { class: "rounded-xl border border-rose-500/40 bg-rose-500/10 px-4 py-3 text-sm text-rose-200",
                    "{message}"
                }
            }

            div { class: "flex justify-between",
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: move |_| { nav.push(Route::Domains {}); },
                    "Back"
                }
                button {
                    class: "{theme::btn_primary(posture)}",
                    disabled: !can_continue,
                    onclick: move |_| { nav.push(Route::Contact {}); },
                    "Continue"
                }
            }
        }
    }
}

#[component]
fn SliderField(
    spec: SliderSpec,
    value: f64,
    display: String,
    overridden: bool,
    on_change: EventHandler<f64>,
    on_reset: EventHandler<()>,
) -> Element {
    let clamped = value.clamp(spec.min, spec.max);

    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center justify-between",
                label { class: "{theme::label_class()}", "{spec.label}" }
                div { class: "flex items-center gap-2",
                    span { class: "text-sm font-semibold text-slate-200", "{display}" }
                    if overridden {
                        button {
                            class: "text-[10px] uppercase tracking-wide text-slate-500 hover:text-slate-300",
                            onclick: move |_| on_reset.call(()),
                            "Use blended"
                        }
                    }
                }
            }
            input {
                r#type: "range",
                min: "{spec.min}",
                max: "{spec.max}",
                step: "{spec.step}",
                value: "{clamped}",
                oninput: move |evt| {
                    if let Ok(parsed) = evt.value().parse::<f64>() {
                        on_change.call(parsed);
                    }
                },
            }
        }
    }
}

fn choice_class(active: bool, posture: RiskPosture) -> &'static str {
    if active {
        theme::btn_small_active(posture)
    } else {
        theme::btn_small_inactive()
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .replace(['$', ','], "")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn format_assumption(assumption: Assumption, value: f64) -> String {
    match assumption {
        Assumption::CampaignCap => format_usd(value),
        Assumption::AdsPerPageview | Assumption::IdSavingsPerMillion => format!("{value:.1}"),
        Assumption::ConversionMultiplier => format!("{value:.2}"),
        _ => format!("{value:.3}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_accept_currency_formatting() {
        assert_eq!(parse_amount("$150,000"), Some(150_000.0));
        assert_eq!(parse_amount(" 0.125 "), Some(0.125));
        assert_eq!(parse_amount("lots"), None);
    }
}
