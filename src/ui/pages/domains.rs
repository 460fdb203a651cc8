use dioxus::prelude::*;

use crate::{
    app::Route,
    domain::{
        format::{format_fraction, format_pageviews},
        AppState,
    },
    ui::{
        components::{domain_picker::DomainPicker, kpi_card::KpiCard},
        theme,
    },
};

#[component]
pub fn DomainsPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let mut filter = use_signal(String::new);
    let nav = use_navigator();

    let (selected, posture, composite, scope) = state.with(|st| {
        (
            st.selected_domains.clone(),
            st.posture,
            st.composite(),
            st.scope(),
        )
    });

    let has_selection = !selected.is_empty();
    let portfolio_caption = if composite.is_default() {
        "No properties selected; industry defaults apply".to_string()
    } else {
        format!("{} selected · {}", composite.domain_count, scope.label())
    };

    rsx! {
        div { class: "space-y-8",
            section { class: "space-y-2",
                h2 { class: "text-2xl font-semibold text-slate-100", "Which properties do you operate?" }
                p { class: "text-sm {theme::text_muted()}",
                    "Pick every domain you want included. Inputs are blended by pageview share; leave the list empty to run on industry defaults."
                }
            }

            section { class: "grid gap-4 sm:grid-cols-4",
                KpiCard {
                    title: "Monthly pageviews".to_string(),
                    value: format_pageviews(composite.monthly_pageviews),
                    caption: Some(portfolio_caption),
                    posture,
                }
                KpiCard {
                    title: "Blended display CPM".to_string(),
                    value: format!("${:.2}", composite.display_cpm),
                    caption: Some(format!("Video ${:.2}", composite.video_cpm)),
                    posture,
                }
                KpiCard {
                    title: "Safari share".to_string(),
                    value: format_fraction(composite.safari_share),
                    caption: Some("Traffic without a third-party identity".to_string()),
                    posture,
                }
                KpiCard {
                    title: "Tech-savvy audience".to_string(),
                    value: format_fraction(composite.tech_savvy),
                    caption: Some(format!("Display share {}", format_fraction(composite.display_share))),
                    posture,
                }
            }

            section { class: "space-y-3",
                div { class: "flex flex-wrap items-center justify-between gap-3",
                    input {
                        class: "w-72 {theme::input_class(posture)}",
                        placeholder: "Filter by name or category...",
                        value: "{filter}",
                        oninput: move |evt| filter.set(evt.value()),
                    }
                    if has_selection {
                        button {
                            class: "{theme::btn_small_inactive()}",
                            onclick: move |_| state.with_mut(|st| st.selected_domains.clear()),
                            "Clear selection"
                        }
                    }
                }
                DomainPicker {
                    selected,
                    filter: filter(),
                    posture,
                    on_toggle: move |id: String| state.with_mut(|st| st.toggle_domain(&id)),
                }
            }

            div { class: "flex justify-end",
                button {
                    class: "{theme::btn_primary(posture)}",
                    onclick: move |_| { nav.push(Route::Assumptions {}); },
                    "Continue to assumptions"
                }
            }
        }
    }
}
