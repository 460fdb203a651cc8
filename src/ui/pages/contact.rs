use dioxus::prelude::*;

use crate::{
    app::{persist_lead, Route},
    domain::{AppState, LeadField, LeadForm},
    ui::{
        components::toast::{push_toast, ToastKind, ToastMessage},
        theme,
    },
};

#[component]
pub fn ContactPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let nav = use_navigator();
    let posture = state.with(|st| st.posture);

    // Prefill from a previously captured lead.
    let initial = state.with(|st| {
        st.lead
            .as_ref()
            .map(|lead| LeadForm {
                first_name: lead.first_name.clone(),
                last_name: lead.last_name.clone(),
                email: lead.email.clone(),
                company: lead.company.clone(),
            })
            .unwrap_or_default()
    });
    let mut form = use_signal(|| initial);
    let mut error = use_signal(|| None::<(Option<LeadField>, String)>);

    let on_submit = {
        let mut state = state.clone();
        let toasts = toasts.clone();
        move |_| {
            let submitted = form.with(|f| f.validate());
            match submitted {
                Ok(lead) => {
                    error.set(None);
                    let greeting = format!("Thanks {}, your report is ready.", lead.first_name);
                    persist_lead(&mut state, toasts.clone(), lead);
                    push_toast(toasts.clone(), ToastKind::Success, greeting);
                    nav.push(Route::Report {});
                }
                Err(err) => {
                    log::debug!("Lead form rejected: {err}");
                    error.set(Some((err.field(), err.to_string())));
                }
            }
        }
    };

    let field_error = |field: LeadField| {
        error.with(|current| match current {
            Some((Some(failed), message)) if *failed == field => Some(message.clone()),
            _ => None,
        })
    };
    let general_error = error.with(|current| match current {
        Some((None, message)) => Some(message.clone()),
        _ => None,
    });

    let values = form();
    let fields = [
        (LeadField::FirstName, values.first_name.clone(), "text"),
        (LeadField::LastName, values.last_name.clone(), "text"),
        (LeadField::Email, values.email.clone(), "email"),
        (LeadField::Company, values.company.clone(), "text"),
    ]
    .into_iter()
    .map(|(field, value, kind)| {
        let message = field_error(field);
        let class = if message.is_some() {
            theme::input_error()
        } else {
            theme::input_class(posture)
        };
        (field, value, kind, class, message)
    })
    .collect::<Vec<_>>();

    rsx! {
        div { class: "mx-auto max-w-xl space-y-8",
            section { class: "space-y-2",
                h2 { class: "text-2xl font-semibold text-slate-100", "Where should we send it?" }
                p { class: "text-sm {theme::text_muted()}",
                    "Your personalised report unlocks once we know who it is for. Details stay on this machine."
                }
            }

            section { class: "{theme::panel_border(posture)} p-6 space-y-4",
                for (field, value, kind, class, message) in fields {
                    div {
                        label { class: "{theme::label_class()}", "{field.label()}" }
                        input {
                            r#type: kind,
                            class: "mt-1 w-full {class}",
                            value: "{value}",
                            oninput: move |evt| {
                                let text = evt.value();
                                form.with_mut(|f| match field {
                                    LeadField::FirstName => f.first_name = text,
                                    LeadField::LastName => f.last_name = text,
                                    LeadField::Email => f.email = text,
                                    LeadField::Company => f.company = text,
                                });
                            },
                        }
                        if let Some(message) = message {
                            p { class: "mt-1 text-xs text-rose-300", "{message}" }
                        }
                    }
                }
                if let Some(message) = general_error {
                    p { class: "text-sm text-rose-300", "{message}" }
                }
            }

            div { class: "flex justify-between",
                button {
                    class: "{theme::btn_secondary()}",
                    onclick: move |_| { nav.push(Route::Assumptions {}); },
                    "Back"
                }
                button {
                    class: "{theme::btn_primary(posture)}",
                    onclick: on_submit,
                    "Show my report"
                }
            }
        }
    }
}
