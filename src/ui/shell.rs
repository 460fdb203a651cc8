use dioxus::prelude::*;

use crate::app::Route;
use crate::domain::AppState;
use crate::ui::theme;
use crate::util::version::{version_label, APP_NAME};

#[component]
pub fn Shell(children: Element) -> Element {
    let state = use_context::<Signal<AppState>>();
    let posture = state.with(|s| s.posture);
    let selected = state.with(|s| s.selected_domains.len());
    let current_route = use_route::<Route>();
    let current_index = current_route.step_index();
    let nav = use_navigator();

    let selection_note = match selected {
        0 => "Industry defaults".to_string(),
        1 => "1 property".to_string(),
        n => format!("{n} properties"),
    };

    rsx! {
        div { class: "min-h-screen bg-slate-950 text-slate-100 font-sans",
            header {
                class: "border-b border-slate-900/60 bg-slate-950/90 backdrop-blur px-6 py-4",
                div { class: "mx-auto grid max-w-6xl grid-cols-[1fr_auto_1fr] items-center gap-4",
                    div {
                        h1 { class: "text-xl font-semibold tracking-tight {theme::text_primary(posture)}", "{APP_NAME}" }
                        p { class: "text-xs text-slate-500", "{posture.label()} posture · {selection_note}" }
                    }
                    nav { class: "flex gap-2 text-sm justify-center",
                        for step in Route::STEPS {
                            StepButton {
                                index: step.step_index(),
                                label: step.step_label(),
                                active: step.step_index() == current_index,
                                done: step.step_index() < current_index,
                                onclick: {
                                    let target = step.clone();
                                    move |_| { nav.push(target.clone()); }
                                },
                            }
                        }
                    }
                    div {}
                }
            }
            main { class: "mx-auto max-w-6xl px-6 py-10",
                {children}
            }
            footer { class: "mx-auto max-w-6xl px-6 pb-8 text-right text-xs text-slate-600",
                "{version_label()}"
            }
        }
    }
}

#[component]
fn StepButton(
    index: usize,
    label: &'static str,
    active: bool,
    done: bool,
    onclick: EventHandler<()>,
) -> Element {
    let class = match (active, done) {
        (true, _) => "funnel-step active",
        (false, true) => "funnel-step done",
        (false, false) => "funnel-step",
    };
    let number = index + 1;

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            span { class: "text-xs font-semibold", "{number}" }
            "{label}"
        }
    }
}
