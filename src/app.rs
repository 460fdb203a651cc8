use dioxus::{prelude::*, signals::Signal};

use crate::{
    domain::{AppState, LeadRecord},
    ui::{
        components::toast::{push_toast, Toast, ToastKind, ToastMessage},
        pages::{AssumptionsPage, ContactPage, DomainsPage, ReportPage},
        shell::Shell,
    },
    util::{
        assets,
        persistence::{load_lead, save_lead},
    },
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    #[route("/domains")]
    Domains {},
    #[route("/assumptions")]
    Assumptions {},
    #[route("/contact")]
    Contact {},
    #[route("/report")]
    Report {},
}

impl Route {
    /// Funnel steps in the order the user walks them.
    pub const STEPS: [Route; 4] = [
        Route::Domains {},
        Route::Assumptions {},
        Route::Contact {},
        Route::Report {},
    ];

    pub fn step_label(&self) -> &'static str {
        match self {
            Route::Domains {} => "Properties",
            Route::Assumptions {} => "Assumptions",
            Route::Contact {} => "Contact",
            Route::Report {} => "Report",
        }
    }

    pub fn step_index(&self) -> usize {
        match self {
            Route::Domains {} => 0,
            Route::Assumptions {} => 1,
            Route::Contact {} => 2,
            Route::Report {} => 3,
        }
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_hook({
        let mut state = state.clone();
        move || {
            if let Some(saved) = load_lead() {
                log::info!("Restored lead {} from disk", saved.id);
                state.with_mut(|st| st.apply_persisted(saved));
            }
        }
    });
    use_context_provider(|| state.clone());

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts.clone());

    rsx! {
        document::Style { "{assets::main_css()}" }
        document::Style { "{assets::tailwind_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

/// Stores the lead in state and on disk. Disk failures are surfaced but never block the funnel.
pub fn persist_lead(
    state: &mut Signal<AppState>,
    toasts: Signal<Vec<ToastMessage>>,
    lead: LeadRecord,
) {
    if let Err(err) = save_lead(&lead) {
        log::warn!("Failed to persist lead: {err}");
        push_toast(
            toasts,
            ToastKind::Warning,
            format!("Your details were not saved locally: {err}"),
        );
    }
    state.with_mut(|st| st.lead = Some(lead));
}

#[component]
pub fn Domains() -> Element {
    rsx! { Shell { DomainsPage {} } }
}

#[component]
pub fn Assumptions() -> Element {
    rsx! { Shell { AssumptionsPage {} } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { Shell { ContactPage {} } }
}

#[component]
pub fn Report() -> Element {
    rsx! { Shell { ReportPage {} } }
}
