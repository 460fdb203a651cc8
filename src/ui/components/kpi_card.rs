use dioxus::prelude::*;

use crate::domain::RiskPosture;
use crate::ui::theme;

/// Headline figure with an optional caption underneath.
#[component]
pub fn KpiCard(
    title: String,
    value: String,
    caption: Option<String>,
    posture: RiskPosture,
    #[props(default = false)] negative: bool,
) -> Element {
    let value_class = if negative {
        "text-rose-300"
    } else {
        theme::text_primary(posture)
    };

    rsx! {
        div {
            class: "{theme::panel_border(posture)} p-4 shadow-sm",
            h3 { class: "{theme::label_class()}", "{title}" }
            p { class: "mt-2 text-2xl font-semibold {value_class}", "{value}" }
            if let Some(caption) = caption {
                p { class: "mt-1 text-xs {theme::text_muted()}", "{caption}" }
            }
        }
    }
}
