//! Posture-specific theme helpers so the accent colour tracks the chosen risk posture.

use crate::domain::RiskPosture;

// ============================================
// BUTTON STYLES
// ============================================

pub fn btn_primary(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "rounded-lg bg-sky-500 px-4 py-2 text-sm font-semibold text-white hover:bg-sky-400 disabled:opacity-50",
        RiskPosture::Moderate => "rounded-lg bg-indigo-500 px-4 py-2 text-sm font-semibold text-white hover:bg-indigo-400 disabled:opacity-50",
        RiskPosture::Optimistic => "rounded-lg bg-emerald-500 px-4 py-2 text-sm font-semibold text-white hover:bg-emerald-400 disabled:opacity-50",
    }
}

pub fn btn_secondary() -> &'static str {
    "rounded-lg border border-slate-600 px-4 py-2 text-sm font-semibold text-slate-200 hover:bg-slate-800"
}

pub fn btn_small_active(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "rounded px-3 py-1.5 text-xs font-semibold bg-sky-500/20 text-sky-300 border border-sky-500/40",
        RiskPosture::Moderate => "rounded px-3 py-1.5 text-xs font-semibold bg-indigo-500/20 text-indigo-300 border border-indigo-500/40",
        RiskPosture::Optimistic => "rounded px-3 py-1.5 text-xs font-semibold bg-emerald-500/20 text-emerald-300 border border-emerald-500/40",
    }
}

pub fn btn_small_inactive() -> &'static str {
    "rounded px-3 py-1.5 text-xs text-slate-500 border border-slate-700 hover:border-slate-500 hover:text-slate-300"
}

// ============================================
// INPUT STYLES
// ============================================

pub fn input_class(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-sky-500 focus:outline-none",
        RiskPosture::Moderate => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-indigo-500 focus:outline-none",
        RiskPosture::Optimistic => "rounded-lg border border-slate-700 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-emerald-500 focus:outline-none",
    }
}

pub fn input_error() -> &'static str {
    "rounded-lg border border-rose-500/60 bg-slate-950 px-3 py-2 text-sm text-slate-100 focus:border-rose-400 focus:outline-none"
}

// ============================================
// PANEL / TABLE STYLES
// ============================================

pub fn panel_border(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "rounded-xl border border-sky-800/50 bg-slate-900/40",
        RiskPosture::Moderate => "rounded-xl border border-indigo-800/50 bg-slate-900/40",
        RiskPosture::Optimistic => "rounded-xl border border-emerald-800/50 bg-slate-900/40",
    }
}

pub fn panel_solid() -> &'static str {
    "rounded-xl border border-slate-800 bg-slate-900/40"
}

pub fn table_header(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "border-b border-sky-900/40 bg-sky-950/30 text-xs uppercase text-sky-400/70",
        RiskPosture::Moderate => "border-b border-indigo-900/40 bg-indigo-950/30 text-xs uppercase text-indigo-400/70",
        RiskPosture::Optimistic => "border-b border-emerald-900/40 bg-emerald-950/30 text-xs uppercase text-emerald-400/70",
    }
}

// ============================================
// TEXT STYLES
// ============================================

pub fn text_primary(posture: RiskPosture) -> &'static str {
    match posture {
        RiskPosture::Conservative => "text-sky-300",
        RiskPosture::Moderate => "text-indigo-300",
        RiskPosture::Optimistic => "text-emerald-300",
    }
}

pub fn text_muted() -> &'static str {
    "text-slate-500"
}

pub fn label_class() -> &'static str {
    "block text-xs font-semibold uppercase text-slate-500"
}

pub fn section_title() -> &'static str {
    "text-sm font-semibold uppercase tracking-wide text-slate-500"
}

/// Red for losses, neutral otherwise.
pub fn signed_value(value: f64) -> &'static str {
    if value < 0.0 {
        "text-rose-300 negative"
    } else {
        "text-slate-200"
    }
}
