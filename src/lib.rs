//! Identity uplift calculator: domain aggregation, revenue projection and lead capture.
//!
//! The engine in [`domain`] is pure and UI-agnostic; the desktop funnel in
//! `main.rs` is a thin layer over it.

pub mod domain;
pub mod util;
