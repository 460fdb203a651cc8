#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod ui;

pub(crate) use uplift_calculator::{domain, util};

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

/// Env vars set on Wayland sessions unless the user already chose a value.
/// Explicit sync crashes on some drivers, in both wgpu and WebKit's DMABUF renderer.
const WAYLAND_DEFAULTS: [(&str, &str); 2] = [
    ("WGPU_BACKEND", "gl"),
    ("WEBKIT_DISABLE_DMABUF_RENDERER", "1"),
];

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    apply_wayland_defaults();
    log::info!("Starting {}", util::version::window_title());

    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(util::version::window_title())
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

fn apply_wayland_defaults() {
    if std::env::var("WAYLAND_DISPLAY").is_err() {
        return;
    }
    for (key, value) in WAYLAND_DEFAULTS {
        if std::env::var(key).is_err() {
            log::debug!("Wayland session detected; setting {key}={value}");
            std::env::set_var(key, value);
        }
    }
}
