// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring logging, configuration, and egui/eframe.

use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::ui::DashboardApp;

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "postpilot=info";

/// Install the global `tracing` subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    init_logging();
    let config = Config::load_or_default();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting postpilot");

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 500.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "postpilot",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(DashboardApp::new(&config)))
        }),
    )
}
