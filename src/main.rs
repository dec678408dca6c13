// Ruleset Compare - Main Entry Point
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Ruleset Compare - a GTK4/Libadwaita viewer for rule-set comparisons.

use gtk4::glib;
use gtk4::prelude::*;
use tracing_subscriber::EnvFilter;

use ruleset_compare::application::Application;

/// Application ID.
const APP_ID: &str = "com.chrisdaggas.ruleset-compare";

fn main() -> glib::ExitCode {
    glib::set_prgname(Some(APP_ID));
    glib::set_application_name("Ruleset Compare");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Application::new(APP_ID);
    app.run()
}
