// Ruleset Compare - UI Module
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! User interface components.

mod board;
mod main_window;
mod rule_row;

pub use board::GtkBoard;
pub use main_window::MainWindow;
pub use rule_row::RuleRowWidget;
