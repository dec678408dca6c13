// Ruleset Compare - Library Root
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Overlay a named comparison rule-set on the weekly table of rule rows.
//!
//! Comparisons are fetched once from `GET <endpoint>/comparisons`. The
//! [`controller::ComparisonController`] applies or clears a comparison on any
//! [`view::BoardView`]; the GTK front end behind the `gui` feature is one.

pub mod client;
pub mod config;
pub mod controller;
pub mod models;
pub mod stylesheet;
pub mod view;

#[cfg(feature = "gui")]
pub mod application;
#[cfg(feature = "gui")]
pub mod ui;
