// Ruleset Compare - Rule Board
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! GTK implementation of the board: rule rows plus the selector strip.

use gtk4::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use super::RuleRowWidget;
use crate::view::BoardView;

const ACTIVE_SELECTOR_CLASSES: [&str; 2] = ["selector-active", "suggested-action"];
const DORMANT_SELECTOR_CLASSES: [&str; 1] = ["selector-dormant"];

/// Rows and selector buttons. Clicks are sent as selector names over `sender`.
pub struct GtkBoard {
    rows: Vec<RuleRowWidget>,
    selector_box: gtk4::Box,
    selectors: Vec<gtk4::Button>,
    sender: UnboundedSender<String>,
}

impl GtkBoard {
    pub fn new(
        rows: Vec<RuleRowWidget>,
        selector_box: gtk4::Box,
        sender: UnboundedSender<String>,
    ) -> Self {
        Self {
            rows,
            selector_box,
            selectors: Vec::new(),
            sender,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

impl BoardView for GtkBoard {
    type Row = RuleRowWidget;

    fn rows_mut(&mut self) -> &mut [RuleRowWidget] {
        &mut self.rows
    }

    fn append_selector(&mut self, name: &str) {
        let button = gtk4::Button::builder()
            .label(name)
            .name(name)
            .build();
        button.add_css_class("pill");
        for class in DORMANT_SELECTOR_CLASSES {
            button.add_css_class(class);
        }

        let sender = self.sender.clone();
        button.connect_clicked(move |btn| {
            let name = btn.widget_name().to_string();
            if sender.send(name).is_err() {
                debug!("Selector clicked after the controller went away");
            }
        });

        self.selector_box.append(&button);
        self.selectors.push(button);
    }

    fn mark_active_selector(&mut self, name: &str) {
        for button in &self.selectors {
            if button.widget_name().as_str() == name {
                for class in DORMANT_SELECTOR_CLASSES {
                    button.remove_css_class(class);
                }
                for class in ACTIVE_SELECTOR_CLASSES {
                    button.add_css_class(class);
                }
            } else {
                for class in ACTIVE_SELECTOR_CLASSES {
                    button.remove_css_class(class);
                }
                for class in DORMANT_SELECTOR_CLASSES {
                    button.add_css_class(class);
                }
            }
        }
    }
}
