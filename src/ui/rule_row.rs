// Ruleset Compare - Rule Row
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! GTK widgets for a single rule row.

use gtk4::prelude::*;

use crate::models::{Permission, BASELINE_NAME};
use crate::view::{RowStyle, RowView};

/// A rule row: rule name, displayed permission and the comparison slot.
#[derive(Debug, Clone)]
pub struct RuleRowWidget {
    name: String,
    baseline: Permission,
    root: gtk4::Box,
    allowed_label: gtk4::Label,
    slot: gtk4::Box,
}

impl RuleRowWidget {
    /// Build a row painted with its baseline permission.
    pub fn new(name: &str, baseline: Permission) -> Self {
        let root = gtk4::Box::builder()
            .orientation(gtk4::Orientation::Horizontal)
            .spacing(12)
            .margin_start(6)
            .margin_end(6)
            .build();
        root.add_css_class("rule-row");

        let name_label = gtk4::Label::builder()
            .label(name)
            .halign(gtk4::Align::Start)
            .hexpand(true)
            .margin_top(10)
            .margin_bottom(10)
            .margin_start(12)
            .build();
        root.append(&name_label);

        // Hidden until a comparison is overlaid.
        let slot = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);
        slot.add_css_class("comparison-slot");
        slot.set_visible(false);
        let target = gtk4::Label::builder()
            .label(format!("{}: {}", BASELINE_NAME, baseline))
            .css_classes(vec!["dim-label".to_string(), "caption".to_string()])
            .build();
        slot.append(&target);
        let arrow = gtk4::Image::from_icon_name("go-next-symbolic");
        slot.append(&arrow);
        root.append(&slot);

        let allowed_label = gtk4::Label::builder()
            .label(baseline.as_str())
            .width_chars(12)
            .xalign(1.0)
            .margin_end(12)
            .css_classes(vec!["allowed".to_string(), "heading".to_string()])
            .build();
        root.append(&allowed_label);

        let mut row = Self {
            name: name.to_string(),
            baseline,
            root,
            allowed_label,
            slot,
        };
        row.apply_style(RowStyle::Baseline(baseline));
        row
    }

    /// Top-level widget to place in the list.
    pub fn widget(&self) -> &gtk4::Box {
        &self.root
    }
}

impl RowView for RuleRowWidget {
    fn rule_name(&self) -> &str {
        &self.name
    }

    fn baseline(&self) -> Permission {
        self.baseline
    }

    fn show_permission(&mut self, permission: Permission) {
        self.allowed_label.set_label(permission.as_str());
    }

    fn apply_style(&mut self, style: RowStyle) {
        for class in RowStyle::all_classes() {
            self.root.remove_css_class(class);
        }
        for class in style.classes() {
            self.root.add_css_class(class);
        }
    }

    fn set_comparison_visible(&mut self, visible: bool) {
        self.slot.set_visible(visible);
    }
}
