// Ruleset Compare - View Traits
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Abstract views the controller drives.
//!
//! The controller never touches a toolkit directly. A front end provides a
//! [`BoardView`] holding one [`RowView`] per rule; tests provide in-memory
//! versions of both.

use crate::models::Permission;

/// Marker class present on rows painted with a gradient.
pub const GRADIENT_CLASS: &str = "rule-gradient";

/// How a rule row is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    /// Solid background of the displayed permission. Used when no comparison is active.
    Baseline(Permission),
    /// Row agrees with the comparison.
    Muted(Permission),
    /// Row disagrees: gradient from the comparison's colour to the row's own colour.
    Divergent { from: Permission, to: Permission },
}

impl RowStyle {
    /// CSS classes making up this style.
    pub fn classes(&self) -> Vec<&'static str> {
        match self {
            RowStyle::Baseline(p) => vec![p.style().bg],
            RowStyle::Muted(p) => vec![p.style().muted],
            RowStyle::Divergent { from, to } => {
                vec![GRADIENT_CLASS, from.style().from, to.style().to]
            }
        }
    }

    /// Every class any style may add, so a row can be reset before restyling.
    pub fn all_classes() -> Vec<&'static str> {
        let mut classes = vec![GRADIENT_CLASS];
        for p in Permission::ALL {
            let tokens = p.style();
            for class in [tokens.bg, tokens.from, tokens.to, tokens.muted] {
                if !classes.contains(&class) {
                    classes.push(class);
                }
            }
        }
        classes
    }
}

/// One rule row.
pub trait RowView {
    /// Rule identifier this row represents.
    fn rule_name(&self) -> &str;

    /// The row's own recorded permission.
    fn baseline(&self) -> Permission;

    /// Set the permission text shown in the row.
    fn show_permission(&mut self, permission: Permission);

    /// Replace the row's paint with `style`.
    fn apply_style(&mut self, style: RowStyle);

    /// Show or hide the comparison indicator slot.
    fn set_comparison_visible(&mut self, visible: bool);
}

/// The table of rule rows plus the selector strip.
pub trait BoardView {
    type Row: RowView;

    /// All rule rows, in display order.
    fn rows_mut(&mut self) -> &mut [Self::Row];

    /// Append a selector button carrying `name`.
    fn append_selector(&mut self, name: &str);

    /// Mark the selector named `name` active and every other one dormant.
    fn mark_active_selector(&mut self, name: &str);
}
