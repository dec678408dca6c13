// Ruleset Compare - Comparison Controller
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Overlays a selected comparison rule-set on the board of rule rows.

use anyhow::{anyhow, Result};
use tracing::{debug, info, warn};

use crate::models::Comparisons;
use crate::view::{BoardView, RowStyle, RowView};

/// Name carried by the selector that clears the overlay.
pub const CLEAR_SELECTOR: &str = "None";

/// Which comparison is currently overlaid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Comparison(String),
}

/// Outcome of overlaying a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComparisonSummary {
    /// Rows whose permission matches the comparison.
    pub matching: usize,
    /// Rows whose permission differs from the comparison.
    pub diverging: usize,
}

impl ComparisonSummary {
    pub fn total(&self) -> usize {
        self.matching + self.diverging
    }
}

/// Owns the fetched comparisons and the board, and applies selections to it.
pub struct ComparisonController<B: BoardView> {
    comparisons: Comparisons,
    board: B,
    selection: Selection,
    summary: Option<ComparisonSummary>,
}

impl<B: BoardView> ComparisonController<B> {
    /// Populate the selector strip: one selector per comparison except the
    /// baseline, followed by the clear selector, which starts active.
    pub fn new(comparisons: Comparisons, mut board: B) -> Self {
        let mut offered = 0;
        for rule_set in comparisons.selectable() {
            if rule_set.name == CLEAR_SELECTOR {
                warn!("Rule-set named {:?} clashes with the clear selector, not offering it", CLEAR_SELECTOR);
                continue;
            }
            board.append_selector(&rule_set.name);
            offered += 1;
        }
        board.append_selector(CLEAR_SELECTOR);
        board.mark_active_selector(CLEAR_SELECTOR);

        if comparisons.baseline().is_none() {
            warn!("No baseline rule-set in comparisons; clearing will use each row's own value");
        }
        info!("Offering {} comparisons", offered);

        Self {
            comparisons,
            board,
            selection: Selection::None,
            summary: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Summary of the active comparison, if any.
    pub fn summary(&self) -> Option<ComparisonSummary> {
        self.summary
    }

    pub fn comparisons(&self) -> &Comparisons {
        &self.comparisons
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    /// Overlay the comparison named `name` on every row.
    ///
    /// An unknown name is an error and leaves the board untouched.
    pub fn select(&mut self, name: &str) -> Result<ComparisonSummary> {
        let comparison = self
            .comparisons
            .get(name)
            .ok_or_else(|| anyhow!("No comparison named {:?}", name))?;

        let mut summary = ComparisonSummary::default();
        for row in self.board.rows_mut() {
            let theirs = comparison.permission(row.rule_name());
            let ours = row.baseline();

            row.show_permission(theirs);
            if theirs == ours {
                row.apply_style(RowStyle::Muted(ours));
                summary.matching += 1;
            } else {
                row.apply_style(RowStyle::Divergent {
                    from: theirs,
                    to: ours,
                });
                summary.diverging += 1;
            }
            row.set_comparison_visible(true);
        }
        self.board.mark_active_selector(name);

        debug!(
            "Applied comparison {:?}: {} matching, {} diverging",
            name, summary.matching, summary.diverging
        );
        self.selection = Selection::Comparison(name.to_string());
        self.summary = Some(summary);
        Ok(summary)
    }

    /// Restore every row to the baseline display.
    pub fn clear(&mut self) {
        let baseline = self.comparisons.baseline();
        for row in self.board.rows_mut() {
            let permission = match baseline {
                Some(rule_set) => rule_set.permission(row.rule_name()),
                None => row.baseline(),
            };
            row.show_permission(permission);
            row.apply_style(RowStyle::Baseline(permission));
            row.set_comparison_visible(false);
        }
        self.board.mark_active_selector(CLEAR_SELECTOR);

        debug!("Cleared comparison overlay");
        self.selection = Selection::None;
        self.summary = None;
    }

    /// Dispatch a selector activation by the name it carries.
    pub fn handle_selector(&mut self, name: &str) {
        if name.is_empty() {
            debug!("Selector event without a name, ignoring");
            return;
        }
        if name == CLEAR_SELECTOR {
            self.clear();
            return;
        }
        if let Err(e) = self.select(name) {
            warn!("Ignoring selector: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Permission, RuleSet};

    #[derive(Debug, Clone, PartialEq)]
    pub(crate) struct MockRow {
        pub name: String,
        pub baseline: Permission,
        pub shown: Permission,
        pub classes: Vec<&'static str>,
        pub slot_visible: bool,
    }

    impl MockRow {
        pub fn new(name: &str, baseline: Permission) -> Self {
            Self {
                name: name.to_string(),
                baseline,
                shown: baseline,
                classes: RowStyle::Baseline(baseline).classes(),
                slot_visible: false,
            }
        }
    }

    impl RowView for MockRow {
        fn rule_name(&self) -> &str {
            &self.name
        }

        fn baseline(&self) -> Permission {
            self.baseline
        }

        fn show_permission(&mut self, permission: Permission) {
            self.shown = permission;
        }

        fn apply_style(&mut self, style: RowStyle) {
            let stale = RowStyle::all_classes();
            self.classes.retain(|c| !stale.contains(c));
            self.classes.extend(style.classes());
        }

        fn set_comparison_visible(&mut self, visible: bool) {
            self.slot_visible = visible;
        }
    }

    #[derive(Debug, Default)]
    pub(crate) struct MockBoard {
        pub rows: Vec<MockRow>,
        pub selectors: Vec<String>,
        pub active: Option<String>,
    }

    impl BoardView for MockBoard {
        type Row = MockRow;

        fn rows_mut(&mut self) -> &mut [MockRow] {
            &mut self.rows
        }

        fn append_selector(&mut self, name: &str) {
            self.selectors.push(name.to_string());
        }

        fn mark_active_selector(&mut self, name: &str) {
            self.active = Some(name.to_string());
        }
    }

    fn weekly() -> RuleSet {
        RuleSet::new("Weekly")
            .with_rule("rule1", Permission::Allowed)
            .with_rule("rule2", Permission::Disallowed)
            .with_rule("rule3", Permission::Unspecified)
    }

    fn board() -> MockBoard {
        MockBoard {
            rows: vec![
                MockRow::new("rule1", Permission::Allowed),
                MockRow::new("rule2", Permission::Disallowed),
                MockRow::new("rule3", Permission::Unspecified),
            ],
            ..Default::default()
        }
    }

    fn controller() -> ComparisonController<MockBoard> {
        let comparisons = Comparisons::new(vec![
            weekly(),
            RuleSet::new("Audit")
                .with_rule("rule1", Permission::Disallowed)
                .with_rule("rule2", Permission::Disallowed)
                .with_rule("rule3", Permission::Allowed),
            RuleSet::new("NMG").with_rule("rule1", Permission::Allowed),
        ]);
        ComparisonController::new(comparisons, board())
    }

    #[test]
    fn test_load_builds_selectors() {
        let c = controller();
        assert_eq!(c.board().selectors, vec!["Audit", "NMG", "None"]);
        assert_eq!(c.board().active.as_deref(), Some(CLEAR_SELECTOR));
        assert_eq!(c.selection(), &Selection::None);
    }

    #[test]
    fn test_select_shows_comparison_values() {
        let mut c = controller();
        let summary = c.select("Audit").unwrap();
        assert_eq!(summary, ComparisonSummary { matching: 1, diverging: 2 });

        let audit = c.comparisons().get("Audit").unwrap().clone();
        for row in &c.board().rows {
            assert_eq!(row.shown, audit.permission(&row.name));
            assert!(row.slot_visible);
        }
        assert_eq!(c.board().active.as_deref(), Some("Audit"));
        assert_eq!(c.selection(), &Selection::Comparison("Audit".to_string()));
    }

    #[test]
    fn test_divergent_row_gets_gradient() {
        let mut c = controller();
        c.select("Audit").unwrap();
        let row1 = &c.board().rows[0];
        assert_eq!(row1.shown, Permission::Disallowed);
        assert_eq!(
            row1.classes,
            RowStyle::Divergent {
                from: Permission::Disallowed,
                to: Permission::Allowed
            }
            .classes()
        );
        assert!(row1.classes.contains(&Permission::Disallowed.style().from));
        assert!(row1.classes.contains(&Permission::Allowed.style().to));
    }

    #[test]
    fn test_matching_row_is_muted() {
        let mut c = controller();
        c.select("NMG").unwrap();
        let row1 = &c.board().rows[0];
        assert_eq!(row1.shown, Permission::Allowed);
        assert_eq!(row1.classes, vec![Permission::Allowed.style().muted]);
        assert!(!row1.classes.contains(&crate::view::GRADIENT_CLASS));

        // Not mentioned by NMG, so unspecified: differs from DISALLOWED, matches UNSPECIFIED.
        assert_eq!(c.board().rows[1].shown, Permission::Unspecified);
        assert!(c.board().rows[1].classes.contains(&crate::view::GRADIENT_CLASS));
        assert_eq!(
            c.board().rows[2].classes,
            vec![Permission::Unspecified.style().muted]
        );
    }

    #[test]
    fn test_clear_round_trip_restores_baseline() {
        let mut c = controller();
        c.clear();
        let baseline = c.board().rows.clone();
        c.select("Audit").unwrap();
        assert_ne!(c.board().rows, baseline);
        c.clear();
        assert_eq!(c.board().rows, baseline);
        assert_eq!(c.board().active.as_deref(), Some(CLEAR_SELECTOR));
        assert_eq!(c.selection(), &Selection::None);
        assert_eq!(c.summary(), None);
    }

    #[test]
    fn test_unknown_selection_leaves_rows_unchanged() {
        let mut c = controller();
        c.select("NMG").unwrap();
        let before = c.board().rows.clone();
        assert!(c.select("Nope").is_err());
        c.handle_selector("Nope");
        c.handle_selector("");
        assert_eq!(c.board().rows, before);
        assert_eq!(c.board().active.as_deref(), Some("NMG"));
    }

    #[test]
    fn test_handle_selector_dispatch() {
        let mut c = controller();
        c.handle_selector("Audit");
        assert_eq!(c.selection(), &Selection::Comparison("Audit".to_string()));
        assert_eq!(c.summary().map(|s| s.total()), Some(3));
        c.handle_selector(CLEAR_SELECTOR);
        assert_eq!(c.selection(), &Selection::None);
        assert!(c.board().rows.iter().all(|r| !r.slot_visible));
    }

    #[test]
    fn test_clear_restores_weekly_values_not_row_values() {
        let comparisons = Comparisons::new(vec![
            RuleSet::new("Weekly").with_rule("rule1", Permission::Disallowed),
            RuleSet::new("Audit").with_rule("rule1", Permission::Allowed),
        ]);
        let mut c = ComparisonController::new(comparisons, board());
        c.select("Audit").unwrap();
        c.clear();

        let shown: Vec<(&str, Permission, Vec<&'static str>)> = c
            .board()
            .rows
            .iter()
            .map(|r| (r.name.as_str(), r.shown, r.classes.clone()))
            .collect();
        assert_eq!(
            shown,
            vec![
                ("rule1", Permission::Disallowed, RowStyle::Baseline(Permission::Disallowed).classes()),
                // Omitted by Weekly, so unspecified even though the row records DISALLOWED.
                ("rule2", Permission::Unspecified, RowStyle::Baseline(Permission::Unspecified).classes()),
                ("rule3", Permission::Unspecified, RowStyle::Baseline(Permission::Unspecified).classes()),
            ]
        );
        assert!(c.board().rows.iter().all(|r| !r.slot_visible));
    }

    #[test]
    fn test_rule_set_named_like_clear_selector_is_not_offered() {
        let comparisons = Comparisons::new(vec![
            weekly(),
            RuleSet::new(CLEAR_SELECTOR).with_rule("rule1", Permission::Disallowed),
            RuleSet::new("Audit"),
        ]);
        let mut c = ComparisonController::new(comparisons, board());
        assert_eq!(c.board().selectors, vec!["Audit", "None"]);

        c.handle_selector("Audit");
        c.handle_selector(CLEAR_SELECTOR);
        assert_eq!(c.selection(), &Selection::None);
        assert_eq!(c.board().rows[0].shown, Permission::Allowed);
    }

    #[test]
    fn test_clear_without_baseline_uses_row_values() {
        let comparisons = Comparisons::new(vec![
            RuleSet::new("Audit").with_rule("rule1", Permission::Disallowed),
        ]);
        let mut c = ComparisonController::new(comparisons, board());
        assert_eq!(c.board().selectors, vec!["Audit", "None"]);
        c.select("Audit").unwrap();
        c.clear();
        for row in &c.board().rows {
            assert_eq!(row.shown, row.baseline);
            assert_eq!(row.classes, RowStyle::Baseline(row.baseline).classes());
        }
    }
}
