// Ruleset Compare - Rule-set Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! A named mapping from rule identifier to permission.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Permission;

/// Name of the rule-set shown when no comparison is active.
pub const BASELINE_NAME: &str = "Weekly";

/// A named rule-set.
///
/// On the wire this is a single flat object: a `name` field plus one field
/// per rule identifier, e.g. `{"name": "Audit", "FakeFlippers": "ALLOWED"}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    #[serde(flatten)]
    pub rules: BTreeMap<String, Permission>,
}

impl RuleSet {
    /// Create an empty rule-set.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder-style helper to add a rule.
    pub fn with_rule(mut self, rule: &str, permission: Permission) -> Self {
        self.rules.insert(rule.to_string(), permission);
        self
    }

    /// Permission for a rule. Rules the set does not mention are unspecified.
    pub fn permission(&self, rule: &str) -> Permission {
        self.rules.get(rule).copied().unwrap_or_default()
    }

    /// Whether this is the baseline rule-set.
    pub fn is_baseline(&self) -> bool {
        self.name == BASELINE_NAME
    }
}
