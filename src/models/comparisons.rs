// Ruleset Compare - Comparisons
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! The set of rule-sets fetched at startup.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::ruleset::{RuleSet, BASELINE_NAME};

/// Immutable, ordered lookup of rule-sets by name.
///
/// Built once from the fetched payload and never modified afterwards.
#[derive(Debug, Clone, Default)]
pub struct Comparisons {
    entries: Vec<RuleSet>,
}

impl Comparisons {
    /// Build the lookup, keeping fetch order.
    ///
    /// A repeated name replaces the earlier rule-set in its original position.
    pub fn new(rule_sets: Vec<RuleSet>) -> Self {
        let mut entries: Vec<RuleSet> = Vec::with_capacity(rule_sets.len());
        for rs in rule_sets {
            match entries.iter_mut().find(|e| e.name == rs.name) {
                Some(existing) => {
                    warn!("Duplicate comparison {:?}, keeping the later one", rs.name);
                    *existing = rs;
                }
                None => entries.push(rs),
            }
        }
        debug!("Loaded {} comparisons", entries.len());
        Self { entries }
    }

    /// Decode a `/comparisons` payload.
    pub fn from_json(body: &str) -> Result<Self> {
        let rule_sets: Vec<RuleSet> =
            serde_json::from_str(body).context("Malformed comparisons payload")?;
        Ok(Self::new(rule_sets))
    }

    /// Look up a rule-set by name.
    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// The baseline rule-set, if the server sent one.
    pub fn baseline(&self) -> Option<&RuleSet> {
        self.get(BASELINE_NAME)
    }

    /// Rule-sets offered as comparisons (everything but the baseline), in fetch order.
    pub fn selectable(&self) -> impl Iterator<Item = &RuleSet> {
        self.entries.iter().filter(|e| !e.is_baseline())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
