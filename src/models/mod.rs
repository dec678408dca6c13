// Ruleset Compare - Models
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Data models for rule-sets and permissions.

mod comparisons;
mod permission;
mod ruleset;

pub use comparisons::Comparisons;
pub use permission::{Permission, StyleTokens};
pub use ruleset::{RuleSet, BASELINE_NAME};
