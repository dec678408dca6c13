// Ruleset Compare - Permission Model
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Permission values and the style tokens each one renders with.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Whether a rule is permitted in a given rule-set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    Allowed,
    Disallowed,
    #[default]
    Unspecified,
}

/// CSS class names used to paint a row for one permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    /// Solid background for the baseline display.
    pub bg: &'static str,
    /// Gradient start, used when this permission is the comparison value.
    pub from: &'static str,
    /// Gradient end, used when this permission is the row's own value.
    pub to: &'static str,
    /// Muted background for rows that agree with the comparison.
    pub muted: &'static str,
}

const ALLOWED_STYLE: StyleTokens = StyleTokens {
    bg: "rule-allowed",
    from: "from-allowed",
    to: "to-allowed",
    muted: "rule-allowed-muted",
};

const DISALLOWED_STYLE: StyleTokens = StyleTokens {
    bg: "rule-disallowed",
    from: "from-disallowed",
    to: "to-disallowed",
    muted: "rule-disallowed-muted",
};

// Unspecified has no muted variant.
const UNSPECIFIED_STYLE: StyleTokens = StyleTokens {
    bg: "rule-unspecified",
    from: "from-unspecified",
    to: "to-unspecified",
    muted: "rule-unspecified",
};

impl Permission {
    /// Every permission, in display order.
    pub const ALL: [Permission; 3] = [
        Permission::Allowed,
        Permission::Disallowed,
        Permission::Unspecified,
    ];

    /// Wire and display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::Allowed => "ALLOWED",
            Permission::Disallowed => "DISALLOWED",
            Permission::Unspecified => "UNSPECIFIED",
        }
    }

    /// Style token bundle for this permission.
    pub fn style(&self) -> &'static StyleTokens {
        match self {
            Permission::Allowed => &ALLOWED_STYLE,
            Permission::Disallowed => &DISALLOWED_STYLE,
            Permission::Unspecified => &UNSPECIFIED_STYLE,
        }
    }

    /// Base colour (hex) the GUI uses for this permission.
    pub fn color(&self) -> &'static str {
        match self {
            Permission::Allowed => "#2dd4bf",
            Permission::Disallowed => "#f87171",
            Permission::Unspecified => "#d4d4d8",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ALLOWED" => Ok(Permission::Allowed),
            "DISALLOWED" => Ok(Permission::Disallowed),
            "UNSPECIFIED" => Ok(Permission::Unspecified),
            other => Err(anyhow!(
                "Unknown permission {:?}, expected ALLOWED, DISALLOWED or UNSPECIFIED",
                other
            )),
        }
    }
}
