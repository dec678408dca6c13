// Ruleset Compare - Stylesheet
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! CSS for the row and selector classes, generated from the permission tokens.

use std::fmt::Write;

use crate::models::Permission;
use crate::view::GRADIENT_CLASS;

const SELECTOR_CSS: &str = r#"
.selector-dormant {
    background-color: alpha(#8b5cf6, 0.75);
    color: white;
}
.selector-dormant:hover {
    background-color: #8b5cf6;
}
.selector-active {
    background-color: #34d399;
    color: black;
}
.selector-active:hover {
    background-color: #10b981;
}
.rule-row {
    border-radius: 6px;
}
"#;

/// Build the application stylesheet.
pub fn stylesheet() -> String {
    let mut css = String::from(SELECTOR_CSS);

    // Muted first: Unspecified shares its muted and solid class.
    for p in Permission::ALL {
        let _ = writeln!(
            css,
            ".{} {{ background-color: alpha({}, 0.25); }}",
            p.style().muted,
            p.color()
        );
    }
    for p in Permission::ALL {
        let _ = writeln!(
            css,
            ".{} {{ background-color: alpha({}, 0.6); }}",
            p.style().bg,
            p.color()
        );
    }
    for from in Permission::ALL {
        for to in Permission::ALL {
            let _ = writeln!(
                css,
                ".{}.{}.{} {{ background-image: linear-gradient(to right, {}, {}); }}",
                GRADIENT_CLASS,
                from.style().from,
                to.style().to,
                from.color(),
                to.color()
            );
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_gradient_pair_has_a_rule() {
        let css = stylesheet();
        for from in Permission::ALL {
            for to in Permission::ALL {
                let selector = format!(
                    ".{}.{}.{}",
                    GRADIENT_CLASS,
                    from.style().from,
                    to.style().to
                );
                assert!(css.contains(&selector), "missing {}", selector);
            }
        }
    }

    #[test]
    fn test_solid_rule_wins_for_unspecified() {
        let css = stylesheet();
        let class = format!(".{} ", Permission::Unspecified.style().bg);
        let first = css.find(&class).unwrap();
        let last = css.rfind(&class).unwrap();
        assert!(css[last..].starts_with(&format!("{}{{ background-color: alpha(#d4d4d8, 0.6)", class)));
        assert!(first < last);
    }
}
