//! Declarative schema linter
//!
//! The scan runs over a comment-neutralized copy of the input, which
//! has identical byte length, so match offsets carry over to the
//! original text where line, column, and snippet are resolved.

mod position;

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Diagnostic, RuleCode};
use crate::rules::REGISTRY;
use crate::sanitize::neutralize_comments;

pub use position::{resolve, Position};

/// Check SQL text against the full rule registry.
///
/// Total over its input: any string, including empty or syntactically
/// invalid SQL, yields a (possibly empty) list of diagnostics sorted
/// by `(line, column)` with registry order breaking ties.
pub fn validate(sql: &str) -> Vec<Diagnostic> {
    Linter::new().lint(sql)
}

/// Linter with a configurable set of disabled rules.
///
/// Holds no per-input state; `lint` builds fresh scan state on every
/// call, so one `Linter` can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Linter {
    disabled: HashSet<RuleCode>,
}

impl Linter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip a rule for all subsequent `lint` calls.
    pub fn disable(&mut self, code: RuleCode) -> &mut Self {
        self.disabled.insert(code);
        self
    }

    /// Lint `sql` and return the ordered diagnostic list.
    pub fn lint(&self, sql: &str) -> Vec<Diagnostic> {
        let sanitized = neutralize_comments(sql);
        let mut diagnostics = Vec::new();
        let mut seen: HashSet<(RuleCode, usize)> = HashSet::new();

        for rule in REGISTRY.iter() {
            if self.disabled.contains(&rule.code) {
                continue;
            }

            // find_iter resumes after the end of each match and keeps its
            // cursor on the stack, private to this call.
            for m in rule.pattern.find_iter(&sanitized) {
                if !seen.insert((rule.code, m.start())) {
                    continue;
                }

                let pos = position::resolve(sql, m.start());
                diagnostics.push(Diagnostic {
                    code: rule.code,
                    message: rule.message.to_string(),
                    line: pos.line,
                    column: pos.column,
                    snippet: pos.snippet,
                });
            }
        }

        debug!(
            matches = diagnostics.len(),
            bytes = sql.len(),
            "schema lint finished"
        );

        // Stable sort: diagnostics were appended in registry order, which
        // becomes the tie-break for equal positions.
        diagnostics.sort_by_key(|d| (d.line, d.column));
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_schema_passes() {
        let diags = validate("CREATE TABLE todos (id TEXT PRIMARY KEY);");
        assert_eq!(diags, vec![]);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let sql = "BEGIN;\nDROP TABLE todos;";
        let mut linter = Linter::new();
        linter.disable(RuleCode::TransactionControl);

        let diags = linter.lint(sql);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, RuleCode::DropStatement);
    }

    #[test]
    fn test_distinct_rules_sort_by_position_not_registry_order() {
        // DROP_STATEMENT sits before TRANSACTION_CONTROL in the registry,
        // so position must win over append order here.
        let sql = "BEGIN;\nDROP TABLE a;";
        let diags = validate(sql);
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].code, RuleCode::TransactionControl);
        assert_eq!(diags[1].code, RuleCode::DropStatement);
    }
}
