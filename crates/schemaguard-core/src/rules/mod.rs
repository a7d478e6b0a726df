//! Rule registry for forbidden constructs

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::RuleCode;

/// One forbidden-construct class: a code, a fixed message, and the
/// pattern that detects it.
pub struct Rule {
    pub code: RuleCode,
    pub message: &'static str,
    pub pattern: Regex,
}

lazy_static! {
    /// The fixed, ordered rule table. Compiled once at first use;
    /// `Regex` keeps no search cursor, so the table is safe to share
    /// across threads.
    pub static ref REGISTRY: Vec<Rule> = vec![
        Rule {
            code: RuleCode::CreateOrReplace,
            message: "Declarative schema files must not use CREATE OR REPLACE statements. \
                      Remove OR REPLACE or split into separate migrations.",
            pattern: compile(r"(?i)\bCREATE\s+OR\s+REPLACE\b"),
        },
        Rule {
            code: RuleCode::DropStatement,
            message: "Declarative schema files must not include DROP statements. \
                      Use migrations to drop schema objects.",
            pattern: compile(r"(?i)\bDROP\s+(TABLE|SCHEMA|VIEW|INDEX|SEQUENCE|FUNCTION|TRIGGER)\b"),
        },
        Rule {
            code: RuleCode::TransactionControl,
            message: "Declarative schema files must not include transaction control statements \
                      such as BEGIN, COMMIT, or ROLLBACK.",
            pattern: compile(r"(?i)\b(BEGIN|COMMIT|ROLLBACK)\b"),
        },
        Rule {
            code: RuleCode::ConditionalDefinition,
            message: "Declarative schema files must not use conditional clauses like \
                      IF EXISTS or IF NOT EXISTS.",
            pattern: compile(r"(?i)\bIF\s+(NOT\s+)?EXISTS\b"),
        },
        Rule {
            code: RuleCode::AlterDrop,
            // (?s) lets the lazy gap cross line breaks. The gap stops at the
            // first DROP COLUMN, which may belong to a later statement if an
            // earlier ALTER TABLE is left unterminated.
            message: "Declarative schema files must not drop columns via \
                      ALTER TABLE ... DROP COLUMN.",
            pattern: compile(r"(?is)\bALTER\s+TABLE\b.*?\bDROP\s+COLUMN\b"),
        },
    ];
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid rule pattern {pattern:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_codes() {
        let codes: Vec<&str> = REGISTRY.iter().map(|r| r.code.code()).collect();
        assert_eq!(
            codes,
            vec![
                "CREATE_OR_REPLACE",
                "DROP_STATEMENT",
                "TRANSACTION_CONTROL",
                "CONDITIONAL_DEFINITION",
                "ALTER_DROP",
            ]
        );
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        for rule in REGISTRY.iter() {
            let sample = match rule.code {
                crate::RuleCode::CreateOrReplace => "create or replace",
                crate::RuleCode::DropStatement => "drop table",
                crate::RuleCode::TransactionControl => "commit",
                crate::RuleCode::ConditionalDefinition => "if not exists",
                crate::RuleCode::AlterDrop => "alter table t drop column c",
            };
            assert!(rule.pattern.is_match(sample), "{} lowercase", rule.code.code());
            assert!(
                rule.pattern.is_match(&sample.to_uppercase()),
                "{} uppercase",
                rule.code.code()
            );
        }
    }

    #[test]
    fn test_drop_requires_object_keyword() {
        let rule = &REGISTRY[1];
        assert!(!rule.pattern.is_match("DROP archived_rows"));
        assert!(rule.pattern.is_match("DROP\n  VIEW active"));
        assert!(rule.pattern.is_match("DROP SEQUENCE seq_id"));
    }

    #[test]
    fn test_word_boundaries_prevent_substring_hits() {
        assert!(!REGISTRY[2].pattern.is_match("BEGINNING OF TIME"));
        assert!(!REGISTRY[2].pattern.is_match("uncommitted"));
        assert!(!REGISTRY[0].pattern.is_match("CREATED OR REPLACED"));
    }

    #[test]
    fn test_alter_drop_spans_lines() {
        let sql = "ALTER TABLE todos\n  DROP COLUMN archived_at;";
        assert!(REGISTRY[4].pattern.is_match(sql));
    }
}
