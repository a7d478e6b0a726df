//! Diagnostic types

use serde::{Deserialize, Serialize};

/// Rule violation found in a declarative schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: RuleCode,
    pub message: String,
    /// Line number (1-indexed) in the original text
    pub line: usize,
    /// Column number (1-indexed, byte offset within the line)
    pub column: usize,
    /// The offending source line, surrounding whitespace trimmed
    pub snippet: String,
}

impl Diagnostic {
    /// Get the rule code string (e.g., "DROP_STATEMENT")
    pub fn code(&self) -> &'static str {
        self.code.code()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.code.code(),
            self.line,
            self.column,
            self.message
        )
    }
}

/// Classes of forbidden constructs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleCode {
    /// CREATE OR REPLACE statement
    CreateOrReplace,
    /// DROP of a schema object
    DropStatement,
    /// Manual transaction boundary (BEGIN, COMMIT, ROLLBACK)
    TransactionControl,
    /// IF EXISTS / IF NOT EXISTS guard
    ConditionalDefinition,
    /// ALTER TABLE ... DROP COLUMN
    AlterDrop,
}

impl RuleCode {
    pub fn code(&self) -> &'static str {
        match self {
            RuleCode::CreateOrReplace => "CREATE_OR_REPLACE",
            RuleCode::DropStatement => "DROP_STATEMENT",
            RuleCode::TransactionControl => "TRANSACTION_CONTROL",
            RuleCode::ConditionalDefinition => "CONDITIONAL_DEFINITION",
            RuleCode::AlterDrop => "ALTER_DROP",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RuleCode::CreateOrReplace => "create-or-replace",
            RuleCode::DropStatement => "drop-statement",
            RuleCode::TransactionControl => "transaction-control",
            RuleCode::ConditionalDefinition => "conditional-definition",
            RuleCode::AlterDrop => "alter-drop",
        }
    }
}

impl std::str::FromStr for RuleCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CREATE_OR_REPLACE" => Ok(RuleCode::CreateOrReplace),
            "DROP_STATEMENT" => Ok(RuleCode::DropStatement),
            "TRANSACTION_CONTROL" => Ok(RuleCode::TransactionControl),
            "CONDITIONAL_DEFINITION" => Ok(RuleCode::ConditionalDefinition),
            "ALTER_DROP" => Ok(RuleCode::AlterDrop),
            _ => Err(format!(
                "Unknown rule code: '{}'. Known codes: CREATE_OR_REPLACE, DROP_STATEMENT, \
                 TRANSACTION_CONTROL, CONDITIONAL_DEFINITION, ALTER_DROP.",
                s
            )),
        }
    }
}
