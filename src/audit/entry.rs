//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Expense was added by hand
    Create,
    /// Expense was appended by a CSV import
    Import,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Import => write!(f, "IMPORT"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the affected expense
    pub entity_id: String,

    /// Human-readable label (the expense description)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// JSON snapshot of the expense as stored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// File the record was imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl AuditEntry {
    /// Entry for an expense added by hand
    pub fn create<T: Serialize>(
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            entity_id: entity_id.into(),
            entity_name,
            after: serde_json::to_value(entity).ok(),
            source: None,
        }
    }

    /// Entry for an expense appended by an import
    pub fn import<T: Serialize>(
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
        source: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Import,
            entity_id: entity_id.into(),
            entity_name,
            after: serde_json::to_value(entity).ok(),
            source: Some(source.into()),
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} Expense {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(source) = &self.source {
            output.push_str(&format!(" from {}", source));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Import.to_string(), "IMPORT");
    }

    #[test]
    fn test_create_entry() {
        let data = json!({"desc": "Lunch", "amount": 120});
        let entry = AuditEntry::create("exp-12345678", Some("Lunch".to_string()), &data);

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.after, Some(data));
        assert!(entry.source.is_none());
    }

    #[test]
    fn test_import_entry_human_readable() {
        let entry = AuditEntry::import(
            "exp-12345678",
            Some("Taxi".to_string()),
            &json!({"amount": 200}),
            "expenses.csv",
        );

        let text = entry.format_human_readable();
        assert!(text.contains("IMPORT Expense exp-12345678 (Taxi) from expenses.csv"));
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create("exp-1", None, &json!({}));
        let line = serde_json::to_string(&entry).unwrap();
        assert!(!line.contains("entity_name"));
        assert!(!line.contains("source"));
        assert!(line.contains("\"operation\":\"create\""));
    }
}
