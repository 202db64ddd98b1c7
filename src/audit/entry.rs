//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// Types of entities that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Transaction,
    BudgetPeriod,
    Settings,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Transaction => write!(f, "Transaction"),
            EntityType::BudgetPeriod => write!(f, "BudgetPeriod"),
            EntityType::Settings => write!(f, "Settings"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    pub entity_id: String,

    /// Human-readable description of the entity (e.g., period name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    /// Snapshot before the operation (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// Snapshot after the operation (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        entity_name: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            entity_name,
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// Entry for a newly created entity
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Create, entity_type, entity_id.into(), entity_name);
        entry.after = serde_json::to_value(entity).ok();
        entry
    }

    /// Entry for a modified entity; the diff is computed from the snapshots
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Update, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(before).ok();
        entry.after = serde_json::to_value(after).ok();
        if let (Some(b), Some(a)) = (&entry.before, &entry.after) {
            entry.diff_summary = generate_diff(b, a);
        }
        entry
    }

    /// Entry for a removed entity
    pub fn delete<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Self {
        let mut entry = Self::new(Operation::Delete, entity_type, entity_id.into(), entity_name);
        entry.before = serde_json::to_value(entity).ok();
        entry
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_entry() {
        let data = json!({"name": "January", "monthly_income": 4500000});
        let entry = AuditEntry::create(
            EntityType::BudgetPeriod,
            "per-12345678",
            Some("January".to_string()),
            &data,
        );

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.entity_type, EntityType::BudgetPeriod);
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_update_entry_computes_diff() {
        let before = json!({"name": "January", "fixed_expenses": 100});
        let after = json!({"name": "January", "fixed_expenses": 150});

        let entry = AuditEntry::update(
            EntityType::BudgetPeriod,
            "per-12345678",
            Some("January".to_string()),
            &before,
            &after,
        );

        assert_eq!(entry.operation, Operation::Update);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("fixed_expenses: 100 -> 150")
        );
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(
            EntityType::Transaction,
            "txn-12345678",
            None,
            &json!({"amount": 125000}),
        );

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::create(EntityType::Settings, "settings", None, &json!({}));
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"entity_type\":\"settings\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.entity_type, EntityType::Settings);
    }

    #[test]
    fn test_human_readable_format() {
        let before = json!({"name": "Old"});
        let after = json!({"name": "New"});
        let entry = AuditEntry::update(
            EntityType::BudgetPeriod,
            "per-1",
            Some("New".into()),
            &before,
            &after,
        );

        let text = entry.format_human_readable();
        assert!(text.contains("UPDATE BudgetPeriod per-1 (New)"));
        assert!(text.contains("Changes: name: \"Old\" -> \"New\""));
    }
}
