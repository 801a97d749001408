use std::fmt;

use serde::Serialize;

/// Kind of entity created by the demo-data seeder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedKind {
    Menu,
    Area,
    Table,
    MenuItem,
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SeedKind::Menu => "Menu",
            SeedKind::Area => "Area",
            SeedKind::Table => "Table",
            SeedKind::MenuItem => "Menu item",
        };
        f.write_str(label)
    }
}

/// What happened to a single demo entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeedOutcome {
    /// The row was inserted with the given id.
    Created { id: i32 },
    /// A row with the same identity already existed.
    Skipped,
    /// The insert failed; the reason is kept for inspection.
    Failed { reason: String },
}

/// Outcome of one demo entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedEntry {
    pub kind: SeedKind,
    /// Human-readable description, e.g. `T3 (Terrace, 6 seats)`.
    pub label: String,
    #[serde(flatten)]
    pub outcome: SeedOutcome,
}

/// Per-entity report produced by a seeding run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SeedReport {
    pub entries: Vec<SeedEntry>,
}

impl SeedReport {
    pub fn record(&mut self, kind: SeedKind, label: impl Into<String>, outcome: SeedOutcome) {
        self.entries.push(SeedEntry {
            kind,
            label: label.into(),
            outcome,
        });
    }

    /// Descriptions of the entities that were actually inserted.
    pub fn created(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| matches!(entry.outcome, SeedOutcome::Created { .. }))
            .map(|entry| format!("{}: {}", entry.kind, entry.label))
            .collect()
    }

    pub fn created_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, SeedOutcome::Created { .. }))
    }

    pub fn skipped_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, SeedOutcome::Skipped))
    }

    pub fn failed_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, SeedOutcome::Failed { .. }))
    }

    /// Number of entries of `kind` that were inserted.
    pub fn created_of(&self, kind: SeedKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .filter(|entry| matches!(entry.outcome, SeedOutcome::Created { .. }))
            .count()
    }

    fn count(&self, predicate: impl Fn(&SeedOutcome) -> bool) -> usize {
        self.entries
            .iter()
            .filter(|entry| predicate(&entry.outcome))
            .count()
    }
}
