use serde::Serialize;

use crate::output::Outputable;

/// Per-entity summary for the check report.
#[derive(Debug, Clone, Serialize)]
pub struct EntityReport {
    pub name: String,
    pub table: String,
    pub columns: usize,
    pub relations: usize,
    pub has_admin: bool,
}

/// Result of a check run.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub schema: String,
    pub entities: Vec<EntityReport>,
    /// Entity names in the order their migrations would be emitted.
    pub migration_order: Vec<String>,
}

impl Outputable for CheckResult {
    fn to_table(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Schema {} is valid ({} entity(ies))\n",
            self.schema,
            self.entities.len()
        ));
        for entity in &self.entities {
            out.push_str(&format!(
                "  {} (table: {}, columns: {}, relations: {}{})\n",
                entity.name,
                entity.table,
                entity.columns,
                entity.relations,
                if entity.has_admin { ", filament" } else { "" },
            ));
        }
        out.push_str(&format!(
            "Migration order: {}",
            self.migration_order.join(" -> ")
        ));
        out
    }
}
