//! Foreign-key dependency graph and migration ordering.
//!
//! Stage four of the pipeline. The graph is derived, never persisted: entity
//! A depends on entity B whenever A declares a foreign key into B's table.
//! Migrations must create a referenced table before any table that references
//! it, so the orderer emits dependencies first.
//!
//! The sort is a depth-first topological sort. Entities with no relative
//! ordering keep their declaration order (the outer walk and each dependency
//! list follow declaration order), so output is stable across runs on
//! unchanged input. A cycle is a hard error naming the entities involved.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::error::{GeneratorError, SchemaError};
use crate::schema::model::SchemaDocument;

/// Directed foreign-key dependency graph over a schema's entities.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    /// entity name -> names of entities it depends on, declaration order
    edges: IndexMap<String, Vec<String>>,
}

#[derive(Clone, Copy, PartialEq)]
enum Mark {
    InProgress,
    Done,
}

impl DependencyGraph {
    /// Derives the graph from a resolved document.
    ///
    /// Self-references (a table with a foreign key into itself) are not
    /// edges: the table exists by the time the constraint applies, and they
    /// would otherwise make every tree-shaped entity a one-node cycle.
    pub fn build(doc: &SchemaDocument) -> Self {
        let mut edges = IndexMap::with_capacity(doc.len());
        for entity in doc.iter() {
            let mut deps: Vec<String> = Vec::new();
            for column in &entity.columns {
                let Some(fk) = &column.foreign else { continue };
                let Some(target) = doc.entity_by_table(&fk.table) else {
                    // Unresolvable references were already rejected upstream.
                    continue;
                };
                if target.name != entity.name && !deps.contains(&target.name) {
                    deps.push(target.name.clone());
                }
            }
            edges.insert(entity.name.clone(), deps);
        }
        DependencyGraph { edges }
    }

    /// Entities the given entity depends on.
    pub fn dependencies_of(&self, entity: &str) -> &[String] {
        self.edges.get(entity).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns every entity in an order where dependencies precede
    /// dependents, or fails with the cycle that prevents one.
    pub fn topological_order(&self) -> Result<Vec<String>, GeneratorError> {
        let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(self.edges.len());
        let mut path: Vec<&str> = Vec::new();
        let mut order: Vec<String> = Vec::with_capacity(self.edges.len());

        for name in self.edges.keys() {
            self.visit(name, &mut marks, &mut path, &mut order)
                .map_err(|cycle| GeneratorError::invalid(vec![cycle]))?;
        }
        Ok(order)
    }

    fn visit<'a>(
        &'a self,
        name: &'a str,
        marks: &mut HashMap<&'a str, Mark>,
        path: &mut Vec<&'a str>,
        order: &mut Vec<String>,
    ) -> Result<(), SchemaError> {
        match marks.get(name) {
            Some(Mark::Done) => return Ok(()),
            Some(Mark::InProgress) => {
                // Found a back edge; report the cycle from its first visit.
                let start = path.iter().position(|n| *n == name).unwrap_or(0);
                let mut cycle: Vec<String> =
                    path[start..].iter().map(|n| n.to_string()).collect();
                cycle.push(name.to_string());
                return Err(SchemaError::CyclicDependency { cycle });
            }
            None => {}
        }

        marks.insert(name, Mark::InProgress);
        path.push(name);
        for dep in self.dependencies_of(name) {
            self.visit(dep, marks, path, order)?;
        }
        path.pop();
        marks.insert(name, Mark::Done);
        order.push(name.to_string());
        Ok(())
    }
}
