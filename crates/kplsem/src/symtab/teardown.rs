//! Whole-table teardown
//!
//! The arenas already guarantee each object and scope is dropped once. The
//! walk below follows only owning edges (program → scope → objects → bodies)
//! and reports what the ownership tree released, so callers can verify that
//! every declared object was reachable from exactly one container.

use super::object::{ObjectAttrs, ObjectId, ScopeId};
use super::table::SymTab;
use crate::common::{SemResult, SemanticError};

/// Counts of nodes released by [`SymTab::clean`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TeardownReport {
    /// Objects reached through the ownership tree
    pub objects: usize,
    /// Scopes reached through the ownership tree
    pub scopes: usize,
    /// Type nodes owned by reached objects, plus the two shared primitives
    pub type_nodes: usize,
    /// Constant values owned by reached constants
    pub constants: usize,
    /// Objects that were created but never handed to a container
    pub orphan_objects: usize,
    /// Scopes not reachable from any owner
    pub orphan_scopes: usize,
}

struct Walk<'a> {
    table: &'a SymTab,
    seen_objects: Vec<bool>,
    seen_scopes: Vec<bool>,
    report: TeardownReport,
}

impl Walk<'_> {
    fn release_object(&mut self, id: ObjectId) -> SemResult<()> {
        let table = self.table;
        if std::mem::replace(&mut self.seen_objects[id.index()], true) {
            return Err(SemanticError::OwnershipViolation {
                name: table.name(id).to_string(),
            });
        }

        match table.object(id).attrs() {
            ObjectAttrs::Program { scope } => self.release_scope(*scope)?,
            ObjectAttrs::Constant { value } => {
                if value.is_some() {
                    self.report.constants += 1;
                }
            }
            ObjectAttrs::TypeAlias { actual: ty }
            | ObjectAttrs::Variable { ty, .. }
            | ObjectAttrs::Parameter { ty, .. } => {
                self.report.type_nodes += ty.as_ref().map_or(0, |t| t.node_count());
            }
            // The parameter list only indexes objects of the body scope
            ObjectAttrs::Function {
                return_type, scope, ..
            } => {
                self.report.type_nodes += return_type.as_ref().map_or(0, |t| t.node_count());
                self.release_scope(*scope)?;
            }
            ObjectAttrs::Procedure { scope, .. } => self.release_scope(*scope)?,
        }

        self.report.objects += 1;
        Ok(())
    }

    fn release_scope(&mut self, id: ScopeId) -> SemResult<()> {
        let table = self.table;
        if std::mem::replace(&mut self.seen_scopes[id.index()], true) {
            let owner = table.scope(id).owner();
            return Err(SemanticError::OwnershipViolation {
                name: table.name(owner).to_string(),
            });
        }

        for obj in table.scope(id).objects() {
            self.release_object(*obj)?;
        }
        self.report.scopes += 1;
        Ok(())
    }
}

impl SymTab {
    /// Release the whole table.
    ///
    /// Consumes the table, so nothing can be declared or looked up afterwards.
    pub fn clean(self) -> SemResult<TeardownReport> {
        let mut walk = Walk {
            table: &self,
            seen_objects: vec![false; self.object_count()],
            seen_scopes: vec![false; self.scope_count()],
            report: TeardownReport::default(),
        };

        if let Some(program) = self.program() {
            walk.release_object(program)?;
        }
        for global in self.globals() {
            walk.release_object(*global)?;
        }

        let mut report = walk.report;
        report.type_nodes += self.int_type().node_count() + self.char_type().node_count();
        report.orphan_objects = walk.seen_objects.iter().filter(|seen| !**seen).count();
        report.orphan_scopes = walk.seen_scopes.iter().filter(|seen| !**seen).count();

        if report.orphan_objects > 0 {
            log::warn!(
                "{} object(s) were created but never declared",
                report.orphan_objects
            );
        }
        log::debug!(
            "symbol table released: {} objects, {} scopes, {} type nodes, {} constants",
            report.objects,
            report.scopes,
            report.type_nodes,
            report.constants
        );
        Ok(report)
    }
}
