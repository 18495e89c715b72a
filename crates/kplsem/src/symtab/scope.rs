//! Lexical scopes

use super::object::ObjectId;
use super::object::ScopeId;

/// The objects declared directly within one lexical block
#[derive(Debug, Clone)]
pub struct Scope {
    /// Owned objects, in declaration order
    pub(crate) objects: Vec<ObjectId>,
    /// Routine or program whose body this scope is
    pub(crate) owner: ObjectId,
    /// Lexically enclosing scope
    pub(crate) outer: Option<ScopeId>,
}

impl Scope {
    pub(crate) fn new(owner: ObjectId, outer: Option<ScopeId>) -> Self {
        Self {
            objects: Vec::new(),
            owner,
            outer,
        }
    }

    pub fn objects(&self) -> &[ObjectId] {
        &self.objects
    }

    pub fn owner(&self) -> ObjectId {
        self.owner
    }

    pub fn outer(&self) -> Option<ScopeId> {
        self.outer
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

/// Append `obj` to an object list, preserving declaration order
pub fn add_object(list: &mut Vec<ObjectId>, obj: ObjectId) {
    list.push(obj);
}
