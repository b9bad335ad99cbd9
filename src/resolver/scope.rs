use std::collections::HashMap;

/// Router-group metadata bound to a local variable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupMeta {
    /// Slash-normalized prefix composed from the root router down to this group.
    pub full_prefix: String,
    /// Raw segment contributed by each ancestor group, outermost first.
    pub segments: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, GroupMeta>,
    parent: Option<ScopeId>,
}

/// Scopes stored by index, each pointing at its parent.
///
/// Scopes are opened and closed in strict stack order by the walker, so
/// closing a scope also drops every scope opened after it.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<Scope>,
}

impl ScopeArena {
    pub fn open(&mut self, parent: Option<ScopeId>) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope {
            bindings: HashMap::new(),
            parent,
        });
        id
    }

    pub fn close(&mut self, scope: ScopeId) {
        self.scopes.truncate(scope.0);
    }

    /// Returns the innermost binding for `name`, or the default (root router)
    /// metadata when nothing is bound.
    pub fn lookup(&self, scope: ScopeId, name: &str) -> GroupMeta {
        let mut current = Some(scope);
        while let Some(id) = current {
            let Some(entry) = self.scopes.get(id.0) else {
                break;
            };
            if let Some(meta) = entry.bindings.get(name) {
                return meta.clone();
            }
            current = entry.parent;
        }
        GroupMeta::default()
    }

    /// Binds in `scope` only; ancestors are never written.
    pub fn bind(&mut self, scope: ScopeId, name: &str, meta: GroupMeta) {
        if let Some(entry) = self.scopes.get_mut(scope.0) {
            entry.bindings.insert(name.to_string(), meta);
        }
    }

    #[cfg(test)]
    fn depth(&self) -> usize {
        self.scopes.len()
    }
}
