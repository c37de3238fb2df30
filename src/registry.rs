//! Tree construction: an ordered list of build hooks run by the root factory.
//!
//! Declaration sites register a hook that appends their options to the tree;
//! the factory runs every hook in registration order and then loads persisted
//! state once. Registering a parent group's hook before its children's is the
//! caller's responsibility — the factory only promises registration order.

use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::group::RootGroup;
use crate::store::SettingsStore;

type BuildHook = Box<dyn Fn(&mut RootGroup) + Send + Sync>;

/// An explicit, ordered hook list. Use this directly when you want a
/// self-contained tree (tests, multiple independent embeddings); use the
/// module-level [`register`]/[`create_root_group`] for the usual
/// one-tree-per-process case.
#[derive(Default)]
pub struct Registry {
    hooks: Vec<BuildHook>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, hook: impl Fn(&mut RootGroup) + Send + Sync + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Build a complete tree: run every hook in registration order, then
    /// push persisted state into the new tree's cells. Each call builds a
    /// fresh, independent tree.
    pub fn build(&self, store: &dyn SettingsStore) -> RootGroup {
        let mut root = RootGroup::new();
        for hook in &self.hooks {
            hook(&mut root);
        }
        root.load_state(store);
        root
    }
}

fn global() -> &'static Mutex<Registry> {
    static GLOBAL: OnceLock<Mutex<Registry>> = OnceLock::new();
    GLOBAL.get_or_init(|| Mutex::new(Registry::new()))
}

/// Register a construction hook with the process-wide registry.
pub fn register(hook: impl Fn(&mut RootGroup) + Send + Sync + 'static) {
    global().lock().register(hook);
}

/// Build the process-wide tree from every hook registered so far.
///
/// Expected to be called once, near process start. Calling it again builds a
/// second, independent tree; which one a presentation layer observes is then
/// up to the caller. That double construction is not guarded, matching the
/// original design.
pub fn create_root_group(store: &dyn SettingsStore) -> RootGroup {
    global().lock().build(store)
}
