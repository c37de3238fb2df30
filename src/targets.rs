//! Named targets: resolving model-layer actions to controller-layer objects.
//!
//! A [`NamedActionOption`](crate::NamedActionOption) carries only a symbolic
//! name so the option tree never depends on concrete UI objects. The
//! presentation layer supplies a [`TargetRegistry`] that maps names to live
//! targets at invocation time.

use std::collections::BTreeMap;
use std::sync::Arc;

/// A live object a named action can be performed on.
pub trait NamedTarget: Send + Sync {
    /// Perform `selector` with the option's string parameters. Failures are
    /// the target's own responsibility; there is no return channel.
    fn perform(&self, selector: &str, options: &BTreeMap<String, String>);
}

/// Process-wide name-to-object registry owned by the presentation layer.
pub trait TargetRegistry: Send + Sync {
    /// `None` when no target is registered under `name`; the action then
    /// silently does nothing.
    fn resolve(&self, name: &str) -> Option<Arc<dyn NamedTarget>>;

    /// Optional key path registered alongside the target, for registries
    /// that bind through an observation path rather than the object itself.
    fn resolve_key_path(&self, name: &str) -> Option<String> {
        let _ = name;
        None
    }
}
