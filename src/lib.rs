//! Runtime-toggleable debug options. Declare a switch next to the code it
//! controls, and it shows up in your debug menu with persistence for free.
//!
//! Debugopts is the data model behind a debug menu: switches, enumerations,
//! text fields, one-shot actions, and nested groups, assembled into a single
//! tree near process start. A presentation layer (a menu, a TUI panel, a
//! command handler) walks the tree and renders it; the code under test reads
//! the live values directly, with no UI code per option.
//!
//! ```
//! use debugopts::{BoolCell, MemoryStore, Registry, SwitchOption};
//!
//! // Next to the code that uses it — shared with the option tree.
//! static VERBOSE_LOGGING: BoolCell = BoolCell::new(false);
//!
//! let mut registry = Registry::new();
//! registry.register(|root| {
//!     root.add_option(SwitchOption::new(
//!         "Verbose Logging",
//!         Some("Log everything the pipeline does"),
//!         &VERBOSE_LOGGING,
//!         false,
//!         Some("VerboseLogging"),
//!     ));
//! });
//!
//! let store = MemoryStore::new();
//! let root = registry.build(&store);
//! assert!(root.option_with_title("Verbose Logging").is_some());
//!
//! // Hot paths read the cell, not the tree.
//! if VERBOSE_LOGGING.get() { /* extra logging */ }
//! ```
//!
//! # Design: cells the tree does not own
//!
//! The value behind a switch is not stored in the option — it lives in a
//! [`BoolCell`] (or [`IntCell`], [`TextCell`]) declared by the code that
//! consumes it, usually a module-level `static`. The option holds a reference
//! and writes through it. This keeps the hot-path read a single relaxed
//! atomic load with no tree traversal, and it means business logic never
//! depends on the option tree existing at all.
//!
//! Cells tolerate concurrent access from any thread. The guarantee is
//! per-value atomicity only: a debug toggle may be read mid-operation on a
//! worker thread while the menu thread flips it, and each read sees one of
//! the two well-defined states. No cross-cell ordering is promised — fine
//! for a debug switch, not for a correctness-critical flag.
//!
//! # Value resolution
//!
//! Each valued option has exactly two sources of truth feeding its cell:
//!
//! ```text
//! Compile-time default     written into the cell at construction
//!        ↑ overridden by
//! Persisted value          pulled in once by load_state, if present
//! ```
//!
//! After that, only user interaction through `set_value` mutates it.
//! Persistence is opt-in per option (give it a key suffix; the full store
//! key is `"DebugOption_" + suffix`) and explicit: `set_value` touches the
//! cell only, `save_state` writes the store. A presentation layer can batch
//! writes — persist on modifier-click rather than on every toggle.
//!
//! Every persistence failure degrades to "use the default": a missing key, a
//! wrong-typed value, an unreadable file. Nothing on this path returns an
//! error, reflecting the advisory nature of debug state.
//!
//! # The tree
//!
//! [`OptionGroup`] owns an ordered list of [`DebugOption`]s; a
//! [`SubGroupOption`] nests a child group for arbitrary depth; [`RootGroup`]
//! is the top. Declaration sites register build hooks with a [`Registry`]
//! (or the process-wide [`register`]), and [`Registry::build`] (or
//! [`create_root_group`]) runs them in registration order — register parents
//! before children — then loads persisted state once, depth-first.
//!
//! Groups may name a persistence *suite*, an alternate namespace for sharing
//! option state between related processes; options inherit the suite of the
//! group they are added to.
//!
//! # Stores
//!
//! Persistence goes through the [`SettingsStore`] trait: [`TomlStore`]
//! writes one comment-preserving TOML file per namespace under the platform
//! config directory (or any directory you choose); [`MemoryStore`] keeps
//! everything in process, for tests and embeddings that don't want files.
//!
//! # Presentation layers
//!
//! A renderer enumerates [`OptionGroup::options`], matches each
//! [`DebugOption`] variant (or implements [`OptionVisitor`]), reads and
//! writes values, calls [`ActionOption::execute`], and resolves
//! [`NamedActionOption`]s through its own [`TargetRegistry`] — the tree
//! itself never references UI objects. Whether to show the menu at all is
//! gated by [`RootGroup::menu_enabled`]: always on in release builds, backed
//! by a persisted flag under [`MENU_ENABLED_KEY`] in debug builds.

pub mod error;

mod cell;
mod group;
mod options;
mod persist;
mod registry;
mod store;
mod targets;
mod visit;

#[cfg(test)]
mod fixtures;

pub use cell::{BoolCell, IntCell, TextCell};
pub use error::StoreError;
pub use group::{BuildMode, MENU_ENABLED_KEY, OptionGroup, RootGroup};
pub use options::{
    ActionOption, DebugOption, EnumOption, NamedActionOption, OptionMeta, SubGroupOption,
    SwitchOption, TextOption, defaults_key_for,
};
pub use persist::TomlStore;
pub use registry::{Registry, create_root_group, register};
pub use store::{MemoryStore, SettingsStore, StoreValue};
pub use targets::{NamedTarget, TargetRegistry};
pub use visit::OptionVisitor;
