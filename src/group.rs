//! Option groups: the ordered containers forming the tree, and the root.
//!
//! Construction happens on a single thread near process start — child
//! options are added to an already-existing parent group, by convention.
//! After construction the tree structure is immutable and shareable; only
//! the cells behind the options keep changing.

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use crate::options::{DebugOption, SubGroupOption};
use crate::store::SettingsStore;

/// An ordered collection of options, possibly nested through
/// [`SubGroupOption`].
#[derive(Default)]
pub struct OptionGroup {
    suite: Option<String>,
    options: Vec<DebugOption>,
}

impl OptionGroup {
    /// Group persisting into the default namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Group persisting into the `suite` namespace, e.g. for sharing options
    /// between the members of an app group.
    pub fn with_suite(suite: &str) -> Self {
        Self {
            suite: Some(suite.to_string()),
            options: Vec::new(),
        }
    }

    pub fn suite(&self) -> Option<&str> {
        self.suite.as_deref()
    }

    /// The options in display order.
    pub fn options(&self) -> &[DebugOption] {
        &self.options
    }

    /// Append an option, stamping this group's persistence namespace onto it.
    /// Titles are not checked for uniqueness. A nested sub-group that
    /// declares no suite of its own adopts this group's suite, recursively.
    pub fn add_option(&mut self, option: impl Into<DebugOption>) {
        let mut option = option.into();
        option.meta_mut().set_suite(self.suite.clone());
        if let DebugOption::SubGroup(sub_group) = &mut option
            && let Some(suite) = &self.suite
        {
            sub_group.group_mut().adopt_suite(suite);
        }
        self.options.push(option);
    }

    /// Convenience for nesting: wraps `group` in a [`SubGroupOption`] and
    /// appends it.
    pub fn add_sub_group(&mut self, title: &str, tool_tip: Option<&str>, group: OptionGroup) {
        self.add_option(SubGroupOption::new(title, tool_tip, group));
    }

    /// First option whose title matches exactly, in insertion order.
    /// With duplicate titles the first one wins; that ambiguity is a
    /// documented limitation, not an error.
    pub fn option_with_title(&self, title: &str) -> Option<&DebugOption> {
        self.options.iter().find(|option| option.title() == title)
    }

    /// Re-order the options in place with a caller-supplied total order.
    /// The sort is stable; options added afterwards append at the end.
    pub fn sort_options_by<F>(&mut self, compare: F)
    where
        F: FnMut(&DebugOption, &DebugOption) -> Ordering,
    {
        self.options.sort_by(compare);
    }

    /// Push persisted values into every option's cell, depth-first, parent
    /// before children.
    pub fn load_state(&self, store: &dyn SettingsStore) {
        for option in &self.options {
            option.load_state(store);
        }
    }

    /// Propagate an inherited suite into this subtree, stopping wherever a
    /// group or option already carries its own.
    pub(crate) fn adopt_suite(&mut self, suite: &str) {
        if self.suite.is_some() {
            return;
        }
        self.suite = Some(suite.to_string());
        for option in &mut self.options {
            if option.meta().suite().is_none() {
                option.meta_mut().set_suite(Some(suite.to_string()));
            }
            if let DebugOption::SubGroup(sub_group) = option {
                sub_group.group_mut().adopt_suite(suite);
            }
        }
    }
}

/// Store key gating whether the option tree is exposed at all.
pub const MENU_ENABLED_KEY: &str = "DebugOptionMenuIsEnabled";

/// Build flavor for the enablement gate, so tests can exercise both sides
/// without recompiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Debug,
    Release,
}

impl BuildMode {
    /// The mode this crate was compiled in.
    pub fn current() -> Self {
        if cfg!(debug_assertions) {
            BuildMode::Debug
        } else {
            BuildMode::Release
        }
    }
}

/// The tree root. At most one construction per process is expected; a second
/// construction yields an independent tree and is deliberately not guarded.
#[derive(Default)]
pub struct RootGroup {
    group: OptionGroup,
}

impl RootGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the tree is exposed, for the build mode this crate was
    /// compiled in.
    pub fn menu_enabled(store: &dyn SettingsStore) -> bool {
        Self::menu_enabled_in(store, BuildMode::current())
    }

    /// Release builds always expose the tree regardless of store contents —
    /// only menu visibility is gated, the options themselves keep working.
    /// Debug builds consult the persisted gate, default off.
    pub fn menu_enabled_in(store: &dyn SettingsStore, mode: BuildMode) -> bool {
        match mode {
            BuildMode::Release => true,
            BuildMode::Debug => store.get_bool(None, MENU_ENABLED_KEY).unwrap_or(false),
        }
    }

    /// Persist the gate immediately, independent of build mode.
    pub fn set_menu_enabled(store: &dyn SettingsStore, enabled: bool) {
        store.set(None, MENU_ENABLED_KEY, enabled.into());
    }
}

impl Deref for RootGroup {
    type Target = OptionGroup;

    fn deref(&self) -> &OptionGroup {
        &self.group
    }
}

impl DerefMut for RootGroup {
    fn deref_mut(&mut self) -> &mut OptionGroup {
        &mut self.group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::RecordingStore;
    use crate::options::{ActionOption, SwitchOption};
    use crate::store::{MemoryStore, SettingsStore, StoreValue};

    fn switch(title: &str, suffix: Option<&str>) -> SwitchOption {
        SwitchOption::local(title, None, false, suffix)
    }

    #[test]
    fn options_keep_insertion_order() {
        let mut group = OptionGroup::new();
        group.add_option(switch("B", None));
        group.add_option(switch("A", None));
        group.add_option(switch("C", None));

        let titles: Vec<&str> = group.options().iter().map(|o| o.title()).collect();
        assert_eq!(titles, ["B", "A", "C"]);
    }

    #[test]
    fn lookup_returns_first_match_in_insertion_order() {
        let mut group = OptionGroup::new();
        group.add_option(switch("Dup", Some("first")));
        group.add_option(switch("Dup", Some("second")));

        let found = group.option_with_title("Dup").unwrap();
        assert_eq!(found.meta().defaults_key(), Some("DebugOption_first"));
        assert!(group.option_with_title("Missing").is_none());
    }

    #[test]
    fn lookup_unaffected_by_later_adds() {
        let mut group = OptionGroup::new();
        group.add_option(switch("A", Some("original")));
        assert_eq!(
            group.option_with_title("A").unwrap().meta().defaults_key(),
            Some("DebugOption_original")
        );

        group.add_option(switch("A", Some("shadowed")));
        assert_eq!(
            group.option_with_title("A").unwrap().meta().defaults_key(),
            Some("DebugOption_original")
        );
    }

    #[test]
    fn sort_is_stable_and_adds_append_afterwards() {
        let mut group = OptionGroup::new();
        group.add_option(switch("C", Some("c")));
        group.add_option(switch("A", Some("a1")));
        group.add_option(switch("A", Some("a2")));
        group.add_option(switch("B", Some("b")));

        group.sort_options_by(|x, y| x.title().cmp(y.title()));
        let keys: Vec<_> = group
            .options()
            .iter()
            .map(|o| o.meta().defaults_key().unwrap())
            .collect();
        // Equal titles keep their relative order.
        assert_eq!(
            keys,
            [
                "DebugOption_a1",
                "DebugOption_a2",
                "DebugOption_b",
                "DebugOption_c"
            ]
        );

        group.add_option(switch("0 Last", None));
        assert_eq!(group.options().last().unwrap().title(), "0 Last");
    }

    #[test]
    fn load_state_is_depth_first_parent_then_children() {
        let store = RecordingStore::default();

        let mut root = RootGroup::new();
        root.add_option(switch("First", Some("first")));
        let mut nested = OptionGroup::new();
        nested.add_option(switch("Inner", Some("inner")));
        root.add_sub_group("Nested", None, nested);
        root.add_option(switch("Last", Some("last")));

        root.load_state(&store);
        assert_eq!(
            store.reads(),
            [
                "DebugOption_first",
                "DebugOption_inner",
                "DebugOption_last"
            ]
        );
    }

    #[test]
    fn added_options_are_stamped_with_the_group_suite() {
        let mut group = OptionGroup::with_suite("com.example.shared");
        group.add_option(switch("A", Some("a")));
        assert_eq!(
            group.options()[0].meta().suite(),
            Some("com.example.shared")
        );
    }

    #[test]
    fn sub_group_without_suite_adopts_the_parents() {
        let mut child = OptionGroup::new();
        child.add_option(switch("Inner", Some("inner")));

        let mut parent = OptionGroup::with_suite("com.example.shared");
        parent.add_sub_group("Child", None, child);

        let DebugOption::SubGroup(sub) = &parent.options()[0] else {
            panic!("expected a sub-group");
        };
        assert_eq!(sub.group().suite(), Some("com.example.shared"));
        assert_eq!(
            sub.group().options()[0].meta().suite(),
            Some("com.example.shared")
        );
    }

    #[test]
    fn sub_group_with_own_suite_keeps_it() {
        let child = OptionGroup::with_suite("com.example.child");
        let mut parent = OptionGroup::with_suite("com.example.parent");
        parent.add_sub_group("Child", None, child);

        let DebugOption::SubGroup(sub) = &parent.options()[0] else {
            panic!("expected a sub-group");
        };
        assert_eq!(sub.group().suite(), Some("com.example.child"));
    }

    #[test]
    fn suite_scoped_option_loads_from_its_namespace() {
        let store = MemoryStore::new();
        store.set(Some("shared"), "DebugOption_V", StoreValue::Bool(true));
        store.set(None, "DebugOption_V", StoreValue::Bool(false));

        let mut group = OptionGroup::with_suite("shared");
        group.add_option(switch("V", Some("V")));
        group.load_state(&store);

        let DebugOption::Switch(option) = &group.options()[0] else {
            panic!("expected a switch");
        };
        assert!(option.value());
    }

    #[test]
    fn actions_are_untouched_by_load_state() {
        let mut group = OptionGroup::new();
        group.add_option(ActionOption::new("Dump", None, || {}));
        // Loading an action is the base no-op.
        group.load_state(&MemoryStore::new());
    }

    #[test]
    fn release_mode_is_always_enabled() {
        let store = MemoryStore::new();
        RootGroup::set_menu_enabled(&store, false);
        assert!(RootGroup::menu_enabled_in(&store, BuildMode::Release));
    }

    #[test]
    fn debug_mode_reads_the_persisted_gate() {
        let store = MemoryStore::new();
        assert!(!RootGroup::menu_enabled_in(&store, BuildMode::Debug));

        RootGroup::set_menu_enabled(&store, true);
        assert!(RootGroup::menu_enabled_in(&store, BuildMode::Debug));
        assert_eq!(store.get_bool(None, MENU_ENABLED_KEY), Some(true));
    }

    #[test]
    fn gate_key_type_mismatch_defaults_to_disabled() {
        let store = MemoryStore::new();
        store.set(None, MENU_ENABLED_KEY, StoreValue::Text("on".into()));
        assert!(!RootGroup::menu_enabled_in(&store, BuildMode::Debug));
    }
}
