//! The option variants and the tagged enum tying them together.
//!
//! Each variant pairs display attributes ([`OptionMeta`]) with its payload:
//! a live cell for the valued options, a callback or symbolic target for the
//! actions, a nested group for sub-groups. Valued options resolve their state
//! in two steps — compile-time default at construction, persisted override at
//! [`load_state`](DebugOption::load_state) — after which only
//! `set_value` mutates them.

use std::collections::BTreeMap;

use crate::cell::{BoolCell, CellRef, IntCell, TextCell};
use crate::group::OptionGroup;
use crate::store::SettingsStore;
use crate::targets::TargetRegistry;
use crate::visit::OptionVisitor;

/// Derive the full persistence key for an option name: `"DebugOption_" + name`.
pub fn defaults_key_for(name: &str) -> String {
    format!("DebugOption_{name}")
}

/// Attributes shared by every option variant.
#[derive(Debug, Clone)]
pub struct OptionMeta {
    title: String,
    tool_tip: Option<String>,
    defaults_key: Option<String>,
    suite: Option<String>,
}

impl OptionMeta {
    fn new(title: &str, tool_tip: Option<&str>, key_suffix: Option<&str>) -> Self {
        Self {
            title: title.to_string(),
            tool_tip: tool_tip.map(str::to_string),
            defaults_key: key_suffix.map(defaults_key_for),
            suite: None,
        }
    }

    /// Display label, also the lookup key for
    /// [`OptionGroup::option_with_title`](crate::OptionGroup::option_with_title).
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tool_tip(&self) -> Option<&str> {
        self.tool_tip.as_deref()
    }

    /// Full persistence key; `None` means the option is never persisted.
    pub fn defaults_key(&self) -> Option<&str> {
        self.defaults_key.as_deref()
    }

    /// Persistence namespace, stamped when the option is added to a group.
    pub fn suite(&self) -> Option<&str> {
        self.suite.as_deref()
    }

    pub(crate) fn set_suite(&mut self, suite: Option<String>) {
        self.suite = suite;
    }
}

/// A binary switch backed by a [`BoolCell`].
pub struct SwitchOption {
    meta: OptionMeta,
    cell: CellRef<BoolCell>,
}

impl SwitchOption {
    /// Switch over a module-level cell shared with business logic. The
    /// compile-time default is written into the cell at construction.
    pub fn new(
        title: &str,
        tool_tip: Option<&str>,
        cell: &'static BoolCell,
        default_value: bool,
        key_suffix: Option<&str>,
    ) -> Self {
        cell.set(default_value);
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Shared(cell),
        }
    }

    /// Switch owning its cell, for values only the tree itself needs.
    pub fn local(
        title: &str,
        tool_tip: Option<&str>,
        default_value: bool,
        key_suffix: Option<&str>,
    ) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Owned(Box::new(BoolCell::new(default_value))),
        }
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    pub fn value(&self) -> bool {
        self.cell.get()
    }

    /// Writes the cell only; call [`save_state`](Self::save_state) to persist.
    pub fn set_value(&self, value: bool) {
        self.cell.set(value);
    }

    /// Flip the switch, returning the previous state.
    pub fn toggle(&self) -> bool {
        self.cell.toggle()
    }

    /// Persist the current value, if a persistence key is configured.
    pub fn save_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key() {
            store.set(self.meta.suite(), key, self.cell.get().into());
        }
    }

    pub(crate) fn load_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key()
            && let Some(value) = store.get_bool(self.meta.suite(), key)
        {
            self.cell.set(value);
        }
    }
}

/// An integer selection from an ordered list of titled values, backed by an
/// [`IntCell`].
pub struct EnumOption {
    meta: OptionMeta,
    cell: CellRef<IntCell>,
    choices: Vec<(String, i64)>,
    as_submenu: bool,
}

impl EnumOption {
    pub fn new(
        title: &str,
        tool_tip: Option<&str>,
        as_submenu: bool,
        cell: &'static IntCell,
        default_value: i64,
        key_suffix: Option<&str>,
        choices: &[(&str, i64)],
    ) -> Self {
        cell.set(default_value);
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Shared(cell),
            choices: Self::owned_choices(choices),
            as_submenu,
        }
    }

    pub fn local(
        title: &str,
        tool_tip: Option<&str>,
        as_submenu: bool,
        default_value: i64,
        key_suffix: Option<&str>,
        choices: &[(&str, i64)],
    ) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Owned(Box::new(IntCell::new(default_value))),
            choices: Self::owned_choices(choices),
            as_submenu,
        }
    }

    fn owned_choices(choices: &[(&str, i64)]) -> Vec<(String, i64)> {
        choices
            .iter()
            .map(|(title, value)| (title.to_string(), *value))
            .collect()
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    /// The legal selections in display order.
    pub fn choices(&self) -> &[(String, i64)] {
        &self.choices
    }

    /// Presentation hint only: render the choices as a nested submenu rather
    /// than inline. Not enforced by the data model.
    pub fn as_submenu(&self) -> bool {
        self.as_submenu
    }

    pub fn value(&self) -> i64 {
        self.cell.get()
    }

    /// Writes the cell only; the value is not checked against the choice
    /// list (choices are display guidance, not validation).
    pub fn set_value(&self, value: i64) {
        self.cell.set(value);
    }

    /// The title of the currently selected choice, if the current value
    /// appears in the choice list.
    pub fn current_title(&self) -> Option<&str> {
        let current = self.cell.get();
        self.choices
            .iter()
            .find(|(_, value)| *value == current)
            .map(|(title, _)| title.as_str())
    }

    pub fn save_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key() {
            store.set(self.meta.suite(), key, self.cell.get().into());
        }
    }

    pub(crate) fn load_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key()
            && let Some(value) = store.get_int(self.meta.suite(), key)
        {
            self.cell.set(value);
        }
    }
}

/// A free-form string backed by a [`TextCell`].
pub struct TextOption {
    meta: OptionMeta,
    cell: CellRef<TextCell>,
}

impl TextOption {
    pub fn new(
        title: &str,
        tool_tip: Option<&str>,
        cell: &'static TextCell,
        default_value: &str,
        key_suffix: Option<&str>,
    ) -> Self {
        cell.set(default_value);
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Shared(cell),
        }
    }

    pub fn local(
        title: &str,
        tool_tip: Option<&str>,
        default_value: &'static str,
        key_suffix: Option<&str>,
    ) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, key_suffix),
            cell: CellRef::Owned(Box::new(TextCell::new(default_value))),
        }
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    pub fn value(&self) -> String {
        self.cell.get()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.cell.set(value);
    }

    pub fn save_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key() {
            store.set(self.meta.suite(), key, self.cell.get().into());
        }
    }

    pub(crate) fn load_state(&self, store: &dyn SettingsStore) {
        if let Some(key) = self.meta.defaults_key()
            && let Some(value) = store.get_text(self.meta.suite(), key)
        {
            self.cell.set(value);
        }
    }
}

/// A one-shot action holding a callback. Stateless and never persisted.
pub struct ActionOption {
    meta: OptionMeta,
    action: Box<dyn Fn() + Send + Sync>,
}

impl ActionOption {
    pub fn new(
        title: &str,
        tool_tip: Option<&str>,
        action: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, None),
            action: Box::new(action),
        }
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    /// Run the callback synchronously on the caller's thread.
    pub fn execute(&self) {
        (self.action)();
    }
}

/// An action bound to a named external target instead of a callback, so the
/// tree never references controller-layer objects directly.
pub struct NamedActionOption {
    meta: OptionMeta,
    observable_name: String,
    key_path: Option<String>,
    selector: String,
    options: BTreeMap<String, String>,
}

impl NamedActionOption {
    pub fn new(
        title: &str,
        tool_tip: Option<&str>,
        observable_name: &str,
        key_path: Option<&str>,
        selector: &str,
    ) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, None),
            observable_name: observable_name.to_string(),
            key_path: key_path.map(str::to_string),
            selector: selector.to_string(),
            options: BTreeMap::new(),
        }
    }

    /// Attach string parameters passed through to the target on invocation.
    pub fn with_options(mut self, options: BTreeMap<String, String>) -> Self {
        self.options = options;
        self
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    pub fn observable_name(&self) -> &str {
        &self.observable_name
    }

    pub fn key_path(&self) -> Option<&str> {
        self.key_path.as_deref()
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    /// Resolve the target through `registry` and perform the selector.
    /// A resolution miss is a silent no-op.
    pub fn invoke(&self, registry: &dyn TargetRegistry) {
        if let Some(target) = registry.resolve(&self.observable_name) {
            target.perform(&self.selector, &self.options);
        }
    }
}

/// An option whose payload is a nested group, producing tree depth.
pub struct SubGroupOption {
    meta: OptionMeta,
    group: OptionGroup,
}

impl SubGroupOption {
    pub fn new(title: &str, tool_tip: Option<&str>, group: OptionGroup) -> Self {
        Self {
            meta: OptionMeta::new(title, tool_tip, None),
            group,
        }
    }

    pub fn meta(&self) -> &OptionMeta {
        &self.meta
    }

    pub fn group(&self) -> &OptionGroup {
        &self.group
    }

    pub fn group_mut(&mut self) -> &mut OptionGroup {
        &mut self.group
    }
}

/// A single configurable debug affordance: the tagged union the tree stores
/// and presentation layers match on.
pub enum DebugOption {
    Switch(SwitchOption),
    Enum(EnumOption),
    Text(TextOption),
    Action(ActionOption),
    NamedAction(NamedActionOption),
    SubGroup(SubGroupOption),
}

impl DebugOption {
    pub fn meta(&self) -> &OptionMeta {
        match self {
            DebugOption::Switch(o) => o.meta(),
            DebugOption::Enum(o) => o.meta(),
            DebugOption::Text(o) => o.meta(),
            DebugOption::Action(o) => o.meta(),
            DebugOption::NamedAction(o) => o.meta(),
            DebugOption::SubGroup(o) => o.meta(),
        }
    }

    pub(crate) fn meta_mut(&mut self) -> &mut OptionMeta {
        match self {
            DebugOption::Switch(o) => &mut o.meta,
            DebugOption::Enum(o) => &mut o.meta,
            DebugOption::Text(o) => &mut o.meta,
            DebugOption::Action(o) => &mut o.meta,
            DebugOption::NamedAction(o) => &mut o.meta,
            DebugOption::SubGroup(o) => &mut o.meta,
        }
    }

    pub fn title(&self) -> &str {
        self.meta().title()
    }

    pub fn tool_tip(&self) -> Option<&str> {
        self.meta().tool_tip()
    }

    /// Pull the persisted value (if any) into the live cell. Base behavior
    /// for actions is a no-op; a sub-group recurses into its children.
    pub fn load_state(&self, store: &dyn SettingsStore) {
        match self {
            DebugOption::Switch(o) => o.load_state(store),
            DebugOption::Enum(o) => o.load_state(store),
            DebugOption::Text(o) => o.load_state(store),
            DebugOption::Action(_) | DebugOption::NamedAction(_) => {}
            DebugOption::SubGroup(o) => o.group().load_state(store),
        }
    }

    /// Persist the current value for the valued variants; no-op otherwise.
    pub fn save_state(&self, store: &dyn SettingsStore) {
        match self {
            DebugOption::Switch(o) => o.save_state(store),
            DebugOption::Enum(o) => o.save_state(store),
            DebugOption::Text(o) => o.save_state(store),
            DebugOption::Action(_) | DebugOption::NamedAction(_) | DebugOption::SubGroup(_) => {}
        }
    }

    /// Dispatch to the visitor method matching this variant.
    pub fn accept(&self, visitor: &mut dyn OptionVisitor) {
        match self {
            DebugOption::Switch(o) => visitor.visit_switch(o),
            DebugOption::Enum(o) => visitor.visit_enum(o),
            DebugOption::Text(o) => visitor.visit_text(o),
            DebugOption::Action(o) => visitor.visit_action(o),
            DebugOption::NamedAction(o) => visitor.visit_named_action(o),
            DebugOption::SubGroup(o) => visitor.visit_sub_group(o),
        }
    }
}

impl From<SwitchOption> for DebugOption {
    fn from(option: SwitchOption) -> Self {
        DebugOption::Switch(option)
    }
}

impl From<EnumOption> for DebugOption {
    fn from(option: EnumOption) -> Self {
        DebugOption::Enum(option)
    }
}

impl From<TextOption> for DebugOption {
    fn from(option: TextOption) -> Self {
        DebugOption::Text(option)
    }
}

impl From<ActionOption> for DebugOption {
    fn from(option: ActionOption) -> Self {
        DebugOption::Action(option)
    }
}

impl From<NamedActionOption> for DebugOption {
    fn from(option: NamedActionOption) -> Self {
        DebugOption::NamedAction(option)
    }
}

impl From<SubGroupOption> for DebugOption {
    fn from(option: SubGroupOption) -> Self {
        DebugOption::SubGroup(option)
    }
}
