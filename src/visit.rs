//! Per-variant dispatch for presentation layers.
//!
//! A renderer implements [`OptionVisitor`] and walks a group's options with
//! [`DebugOption::accept`](crate::DebugOption::accept); the core stays
//! toolkit-agnostic. Matching on [`DebugOption`](crate::DebugOption) directly
//! works too — the visitor exists for renderers that keep per-variant logic
//! in separate methods.

use crate::options::{
    ActionOption, EnumOption, NamedActionOption, SubGroupOption, SwitchOption, TextOption,
};

pub trait OptionVisitor {
    fn visit_switch(&mut self, option: &SwitchOption);
    fn visit_enum(&mut self, option: &EnumOption);
    fn visit_text(&mut self, option: &TextOption);
    fn visit_action(&mut self, option: &ActionOption);
    fn visit_named_action(&mut self, option: &NamedActionOption);
    fn visit_sub_group(&mut self, option: &SubGroupOption);
}
