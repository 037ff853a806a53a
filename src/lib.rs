use std::collections::HashMap;

mod core_dom_utils;
mod core_impl;
mod diagnostics;
mod document;
mod select_option;
mod selector;

pub use core_dom_utils::{Error, NodeId, Result};
pub use diagnostics::{Diagnostic, DiagnosticLevel};
pub use document::Document;
pub use select_option::SelectOption;

pub(crate) use core_dom_utils::*;
pub(crate) use core_impl::*;
pub(crate) use diagnostics::DiagnosticState;
pub(crate) use selector::*;
