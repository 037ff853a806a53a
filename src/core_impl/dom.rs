use super::form_controls::{is_option_element, is_select_element};
use super::html::{RawText, is_void_tag, raw_text_kind};
use super::*;

mod attr_tree_mutation;
mod connectivity_tree_traversal;
mod core_nodes_identity;
mod query_basics;
mod select_option_sync;
mod selector_matching;
mod text_html_content;
