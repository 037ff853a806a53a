use super::*;

pub(super) fn is_select_element(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("select"))
}

pub(super) fn is_option_element(dom: &Dom, node_id: NodeId) -> bool {
    dom.tag_name(node_id)
        .is_some_and(|tag| tag.eq_ignore_ascii_case("option"))
}
