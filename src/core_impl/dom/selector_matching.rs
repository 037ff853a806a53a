use super::*;

impl Dom {
    pub(crate) fn matches_selector(&self, node_id: NodeId, selector: &Selector) -> bool {
        self.matches_parts(node_id, &selector.parts, &selector.links)
    }

    // Right to left, backtracking over ancestors for descendant links.
    fn matches_parts(&self, node_id: NodeId, parts: &[Compound], links: &[Combinator]) -> bool {
        let Some((subject, outer_parts)) = parts.split_last() else {
            return true;
        };
        if !self.matches_compound(node_id, subject) {
            return false;
        }
        let Some((link, outer_links)) = links.split_last() else {
            return true;
        };
        match link {
            Combinator::Child => self
                .parent(node_id)
                .is_some_and(|parent| self.matches_parts(parent, outer_parts, outer_links)),
            Combinator::Descendant => std::iter::successors(self.parent(node_id), |node| {
                self.parent(*node)
            })
            .any(|ancestor| self.matches_parts(ancestor, outer_parts, outer_links)),
        }
    }

    fn matches_compound(&self, node_id: NodeId, compound: &Compound) -> bool {
        let Some(element) = self.element(node_id) else {
            return false;
        };
        let attrs = &element.attrs;

        compound
            .tag
            .as_deref()
            .is_none_or(|tag| element.tag_name.eq_ignore_ascii_case(tag))
            && compound
                .id
                .as_deref()
                .is_none_or(|id| attrs.get("id") == Some(id))
            && compound.classes.iter().all(|class_name| {
                attrs
                    .get("class")
                    .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class_name.as_str()))
            })
            && compound.attrs.iter().all(|test| match &test.value {
                None => attrs.contains_key(&test.name),
                Some(value) => attrs.get(&test.name) == Some(value.as_str()),
            })
    }
}
