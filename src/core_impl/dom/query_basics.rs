use super::*;

impl Dom {
    pub(crate) fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.query_selector_all(selector)?.into_iter().next())
    }

    /// Connected elements matching `selector`, in document order.
    pub(crate) fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        if let Some(id) = selector.lone_id() {
            return Ok(self.by_id_all(id));
        }
        Ok(self
            .all_element_nodes()
            .into_iter()
            .filter(|node| self.matches_selector(*node, &selector))
            .collect())
    }

    /// First connected element, in document order, whose `name` attribute
    /// equals `name` exactly.
    pub(crate) fn element_by_name(&self, name: &str) -> Option<NodeId> {
        self.all_element_nodes()
            .into_iter()
            .find(|node| self.attr_ref(*node, "name") == Some(name))
    }

    pub(crate) fn element_count(&self) -> usize {
        self.all_element_nodes().len()
    }
}
