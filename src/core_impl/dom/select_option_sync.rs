use super::*;

impl Dom {
    /// Options of `select_node` in document order, at any depth.
    pub(crate) fn select_option_nodes(&self, select_node: NodeId) -> Result<Vec<NodeId>> {
        if !is_select_element(self, select_node) {
            return Err(Error::InvalidArgument(
                "select options target is not a select".into(),
            ));
        }
        let mut descendants = Vec::new();
        self.collect_elements_dfs(select_node, &mut descendants);
        Ok(descendants
            .into_iter()
            .filter(|node| is_option_element(self, *node))
            .collect())
    }

    pub(crate) fn option_effective_value(&self, option_node: NodeId) -> Result<String> {
        if !is_option_element(self, option_node) {
            return Err(Error::InvalidArgument(
                "option target is not an option".into(),
            ));
        }
        if let Some(value) = self.attr(option_node, "value") {
            return Ok(value);
        }
        Ok(self.text_content(option_node))
    }

    pub(crate) fn select_value_from_options(&self, select_node: NodeId) -> Result<String> {
        let options = self.select_option_nodes(select_node)?;
        let Some(first) = options.first().copied() else {
            return Ok(String::new());
        };

        let selected = options
            .iter()
            .copied()
            .find(|option| self.attr(*option, "selected").is_some())
            .unwrap_or(first);
        self.option_effective_value(selected)
    }

    /// Builds an `<option>` holding `label` as text and `value` as its
    /// `value` attribute, appended to `select_node`.
    pub(crate) fn append_option(
        &mut self,
        select_node: NodeId,
        label: &str,
        value: &str,
    ) -> Result<NodeId> {
        let option = self.create_detached_element("option".to_string());
        self.set_attr(option, "value", value)?;
        self.set_text_content(option, label)?;
        self.append_child(select_node, option)?;
        Ok(option)
    }
}
