use super::*;

impl Dom {
    pub(crate) fn attr_ref(&self, node_id: NodeId, name: &str) -> Option<&str> {
        self.element(node_id)?.attrs.get(name)
    }

    pub(crate) fn attr(&self, node_id: NodeId, name: &str) -> Option<String> {
        self.attr_ref(node_id, name).map(str::to_string)
    }

    pub(crate) fn attributes(&self, node_id: NodeId) -> Result<Vec<(String, String)>> {
        let element = self
            .element(node_id)
            .ok_or_else(|| Error::NotAnElement("attributes".into()))?;
        Ok(element.attrs.to_pairs())
    }

    pub(crate) fn set_attr(&mut self, node_id: NodeId, name: &str, value: &str) -> Result<()> {
        let connected = self.is_connected(node_id);
        let element = self
            .element_mut(node_id)
            .ok_or_else(|| Error::NotAnElement("setAttribute".into()))?;
        element.attrs.insert(name.to_string(), value.to_string());
        if name == "id" && connected {
            self.rebuild_id_index();
        }
        Ok(())
    }

    pub(crate) fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.can_have_children(parent) {
            return Err(Error::InvalidArgument(
                "appendChild target cannot have children".into(),
            ));
        }
        if child == self.root || child == parent || !self.is_valid_node(child) {
            return Err(Error::InvalidArgument("invalid appendChild node".into()));
        }

        // Parent must not be inside child's subtree.
        let mut cursor = Some(parent);
        while let Some(node) = cursor {
            if node == child {
                return Err(Error::InvalidArgument(
                    "appendChild would create a cycle".into(),
                ));
            }
            cursor = self.parent(node);
        }

        if let Some(old_parent) = self.parent(child) {
            self.nodes[old_parent.0].children.retain(|id| *id != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        if self.is_connected(parent) {
            self.rebuild_id_index();
        }
        Ok(())
    }

    /// Puts `replacement` into the slot `target` occupies and detaches
    /// `target`. The replacement must be detached.
    pub(crate) fn replace_with(&mut self, target: NodeId, replacement: NodeId) -> Result<()> {
        if target == replacement {
            return Ok(());
        }
        if !self.is_valid_node(replacement) || self.parent(replacement).is_some() {
            return Err(Error::InvalidArgument(
                "replacement node must be detached".into(),
            ));
        }
        let Some(parent) = self.parent(target) else {
            return Err(Error::InvalidArgument("replace target is detached".into()));
        };
        let index = self
            .child_index(target)
            .ok_or_else(|| Error::InvalidArgument("replace target is missing".into()))?;

        self.nodes[parent.0].children[index] = replacement;
        self.nodes[replacement.0].parent = Some(parent);
        self.nodes[target.0].parent = None;
        self.rebuild_id_index();
        Ok(())
    }
}
