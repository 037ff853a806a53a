use super::*;

impl Dom {
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Document,
                parent: None,
                children: Vec::new(),
            }],
            root: NodeId(0),
            id_index: HashMap::new(),
        }
    }

    fn push_node(&mut self, node_type: NodeType, parent: Option<NodeId>) -> NodeId {
        let node_id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(node_id);
        }
        node_id
    }

    /// Appends a parsed element under `parent`. Parsing runs in document
    /// order, so pushing onto the id index keeps it ordered.
    pub(crate) fn create_element(
        &mut self,
        parent: NodeId,
        tag_name: String,
        attrs: Attributes,
    ) -> NodeId {
        let id_attr = attrs.get("id").filter(|id| !id.is_empty()).map(str::to_string);
        let node_id = self.push_node(NodeType::Element(Element { tag_name, attrs }), Some(parent));
        if let Some(id_attr) = id_attr {
            self.id_index.entry(id_attr).or_default().push(node_id);
        }
        node_id
    }

    pub(crate) fn create_detached_element(&mut self, tag_name: String) -> NodeId {
        let element = Element {
            tag_name,
            attrs: Attributes::new(),
        };
        self.push_node(NodeType::Element(element), None)
    }

    pub(crate) fn create_text(&mut self, parent: NodeId, text: String) -> NodeId {
        self.push_node(NodeType::Text(text), Some(parent))
    }

    pub(crate) fn is_valid_node(&self, node_id: NodeId) -> bool {
        node_id.0 < self.nodes.len()
    }

    pub(crate) fn element(&self, node_id: NodeId) -> Option<&Element> {
        let NodeType::Element(element) = &self.nodes.get(node_id.0)?.node_type else {
            return None;
        };
        Some(element)
    }

    pub(crate) fn element_mut(&mut self, node_id: NodeId) -> Option<&mut Element> {
        let NodeType::Element(element) = &mut self.nodes.get_mut(node_id.0)?.node_type else {
            return None;
        };
        Some(element)
    }

    pub(crate) fn tag_name(&self, node_id: NodeId) -> Option<&str> {
        Some(self.element(node_id)?.tag_name.as_str())
    }

    pub(crate) fn parent(&self, node_id: NodeId) -> Option<NodeId> {
        self.nodes.get(node_id.0).and_then(|node| node.parent)
    }

    pub(crate) fn by_id_all(&self, id: &str) -> Vec<NodeId> {
        self.id_index.get(id).map(Vec::clone).unwrap_or_default()
    }

    /// Recomputes the id index from the connected tree.
    pub(crate) fn rebuild_id_index(&mut self) {
        let mut index: HashMap<String, Vec<NodeId>> = HashMap::new();
        for node_id in self.all_element_nodes() {
            if let Some(id) = self.attr_ref(node_id, "id").filter(|id| !id.is_empty()) {
                index.entry(id.to_string()).or_default().push(node_id);
            }
        }
        self.id_index = index;
    }
}
