use super::*;

/// A parsed HTML document whose named form inputs can be swapped for
/// `<select>` elements.
#[derive(Debug)]
pub struct Document {
    pub(crate) dom: Dom,
    pub(crate) diagnostics: DiagnosticState,
}

impl Document {
    pub fn from_html(html: &str) -> Result<Self> {
        let ParseOutput { dom } = parse_html(html)?;
        Ok(Self {
            dom,
            diagnostics: DiagnosticState::default(),
        })
    }

    /// Replaces the first element whose `name` attribute equals
    /// `field_name` with a `<select>` built from `options`.
    ///
    /// Every attribute of the input is copied verbatim and in order; each
    /// option becomes one `<option>` in the given order. Returns the new
    /// select, or `None` after logging `Input with name "..." not found`
    /// when the document has no such field. A missing field leaves the
    /// document untouched, so the call can be repeated once the field has
    /// been rendered.
    pub fn replace_input_with_select(
        &mut self,
        field_name: &str,
        options: &[SelectOption],
    ) -> Option<NodeId> {
        match self.dom.replace_input_with_select(field_name, options) {
            Ok(select) => {
                tracing::debug!(
                    target: "select_swap",
                    field = field_name,
                    options = options.len(),
                    "replaced input with select"
                );
                Some(select)
            }
            Err(err) => {
                self.diagnostics.warn(err.to_string());
                None
            }
        }
    }

    pub fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        self.dom.query_selector(selector)
    }

    pub fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        self.dom.query_selector_all(selector)
    }

    /// The element the replacer would pick for `name`.
    pub fn element_by_name(&self, name: &str) -> Option<NodeId> {
        self.dom.element_by_name(name)
    }

    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        self.dom.tag_name(node)
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.dom.attr(node, name)
    }

    /// All attributes of `node` in stored order.
    pub fn attributes(&self, node: NodeId) -> Result<Vec<(String, String)>> {
        self.dom.attributes(node)
    }

    pub fn text_content(&self, node: NodeId) -> Result<String> {
        self.check_node(node)?;
        Ok(self.dom.text_content(node))
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.dom.parent(node)
    }

    /// Position of `node` among all child nodes (text included) of its
    /// parent.
    pub fn child_index(&self, node: NodeId) -> Option<usize> {
        self.dom.child_index(node)
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.dom.is_valid_node(node) && self.dom.is_connected(node)
    }

    /// Options of a `<select>` as label/value pairs. An option without a
    /// `value` attribute reports its text as value.
    pub fn select_options(&self, node: NodeId) -> Result<Vec<SelectOption>> {
        let mut out = Vec::new();
        for option in self.dom.select_option_nodes(node)? {
            out.push(SelectOption {
                label: self.dom.text_content(option),
                value: self.dom.option_effective_value(option)?,
            });
        }
        Ok(out)
    }

    /// Value a browser would submit for the select: the first `selected`
    /// option, else the first option, else empty.
    pub fn select_value(&self, node: NodeId) -> Result<String> {
        self.dom.select_value_from_options(node)
    }

    /// Number of elements attached to the document.
    pub fn element_count(&self) -> usize {
        self.dom.element_count()
    }

    pub fn outer_html(&self, node: NodeId) -> Result<String> {
        self.dom.outer_html(node)
    }

    pub fn dump_dom(&self) -> String {
        self.dom.dump_node(self.dom.root)
    }

    pub fn assert_exists(&self, selector: &str) -> Result<()> {
        self.select_one(selector).map(|_| ())
    }

    pub fn assert_text(&self, selector: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.text_content(target);
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: expected.to_string(),
                actual,
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_attribute(&self, selector: &str, name: &str, expected: &str) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.dom.attr(target, name);
        if actual.as_deref() != Some(expected) {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format!("{name}={expected:?}"),
                actual: match actual {
                    Some(value) => format!("{name}={value:?}"),
                    None => format!("no {name} attribute"),
                },
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn assert_options(&self, selector: &str, expected: &[SelectOption]) -> Result<()> {
        let target = self.select_one(selector)?;
        let actual = self.select_options(target)?;
        if actual != expected {
            return Err(Error::AssertionFailed {
                selector: selector.to_string(),
                expected: format_options(expected),
                actual: format_options(&actual),
                dom_snippet: self.node_snippet(target),
            });
        }
        Ok(())
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }

    /// Also prints each warning to stderr, on top of the `tracing` event
    /// and the buffer read by [`Document::take_diagnostics`]. Off by default.
    pub fn set_diagnostics_stderr(&mut self, enabled: bool) {
        self.diagnostics.set_stderr(enabled);
    }

    pub fn set_diagnostic_log_limit(&mut self, max_entries: usize) -> Result<()> {
        self.diagnostics.set_log_limit(max_entries)
    }

    fn select_one(&self, selector: &str) -> Result<NodeId> {
        self.dom
            .query_selector(selector)?
            .ok_or_else(|| Error::SelectorNotFound(selector.to_string()))
    }

    fn node_snippet(&self, node_id: NodeId) -> String {
        truncate_chars(&self.dom.dump_node(node_id), DOM_SNIPPET_MAX_CHARS)
    }

    fn check_node(&self, node: NodeId) -> Result<()> {
        if self.dom.is_valid_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidArgument(format!(
                "node {} does not belong to this document",
                node.0
            )))
        }
    }
}

fn format_options(options: &[SelectOption]) -> String {
    let items = options
        .iter()
        .map(|option| format!("{:?}/{:?}", option.label, option.value))
        .collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
