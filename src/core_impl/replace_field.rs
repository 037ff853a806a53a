use super::*;

impl Dom {
    /// Swaps the first element named `field_name` for a `<select>` that
    /// carries the same attributes, in the same order, and one `<option>`
    /// per entry of `options`.
    ///
    /// The source element is detached, never modified. When no element has
    /// the name the tree is left untouched and
    /// [`Error::FieldNotFound`] is returned.
    pub(crate) fn replace_input_with_select(
        &mut self,
        field_name: &str,
        options: &[SelectOption],
    ) -> Result<NodeId> {
        let source = self
            .element_by_name(field_name)
            .ok_or_else(|| Error::FieldNotFound(field_name.to_string()))?;
        let attrs = self.attributes(source)?;

        let select = self.create_detached_element("select".to_string());
        for (name, value) in &attrs {
            self.set_attr(select, name, value)?;
        }
        for option in options {
            self.append_option(select, &option.label, &option.value)?;
        }

        self.replace_with(source, select)?;
        Ok(select)
    }
}
