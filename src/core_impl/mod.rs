use super::*;

mod dom;
mod form_controls;
mod html;
mod replace_field;

pub(crate) fn parse_html(html: &str) -> Result<ParseOutput> {
    html::parse_html(html)
}
