use super::*;

/// How the body of an element whose content is not markup is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum RawText {
    /// Kept byte for byte and serialized without escaping.
    Verbatim,
    /// Character references are decoded; serialized escaped like any text.
    Escapable,
}

pub(super) fn raw_text_kind(tag: &str) -> Option<RawText> {
    match tag {
        "script" | "style" | "noscript" => Some(RawText::Verbatim),
        "textarea" | "title" => Some(RawText::Escapable),
        _ => None,
    }
}

pub(super) fn is_void_tag(tag: &str) -> bool {
    matches!(
        tag,
        "area" | "base" | "br" | "col" | "embed" | "hr" | "img" | "input" | "link" | "meta"
            | "source" | "track" | "wbr"
    )
}

pub(super) fn parse_html(html: &str) -> Result<ParseOutput> {
    let mut parser = HtmlParser {
        src: html,
        pos: 0,
        dom: Dom::new(),
        open: Vec::new(),
    };
    parser.run()?;
    Ok(ParseOutput { dom: parser.dom })
}

struct HtmlParser<'a> {
    src: &'a str,
    pos: usize,
    dom: Dom,
    // Open elements, innermost last. The document root is implied.
    open: Vec<NodeId>,
}

impl<'a> HtmlParser<'a> {
    fn run(&mut self) -> Result<()> {
        let src = self.src;
        while self.pos < src.len() {
            let rest = &src[self.pos..];
            if let Some(body) = rest.strip_prefix("<!--") {
                let end = body
                    .find("-->")
                    .ok_or_else(|| Error::HtmlParse("unclosed HTML comment".into()))?;
                self.pos += "<!--".len() + end + "-->".len();
            } else if rest.starts_with("<!") {
                // Doctype and other declarations carry nothing we keep.
                let end = rest
                    .find('>')
                    .ok_or_else(|| Error::HtmlParse("unclosed declaration".into()))?;
                self.pos += end + 1;
            } else if rest.strip_prefix("</").is_some_and(starts_with_letter) {
                self.end_tag()?;
            } else if rest.strip_prefix('<').is_some_and(starts_with_letter) {
                self.start_tag()?;
            } else {
                self.text();
            }
        }
        Ok(())
    }

    fn current_parent(&self) -> NodeId {
        self.open.last().copied().unwrap_or(self.dom.root)
    }

    fn text(&mut self) {
        let src = self.src;
        let bytes = src.as_bytes();
        let mut end = self.pos + 1;
        while end < bytes.len() && !(bytes[end] == b'<' && is_markup(&src[end..])) {
            end += 1;
        }
        let text = decode_character_references(&src[self.pos..end]);
        self.pos = end;
        if !text.is_empty() {
            let parent = self.current_parent();
            self.dom.create_text(parent, text);
        }
    }

    fn end_tag(&mut self) -> Result<()> {
        let src = self.src;
        let rest = &src[self.pos..];
        let close = rest
            .find('>')
            .ok_or_else(|| Error::HtmlParse("unclosed end tag".into()))?;
        let tag = rest[2..close]
            .split(|ch: char| ch.is_ascii_whitespace() || ch == '/')
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        self.pos += close + 1;

        // An end tag with no open element of that name is dropped.
        if let Some(index) = self
            .open
            .iter()
            .rposition(|node| self.dom.tag_name(*node) == Some(tag.as_str()))
        {
            self.open.truncate(index);
        }
        Ok(())
    }

    fn start_tag(&mut self) -> Result<()> {
        let src = self.src;
        self.pos += 1;
        let tag = self.take_while(is_name_char).to_ascii_lowercase();
        let mut attrs = Attributes::new();

        let self_closing = loop {
            self.skip_ws();
            let rest = &src[self.pos..];
            if rest.is_empty() {
                return Err(Error::HtmlParse(format!("unclosed start tag <{tag}>")));
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                break true;
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break false;
            }

            let name = self.take_while(is_attr_name_char);
            if name.is_empty() {
                // Stray character between attributes.
                self.pos += rest.chars().next().map_or(1, char::len_utf8);
                continue;
            }
            self.skip_ws();
            let value = if src[self.pos..].starts_with('=') {
                self.pos += 1;
                self.skip_ws();
                self.attr_value()?
            } else {
                String::new()
            };
            attrs.insert_if_absent(name.to_ascii_lowercase(), value);
        };

        self.close_implied_by(&tag);
        let parent = self.current_parent();
        let node = self.dom.create_element(parent, tag.clone(), attrs);
        if self_closing || is_void_tag(&tag) {
            return Ok(());
        }
        match raw_text_kind(&tag) {
            Some(kind) => self.raw_text_body(node, &tag, kind),
            None => {
                self.open.push(node);
                Ok(())
            }
        }
    }

    fn attr_value(&mut self) -> Result<String> {
        let src = self.src;
        let rest = &src[self.pos..];
        let raw = match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let len = rest[1..]
                    .find(quote)
                    .ok_or_else(|| Error::HtmlParse("unclosed quoted attribute value".into()))?;
                self.pos += len + 2;
                &rest[1..=len]
            }
            Some(_) => {
                let mut len = rest
                    .find(|ch: char| ch.is_ascii_whitespace() || ch == '>')
                    .unwrap_or(rest.len());
                // `a=b/>`: the slash belongs to the tag.
                if rest[..len].ends_with('/') && rest[len..].starts_with('>') {
                    len -= 1;
                }
                self.pos += len;
                &rest[..len]
            }
            None => return Err(Error::HtmlParse("missing attribute value".into())),
        };
        Ok(decode_character_references(raw))
    }

    fn raw_text_body(&mut self, node: NodeId, tag: &str, kind: RawText) -> Result<()> {
        let src = self.src;
        let close = find_raw_text_end(src, self.pos, tag)
            .ok_or_else(|| Error::HtmlParse(format!("unclosed <{tag}>")))?;
        let body = &src[self.pos..close];
        let body = match kind {
            RawText::Verbatim => body.to_string(),
            RawText::Escapable => decode_character_references(body),
        };
        if !body.is_empty() {
            self.dom.create_text(node, body);
        }
        let end = src[close..]
            .find('>')
            .ok_or_else(|| Error::HtmlParse(format!("unclosed </{tag}>")))?;
        self.pos = close + end + 1;
        Ok(())
    }

    /// `<p>` and `<option>` end tags may be omitted.
    fn close_implied_by(&mut self, tag: &str) {
        match tag {
            "option" | "optgroup" => {
                if self
                    .open
                    .last()
                    .is_some_and(|node| self.dom.tag_name(*node) == Some("option"))
                {
                    self.open.pop();
                }
            }
            _ if closes_paragraph(tag) => {
                if let Some(index) = self
                    .open
                    .iter()
                    .rposition(|node| self.dom.tag_name(*node) == Some("p"))
                {
                    self.open.truncate(index);
                }
            }
            _ => {}
        }
    }

    fn skip_ws(&mut self) {
        let src = self.src;
        let rest = &src[self.pos..];
        self.pos += rest.len() - rest.trim_start_matches(|ch: char| ch.is_ascii_whitespace()).len();
    }

    fn take_while(&mut self, accept: fn(char) -> bool) -> &'a str {
        let src = self.src;
        let rest = &src[self.pos..];
        let len = rest.find(|ch: char| !accept(ch)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }
}

fn closes_paragraph(tag: &str) -> bool {
    matches!(
        tag,
        "p" | "div"
            | "form"
            | "fieldset"
            | "section"
            | "article"
            | "aside"
            | "header"
            | "footer"
            | "main"
            | "nav"
            | "ul"
            | "ol"
            | "table"
            | "pre"
            | "blockquote"
            | "hr"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
    )
}

fn starts_with_letter(rest: &str) -> bool {
    rest.starts_with(|ch: char| ch.is_ascii_alphabetic())
}

fn is_markup(rest: &str) -> bool {
    rest.starts_with("<!")
        || rest
            .strip_prefix("</")
            .or_else(|| rest.strip_prefix('<'))
            .is_some_and(starts_with_letter)
}

fn is_name_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn is_attr_name_char(ch: char) -> bool {
    is_name_char(ch) || matches!(ch, ':' | '.' | '@')
}

// Finds `</tag` (any case) not followed by a name character.
fn find_raw_text_end(src: &str, from: usize, tag: &str) -> Option<usize> {
    let haystack = src[from..].to_ascii_lowercase();
    let needle = format!("</{tag}");
    let mut search = 0;
    while let Some(offset) = haystack[search..].find(&needle) {
        let at = search + offset;
        let after = at + needle.len();
        if haystack[after..].chars().next().is_none_or(|ch| !is_name_char(ch)) {
            return Some(from + at);
        }
        search = after;
    }
    None
}

fn decode_character_references(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp + 1..];
        let len = rest
            .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '#'))
            .unwrap_or(rest.len());
        match character_reference(&rest[..len]) {
            Some(ch) => {
                out.push(ch);
                rest = &rest[len..];
                rest = rest.strip_prefix(';').unwrap_or(rest);
            }
            None => out.push('&'),
        }
    }
    out.push_str(rest);
    out
}

fn character_reference(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix('x').or_else(|| number.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => return None,
    };
    Some(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_references_decode_with_and_without_semicolon() {
        assert_eq!(decode_character_references("a &amp; b"), "a & b");
        assert_eq!(decode_character_references("&lt;x&gt"), "<x>");
        assert_eq!(decode_character_references("&#65;&#x42;"), "AB");
        assert_eq!(decode_character_references("&unknown; &"), "&unknown; &");
    }

    #[test]
    fn valueless_attributes_are_stored_empty_and_duplicates_keep_first() -> Result<()> {
        let ParseOutput { dom } = parse_html("<INPUT required NAME='a' name=b data-x=1/>")?;
        let input = dom
            .all_element_nodes()
            .into_iter()
            .next()
            .ok_or_else(|| Error::HtmlParse("no element".into()))?;
        assert_eq!(dom.tag_name(input), Some("input"));
        assert_eq!(
            dom.attributes(input)?,
            vec![
                ("required".to_string(), String::new()),
                ("name".to_string(), "a".to_string()),
                ("data-x".to_string(), "1".to_string()),
            ]
        );
        Ok(())
    }

    #[test]
    fn raw_text_end_tag_needs_a_name_boundary() {
        assert_eq!(find_raw_text_end("a</scripts></SCRIPT >", 0, "script"), Some(11));
        assert_eq!(find_raw_text_end("never closed", 0, "script"), None);
    }

    #[test]
    fn unclosed_quoted_value_is_a_parse_error() {
        assert_eq!(
            parse_html("<input name='oops>").err().map(|err| err.to_string()),
            Some("html parse error: unclosed quoted attribute value".to_string())
        );
    }
}
