use super::*;

/// One compound selector such as `select#budget.hs-input[name=budget]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Compound {
    pub(crate) tag: Option<String>,
    pub(crate) id: Option<String>,
    pub(crate) classes: Vec<String>,
    pub(crate) attrs: Vec<AttrTest>,
}

impl Compound {
    fn is_empty(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty()
    }
}

/// `[name]` when `value` is `None`, `[name=value]` otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AttrTest {
    pub(crate) name: String,
    pub(crate) value: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Combinator {
    Descendant,
    Child,
}

/// Compounds left to right; `links[i]` joins `parts[i]` and `parts[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Selector {
    pub(crate) parts: Vec<Compound>,
    pub(crate) links: Vec<Combinator>,
}

impl Selector {
    pub(crate) fn parse(src: &str) -> Result<Self> {
        let unsupported = || Error::UnsupportedSelector(src.to_string());
        let mut cursor = SelectorCursor { rest: src.trim() };
        let mut parts = vec![cursor.compound().ok_or_else(unsupported)?];
        let mut links = Vec::new();

        while !cursor.rest.is_empty() {
            let spaced = cursor.skip_ws();
            let link = if cursor.eat('>') {
                cursor.skip_ws();
                Combinator::Child
            } else if spaced {
                Combinator::Descendant
            } else {
                return Err(unsupported());
            };
            links.push(link);
            parts.push(cursor.compound().ok_or_else(unsupported)?);
        }

        Ok(Self { parts, links })
    }

    /// The id of a bare `#id` selector.
    pub(crate) fn lone_id(&self) -> Option<&str> {
        match self.parts.as_slice() {
            [only] if only.tag.is_none() && only.classes.is_empty() && only.attrs.is_empty() => {
                only.id.as_deref()
            }
            _ => None,
        }
    }
}

struct SelectorCursor<'a> {
    rest: &'a str,
}

impl SelectorCursor<'_> {
    fn skip_ws(&mut self) -> bool {
        let trimmed = self.rest.trim_start();
        let skipped = trimmed.len() != self.rest.len();
        self.rest = trimmed;
        skipped
    }

    fn eat(&mut self, ch: char) -> bool {
        match self.rest.strip_prefix(ch) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn ident(&mut self) -> Option<String> {
        let rest = self.rest;
        let len = rest
            .find(|ch: char| !(ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'))
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.rest = &rest[len..];
        Some(rest[..len].to_string())
    }

    fn compound(&mut self) -> Option<Compound> {
        let mut compound = Compound {
            tag: self.ident().map(|tag| tag.to_ascii_lowercase()),
            ..Compound::default()
        };
        loop {
            if self.eat('#') {
                let id = self.ident()?;
                if compound.id.replace(id).is_some() {
                    return None;
                }
            } else if self.eat('.') {
                compound.classes.push(self.ident()?);
            } else if self.eat('[') {
                compound.attrs.push(self.attr_test()?);
            } else {
                break;
            }
        }
        (!compound.is_empty()).then_some(compound)
    }

    fn attr_test(&mut self) -> Option<AttrTest> {
        self.skip_ws();
        let name = self.ident()?.to_ascii_lowercase();
        self.skip_ws();
        if self.eat(']') {
            return Some(AttrTest { name, value: None });
        }
        if !self.eat('=') {
            return None;
        }
        self.skip_ws();
        let value = self.attr_value()?;
        self.skip_ws();
        self.eat(']').then_some(AttrTest {
            name,
            value: Some(value),
        })
    }

    fn attr_value(&mut self) -> Option<String> {
        let rest = self.rest;
        let quote = rest.chars().next().filter(|ch| matches!(ch, '"' | '\''));
        if let Some(quote) = quote {
            let body = &rest[1..];
            let end = body.find(quote)?;
            self.rest = &body[end + 1..];
            return Some(body[..end].to_string());
        }
        let len = rest
            .find(|ch: char| ch == ']' || ch.is_ascii_whitespace())
            .unwrap_or(rest.len());
        if len == 0 {
            return None;
        }
        self.rest = &rest[len..];
        Some(rest[..len].to_string())
    }
}
