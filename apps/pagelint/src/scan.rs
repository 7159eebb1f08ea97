//! Lightweight JSX opening-tag scanning.
//!
//! Not a parser: it finds `<Name` occurrences and returns the attribute
//! text up to the closing `>`, skipping `>` characters nested in `{...}`
//! expressions or quoted strings (so `onClick={() => go()}` stays intact).
//! Attribute lookups follow the same rule and only match top-level names.

/// Attribute text of every opening tag named `name`, in source order.
///
/// `<ButtonGroup` does not count as a `<Button` tag. An unterminated tag
/// yields the remainder of the text.
pub fn opening_tags<'a>(text: &'a str, name: &str) -> Vec<&'a str> {
    let needle = format!("<{}", name);
    let mut out = Vec::new();
    let mut from = 0;
    while let Some(pos) = text[from..].find(&needle) {
        let start = from + pos + needle.len();
        from = start;
        match text[start..].chars().next() {
            None => out.push(&text[start..]),
            Some(c) if c.is_whitespace() || c == '>' || c == '/' => {
                let end = tag_end(text, start);
                out.push(&text[start..end]);
                from = end;
            }
            Some(_) => {}
        }
    }
    out
}

/// Byte offset of the `>` terminating a tag whose attributes start at `start`.
fn tag_end(text: &str, start: usize) -> usize {
    TopLevel::new(&text[start..])
        .find(|&(_, c)| c == '>')
        .map_or(text.len(), |(i, _)| start + i)
}

/// Characters of `text` outside quoted strings and `{...}` expressions.
///
/// Quote and brace delimiters themselves are skipped as well.
struct TopLevel<'a> {
    chars: std::str::CharIndices<'a>,
    depth: usize,
    quote: Option<char>,
    escaped: bool,
}

impl<'a> TopLevel<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices(),
            depth: 0,
            quote: None,
            escaped: false,
        }
    }
}

impl Iterator for TopLevel<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, c) = self.chars.next()?;
            if let Some(q) = self.quote {
                if self.escaped {
                    self.escaped = false;
                } else if c == '\\' {
                    self.escaped = true;
                } else if c == q {
                    self.quote = None;
                }
                continue;
            }
            match c {
                '"' | '\'' | '`' => self.quote = Some(c),
                '{' => self.depth += 1,
                '}' => self.depth = self.depth.saturating_sub(1),
                _ if self.depth == 0 => return Some((i, c)),
                _ => {}
            }
        }
    }
}

/// True when `attrs` declares attribute `name` (with or without a value).
pub fn has_attr(attrs: &str, name: &str) -> bool {
    attr_positions(attrs, name).next().is_some()
}

/// True when attribute `name` is set to the literal `value`, written as
/// `"v"`, `'v'`, `{"v"}` or `{'v'}`.
pub fn has_attr_value(attrs: &str, name: &str, value: &str) -> bool {
    attr_positions(attrs, name).any(|after| {
        let rest = attrs[after..].trim_start();
        let Some(rest) = rest.strip_prefix('=') else {
            return false;
        };
        let rest = rest.trim_start();
        let rest = rest.strip_prefix('{').unwrap_or(rest);
        ["\"", "'"].into_iter().any(|q| {
            rest.strip_prefix(q)
                .and_then(|r| r.strip_prefix(value))
                .is_some_and(|r| r.starts_with(q))
        })
    })
}

/// Offsets just past each standalone occurrence of attribute `name`.
///
/// Only top-level text counts, so a class name inside `className="..."` or
/// a word inside a `{...}` expression is never taken for an attribute.
fn attr_positions<'a>(attrs: &'a str, name: &'a str) -> impl Iterator<Item = usize> + 'a {
    TopLevel::new(attrs).filter_map(move |(i, _)| {
        if !attrs[i..].starts_with(name) {
            return None;
        }
        let before_ok = attrs[..i]
            .chars()
            .next_back()
            .map_or(true, |c| c.is_whitespace());
        let after = i + name.len();
        let after_ok = attrs[after..]
            .chars()
            .next()
            .map_or(true, |c| c.is_whitespace() || c == '=' || c == '/' || c == '>');
        (before_ok && after_ok).then_some(after)
    })
}
