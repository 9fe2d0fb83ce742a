// Compound selectors: `tag`, `#id`, `.class` and combinations like `input#title`
//
// Descendant combinators and attribute selectors are not supported; the
// components never need them.

/// Commit a finished token: None = tag, Some('#') = id, Some('.') = class
fn flush(kind: Option<char>, token: &mut String, sel: &mut Selector) {
    if token.is_empty() {
        return;
    }
    let value = std::mem::take(token);
    match kind {
        None => sel.tag = Some(value.to_lowercase()),
        Some('#') => sel.id = Some(value),
        Some(_) => sel.classes.push(value),
    }
}

/// A parsed compound selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(input: &str) -> Self {
        let mut selector = Selector::default();
        let mut current = String::new();
        let mut kind: Option<char> = None;

        for c in input.trim().chars() {
            match c {
                '#' | '.' => {
                    flush(kind, &mut current, &mut selector);
                    kind = Some(c);
                }
                _ => current.push(c),
            }
        }
        flush(kind, &mut current, &mut selector);

        selector
    }

    /// Whether an element with these properties matches
    pub fn matches(&self, tag: &str, id: Option<&str>, classes: &[String]) -> bool {
        if let Some(want) = &self.tag {
            if !tag.eq_ignore_ascii_case(want) {
                return false;
            }
        }
        if let Some(want) = &self.id {
            if id != Some(want.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| classes.contains(c))
    }
}
