//! Placeholder Engine — literal `{{name}}` substitution into trusted
//! LLM-directed template text. No escaping: templates are prompts, not
//! rendered markup.

use std::fmt::Display;

/// A closed set of placeholder values for one render pass. Each prompt
/// builder declares its own set; values come from anything `Display`, so
/// numbers get default decimal formatting and strings are inserted verbatim.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSet {
    values: Vec<(&'static str, String)>,
}

impl PlaceholderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: &'static str, value: impl Display) -> Self {
        self.values.push((name, value.to_string()));
        self
    }
}

/// Substitutes every occurrence of each `{{name}}` token. Tokens are disjoint
/// by construction, so substitution order is immaterial. Values without a
/// matching token are ignored; tokens without a value survive as literal text
/// (callers supply their builder's full declared set).
pub fn render(template: &str, placeholders: &PlaceholderSet) -> String {
    let mut rendered = template.to_string();
    for (name, value) in &placeholders.values {
        rendered = rendered.replace(&format!("{{{{{name}}}}}"), value);
    }
    rendered
}
