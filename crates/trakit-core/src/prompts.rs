//! Prompt templates for the advisor backends
//!
//! Default prompts are compiled into the binary. Templates use `{name}`
//! placeholders substituted with [`render`].

/// Embedded default prompts (compiled into binary)
mod defaults {
    pub const CATEGORIZE: &str = include_str!("../../../prompts/categorize.md");
    pub const ADVISE_SYSTEM: &str = include_str!("../../../prompts/advise_system.md");
}

/// Known prompt IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptId {
    /// Classify a free-text expense description into a category
    Categorize,
    /// System persona and response rules for budget advice
    AdviseSystem,
}

impl PromptId {
    /// Get the string identifier for this prompt
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Categorize => "categorize",
            Self::AdviseSystem => "advise_system",
        }
    }

    /// Get the embedded content for this prompt
    pub fn content(&self) -> &'static str {
        match self {
            Self::Categorize => defaults::CATEGORIZE,
            Self::AdviseSystem => defaults::ADVISE_SYSTEM,
        }
    }
}

/// Substitute `{name}` placeholders in a template
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in vars {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
