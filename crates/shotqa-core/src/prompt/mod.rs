//! Prompt selection.
//!
//! Maps a caller-supplied focus identifier to one of a fixed set of prompt
//! templates. Selection is permissive: anything that is not a recognized
//! identifier gets the general prompt.

mod templates;

pub use templates::{BUG_DETECTION_PROMPT, GENERAL_PROMPT, UX_ANALYSIS_PROMPT};

/// What the model should look for in the screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisFocus {
    BugDetection,
    UxAnalysis,
    General,
}

/// A focus together with its wire identifier and prompt text.
#[derive(Debug, Clone, Copy)]
pub struct PromptTemplate {
    pub focus: AnalysisFocus,
    /// Value of `analysis_focus` that selects this template.
    pub identifier: &'static str,
    pub label: &'static str,
    pub text: &'static str,
}

/// The focus → template table. `General` must stay last; it is the fallback.
static PROMPT_TEMPLATES: [PromptTemplate; 3] = [
    PromptTemplate {
        focus: AnalysisFocus::BugDetection,
        identifier: "bug_detection",
        label: "Bug Detection",
        text: BUG_DETECTION_PROMPT,
    },
    PromptTemplate {
        focus: AnalysisFocus::UxAnalysis,
        identifier: "ux_analysis",
        label: "UX Analysis",
        text: UX_ANALYSIS_PROMPT,
    },
    PromptTemplate {
        focus: AnalysisFocus::General,
        identifier: "general",
        label: "General QA",
        text: GENERAL_PROMPT,
    },
];

impl AnalysisFocus {
    /// Resolve a focus identifier by exact match.
    ///
    /// Only `bug_detection` and `ux_analysis` are recognized. Everything else,
    /// `general` included, resolves to `General`.
    pub fn from_identifier(identifier: Option<&str>) -> Self {
        let Some(identifier) = identifier else {
            return Self::General;
        };
        PROMPT_TEMPLATES
            .iter()
            .filter(|t| t.focus != Self::General)
            .find(|t| t.identifier == identifier)
            .map_or(Self::General, |t| t.focus)
    }

    /// The template registered for this focus.
    pub fn template(self) -> &'static PromptTemplate {
        // Every variant has exactly one row in the table.
        match PROMPT_TEMPLATES.iter().find(|t| t.focus == self) {
            Some(template) => template,
            None => &PROMPT_TEMPLATES[PROMPT_TEMPLATES.len() - 1],
        }
    }

    pub fn identifier(self) -> &'static str {
        self.template().identifier
    }

    pub fn prompt(self) -> &'static str {
        self.template().text
    }
}

impl PromptTemplate {
    /// All templates, in display order.
    pub fn all() -> &'static [PromptTemplate] {
        &PROMPT_TEMPLATES
    }
}

/// Select the prompt text for a raw `analysis_focus` value.
pub fn select_prompt(analysis_focus: Option<&str>) -> &'static str {
    AnalysisFocus::from_identifier(analysis_focus).prompt()
}
