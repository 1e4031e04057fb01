//! Prompt template inspection.

use anyhow::Result;
use clap::Args;

use shotqa_core::{AnalysisFocus, PromptTemplate};

use crate::output;

#[derive(Args)]
pub struct PromptsArgs {
    /// Focus identifier to print; lists all templates when omitted
    pub focus: Option<String>,
}

pub fn execute(args: PromptsArgs) -> Result<()> {
    match args.focus {
        Some(identifier) => {
            let focus = AnalysisFocus::from_identifier(Some(identifier.as_str()));
            output::print_template(focus.template(), &identifier);
        }
        None => output::print_templates_table(PromptTemplate::all()),
    }
    Ok(())
}
