//! shotqa Core Library
//!
//! Prompt selection, request/result models and the analysis pipeline
//! shared by the web server and the CLI.

pub mod analysis;
pub mod error;
pub mod prompt;
pub mod relay;

pub use analysis::model::{AnalysisRequest, AnalysisResult, NO_ANALYSIS_GENERATED};
pub use error::{ShotqaError, ShotqaResult};
pub use prompt::{AnalysisFocus, PromptTemplate};
pub use relay::{VisionOutcome, VisionRelay};
