//! ATS dispatch — render the resume, compose the prompt, call the model, wrap the reply.
//!
//! Flow: render_resume → compose_prompt → TextGenerator::generate → AnalysisResult.
//! The three operations differ only in template and output key.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::{debug, info};

use crate::ats::prompts::{PERCENTAGE_MATCH_PROMPT, RESUME_EVAL_PROMPT, SKILL_IMPROVE_PROMPT};
use crate::ats::render::render_resume;
use crate::errors::AppError;
use crate::llm_client::prompts::compose_prompt;
use crate::llm_client::TextGenerator;
use crate::models::resume::ResumeRequest;

/// One of the three ATS operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Evaluate,
    Improve,
    Match,
}

impl Operation {
    /// Instruction template sent ahead of the resume and JD.
    pub fn template(self) -> &'static str {
        match self {
            Operation::Evaluate => RESUME_EVAL_PROMPT,
            Operation::Improve => SKILL_IMPROVE_PROMPT,
            Operation::Match => PERCENTAGE_MATCH_PROMPT,
        }
    }

    /// Response field holding the model's text.
    pub fn output_key(self) -> &'static str {
        match self {
            Operation::Evaluate => "analysis",
            Operation::Improve => "suggestions",
            Operation::Match => "result",
        }
    }
}

/// Response envelope: `{"userId": ..., "<output_key>": "<model text>"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub user_id: Option<String>,
    pub operation: Operation,
    pub output: String,
}

impl Serialize for AnalysisResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("userId", &self.user_id)?;
        map.serialize_entry(self.operation.output_key(), &self.output)?;
        map.end()
    }
}

/// Runs a single ATS operation against the model. Exactly one outbound call, no retry.
pub async fn run_operation(
    llm: &dyn TextGenerator,
    operation: Operation,
    request: &ResumeRequest,
) -> Result<AnalysisResult, AppError> {
    info!("Running {:?} for user {:?}", operation, request.user_id);

    let resume_text = render_resume(request);
    debug!(
        "Rendered resume: {} chars, JD: {} chars",
        resume_text.len(),
        request.job_description.len()
    );

    let parts = compose_prompt(operation.template(), &resume_text, &request.job_description);

    let output = llm
        .generate(&parts)
        .await
        .map_err(|e| AppError::Llm(format!("Gemini error: {e}")))?;

    Ok(AnalysisResult {
        user_id: request.user_id.clone(),
        operation,
        output,
    })
}
