//! Axum route handlers for the ATS API.

use axum::{extract::State, Json};

use crate::ats::dispatch::{run_operation, AnalysisResult, Operation};
use crate::errors::{AppError, AppJson};
use crate::models::resume::ResumeRequest;
use crate::state::AppState;

/// POST /api/v1/ats/evaluate
///
/// Markdown HR-style evaluation of the resume against the JD.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    handle(&state, Operation::Evaluate, &request).await
}

/// POST /api/v1/ats/improve
///
/// Top-5 skills to learn for the target role.
pub async fn handle_improve(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    handle(&state, Operation::Improve, &request).await
}

/// POST /api/v1/ats/match
///
/// ATS-style percentage match with missing keywords.
pub async fn handle_match(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    handle(&state, Operation::Match, &request).await
}

async fn handle(
    state: &AppState,
    operation: Operation,
    request: &ResumeRequest,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = run_operation(state.llm.as_ref(), operation, request).await?;
    Ok(Json(result))
}
