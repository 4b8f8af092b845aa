// Shared prompt fragments and prompt-building utilities.
// Endpoint-specific instruction templates live alongside their handlers.

/// Marker preceding the rendered resume.
pub const RESUME_MARKER: &str = "\n[RESUME]\n";

/// Marker preceding the raw job description.
pub const JOB_DESCRIPTION_MARKER: &str = "\n[JOB_DESCRIPTION]\n";

/// Builds the ordered prompt parts for a single generation request:
/// instructions, marked resume, marked job description.
pub fn compose_prompt(instructions: &str, resume_text: &str, job_description: &str) -> Vec<String> {
    vec![
        instructions.to_string(),
        format!("{RESUME_MARKER}{resume_text}"),
        format!("{JOB_DESCRIPTION_MARKER}{job_description}"),
    ]
}
