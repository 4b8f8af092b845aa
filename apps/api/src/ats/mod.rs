// ATS screening: resume rendering, prompt dispatch and the three HTTP endpoints.
// All model calls go through llm_client — no direct Gemini calls here.

pub mod dispatch;
pub mod handlers;
pub mod prompts;
pub mod render;
