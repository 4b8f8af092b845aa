use serde::{Deserialize, Serialize};

/// Request body shared by all ATS endpoints: a structured resume plus the target JD.
///
/// Every field except `job_description` is optional. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRequest {
    /// Opaque caller identifier, echoed back in the response envelope.
    pub user_id: Option<String>,
    pub coursework: Option<Vec<String>>,
    pub education: Option<Vec<EducationEntry>>,
    pub email: Option<String>,
    pub experience: Option<Vec<ExperienceEntry>>,
    pub extracurricular: Option<Vec<String>>,
    pub higher_secondary_school: Option<SchoolEntry>,
    pub name: Option<String>,
    pub papers: Option<Vec<PaperEntry>>,
    pub profile: Option<Profile>,
    pub projects: Option<Vec<ProjectEntry>>,
    pub secondary_school: Option<SchoolEntry>,
    pub skills: Option<Skills>,
    pub summary: Option<String>,
    pub job_description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EducationEntry {
    pub dates: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub gpa: Option<String>,
    pub institute: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub description: Option<String>,
    pub duration: Option<String>,
    pub position: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaperEntry {
    pub conference: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: Option<String>,
    pub tools: Option<String>,
    pub link: Option<String>,
    /// One entry per description line.
    pub description: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolEntry {
    pub board: Option<String>,
    pub dates: Option<String>,
    pub location: Option<String>,
    pub percentage: Option<String>,
    pub school_name: Option<String>,
}

/// Contact block. `email` and `name` are accepted but not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub address: Option<String>,
    pub email: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Skills {
    pub languages: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub tools: Option<Vec<String>>,
}
