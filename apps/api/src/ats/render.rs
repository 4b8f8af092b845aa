//! Resume renderer — flattens a `ResumeRequest` into the plain-text block embedded in prompts.
//!
//! Group order is fixed: name, email, profile, summary, skills, coursework, education,
//! experience, projects, papers, extracurricular, higher secondary, secondary.
//! Absent or empty fields never produce a label. Rendering cannot fail.

use crate::models::resume::{
    EducationEntry, ExperienceEntry, PaperEntry, Profile, ProjectEntry, ResumeRequest,
    SchoolEntry, Skills,
};

/// Renders the resume portion of a request. The job description is not included.
pub fn render_resume(resume: &ResumeRequest) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(name) = present(&resume.name) {
        parts.push(format!("Name: {name}"));
    }
    if let Some(email) = present(&resume.email) {
        parts.push(format!("Email: {email}"));
    }
    if let Some(profile) = resume.profile.as_ref().and_then(render_profile) {
        parts.push(profile);
    }
    if let Some(summary) = present(&resume.summary) {
        parts.push(format!("Summary: {summary}"));
    }
    if let Some(skills) = resume.skills.as_ref().and_then(render_skills) {
        parts.push(skills);
    }
    if let Some(coursework) = present_list(&resume.coursework) {
        parts.push(format!("Coursework: {}", coursework.join(", ")));
    }
    if let Some(education) = present_list(&resume.education) {
        let lines: Vec<String> = education.iter().filter_map(education_line).collect();
        push_group(&mut parts, "Education", lines);
    }
    if let Some(experience) = present_list(&resume.experience) {
        let lines = experience.iter().map(experience_line).collect();
        push_group(&mut parts, "Experience", lines);
    }
    if let Some(projects) = present_list(&resume.projects) {
        let lines = projects.iter().map(project_line).collect();
        push_group(&mut parts, "Projects", lines);
    }
    if let Some(papers) = present_list(&resume.papers) {
        let lines = papers.iter().map(paper_line).collect();
        push_group(&mut parts, "Papers", lines);
    }
    if let Some(extracurricular) = present_list(&resume.extracurricular) {
        parts.push(format!("Extracurricular: {}", extracurricular.join(", ")));
    }
    if let Some(school) = resume.higher_secondary_school.as_ref().and_then(school_line) {
        parts.push(format!("Higher Secondary: {school}"));
    }
    if let Some(school) = resume.secondary_school.as_ref().and_then(school_line) {
        parts.push(format!("Secondary School: {school}"));
    }

    parts.join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Group renderers
// ────────────────────────────────────────────────────────────────────────────

fn render_profile(profile: &Profile) -> Option<String> {
    let bits: Vec<String> = [
        ("Phone", &profile.phone),
        ("LinkedIn", &profile.linkedin),
        ("GitHub", &profile.github),
        ("Address", &profile.address),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| format!("{label}: {v}")))
    .collect();

    (!bits.is_empty()).then(|| format!("Profile: {}", bits.join("; ")))
}

fn render_skills(skills: &Skills) -> Option<String> {
    let bits: Vec<String> = [
        ("Languages", &skills.languages),
        ("Technologies", &skills.technologies),
        ("Tools", &skills.tools),
    ]
    .into_iter()
    .filter_map(|(label, list)| present_list(list).map(|l| format!("{label}: {}", l.join(", "))))
    .collect();

    (!bits.is_empty()).then(|| format!("Skills: {}", bits.join(" | ")))
}

/// Education entries with no fields at all are dropped rather than rendered as a bare bullet.
fn education_line(entry: &EducationEntry) -> Option<String> {
    let gpa = present(&entry.gpa).map(|g| format!("GPA {g}"));
    let bits = join_present(&[
        present(&entry.degree),
        present(&entry.field),
        present(&entry.institute),
        present(&entry.location),
        present(&entry.dates),
        gpa.as_deref(),
    ]);
    (!bits.is_empty()).then(|| format!(" - {bits}"))
}

fn experience_line(entry: &ExperienceEntry) -> String {
    let bits = join_present(&[
        present(&entry.position),
        present(&entry.company),
        present(&entry.duration),
    ]);
    let mut line = if bits.is_empty() {
        " - Experience".to_string()
    } else {
        format!(" - {bits}")
    };
    if let Some(description) = present(&entry.description) {
        line.push_str(" | ");
        line.push_str(description);
    }
    line
}

fn project_line(entry: &ProjectEntry) -> String {
    let bits = join_present(&[
        present(&entry.name),
        present(&entry.tools),
        present(&entry.link),
    ]);
    let mut line = format!(" - {bits}");
    if let Some(description) = present_list(&entry.description) {
        line.push_str(" | Desc: ");
        line.push_str(&description.join("; "));
    }
    line
}

fn paper_line(entry: &PaperEntry) -> String {
    let bits = join_present(&[
        present(&entry.title),
        present(&entry.conference),
        present(&entry.link),
    ]);
    let mut line = format!(" - {bits}");
    if let Some(description) = present(&entry.description) {
        line.push_str(" | ");
        line.push_str(description);
    }
    line
}

fn school_line(school: &SchoolEntry) -> Option<String> {
    let bits = join_present(&[
        present(&school.school_name),
        present(&school.board),
        present(&school.location),
        present(&school.dates),
        present(&school.percentage),
    ]);
    (!bits.is_empty()).then_some(bits)
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

/// A string field counts as present only when it is non-empty.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// A list field counts as present only when it has at least one element.
fn present_list<T>(value: &Option<Vec<T>>) -> Option<&[T]> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn join_present(values: &[Option<&str>]) -> String {
    values.iter().flatten().copied().collect::<Vec<_>>().join(", ")
}

fn push_group(parts: &mut Vec<String>, heading: &str, lines: Vec<String>) {
    if !lines.is_empty() {
        parts.push(format!("{heading}:\n{}", lines.join("\n")));
    }
}
