//! Template cover letter seeded with the candidate's matched keywords.

use serde::Deserialize;

const DEFAULT_NAME: &str = "John Doe";
const DEFAULT_COMPANY: &str = "Company";
const DEFAULT_POSITION: &str = "Software Engineer";
/// Matched keywords quoted in the letter.
const MAX_LETTER_KEYWORDS: usize = 6;

/// Who is applying, and for what. Blank fields fall back to placeholders.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl CandidateProfile {
    pub fn name(&self) -> &str {
        non_blank(&self.name).unwrap_or(DEFAULT_NAME)
    }

    pub fn company(&self) -> &str {
        non_blank(&self.company).unwrap_or(DEFAULT_COMPANY)
    }

    pub fn position(&self) -> &str {
        non_blank(&self.position).unwrap_or(DEFAULT_POSITION)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

pub fn generate_cover_letter(profile: &CandidateProfile, matched_keywords: &[String]) -> String {
    let skills = if matched_keywords.is_empty() {
        "relevant skills".to_string()
    } else {
        matched_keywords
            .iter()
            .take(MAX_LETTER_KEYWORDS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let name = profile.name();
    let company = profile.company();
    let position = profile.position();

    format!(
        "Dear Hiring Manager at {company},\n\
         \n\
         I am excited to apply for the {position} role at {company}. After reviewing your job \
         description, I believe my skills and background align closely with your requirements.\n\
         \n\
         In my experience, I have successfully worked with {skills}, which I believe would help me \
         make a meaningful contribution to {company}'s goals. I am confident in my ability to plan, \
         execute, and optimize initiatives that drive measurable results, while collaborating \
         closely with cross-functional teams.\n\
         \n\
         I am passionate about bringing creativity, data-driven decision making, and continuous \
         improvement to every project I take on. I would welcome the opportunity to discuss how my \
         skills can support {company}'s growth and success.\n\
         \n\
         Thank you for considering my application.\n\
         \n\
         Sincerely,\n\
         {name}\n"
    )
}
