//! Domain entities shared across sections.
//!
//! The structs mirror the backend's JSON shapes; the enums normalize the
//! free-form labels those shapes carry (skill proficiency, project status)
//! into the fixed set of visual treatments the page knows how to render.

use serde::{Deserialize, Serialize};

/// Profile details shown in the hero and about sections.
///
/// Fetched once per consumer. When the fetch fails, [`PersonalInfo::fallback`]
/// substitutes so neither section is left on a spinner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub email: String,
    pub linkedin: String,
    pub location: String,
}

impl PersonalInfo {
    /// Static stand-in used when the profile fetch fails.
    pub fn fallback() -> Self {
        Self {
            name: "B.Goutham".to_string(),
            title: "BCA Student & Technology Enthusiast | KL University".to_string(),
            summary: "I am a dedicated second-year Bachelor of Computer Applications student \
                      at KL University with a passion for emerging technologies and hands-on \
                      problem-solving."
                .to_string(),
            email: "gurugoutham05@gmail.com".to_string(),
            linkedin: "https://www.linkedin.com/in/b-goutham-251726326".to_string(),
            location: "KL University, India".to_string(),
        }
    }
}

/// One skill entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Free-form proficiency label on the wire; see [`SkillLevel::parse`].
    pub level: String,
    pub category: String,
}

/// Proficiency bands with their progress-bar percentage and gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Foundation,
    Advanced,
    Expert,
    /// Unrecognized label, rendered at a neutral midpoint.
    Other,
}

impl SkillLevel {
    /// Parse a wire label, case-insensitively. Unknown labels map to `Other`.
    pub fn parse(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            "foundation" => SkillLevel::Foundation,
            "advanced" => SkillLevel::Advanced,
            "expert" => SkillLevel::Expert,
            _ => SkillLevel::Other,
        }
    }

    /// Progress bar width in percent.
    pub fn percent(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 25,
            SkillLevel::Intermediate => 60,
            SkillLevel::Foundation => 40,
            SkillLevel::Advanced => 85,
            SkillLevel::Expert => 95,
            SkillLevel::Other => 50,
        }
    }

    /// Gradient color classes for the badge and progress bar.
    pub fn gradient_class(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "from-orange-500 to-red-500",
            SkillLevel::Intermediate => "from-yellow-500 to-orange-500",
            SkillLevel::Advanced => "from-green-500 to-blue-500",
            SkillLevel::Expert => "from-blue-500 to-purple-500",
            SkillLevel::Foundation | SkillLevel::Other => "from-primary-500 to-accent-500",
        }
    }
}

/// A recognition entry; `date` is a display string, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: String,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A project card, fetched from the backend or taken from the built-in
/// catalog. Most fields are optional on the wire, so everything beyond the
/// title and description defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    /// Display label; badge styling goes through [`ProjectStatus::parse`].
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub demo_url: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

/// Badge treatment for a project status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Winner,
    Ongoing,
    Completed,
    Other,
}

impl ProjectStatus {
    /// Exact-match parse; anything unrecognized is `Other`.
    pub fn parse(label: &str) -> Self {
        match label {
            "Winner" => ProjectStatus::Winner,
            "Ongoing" => ProjectStatus::Ongoing,
            "Completed" => ProjectStatus::Completed,
            _ => ProjectStatus::Other,
        }
    }

    /// Badge color classes; only `Winner` and `Ongoing` are distinguished.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProjectStatus::Winner => "bg-yellow-500/20 text-yellow-400",
            ProjectStatus::Ongoing => "bg-blue-500/20 text-blue-400",
            ProjectStatus::Completed | ProjectStatus::Other => "bg-green-500/20 text-green-400",
        }
    }
}

/// Outgoing contact form payload, built fresh for each submit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_parse_case_insensitive() {
        assert_eq!(SkillLevel::parse("Intermediate"), SkillLevel::Intermediate);
        assert_eq!(SkillLevel::parse("EXPERT"), SkillLevel::Expert);
        assert_eq!(SkillLevel::parse("foundation"), SkillLevel::Foundation);
        assert_eq!(SkillLevel::parse("wizard"), SkillLevel::Other);
    }

    #[test]
    fn test_skill_level_percent_mapping() {
        assert_eq!(SkillLevel::Beginner.percent(), 25);
        assert_eq!(SkillLevel::Intermediate.percent(), 60);
        assert_eq!(SkillLevel::Foundation.percent(), 40);
        assert_eq!(SkillLevel::Advanced.percent(), 85);
        assert_eq!(SkillLevel::Expert.percent(), 95);
        assert_eq!(SkillLevel::Other.percent(), 50);
    }

    #[test]
    fn test_skill_level_gradients() {
        assert_eq!(SkillLevel::Beginner.gradient_class(), "from-orange-500 to-red-500");
        assert_eq!(SkillLevel::Expert.gradient_class(), "from-blue-500 to-purple-500");
        // Foundation shares the neutral gradient with unknown labels.
        assert_eq!(
            SkillLevel::Foundation.gradient_class(),
            SkillLevel::Other.gradient_class()
        );
    }

    #[test]
    fn test_project_status_badges() {
        assert_eq!(
            ProjectStatus::parse("Winner").badge_class(),
            "bg-yellow-500/20 text-yellow-400"
        );
        assert_eq!(
            ProjectStatus::parse("Ongoing").badge_class(),
            "bg-blue-500/20 text-blue-400"
        );
        assert_eq!(
            ProjectStatus::parse("Completed").badge_class(),
            "bg-green-500/20 text-green-400"
        );
    }

    #[test]
    fn test_project_status_labels_match_exactly() {
        assert_eq!(ProjectStatus::parse("winner"), ProjectStatus::Other);
        assert_eq!(ProjectStatus::parse(""), ProjectStatus::Other);
        assert_eq!(ProjectStatus::parse("Archived"), ProjectStatus::Other);
    }

    #[test]
    fn test_project_deserializes_with_missing_fields() {
        let json = r#"{"title": "Campus App", "description": "A utility app for students"}"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert_eq!(project.id, "");
        assert_eq!(project.status, "");
        assert!(project.technologies.is_empty());
        assert!(project.github_url.is_none());
        assert!(project.impact.is_none());
    }

    #[test]
    fn test_personal_info_fallback() {
        let info = PersonalInfo::fallback();
        assert_eq!(info.name, "B.Goutham");
        assert!(info.linkedin.starts_with("https://"));
        assert!(!info.summary.is_empty());
    }
}
