//! ProfileRecord, the single persisted entity behind every portfolio.
//!
//! Serialized with camelCase keys. Reads also accept the two legacy shapes
//! older records were written in (flat `skills`, single project `link`);
//! writes always produce the canonical shape below.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProjectWire", rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// Icon shown beside a skill category heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillIcon {
    #[default]
    Code,
    Server,
    Cloud,
    Database,
    Design,
    Tools,
}

impl SkillIcon {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "code" => Some(SkillIcon::Code),
            "server" => Some(SkillIcon::Server),
            "cloud" => Some(SkillIcon::Cloud),
            "database" => Some(SkillIcon::Database),
            "design" => Some(SkillIcon::Design),
            "tools" => Some(SkillIcon::Tools),
            _ => None,
        }
    }
}

/// Unknown or missing icon identifiers read as the default icon.
fn lenient_skill_icon<'de, D>(deserializer: D) -> Result<SkillIcon, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<String>::deserialize(deserializer)?;
    Ok(id.as_deref().and_then(SkillIcon::from_id).unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Empty for a flat, unnamed skill list.
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_skill_icon")]
    pub icon: SkillIcon,
    pub skills: Vec<String>,
}

/// Icon for a soft skill / interest label. Unknown labels get `Coffee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestIcon {
    Gamepad,
    Music,
    Coffee,
}

impl InterestIcon {
    pub fn for_label(label: &str) -> Self {
        match label {
            "Gaming" => InterestIcon::Gamepad,
            "Music Production" => InterestIcon::Music,
            "Cooking" => InterestIcon::Coffee,
            _ => InterestIcon::Coffee,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ProfileWire", rename_all = "camelCase")]
pub struct ProfileRecord {
    pub name: String,
    pub title: String,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Self-contained `data:` URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub skill_categories: Vec<SkillCategory>,
    pub soft_skills: Vec<String>,
    pub education: Vec<Education>,
}

impl ProfileRecord {
    /// Returns the record with `photo` replaced. No other field changes.
    pub fn with_photo(self, data_uri: String) -> Self {
        ProfileRecord {
            photo: Some(data_uri),
            ..self
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wire shapes accepted on read
// ────────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProjectWire {
    name: String,
    description: String,
    #[serde(default)]
    technologies: Option<Vec<String>>,
    demo: Option<String>,
    github: Option<String>,
    link: Option<String>,
}

impl From<ProjectWire> for Project {
    fn from(wire: ProjectWire) -> Self {
        let (mut demo, mut github) = (wire.demo, wire.github);
        if demo.is_none() && github.is_none() {
            match wire.link {
                Some(link) if link.contains("github.com") => github = Some(link),
                Some(link) => demo = Some(link),
                None => {}
            }
        }
        Project {
            name: wire.name,
            description: wire.description,
            technologies: wire.technologies.unwrap_or_default(),
            demo,
            github,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileWire {
    name: String,
    title: String,
    summary: String,
    email: Option<String>,
    phone: Option<String>,
    location: Option<String>,
    photo: Option<String>,
    #[serde(default)]
    experience: Vec<Experience>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    soft_skills: Vec<String>,
    #[serde(default)]
    education: Vec<Education>,
}

impl From<ProfileWire> for ProfileRecord {
    fn from(wire: ProfileWire) -> Self {
        let mut skill_categories = wire.skill_categories;
        if skill_categories.is_empty() && !wire.skills.is_empty() {
            skill_categories.push(SkillCategory {
                name: String::new(),
                icon: SkillIcon::default(),
                skills: wire.skills,
            });
        }
        ProfileRecord {
            name: wire.name,
            title: wire.title,
            summary: wire.summary,
            email: wire.email,
            phone: wire.phone,
            location: wire.location,
            photo: wire.photo,
            experience: wire.experience,
            projects: wire.projects,
            skill_categories,
            soft_skills: wire.soft_skills,
            education: wire.education,
        }
    }
}
