use serde::Deserialize;

use super::error::ContentError;

const BUNDLED: &str = include_str!("../../assets/content.json");

/// Everything the portfolio page renders
#[derive(Debug, Clone, Deserialize)]
pub struct Content {
    pub profile: Profile,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    /// Job titles cycled under the name
    pub titles: Vec<String>,
    pub about: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    pub location: String,
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Publication {
    pub title: String,
    pub venue: String,
    pub date: String,
    pub summary: String,
    pub link: String,
    pub doi: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub link: Option<String>,
    /// Cover image URL; kept with the data, not drawn by the page
    pub image: Option<String>,
}

impl Content {
    /// Content compiled into the binary
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;

        if content.profile.titles.is_empty() {
            return Err(ContentError::Missing("profile.titles"));
        }
        if content.skills.is_empty() {
            return Err(ContentError::Missing("skills"));
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = Content::bundled().unwrap();
        assert_eq!(content.profile.name, "Sai Charan");
        assert_eq!(content.profile.titles.len(), 7);
        assert_eq!(content.education.len(), 2);
        assert_eq!(content.experience.len(), 4);
        assert_eq!(content.projects.len(), 8);
        assert_eq!(content.skills.len(), 16);
        assert!(content.projects[0].link.is_some());
        assert!(content.projects[2].link.is_none());
        assert!(content.projects.iter().all(|p| p.image.is_some()));
    }

    #[test]
    fn test_rejects_missing_titles() {
        let json = r#"{
            "profile": {
                "name": "A", "initials": "A", "titles": [], "about": "",
                "email": "a@example.com", "github": "", "linkedin": ""
            },
            "skills": ["Rust"]
        }"#;
        assert!(matches!(
            Content::from_json(json),
            Err(ContentError::Missing("profile.titles"))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Content::from_json("{ not json"),
            Err(ContentError::Parse(_))
        ));
    }
}
