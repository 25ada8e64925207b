use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const CONTENT_FILE: &str = "portfolio.json";

pub static GLOBAL_PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load().expect("Bundled portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// The bundled page content, parsed once per process.
pub fn portfolio() -> &'static Portfolio {
    &GLOBAL_PORTFOLIO
}

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content file {0} is not bundled")]
    Missing(&'static str),
    #[error("Portfolio content is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid portfolio content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub about: String,
    pub contact: String,
    pub experiences: Vec<Experience>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    pub education: Vec<EducationEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    pub image: String,
    pub image_alt: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
    pub footer_tagline: String,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub employer: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectIcon {
    Code,
    Cpu,
    Database,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub icon: ProjectIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub focus: String,
}

impl Portfolio {
    /// Loads and validates the content file embedded from `content/`.
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(CONTENT_FILE).ok_or(ContentError::Missing(CONTENT_FILE))?;
        Self::from_bytes(&file.data)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ContentError> {
        Self::from_json(std::str::from_utf8(bytes)?)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(text)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let invalid = |msg: &str| Err(ContentError::Invalid(msg.to_string()));

        let profile = &self.profile;
        if profile.name.trim().is_empty() {
            return invalid("profile name is empty");
        }
        for (field, link) in [("github", &profile.github), ("linkedin", &profile.linkedin)] {
            if !(link.starts_with("https://") || link.starts_with("http://")) {
                return Err(ContentError::Invalid(format!(
                    "profile {field} link must be an absolute http(s) URL, got {link:?}"
                )));
            }
        }
        if !profile.email.contains('@') || profile.email.starts_with("mailto:") {
            return invalid("profile email must be a bare address");
        }

        if self.experiences.is_empty() {
            return invalid("no experience entries");
        }
        if self.skills.is_empty() {
            return invalid("no skill categories");
        }
        if self.projects.is_empty() {
            return invalid("no projects");
        }
        if self.education.is_empty() {
            return invalid("no education entries");
        }
        if let Some(category) = self
            .skills
            .iter()
            .find(|c| c.name.trim().is_empty() || c.skills.iter().any(|s| s.trim().is_empty()))
        {
            return Err(ContentError::Invalid(format!(
                "skill category {:?} has a blank name or label",
                category.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "profile": {
                "name": "Ada Example",
                "headline": "Engineer",
                "summary": "Builds things.",
                "image": "/images/me.jpg",
                "image_alt": "Ada Example",
                "github": "https://github.com/ada",
                "linkedin": "https://linkedin.com/in/ada",
                "email": "ada@example.com",
                "footer_tagline": "Thanks for reading."
            },
            "about": "About Ada.",
            "contact": "Say hi.",
            "experiences": [{
                "title": "Engineer",
                "employer": "Acme",
                "location": "Remote",
                "period": "2020 - 2024",
                "achievements": ["Shipped it"]
            }],
            "skills": [{ "name": "Languages", "skills": ["Rust", "SQL"] }],
            "projects": [{
                "title": "Widget",
                "description": "A widget.",
                "tech": ["Rust"],
                "icon": "cpu"
            }],
            "education": [{
                "degree": "BSc",
                "institution": "Uni",
                "period": "2016 - 2020",
                "focus": "Systems"
            }]
        })
    }

    #[test]
    fn test_bundled_content_loads() {
        let portfolio = Portfolio::load().expect("bundled content should load");
        assert_eq!(portfolio.profile.name, "Saivedant Hava");
        assert_eq!(portfolio.experiences.len(), 2);
        assert_eq!(portfolio.skills.len(), 4);
        assert_eq!(portfolio.projects.len(), 3);
        assert_eq!(portfolio.education.len(), 2);

        // Source order is preserved
        assert_eq!(portfolio.experiences[0].employer, "Cloudnautics");
        assert_eq!(portfolio.skills[0].name, "Languages");
        assert_eq!(
            portfolio.skills[0].skills,
            vec!["Java", "Python", "JavaScript", "SQL", "MATLAB"]
        );
        assert_eq!(portfolio.projects[2].icon, ProjectIcon::Database);
    }

    #[test]
    fn test_global_cache_matches_load() {
        let loaded = Portfolio::load().unwrap();
        assert_eq!(portfolio(), &loaded);
    }

    #[test]
    fn test_mailto() {
        let portfolio = Portfolio::from_json(&sample_json().to_string()).unwrap();
        assert_eq!(portfolio.profile.mailto(), "mailto:ada@example.com");
    }

    #[test]
    fn test_malformed_json() {
        let err = Portfolio::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let json = sample_json().to_string();
        let at = json.find("Ada Example").unwrap() + "Ada ".len();
        let mut bytes = json.into_bytes();
        bytes.insert(at, 0xFF);
        let err = Portfolio::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, ContentError::Encoding(_)));

        let bytes = sample_json().to_string().into_bytes();
        assert!(Portfolio::from_bytes(&bytes).is_ok());
    }

    #[test]
    fn test_unknown_icon_rejected() {
        let mut json = sample_json();
        json["projects"][0]["icon"] = "rocket".into();
        let err = Portfolio::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_validation() {
        let mut json = sample_json();
        json["profile"]["github"] = "github.com/ada".into();
        let err = Portfolio::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("github")));

        let mut json = sample_json();
        json["profile"]["email"] = "mailto:ada@example.com".into();
        assert!(matches!(
            Portfolio::from_json(&json.to_string()),
            Err(ContentError::Invalid(_))
        ));

        let mut json = sample_json();
        json["projects"] = serde_json::json!([]);
        assert!(matches!(
            Portfolio::from_json(&json.to_string()),
            Err(ContentError::Invalid(_))
        ));

        let mut json = sample_json();
        json["skills"][0]["skills"] = serde_json::json!(["Rust", "  "]);
        let err = Portfolio::from_json(&json.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Invalid(ref m) if m.contains("Languages")));
    }
}
