use std::{fmt, str::FromStr};

use thiserror::Error;

/// A named, scrollable region of the page.
///
/// Declaration order is the priority order used when picking the active
/// section, and the order of the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The DOM id of the rendered `<section>`.
    pub const fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for id in SectionId::ALL {
            assert_eq!(id.as_str().parse::<SectionId>(), Ok(id));
            assert_eq!(id.label().to_lowercase(), id.as_str());
        }
    }

    #[test]
    fn test_unknown_ids() {
        assert_eq!(
            "blog".parse::<SectionId>(),
            Err(UnknownSection("blog".to_string()))
        );
        // DOM ids are case sensitive
        assert!("About".parse::<SectionId>().is_err());
        assert!("".parse::<SectionId>().is_err());
    }

    #[test]
    fn test_priority_order() {
        let mut sorted = SectionId::ALL;
        sorted.sort();
        assert_eq!(sorted, SectionId::ALL);
        assert_eq!(SectionId::ALL.first(), Some(&SectionId::Home));
        assert_eq!(SectionId::ALL.last(), Some(&SectionId::Contact));
    }
}
