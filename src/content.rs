use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::motion::MotionSettings;

const DOCUMENT: &str = "portfolio.json";

static PORTFOLIO: LazyLock<Result<PortfolioContent, ContentError>> = LazyLock::new(load);

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("Content document not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content document: {0}")]
    ParseError(String),
    #[error("Stat number is not a count: {0:?}")]
    InvalidStat(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub description: String,
    pub cv_url: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub number: String,
    pub label: String,
}

impl Stat {
    /// Count the stat's counter animates up to, e.g. `15` for `"15+"`.
    pub fn target(&self) -> Result<u32, ContentError> {
        let digits = self.number.trim().trim_end_matches('+').trim();
        digits
            .parse::<u32>()
            .map_err(|_| ContentError::InvalidStat(self.number.clone()))
    }

    pub fn suffix(&self) -> &str {
        if self.number.trim_end().ends_with('+') {
            "+"
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub key: String,
    pub title: String,
    pub icon: String,
    pub color: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub period: String,
    #[serde(default)]
    pub is_current: bool,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub linkedin_label: String,
    pub linkedin_url: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub icon: String,
    pub url: String,
}

/// Everything the page shows, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub settings: MotionSettings,
}

impl PortfolioContent {
    pub fn parse(document: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(document)
            .map_err(|e| ContentError::ParseError(e.to_string()))?;
        for stat in &content.stats {
            stat.target()?;
        }
        Ok(content)
    }
}

fn load() -> Result<PortfolioContent, ContentError> {
    let file = Assets::get(DOCUMENT).ok_or_else(|| ContentError::NotFound(DOCUMENT.to_string()))?;
    let document = std::str::from_utf8(&file.data)
        .map_err(|e| ContentError::ParseError(e.to_string()))?;
    PortfolioContent::parse(document)
}

/// The embedded portfolio document, parsed once per process.
pub fn portfolio() -> Result<&'static PortfolioContent, ContentError> {
    PORTFOLIO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(number: &str) -> Stat {
        Stat {
            number: number.to_string(),
            label: "Things".to_string(),
        }
    }

    #[test]
    fn test_embedded_document_loads() {
        let content = portfolio().expect("embedded content should parse");
        assert_eq!(content.profile.name, "Aayush Shrestha");
        let targets = content
            .stats
            .iter()
            .map(|s| s.target().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(targets, vec![6, 15, 20]);
        assert_eq!(content.settings, MotionSettings::default());
        assert_eq!(content.socials.len(), 3);
    }

    #[test]
    fn test_document_order_is_kept() {
        let content = portfolio().unwrap();
        let keys = content.skills.iter().map(|c| c.key.as_str()).collect::<Vec<_>>();
        assert_eq!(keys, vec!["android", "flutter", "tools", "other"]);
        assert_eq!(content.experience[0].company, "Outcode Software");
        assert!(content.experience[0].is_current);
        assert!(!content.experience[2].is_current);
        assert_eq!(content.projects.len(), 10);
        assert_eq!(content.projects[9].title, "Streaming App");
    }

    #[test]
    fn test_stat_target() {
        assert_eq!(stat("15+").target(), Ok(15));
        assert_eq!(stat(" 7 ").target(), Ok(7));
        assert_eq!(stat("15+").suffix(), "+");
        assert_eq!(stat("7").suffix(), "");
        assert_eq!(
            stat("lots").target(),
            Err(ContentError::InvalidStat("lots".to_string()))
        );
        assert!(stat("-3+").target().is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            PortfolioContent::parse("{ not json"),
            Err(ContentError::ParseError(_))
        ));

        let mut doc: serde_json::Value =
            serde_json::from_str(&String::from_utf8(Assets::get(DOCUMENT).unwrap().data.into()).unwrap())
                .unwrap();
        doc["stats"][1]["number"] = serde_json::Value::from("many");
        doc["settings"] = serde_json::json!({ "counter_steps": 10 });
        assert_eq!(
            PortfolioContent::parse(&doc.to_string()),
            Err(ContentError::InvalidStat("many".to_string()))
        );

        doc["stats"][1]["number"] = serde_json::Value::from("9+");
        let content = PortfolioContent::parse(&doc.to_string()).unwrap();
        assert_eq!(content.settings.counter_steps, 10);
    }
}
