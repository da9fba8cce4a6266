use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{DateTime, Datelike, Utc};
use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use crate::portfolio::PortfolioItem;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

const PORTFOLIO_FILE: &str = "portfolio.json";
const SKILLS_FILE: &str = "skills.json";
const SERVICES_FILE: &str = "services.json";
const PROFILE_FILE: &str = "profile.json";

/// Seed content, validated once and shared read-only by every section.
pub static SITE_CONTENT: LazyLock<SiteContent> = LazyLock::new(|| {
    SiteContent::load().unwrap_or_else(|e| {
        log::error!("couldn't load site content: {e}");
        SiteContent::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("content file not found: {0}")]
    NotFound(&'static str),
    #[error("couldn't parse {file}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("skill '{name}' has percentage {percentage}, expected 0-100")]
    PercentageOutOfRange { name: String, percentage: u8 },
    #[error("portfolio id {0} is used more than once")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub percentage: u8,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceIcon {
    Users,
    Tool,
    Monitor,
    Palette,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Users => "👥",
            Self::Tool => "🛠️",
            Self::Monitor => "🖥️",
            Self::Palette => "🎨",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub headline: String,
    pub tagline: String,
    pub bio: String,
    pub portrait: String,
    pub email: String,
    /// Digits only, as expected by `wa.me` links.
    pub whatsapp_number: String,
    pub whatsapp_display: String,
    pub whatsapp_greeting: String,
    pub birthday: String,
    pub location: String,
    pub experience: Vec<Experience>,
    pub working_hours: Vec<String>,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    pub portfolio: Vec<PortfolioItem>,
    pub skills: Vec<SkillEntry>,
    pub services: Vec<Service>,
}

fn parse_file<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&content.data).map_err(|source| ContentError::Parse { file, source })
}

impl SiteContent {
    /// Reads every embedded content file and checks the seed invariants.
    pub fn load() -> Result<Self, ContentError> {
        let content = Self {
            profile: parse_file(PROFILE_FILE)?,
            portfolio: parse_file(PORTFOLIO_FILE)?,
            skills: parse_file(SKILLS_FILE)?,
            services: parse_file(SERVICES_FILE)?,
        };
        content.validate()?;
        log::debug!(
            "loaded site content: {} portfolio items, {} skills, {} services",
            content.portfolio.len(),
            content.skills.len(),
            content.services.len()
        );
        Ok(content)
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if let Some(skill) = self.skills.iter().find(|s| s.percentage > 100) {
            return Err(ContentError::PercentageOutOfRange {
                name: skill.name.clone(),
                percentage: skill.percentage,
            });
        }
        let mut seen = HashSet::new();
        for item in &self.portfolio {
            if !seen.insert(item.id) {
                return Err(ContentError::DuplicateId(item.id));
            }
        }
        Ok(())
    }
}

/// Falls back to the placeholder for items seeded without an image.
pub fn image_or_placeholder(path: &str) -> &str {
    if path.trim().is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        path
    }
}

/// An `<img>` that finished with no pixels never loaded. The placeholder is
/// never replaced by itself.
pub fn load_failed(src: &str, complete: bool, natural_width: u32) -> bool {
    src != PLACEHOLDER_IMAGE && complete && natural_width == 0
}

/// Year the site was built, so server and hydrated client print the same footer.
pub fn copyright_year() -> i32 {
    year_of(env!("BUILD_TIME"))
}

fn year_of(timestamp: &str) -> i32 {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, percentage: u8) -> SkillEntry {
        SkillEntry {
            name: name.to_string(),
            percentage,
            description: String::new(),
        }
    }

    #[test]
    fn test_seed_content_loads() {
        let content = SiteContent::load().expect("seed content should be valid");
        assert_eq!(content.portfolio.len(), 6);
        assert_eq!(content.skills.len(), 8);
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.profile.full_name(), "Isamah Williams");
        assert_eq!(content.profile.whatsapp_number, "2348100351157");
        assert!(content
            .skills
            .iter()
            .all(|s| (0..=100).contains(&s.percentage)));
    }

    #[test]
    fn test_seed_optional_links() {
        let content = SiteContent::load().unwrap();
        let brand = content.portfolio.iter().find(|i| i.id == 2).unwrap();
        assert_eq!(brand.github_link, None);
        assert!(brand.demo_link.is_some());
        assert!(content.portfolio.iter().filter(|i| i.id != 2).all(|i| i.github_link.is_some()));
    }

    #[test]
    fn test_percentage_out_of_range() {
        let content = SiteContent {
            skills: vec![skill("Typing", 80), skill("Juggling", 101)],
            ..Default::default()
        };
        match content.validate() {
            Err(ContentError::PercentageOutOfRange { name, percentage }) => {
                assert_eq!(name, "Juggling");
                assert_eq!(percentage, 101);
            }
            other => panic!("expected out of range error, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_portfolio_id() {
        let mut content = SiteContent::load().unwrap();
        let mut dup = content.portfolio[0].clone();
        dup.title = "Copy".to_string();
        content.portfolio.push(dup);
        assert!(matches!(content.validate(), Err(ContentError::DuplicateId(1))));
    }

    #[test]
    fn test_unknown_category_in_json() {
        let json = r#"{
            "id": 9,
            "title": "Bakery",
            "category": "Baking",
            "image": "",
            "description": "",
            "demo_link": null,
            "github_link": null,
            "technologies": []
        }"#;
        assert!(serde_json::from_str::<PortfolioItem>(json).is_err());
    }

    #[test]
    fn test_image_or_placeholder() {
        assert_eq!(image_or_placeholder("/images/a.png"), "/images/a.png");
        assert_eq!(image_or_placeholder(""), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder("   "), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_load_failed_before_hydration() {
        // a 404 that finished before the client took over
        assert!(load_failed("/images/brand-identity.png", true, 0));
        // still downloading
        assert!(!load_failed("/images/brand-identity.png", false, 0));
        assert!(!load_failed("/images/brand-identity.png", true, 400));
        assert!(!load_failed(PLACEHOLDER_IMAGE, true, 0));
    }

    #[test]
    fn test_build_year() {
        assert_eq!(year_of("2025-03-14T09:26:53.589+00:00"), 2025);
        assert_eq!(year_of("garbage"), Utc::now().year());
        assert!(copyright_year() >= 2025);
    }

    #[test]
    fn test_service_icons_parse() {
        let content = SiteContent::load().unwrap();
        let icons = content.services.iter().map(|s| s.icon).collect::<Vec<_>>();
        assert_eq!(
            icons,
            vec![
                ServiceIcon::Users,
                ServiceIcon::Tool,
                ServiceIcon::Monitor,
                ServiceIcon::Palette
            ]
        );
        assert_eq!(ServiceIcon::Users.glyph(), "👥");
    }
}
