use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A filter or category label that matches no category. Labels compare
/// exactly, so `"web design"` is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Web Design")]
    WebDesign,
    #[serde(rename = "Graphic Design")]
    GraphicDesign,
    #[serde(rename = "Community")]
    Community,
    #[serde(rename = "Tech Support")]
    TechSupport,
    #[serde(rename = "Project Management")]
    ProjectManagement,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::WebDesign,
        Self::GraphicDesign,
        Self::Community,
        Self::TechSupport,
        Self::ProjectManagement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::WebDesign => "Web Design",
            Self::GraphicDesign => "Graphic Design",
            Self::Community => "Community",
            Self::TechSupport => "Tech Support",
            Self::ProjectManagement => "Project Management",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub image: String,
    pub description: String,
    pub demo_link: Option<String>,
    pub github_link: Option<String>,
    pub technologies: Vec<String>,
}

impl PortfolioItem {
    pub fn alt_text(&self, author: &str) -> String {
        format!("{} - {} project by {author}", self.title, self.category)
    }
}

/// The gallery's active selection. `All` is the "no filtering" sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

pub const ALL_LABEL: &str = "All";

/// Buttons shown above the gallery, in display order.
pub const FILTER_BUTTONS: [Filter; 5] = [
    Filter::All,
    Filter::Only(Category::WebDesign),
    Filter::Only(Category::GraphicDesign),
    Filter::Only(Category::TechSupport),
    Filter::Only(Category::Community),
];

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Only(c) => c.as_str(),
        }
    }

    pub fn matches(self, item: &PortfolioItem) -> bool {
        match self {
            Self::All => true,
            Self::Only(c) => item.category == c,
        }
    }

    /// Items selected by this filter, keeping their original order.
    pub fn apply<'a>(self, items: &'a [PortfolioItem]) -> Vec<&'a PortfolioItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Filter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_LABEL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use proptest::prelude::*;

    fn seed() -> Vec<PortfolioItem> {
        SiteContent::load().unwrap().portfolio
    }

    fn item(id: u32, category: Category) -> PortfolioItem {
        PortfolioItem {
            id,
            title: format!("Item {id}"),
            category,
            image: String::new(),
            description: String::new(),
            demo_link: None,
            github_link: None,
            technologies: vec![],
        }
    }

    #[test]
    fn test_web_design_filter_keeps_order() {
        let items = seed();
        let ids = Filter::Only(Category::WebDesign)
            .apply(&items)
            .iter()
            .map(|i| i.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec![1, 6]);
    }

    #[test]
    fn test_all_returns_everything() {
        let items = seed();
        let filtered = Filter::All.apply(&items);
        assert_eq!(filtered.len(), items.len());
        assert_eq!(filtered.len(), 6);
        assert!(filtered.iter().zip(items.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_seed_category_counts() {
        let items = seed();
        let count = |c| Filter::Only(c).apply(&items).len();
        assert_eq!(count(Category::WebDesign), 2);
        assert_eq!(count(Category::GraphicDesign), 1);
        assert_eq!(count(Category::Community), 1);
        assert_eq!(count(Category::TechSupport), 1);
        assert_eq!(count(Category::ProjectManagement), 1);
    }

    #[test]
    fn test_no_matches_is_empty() {
        let items = vec![item(1, Category::WebDesign), item(2, Category::Community)];
        assert!(Filter::Only(Category::TechSupport).apply(&items).is_empty());
        assert!(Filter::All.apply(&[]).is_empty());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("All".parse::<Filter>().unwrap(), Filter::All);
        assert_eq!(
            "Tech Support".parse::<Filter>().unwrap(),
            Filter::Only(Category::TechSupport)
        );
        assert_eq!(
            "web design".parse::<Filter>(),
            Err(UnknownCategory("web design".to_string()))
        );
        assert_eq!(
            "Baking".parse::<Category>().unwrap_err().to_string(),
            "unknown category: Baking"
        );
    }

    #[test]
    fn test_filter_buttons() {
        let labels = FILTER_BUTTONS.iter().map(|f| f.label()).collect::<Vec<_>>();
        assert_eq!(
            labels,
            vec!["All", "Web Design", "Graphic Design", "Tech Support", "Community"]
        );
        for f in FILTER_BUTTONS {
            assert_eq!(f.to_string().parse::<Filter>().unwrap(), f);
        }
    }

    #[test]
    fn test_alt_text() {
        let items = seed();
        assert_eq!(
            items[1].alt_text("Isamah Williams"),
            "Brand Identity Package - Graphic Design project by Isamah Williams"
        );
    }

    fn arb_category() -> impl Strategy<Value = Category> {
        prop::sample::select(Category::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_filter_only_returns_matching(
            cats in prop::collection::vec(arb_category(), 0..40),
            wanted in arb_category(),
        ) {
            let items = cats
                .iter()
                .enumerate()
                .map(|(i, c)| item(i as u32, *c))
                .collect::<Vec<_>>();
            let filtered = Filter::Only(wanted).apply(&items);
            prop_assert!(filtered.iter().all(|i| i.category == wanted));
            prop_assert_eq!(filtered.len(), cats.iter().filter(|c| **c == wanted).count());
            prop_assert!(filtered.windows(2).all(|w| w[0].id < w[1].id));
            prop_assert_eq!(Filter::All.apply(&items).len(), items.len());
        }
    }
}
