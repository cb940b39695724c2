use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::BookingError;

/// Service categories offered on the marketplace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cleaning,
    Repair,
    Painting,
    Shifting,
    Plumbing,
    Electric,
}

/// Image asset and tint used when rendering a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub path: &'static str,
    pub background: &'static str,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Cleaning,
        Category::Repair,
        Category::Painting,
        Category::Shifting,
        Category::Plumbing,
        Category::Electric,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Category::Cleaning => "cleaning",
            Category::Repair => "repair",
            Category::Painting => "painting",
            Category::Shifting => "shifting",
            Category::Plumbing => "plumbing",
            Category::Electric => "electric",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Cleaning => "Cleaning",
            Category::Repair => "Repair",
            Category::Painting => "Painting",
            Category::Shifting => "Shifting",
            Category::Plumbing => "Plumbing",
            Category::Electric => "Electric",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Category::Cleaning => Icon {
                path: "/icons/cleaning.svg",
                background: "#f3e8ff",
            },
            Category::Repair => Icon {
                path: "/icons/repair.svg",
                background: "#fef9c3",
            },
            Category::Painting => Icon {
                path: "/icons/painting.svg",
                background: "#dcfce7",
            },
            Category::Shifting => Icon {
                path: "/icons/shifting.svg",
                background: "#fee2e2",
            },
            Category::Plumbing => Icon {
                path: "/icons/plumbing.svg",
                background: "#ffedd5",
            },
            Category::Electric => Icon {
                path: "/icons/electric.svg",
                background: "#dbeafe",
            },
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Category {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| BookingError::validation(format!("unknown category '{}'", slug)))
    }
}
