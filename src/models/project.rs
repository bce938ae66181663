//! Portfolio project model.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Room type a project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    Cozinhas,
    Quartos,
    Salas,
    #[serde(rename = "Escritórios")]
    Escritorios,
    Banheiros,
}

impl ProjectCategory {
    /// Display name, as shown on the gallery filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cozinhas => "Cozinhas",
            Self::Quartos => "Quartos",
            Self::Salas => "Salas",
            Self::Escritorios => "Escritórios",
            Self::Banheiros => "Banheiros",
        }
    }
}

impl FromStr for ProjectCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cozinhas" => Ok(Self::Cozinhas),
            "quartos" => Ok(Self::Quartos),
            "salas" => Ok(Self::Salas),
            "escritórios" | "escritorios" => Ok(Self::Escritorios),
            "banheiros" => Ok(Self::Banheiros),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gallery filter: every project, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl CategoryFilter {
    /// Label of the catch-all filter.
    pub const ALL_LABEL: &'static str = "Todos";

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == *category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// A finished project in the studio's portfolio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,

    /// URL-safe identifier
    pub slug: String,

    pub title: String,

    pub category: ProjectCategory,

    /// Image shown on the gallery card
    pub cover_image: String,

    /// All images, cover included
    pub images: Vec<String>,

    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub materials: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default)]
    pub featured: bool,
}

impl Project {
    /// Create a project with no technical sheet.
    pub fn new(
        id: u32,
        slug: impl Into<String>,
        title: impl Into<String>,
        category: ProjectCategory,
        cover_image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let cover_image = cover_image.into();
        Self {
            id,
            slug: slug.into(),
            title: title.into(),
            category,
            images: vec![cover_image.clone()],
            cover_image,
            description: description.into(),
            location: None,
            year: None,
            materials: Vec::new(),
            measures: Vec::new(),
            tags: Vec::new(),
            featured: false,
        }
    }
}
