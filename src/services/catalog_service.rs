//! Catalog service layer.
//!
//! Parses gallery filters and search limits coming from tool calls and
//! answers them from the project catalog.

use crate::catalog::{ProjectCatalog, ProjectMatch};
use crate::error::CatalogResult;
use crate::models::{CategoryFilter, Project};
use std::sync::Arc;

const DEFAULT_MAX_RESULTS: usize = 5;
const DEFAULT_MIN_CONFIDENCE: u8 = 30;

/// Catalog service trait for portfolio queries.
pub trait CatalogService: Send + Sync {
    /// Projects in a category ("Todos" or absent for all), optionally only
    /// the featured ones.
    fn list_projects(
        &self,
        category: Option<&str>,
        featured_only: bool,
    ) -> CatalogResult<Vec<Project>>;

    /// A single project by slug.
    fn get_project(&self, slug: &str) -> CatalogResult<Project>;

    /// Gallery filter labels, "Todos" first.
    fn list_categories(&self) -> Vec<&'static str>;

    /// Fuzzy search with optional limits.
    fn search_projects(
        &self,
        query: &str,
        max_results: Option<usize>,
        min_confidence: Option<u8>,
    ) -> CatalogResult<Vec<ProjectMatch>>;
}

/// Default implementation of CatalogService.
pub struct CatalogServiceImpl {
    catalog: Arc<ProjectCatalog>,
}

impl CatalogServiceImpl {
    pub fn new(catalog: Arc<ProjectCatalog>) -> Self {
        Self { catalog }
    }
}

impl CatalogService for CatalogServiceImpl {
    fn list_projects(
        &self,
        category: Option<&str>,
        featured_only: bool,
    ) -> CatalogResult<Vec<Project>> {
        let filter = match category {
            Some(name) => name.parse::<CategoryFilter>()?,
            None => CategoryFilter::All,
        };
        let projects: Vec<&Project> = if featured_only {
            self.catalog
                .featured()
                .into_iter()
                .filter(|p| filter.matches(p))
                .collect()
        } else {
            self.catalog.filter(filter)
        };
        Ok(projects.into_iter().cloned().collect())
    }

    fn get_project(&self, slug: &str) -> CatalogResult<Project> {
        self.catalog.get_by_slug(slug.trim()).cloned()
    }

    fn list_categories(&self) -> Vec<&'static str> {
        self.catalog.category_labels()
    }

    fn search_projects(
        &self,
        query: &str,
        max_results: Option<usize>,
        min_confidence: Option<u8>,
    ) -> CatalogResult<Vec<ProjectMatch>> {
        self.catalog.search(
            query,
            max_results.unwrap_or(DEFAULT_MAX_RESULTS),
            min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE),
        )
    }
}
