//! The studio's project portfolio.
//!
//! Projects are fixture data: loaded once when the catalog is built and
//! never mutated afterwards. The catalog answers the gallery's questions
//! (which categories exist, which projects fall under one, which project
//! has a given slug) and free-text searches.

pub mod fixtures;
pub mod matcher;

pub use matcher::{MatchField, ProjectMatch, ProjectMatcher};

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoryFilter, Project, ProjectCategory};

/// Read-only collection of portfolio projects.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    /// Build a catalog from an explicit project list (gallery order).
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// The catalog published on the site.
    pub fn builtin() -> Self {
        Self::new(fixtures::builtin_projects())
    }

    pub fn all(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Look a project up by its slug.
    pub fn get_by_slug(&self, slug: &str) -> CatalogResult<&Project> {
        self.projects
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| CatalogError::ProjectNotFound(slug.to_string()))
    }

    /// Projects passing the filter, in gallery order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn featured(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| p.featured).collect()
    }

    /// Categories in use, in order of first appearance.
    pub fn categories(&self) -> Vec<ProjectCategory> {
        let mut seen = Vec::new();
        for project in &self.projects {
            if !seen.contains(&project.category) {
                seen.push(project.category);
            }
        }
        seen
    }

    /// Filter labels: "Todos" followed by every category in use.
    pub fn category_labels(&self) -> Vec<&'static str> {
        std::iter::once(CategoryFilter::ALL_LABEL)
            .chain(self.categories().iter().map(|c| c.as_str()))
            .collect()
    }

    /// Fuzzy search over titles, tags and descriptions.
    pub fn search(
        &self,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> CatalogResult<Vec<ProjectMatch>> {
        if query.trim().is_empty() {
            return Err(CatalogError::InvalidQuery(
                "Query cannot be empty".to_string(),
            ));
        }
        if min_confidence > 100 {
            return Err(CatalogError::InvalidQuery(
                "min_confidence must be between 0 and 100".to_string(),
            ));
        }

        Ok(ProjectMatcher::new().find_matches(query, &self.projects, max_results, min_confidence))
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.featured().len(), 1);
    }

    #[test]
    fn test_get_by_slug() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.get_by_slug("banheiro-luxo").unwrap().id, 5);
        assert!(matches!(
            catalog.get_by_slug("garagem"),
            Err(CatalogError::ProjectNotFound(_))
        ));
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.filter(CategoryFilter::All).len(), 5);

        let rooms = catalog.filter(CategoryFilter::Only(ProjectCategory::Quartos));
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].slug, "guarda-roupa-elegante");
    }

    #[test]
    fn test_category_labels_start_with_all() {
        let labels = ProjectCatalog::builtin().category_labels();
        assert_eq!(
            labels,
            vec!["Todos", "Cozinhas", "Quartos", "Salas", "Escritórios", "Banheiros"]
        );
    }

    #[test]
    fn test_categories_deduplicate() {
        let mut projects = fixtures::builtin_projects();
        projects.push(Project::new(
            6,
            "cozinha-gourmet",
            "Cozinha Gourmet",
            ProjectCategory::Cozinhas,
            "/images/gourmet.jpg",
            "Cozinha com ilha",
        ));
        let catalog = ProjectCatalog::new(projects);
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.filter(CategoryFilter::Only(ProjectCategory::Cozinhas)).len(), 2);
    }

    #[test]
    fn test_search_rejects_blank_query() {
        let catalog = ProjectCatalog::builtin();
        assert!(matches!(
            catalog.search("  ", 5, 30),
            Err(CatalogError::InvalidQuery(_))
        ));
        assert!(catalog.search("sala", 5, 101).is_err());
    }
}
