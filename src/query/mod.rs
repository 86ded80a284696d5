//! Catalog queries. Nothing here writes to the catalog: per-request
//! annotations such as the selected category are returned as fresh values.

use crate::catalog::{AppEntry, Catalog, Category};
use crate::error::{CatalogError, Result};
use serde::Serialize;

pub const SELECTED_CLASS: &str = "selected";

/// A category annotated for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryView<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    /// `"selected"` for the active filter, empty otherwise.
    pub class_name: &'static str,
}

impl<'a> CategoryView<'a> {
    fn new(category: &'a Category, active: Option<&str>) -> Self {
        let selected = active == Some(category.slug.as_str());
        Self {
            slug: &category.slug,
            name: &category.name,
            class_name: if selected { SELECTED_CLASS } else { "" },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<'a> {
    pub apps: Vec<&'a AppEntry>,
    pub categories: Vec<CategoryView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_category: Option<String>,
}

/// Apps in `category` (catalog order), or every app when no filter is given.
/// An empty filter counts as no filter; an unknown one yields no apps.
pub fn list_by_category<'a>(catalog: &'a Catalog, category: Option<&str>) -> Listing<'a> {
    let category = category.filter(|c| !c.is_empty());

    let apps = match category {
        Some(slug) => catalog
            .apps
            .iter()
            .filter(|app| app.category_slug == slug)
            .collect(),
        None => catalog.apps.iter().collect(),
    };

    let categories = catalog
        .categories
        .iter()
        .map(|c| CategoryView::new(c, category))
        .collect();

    Listing {
        apps,
        categories,
        current_category: category.map(str::to_string),
    }
}

pub fn find_by_slug<'a>(catalog: &'a Catalog, slug: &str) -> Result<&'a AppEntry> {
    catalog
        .apps
        .iter()
        .find(|app| app.slug == slug)
        .ok_or_else(|| CatalogError::AppNotFound(slug.to_string()))
}
