//! Catalog store: the app/category dataset, loaded once at startup and
//! shared read-only for the lifetime of the process.

pub mod models;

use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;

pub use models::{AppEntry, Catalog, Category};

impl Catalog {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        let catalog: Catalog = serde_json::from_str(raw).context("parse catalog json")?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for app in &self.apps {
            if !seen.insert(app.slug.as_str()) {
                anyhow::bail!("duplicate app slug {:?}", app.slug);
            }
            if app.icon_colors.is_empty() {
                tracing::warn!(slug = %app.slug, "app has no icon colors");
            }
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.slug.as_str()) {
                anyhow::bail!("duplicate category slug {:?}", category.slug);
            }
        }
        Ok(())
    }
}

pub fn load(path: &Path) -> anyhow::Result<Catalog> {
    let raw =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let catalog =
        Catalog::from_json_str(&raw).with_context(|| format!("load {}", path.display()))?;
    tracing::info!(
        apps = catalog.apps.len(),
        categories = catalog.categories.len(),
        "catalog loaded from {}",
        path.display()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let raw = r##"{
  "apps": [
    {
      "slug": "hyper",
      "name": "Hyper",
      "description": "A terminal",
      "categorySlug": "developer-tools",
      "iconColors": ["#000", "#fff"],
      "icon64": "hyper-icon-64.png",
      "screenshots": [{ "imageUrl": "https://example.com/a.png", "caption": "main" }],
      "website": "https://hyper.is"
    }
  ],
  "categories": [{ "slug": "developer-tools", "name": "Developer Tools" }]
}"##;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert_eq!(catalog.apps.len(), 1);

        let app = &catalog.apps[0];
        assert_eq!(app.category_slug, "developer-tools");
        assert_eq!(app.icon_colors, vec!["#000", "#fff"]);
        assert_eq!(app.screenshots[0].image_url, "https://example.com/a.png");
        assert_eq!(app.screenshots[0].extra["caption"], "main");
        assert_eq!(app.extra["website"], "https://hyper.is");
    }

    #[test]
    fn test_optional_fields_default() {
        let raw = r#"{"apps":[{"slug":"a","name":"A","categorySlug":"x"}],"categories":[]}"#;
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert!(catalog.apps[0].icon_colors.is_empty());
        assert!(catalog.apps[0].screenshots.is_empty());
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let raw = r#"{"apps":[
            {"slug":"a","name":"A","categorySlug":"x"},
            {"slug":"a","name":"B","categorySlug":"x"}
        ]}"#;
        assert!(Catalog::from_json_str(raw).is_err());

        let raw = r#"{"categories":[{"slug":"x","name":"X"},{"slug":"x","name":"Y"}]}"#;
        assert!(Catalog::from_json_str(raw).is_err());
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/apps.json");
        let catalog = load(&path).unwrap();
        assert!(!catalog.apps.is_empty());
        for app in &catalog.apps {
            assert!(
                catalog.categories.iter().any(|c| c.slug == app.category_slug),
                "{} has unknown category",
                app.slug
            );
        }
    }
}
