//! View-models handed to the presentation layer. Each page is assembled
//! fresh per request from borrowed catalog data plus derived fields.

use crate::catalog::{AppEntry, Catalog};
use crate::color::{self, ColorStat};
use crate::config::SiteConfig;
use crate::error::{CatalogError, Result};
use crate::query::{self, Listing};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDetails {
    pub title: String,
    pub url: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<'a> {
    #[serde(flatten)]
    pub listing: Listing<'a>,
    /// Size of the whole catalog, not of the filtered list.
    pub app_length: usize,
    pub page_details: PageDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailApp<'a> {
    #[serde(flatten)]
    pub entry: &'a AppEntry,
    pub rainbow: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPage<'a> {
    pub app: DetailApp<'a>,
    pub page_details: PageDetails,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColoredApp<'a> {
    #[serde(flatten)]
    pub entry: &'a AppEntry,
    pub colors: Vec<ColorStat>,
    pub main_color: ColorStat,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorsPage<'a> {
    pub apps: Vec<ColoredApp<'a>>,
}

pub fn assemble_list_page<'a>(
    catalog: &'a Catalog,
    category: Option<&str>,
    request_url: &str,
    site: &SiteConfig,
) -> ListPage<'a> {
    ListPage {
        listing: query::list_by_category(catalog, category),
        app_length: catalog.apps.len(),
        page_details: PageDetails {
            title: format!("{} | Apps", site.name),
            url: request_url.to_string(),
            description: site.apps_description.clone(),
            image: None,
        },
    }
}

pub fn assemble_detail_page<'a>(
    app: &'a AppEntry,
    request_url: &str,
    site: &SiteConfig,
) -> Result<DetailPage<'a>> {
    let rainbow = rainbow(app)?;

    let image = match app.screenshots.first() {
        Some(shot) => shot.image_url.clone(),
        None => format!(
            "{}/images/apps/{}",
            site.host.trim_end_matches('/'),
            app.icon64
        ),
    };

    Ok(DetailPage {
        app: DetailApp { entry: app, rainbow },
        page_details: PageDetails {
            title: format!("{} | Apps | {}", site.name, app.name),
            url: request_url.to_string(),
            description: app.description.clone(),
            image: Some(image),
        },
    })
}

/// Lookup plus assembly, for callers that only have the slug.
pub fn detail_page<'a>(
    catalog: &'a Catalog,
    slug: &str,
    request_url: &str,
    site: &SiteConfig,
) -> Result<DetailPage<'a>> {
    let app = query::find_by_slug(catalog, slug)?;
    assemble_detail_page(app, request_url, site)
}

pub fn assemble_colors_page(catalog: &Catalog) -> Result<ColorsPage<'_>> {
    let apps = catalog
        .apps
        .iter()
        .map(colored_app)
        .collect::<Result<Vec<_>>>()?;
    Ok(ColorsPage { apps })
}

fn colored_app(entry: &AppEntry) -> Result<ColoredApp<'_>> {
    let colors = color::app_colors(&entry.icon_colors)?;
    let main_color = color::main_color_for(&colors)
        .ok_or_else(|| CatalogError::EmptyIconColors(entry.slug.clone()))?;
    Ok(ColoredApp {
        entry,
        colors,
        main_color,
    })
}

/// CSS gradient stops spread evenly from 0% to 100% over the icon colors,
/// e.g. `#111 0%, #222 50%, #333 100%`.
pub fn rainbow(app: &AppEntry) -> Result<String> {
    match app.icon_colors.as_slice() {
        [] => Err(CatalogError::EmptyIconColors(app.slug.clone())),
        [only] => Ok(format!("{only} 0%")),
        colors => {
            let last = (colors.len() - 1) as f64;
            let stops: Vec<String> = colors
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{} {}%", c, i as f64 / last * 100.0))
                .collect();
            Ok(stops.join(", "))
        }
    }
}
