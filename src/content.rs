use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

static PROJECTS: LazyLock<Vec<GalleryItem>> = LazyLock::new(|| {
    load_projects().unwrap_or_else(|e| {
        log::error!("failed to load projects: {e}");
        Vec::new()
    })
});

static SERVICES: LazyLock<ServiceCatalog> = LazyLock::new(|| {
    load_services().unwrap_or_else(|e| {
        log::error!("failed to load services: {e}");
        ServiceCatalog::default()
    })
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

const PROJECTS_FILE: &str = "projects.json";
const SERVICES_FILE: &str = "services.json";

/// One card in the project gallery. Immutable for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePlan {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub duration: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOnService {
    pub name: String,
    pub price: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    pub plans: Vec<ServicePlan>,
    pub add_ons: Vec<AddOnService>,
}

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse {file}: {reason}")]
    ParseError { file: &'static str, reason: String },
}

fn read_json<T: for<'de> Deserialize<'de>>(file: &'static str) -> Result<T, ContentError> {
    let content = Assets::get(file).ok_or(ContentError::NotFound(file))?;
    serde_json::from_slice(&content.data).map_err(|e| ContentError::ParseError {
        file,
        reason: e.to_string(),
    })
}

pub fn load_projects() -> Result<Vec<GalleryItem>, ContentError> {
    read_json(PROJECTS_FILE)
}

pub fn load_services() -> Result<ServiceCatalog, ContentError> {
    read_json(SERVICES_FILE)
}

/// Projects in display order, parsed once per process.
pub fn projects() -> &'static [GalleryItem] {
    &PROJECTS
}

pub fn services() -> &'static ServiceCatalog {
    &SERVICES
}

pub fn find_project(id: &str) -> Option<&'static GalleryItem> {
    projects().iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projects_load() {
        let projects = load_projects().expect("projects.json should parse");
        assert_eq!(projects.len(), 6);

        // Ids are unique, the gallery keys on them
        let mut ids = projects.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), projects.len());

        assert!(projects.iter().all(|p| !p.technologies.is_empty()));
        assert!(projects.iter().all(|p| p.image.starts_with("/images/")));
    }

    #[test]
    fn test_find_project() {
        let first = find_project("1").expect("project 1 should exist");
        assert!(first.title.starts_with("Healers"));
        assert!(first.live_url.is_some());
        assert!(find_project("missing").is_none());
    }

    #[test]
    fn test_services_load() {
        let catalog = load_services().expect("services.json should parse");
        assert_eq!(catalog.plans.len(), 3);
        assert_eq!(catalog.add_ons.len(), 3);

        // Exactly one highlighted plan
        let popular = catalog.plans.iter().filter(|p| p.popular).collect::<Vec<_>>();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Professional Website");
    }

    #[test]
    fn test_optional_links_default_to_none() {
        let json = r#"{
            "id": "x",
            "title": "t",
            "description": "d",
            "image": "/images/x.png",
            "technologies": ["Rust"]
        }"#;
        let item: GalleryItem = serde_json::from_str(json).expect("should parse without links");
        assert_eq!(item.live_url, None);
        assert_eq!(item.source_url, None);
    }
}
