//! Resource library page

use serde::{Deserialize, Serialize};

use crate::store::StartTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Video,
    Article,
    Doc,
    Book,
    Course,
    Repo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceStatus {
    Todo,
    InProgress,
    Completed,
}

impl ResourceStatus {
    pub fn label(self) -> &'static str {
        match self {
            ResourceStatus::Completed => "Completado",
            ResourceStatus::InProgress => "En curso",
            ResourceStatus::Todo => "Pendiente",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryResource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub duration: String,
    pub node_id: String,
    pub node_title: String,
    pub cluster: String,
    pub status: ResourceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_percent: Option<u32>,
    pub is_favorite: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

impl LibraryResource {
    /// Progress bar is drawn only once work has started
    pub fn shows_progress(&self) -> bool {
        self.progress_percent.is_some_and(|p| p > 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LibraryTab {
    #[default]
    All,
    Favorites,
    InProgress,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LibraryLayout {
    #[default]
    Grid,
    List,
}

/// Everything that narrows the visible resources. `None` filters match all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    pub tab: LibraryTab,
    pub query: String,
    pub kind: Option<ResourceKind>,
    pub status: Option<ResourceStatus>,
}

impl LibraryFilter {
    pub fn matches(&self, resource: &LibraryResource) -> bool {
        let in_tab = match self.tab {
            LibraryTab::All => true,
            LibraryTab::Favorites => resource.is_favorite,
            LibraryTab::InProgress => resource.status == ResourceStatus::InProgress,
        };
        if !in_tab {
            return false;
        }

        let query = self.query.to_lowercase();
        let in_search = resource.title.to_lowercase().contains(&query)
            || resource.node_title.to_lowercase().contains(&query);
        if !in_search {
            return false;
        }

        self.kind.map_or(true, |k| resource.kind == k)
            && self.status.map_or(true, |s| resource.status == s)
    }
}

/// Resources passing every filter, in their original order
pub fn filter_resources<'a>(
    resources: &'a [LibraryResource],
    filter: &LibraryFilter,
) -> Vec<&'a LibraryResource> {
    resources.iter().filter(|r| filter.matches(r)).collect()
}

pub fn demo_resources() -> Vec<LibraryResource> {
    let resource = |id: &str,
                    title: &str,
                    kind,
                    duration: &str,
                    (node_id, node_title): (&str, &str),
                    cluster: &str,
                    status,
                    is_favorite,
                    progress| LibraryResource {
        id: id.to_string(),
        title: title.to_string(),
        kind,
        url: None,
        duration: duration.to_string(),
        node_id: node_id.to_string(),
        node_title: node_title.to_string(),
        cluster: cluster.to_string(),
        status,
        progress_percent: Some(progress),
        is_favorite,
        last_accessed: None,
        ai_summary: None,
    };

    use ResourceKind::*;
    use ResourceStatus::*;
    let mut resources = vec![
        resource("lib1", "HTML Crash Course", Video, "20 min", ("html-basics", "HTML Básico"), "PROGRAMMING", Completed, true, 100),
        resource("lib2", "Guía Completa de Flexbox", Article, "15 min", ("css-basics", "CSS Fundamentos"), "PROGRAMMING", InProgress, true, 45),
        resource("lib3", "Clean Code - Libro Digital", Book, "6h", ("js-syntax", "JS Sintaxis"), "CS", Todo, false, 0),
        resource("lib4", "React Documentation", Doc, "N/A", ("react-intro", "React Intro"), "PROGRAMMING", Todo, false, 0),
        resource("lib5", "Vocabulario Técnico Básico", Doc, "10 min", ("english-tech", "Inglés Técnico"), "LANGUAGES", Completed, false, 100),
        resource("lib6", "Repo: Ejercicios de Algoritmos", Repo, "2h", ("js-syntax", "JS Sintaxis"), "CS", InProgress, true, 20),
    ];

    resources[0].last_accessed = Some("Hace 2 días".to_string());
    resources[0].ai_summary = Some(
        "Cubre estructura básica, etiquetas comunes, listas y atributos esenciales. Ritmo rápido y claro.".to_string(),
    );
    resources[1].last_accessed = Some("Hace 1 hora".to_string());
    resources[2].ai_summary = Some(
        "Clásico de la ingeniería de software. Recomendado leer capítulo 1 y 2 para mejorar nombres de variables.".to_string(),
    );
    resources
}

#[derive(Debug, Clone)]
pub struct LibraryView {
    resources: Vec<LibraryResource>,
    layout: LibraryLayout,
    filter: LibraryFilter,
    selected: Option<String>,
}

impl LibraryView {
    pub fn new(resources: Vec<LibraryResource>) -> Self {
        Self {
            resources,
            layout: LibraryLayout::default(),
            filter: LibraryFilter::default(),
            selected: None,
        }
    }

    pub fn demo() -> Self {
        Self::new(demo_resources())
    }

    pub fn layout(&self) -> LibraryLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: LibraryLayout) {
        self.layout = layout;
    }

    pub fn filter(&self) -> &LibraryFilter {
        &self.filter
    }

    pub fn set_tab(&mut self, tab: LibraryTab) {
        self.filter.tab = tab;
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_string();
    }

    pub fn set_kind_filter(&mut self, kind: Option<ResourceKind>) {
        self.filter.kind = kind;
    }

    pub fn set_status_filter(&mut self, status: Option<ResourceStatus>) {
        self.filter.status = status;
    }

    /// Drop search and toolbar filters; the tab stays
    pub fn clear_filters(&mut self) {
        self.filter = LibraryFilter {
            tab: self.filter.tab,
            ..LibraryFilter::default()
        };
    }

    pub fn visible(&self) -> Vec<&LibraryResource> {
        filter_resources(&self.resources, &self.filter)
    }

    pub fn select(&mut self, resource_id: &str) {
        if self.resources.iter().any(|r| r.id == resource_id) {
            self.selected = Some(resource_id.to_string());
        }
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&LibraryResource> {
        let id = self.selected.as_deref()?;
        self.resources.iter().find(|r| r.id == id)
    }

    /// "Ir al nodo" in the detail panel
    pub fn open_node(&self) -> Option<StartTarget> {
        self.selected().map(|_| StartTarget::Dojo)
    }
}
