//! Visual theme registry
//!
//! Every theme is plain data: colours, node geometry, connection style and
//! font. Renderers switch on these values instead of per-theme code.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThemeId {
    #[default]
    Cosmic,
    Pirate,
    Cyberpunk,
    Nature,
    Blueprint,
    Retro,
    Steampunk,
    Ink,
    Holo,
    Paper,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    Circle,
    Square,
    Hexagon,
    Organic,
    Coin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConnectionStyle {
    Bezier,
    Straight,
    HandDrawn,
    Circuit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Sans,
    Serif,
    Mono,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub id: ThemeId,
    pub label: &'static str,
    pub accent_color: &'static str,
    pub line_base_color: &'static str,
    pub line_active_color: &'static str,
    pub node_shape: NodeShape,
    pub connection_style: ConnectionStyle,
    pub font: FontFamily,
}

/// Stroke attributes for one link layer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStroke {
    pub color: &'static str,
    pub width: f64,
    pub opacity: f64,
    /// SVG dash array, solid when `None`
    pub dash: Option<&'static str>,
    /// Apply the neon glow filter
    pub glow: bool,
}

static THEMES: [ThemeConfig; 10] = [
    ThemeConfig {
        id: ThemeId::Cosmic,
        label: "Nebula Prime",
        accent_color: "#38bdf8",
        line_base_color: "#1e293b",
        line_active_color: "#818cf8",
        node_shape: NodeShape::Circle,
        connection_style: ConnectionStyle::Bezier,
        font: FontFamily::Sans,
    },
    ThemeConfig {
        id: ThemeId::Pirate,
        label: "Capitán de Navío",
        accent_color: "#b91c1c",
        line_base_color: "#5d4037",
        line_active_color: "#b91c1c",
        node_shape: NodeShape::Coin,
        connection_style: ConnectionStyle::HandDrawn,
        font: FontFamily::Serif,
    },
    ThemeConfig {
        id: ThemeId::Cyberpunk,
        label: "Bio-Synth v9",
        accent_color: "#d946ef",
        line_base_color: "#2e1065",
        line_active_color: "#bef264",
        node_shape: NodeShape::Organic,
        connection_style: ConnectionStyle::Circuit,
        font: FontFamily::Sans,
    },
    ThemeConfig {
        id: ThemeId::Nature,
        label: "Solarpunk Haven",
        accent_color: "#f59e0b",
        line_base_color: "#99f6e4",
        line_active_color: "#f59e0b",
        node_shape: NodeShape::Circle,
        connection_style: ConnectionStyle::Circuit,
        font: FontFamily::Sans,
    },
    ThemeConfig {
        id: ThemeId::Blueprint,
        label: "Structural Schematics",
        accent_color: "#ffffff",
        line_base_color: "#60a5fa",
        line_active_color: "#ffffff",
        node_shape: NodeShape::Square,
        connection_style: ConnectionStyle::Straight,
        font: FontFamily::Mono,
    },
    ThemeConfig {
        id: ThemeId::Retro,
        label: "Arcade Legacy",
        accent_color: "#d95763",
        line_base_color: "#3f3f74",
        line_active_color: "#6abe30",
        node_shape: NodeShape::Square,
        connection_style: ConnectionStyle::Circuit,
        font: FontFamily::Mono,
    },
    ThemeConfig {
        id: ThemeId::Steampunk,
        label: "Clockwork Engine",
        accent_color: "#d4af37",
        line_base_color: "#5c4033",
        line_active_color: "#ff8c00",
        node_shape: NodeShape::Circle,
        connection_style: ConnectionStyle::Straight,
        font: FontFamily::Serif,
    },
    ThemeConfig {
        id: ThemeId::Ink,
        label: "Celestial Ink",
        accent_color: "#dc2626",
        line_base_color: "#292524",
        line_active_color: "#dc2626",
        node_shape: NodeShape::Organic,
        connection_style: ConnectionStyle::HandDrawn,
        font: FontFamily::Serif,
    },
    ThemeConfig {
        id: ThemeId::Holo,
        label: "Orbital Command",
        accent_color: "#0ea5e9",
        line_base_color: "#1e293b",
        line_active_color: "#fbbf24",
        node_shape: NodeShape::Hexagon,
        connection_style: ConnectionStyle::Straight,
        font: FontFamily::Mono,
    },
    ThemeConfig {
        id: ThemeId::Paper,
        label: "Papercut Kingdom",
        accent_color: "#f472b6",
        line_base_color: "#cbd5e1",
        line_active_color: "#f472b6",
        node_shape: NodeShape::Circle,
        connection_style: ConnectionStyle::HandDrawn,
        font: FontFamily::Sans,
    },
];

impl ThemeId {
    pub fn config(self) -> &'static ThemeConfig {
        &THEMES[self as usize]
    }
}

impl ThemeConfig {
    /// Registry order, used by the theme picker
    pub fn all() -> &'static [ThemeConfig] {
        &THEMES
    }

    /// Always-visible base stroke of a link
    pub fn base_stroke(&self) -> LinkStroke {
        LinkStroke {
            color: self.line_base_color,
            width: if self.id == ThemeId::Blueprint { 1.0 } else { 3.0 },
            opacity: if self.id == ThemeId::Cosmic { 0.3 } else { 0.6 },
            dash: match self.id {
                ThemeId::Pirate | ThemeId::Blueprint => Some("6,4"),
                _ => None,
            },
            glow: self.id == ThemeId::Cyberpunk,
        }
    }

    /// Animated overlay drawn on links leading into an in-progress node
    pub fn flow_stroke(&self) -> LinkStroke {
        LinkStroke {
            color: if self.id == ThemeId::Cyberpunk {
                self.accent_color
            } else {
                self.line_active_color
            },
            width: 2.0,
            opacity: 1.0,
            dash: Some(if self.id == ThemeId::Pirate {
                "10,10"
            } else {
                "20,20"
            }),
            glow: false,
        }
    }
}
