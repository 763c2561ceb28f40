use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::{Color, Palette};
use crate::error::SceneError;
use crate::figure::Figure;

/// Fully parsed, immutable description of a canvas and its ordered figures.
///
/// Figures retain document order; later figures draw over earlier ones. The
/// palette is a load-time intermediate and is not retained here.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub figures: Vec<Figure>,
}

/// Raw document shape, straight from serde. Field validation beyond JSON
/// structure happens in the build step.
#[derive(Deserialize)]
struct SceneDoc {
    #[serde(rename = "Palette", default)]
    palette: HashMap<String, String>,
    #[serde(rename = "Screen")]
    screen: ScreenDoc,
    #[serde(rename = "Figures")]
    figures: Vec<FigureDoc>,
}

#[derive(Deserialize)]
struct ScreenDoc {
    width: u32,
    height: u32,
    bg_color: String,
}

#[derive(Deserialize)]
struct FigureDoc {
    #[serde(rename = "type")]
    kind: String,
    x: Option<i32>,
    y: Option<i32>,
    color: Option<String>,
    radius: Option<i64>,
    width: Option<i64>,
    height: Option<i64>,
    size: Option<i64>,
    points: Option<Vec<[i32; 2]>>,
}

impl Scene {
    /// Loads and validates a scene description from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Scene, SceneError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Parses a scene description from JSON text.
    pub fn from_json(text: &str) -> Result<Scene, SceneError> {
        let doc: SceneDoc =
            serde_json::from_str(text).map_err(|e| SceneError::Malformed(e.to_string()))?;

        let palette = build_palette(&doc.palette)?;
        let background = Color::resolve(&doc.screen.bg_color, &palette)?;

        let figures = doc
            .figures
            .into_iter()
            .map(|figure| build_figure(figure, &palette))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Scene {
            width: doc.screen.width,
            height: doc.screen.height,
            background,
            figures,
        })
    }
}

/// Resolves every palette entry against an explicitly empty palette:
/// entries cannot reference other palette entries.
fn build_palette(entries: &HashMap<String, String>) -> Result<Palette, SceneError> {
    let empty = Palette::new();
    entries
        .iter()
        .map(|(name, token)| Color::resolve(token, &empty).map(|color| (name.clone(), color)))
        .collect()
}

fn build_figure(doc: FigureDoc, palette: &Palette) -> Result<Figure, SceneError> {
    let color = match &doc.color {
        Some(token) => Color::resolve(token, palette)?,
        None => Color::BLACK,
    };
    // x and y are independent; either may be present without the other.
    let position = (doc.x.unwrap_or(0), doc.y.unwrap_or(0));

    match doc.kind.as_str() {
        "point" => Ok(Figure::point(position, color)),
        "circle" => Figure::circle(position, require(doc.radius, "circle", "radius")?, color),
        "rectangle" => Figure::rectangle(
            position,
            require(doc.width, "rectangle", "width")?,
            require(doc.height, "rectangle", "height")?,
            color,
        ),
        "square" => Figure::square(position, require(doc.size, "square", "size")?, color),
        "polygon" => {
            let points = doc.points.ok_or_else(|| {
                SceneError::Malformed("polygon figure is missing required field \"points\"".into())
            })?;
            let points = points.into_iter().map(|[dx, dy]| (dx, dy)).collect();
            Ok(Figure::polygon(position, points, color))
        }
        other => Err(SceneError::UnknownFigureType(other.to_string())),
    }
}

fn require(field: Option<i64>, kind: &str, name: &str) -> Result<i64, SceneError> {
    field.ok_or_else(|| {
        SceneError::Malformed(format!("{kind} figure is missing required field {name:?}"))
    })
}
