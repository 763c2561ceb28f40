use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::SceneError;

/// Integer pixel position on the canvas.
pub type Position = (i32, i32);

/// A single drawable shape: position, color, and shape-specific parameters.
///
/// The variant set is closed. A square is not a variant of its own: it is
/// constructed as an equal-sided [`Figure::Rectangle`] via [`Figure::square`].
/// Unknown figure kinds are rejected by the scene loader, never at draw time.
#[derive(Debug, Clone, PartialEq)]
pub enum Figure {
    Point {
        position: Position,
        color: Color,
    },
    Circle {
        position: Position,
        radius: u32,
        color: Color,
    },
    /// Corner-anchored filled box: `position` is the top-left pixel.
    Rectangle {
        position: Position,
        width: u32,
        height: u32,
        color: Color,
    },
    /// `points` are per-vertex offsets relative to `position`.
    Polygon {
        position: Position,
        points: Vec<(i32, i32)>,
        color: Color,
    },
}

impl Figure {
    pub fn point(position: Position, color: Color) -> Self {
        Figure::Point { position, color }
    }

    /// Negative or oversized radii are rejected here, at construction time,
    /// never silently clamped.
    pub fn circle(position: Position, radius: i64, color: Color) -> Result<Self, SceneError> {
        Ok(Figure::Circle {
            position,
            radius: size_param("radius", radius)?,
            color,
        })
    }

    pub fn rectangle(
        position: Position,
        width: i64,
        height: i64,
        color: Color,
    ) -> Result<Self, SceneError> {
        Ok(Figure::Rectangle {
            position,
            width: size_param("width", width)?,
            height: size_param("height", height)?,
            color,
        })
    }

    /// A square is a rectangle with `width = height = size`.
    pub fn square(position: Position, size: i64, color: Color) -> Result<Self, SceneError> {
        Self::rectangle(position, size, size, color)
    }

    pub fn polygon(position: Position, points: Vec<(i32, i32)>, color: Color) -> Self {
        Figure::Polygon {
            position,
            points,
            color,
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Figure::Point { position, .. }
            | Figure::Circle { position, .. }
            | Figure::Rectangle { position, .. }
            | Figure::Polygon { position, .. } => *position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Figure::Point { color, .. }
            | Figure::Circle { color, .. }
            | Figure::Rectangle { color, .. }
            | Figure::Polygon { color, .. } => *color,
        }
    }

    /// Draw the figure onto the canvas.
    ///
    /// Mutates only the canvas; calling this repeatedly with the same figure
    /// data writes the same pixels.
    pub fn draw(&self, canvas: &mut Canvas) {
        match self {
            Figure::Point {
                position: (x, y),
                color,
            } => canvas.set_pixel(*x, *y, *color),
            Figure::Circle {
                position: (x, y),
                radius,
                color,
            } => canvas.fill_circle(*x, *y, *radius, *color),
            Figure::Rectangle {
                position: (x, y),
                width,
                height,
                color,
            } => canvas.fill_rect(*x, *y, *width, *height, *color),
            Figure::Polygon {
                position: (x, y),
                points,
                color,
            } => {
                // Translate every vertex by the figure position, per axis.
                let vertices: Vec<(i32, i32)> =
                    points.iter().map(|(dx, dy)| (x + dx, y + dy)).collect();
                canvas.fill_polygon(&vertices, *color);
            }
        }
    }
}

fn size_param(name: &str, value: i64) -> Result<u32, SceneError> {
    u32::try_from(value)
        .map_err(|_| SceneError::InvalidGeometry(format!("{name} {value} is out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radius_rejected_at_construction() {
        let err = Figure::circle((0, 0), -1, Color::BLACK).unwrap_err();
        assert!(matches!(err, SceneError::InvalidGeometry(_)));
    }

    #[test]
    fn negative_square_size_rejected() {
        let err = Figure::square((0, 0), -5, Color::BLACK).unwrap_err();
        assert!(matches!(err, SceneError::InvalidGeometry(_)));
    }

    #[test]
    fn square_is_an_equal_sided_rectangle() {
        let square = Figure::square((3, 4), 7, Color::WHITE).unwrap();
        let rectangle = Figure::rectangle((3, 4), 7, 7, Color::WHITE).unwrap();
        assert_eq!(square, rectangle);
    }

    #[test]
    fn polygon_vertices_translate_by_position() {
        let mut canvas = Canvas::new(30, 30);
        let figure = Figure::polygon((10, 10), vec![(0, 0), (8, 0), (8, 8), (0, 8)], Color::WHITE);
        figure.draw(&mut canvas);

        // The translated square covers (10,10)..(18,18)
        assert_eq!(canvas.pixel(10, 10), Some([255, 255, 255, 255]));
        assert_eq!(canvas.pixel(14, 14), Some([255, 255, 255, 255]));
        // Untranslated origin stays untouched
        assert_eq!(canvas.pixel(0, 0), Some([0, 0, 0, 0]));
    }

    #[test]
    fn draw_is_idempotent_for_figure_data() {
        let figure = Figure::circle((5, 5), 3, Color::rgb(9, 9, 9)).unwrap();

        let mut first = Canvas::new(12, 12);
        figure.draw(&mut first);

        let mut second = Canvas::new(12, 12);
        figure.draw(&mut second);
        figure.draw(&mut second);

        assert_eq!(first.pixels(), second.pixels());
    }
}
