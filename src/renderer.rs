use crate::canvas::Canvas;
use crate::scene::Scene;

/// Rasterizes a scene into a fresh canvas.
///
/// The canvas is cleared to the scene background, then every figure is drawn
/// in document order - the painter's algorithm, no explicit z-order.
pub fn render(scene: &Scene) -> Canvas {
    let mut canvas = Canvas::new(scene.width, scene.height);
    canvas.clear(scene.background);

    for figure in &scene.figures {
        figure.draw(&mut canvas);
    }

    log::debug!(
        "rendered {} figures onto a {}x{} canvas",
        scene.figures.len(),
        scene.width,
        scene.height
    );

    canvas
}
