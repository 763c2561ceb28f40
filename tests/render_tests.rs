use scene_painter::renderer::render;
use scene_painter::{Canvas, Color, Figure, Scene};

#[test]
fn white_background_with_single_black_pixel() {
    let scene = Scene::from_json(
        r#"{
            "Screen": {"width": 100, "height": 100, "bg_color": "white"},
            "Figures": [{"type": "point", "x": 5, "y": 5, "color": "(0,0,0)"}]
        }"#,
    )
    .unwrap();

    let canvas = render(&scene);
    assert_eq!(canvas.dimensions(), (100, 100));
    assert_eq!(canvas.pixel(5, 5), Some([0, 0, 0, 255]));

    // Every other pixel stays white
    for (x, y) in [(0, 0), (4, 5), (5, 4), (6, 5), (99, 99)] {
        assert_eq!(canvas.pixel(x, y), Some([255, 255, 255, 255]), "at ({x},{y})");
    }
}

#[test]
fn square_and_rectangle_rasterize_identically() {
    for (x, y, size) in [(0, 0, 1), (4, 5, 6), (-2, 3, 8), (10, 10, 0)] {
        let square = Figure::square((x, y), size, Color::rgb(1, 2, 3)).unwrap();
        let rectangle = Figure::rectangle((x, y), size, size, Color::rgb(1, 2, 3)).unwrap();

        let mut canvas_a = Canvas::new(20, 20);
        let mut canvas_b = Canvas::new(20, 20);
        square.draw(&mut canvas_a);
        rectangle.draw(&mut canvas_b);

        assert_eq!(canvas_a.pixels(), canvas_b.pixels(), "size {size} at ({x},{y})");
    }
}

#[test]
fn polygon_translation_matches_pretranslated_vertices() {
    let points = vec![(0, 0), (9, 0), (9, 6), (0, 6)];
    let position = (7, 5);

    let mut translated_by_draw = Canvas::new(30, 30);
    Figure::polygon(position, points.clone(), Color::WHITE).draw(&mut translated_by_draw);

    let mut pretranslated = Canvas::new(30, 30);
    let absolute: Vec<(i32, i32)> = points
        .iter()
        .map(|(dx, dy)| (position.0 + dx, position.1 + dy))
        .collect();
    Figure::polygon((0, 0), absolute, Color::WHITE).draw(&mut pretranslated);

    assert_eq!(translated_by_draw.pixels(), pretranslated.pixels());
}

#[test]
fn painter_algorithm_keeps_list_order() {
    let scene = Scene::from_json(
        r#"{
            "Palette": {"under": "(200,0,0)", "over": "(0,200,0)"},
            "Screen": {"width": 16, "height": 16, "bg_color": "black"},
            "Figures": [
                {"type": "rectangle", "x": 0, "y": 0, "width": 16, "height": 16, "color": "under"},
                {"type": "circle", "x": 8, "y": 8, "radius": 3, "color": "over"}
            ]
        }"#,
    )
    .unwrap();

    let canvas = render(&scene);
    assert_eq!(canvas.pixel(8, 8), Some([0, 200, 0, 255]));
    assert_eq!(canvas.pixel(1, 1), Some([200, 0, 0, 255]));
}

#[test]
fn figures_clip_at_canvas_edges() {
    let scene = Scene::from_json(
        r#"{
            "Screen": {"width": 8, "height": 8, "bg_color": "black"},
            "Figures": [{"type": "circle", "x": 0, "y": 0, "radius": 4, "color": "white"}]
        }"#,
    )
    .unwrap();

    // Must not panic; the visible quarter of the circle is drawn
    let canvas = render(&scene);
    assert_eq!(canvas.pixel(0, 0), Some([255, 255, 255, 255]));
    assert_eq!(canvas.pixel(7, 7), Some([0, 0, 0, 255]));
}
