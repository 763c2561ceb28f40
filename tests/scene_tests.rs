use scene_painter::{Color, Figure, Palette, Scene, SceneError};

// ============================================================================
// Color resolution properties
// ============================================================================

#[test]
fn palette_key_wins_regardless_of_literal_syntax() {
    let mut palette = Palette::new();
    // Keys that would otherwise parse as a triple, a hex literal, and a name
    palette.insert("(1,2,3)".to_string(), Color::rgb(100, 100, 100));
    palette.insert("#ff0000".to_string(), Color::rgb(101, 101, 101));
    palette.insert("white".to_string(), Color::rgb(102, 102, 102));

    for (token, expected) in &palette {
        assert_eq!(Color::resolve(token, &palette).unwrap(), *expected);
    }
}

#[test]
fn triples_resolve_exactly_against_an_empty_palette() {
    let empty = Palette::new();
    for (r, g, b) in [(0u8, 0u8, 0u8), (255, 255, 255), (17, 0, 255), (1, 2, 3)] {
        let token = format!("({},{},{})", r, g, b);
        assert_eq!(Color::resolve(&token, &empty).unwrap(), Color::rgb(r, g, b));
    }
}

#[test]
fn four_component_triple_falls_through_and_fails() {
    let err = Color::resolve("(1,2,3,4)", &Palette::new()).unwrap_err();
    assert!(matches!(err, SceneError::InvalidColor(_)));
}

// ============================================================================
// Scene loading
// ============================================================================

#[test]
fn load_reads_a_scene_from_disk() {
    let path = std::env::temp_dir().join("scene_painter_load_test.json");
    std::fs::write(
        &path,
        r#"{
            "Palette": {"bg": "(250,250,250)"},
            "Screen": {"width": 64, "height": 48, "bg_color": "bg"},
            "Figures": [{"type": "circle", "x": 10, "y": 10, "radius": 4, "color": "red"}]
        }"#,
    )
    .unwrap();

    let scene = Scene::load(&path).unwrap();
    assert_eq!((scene.width, scene.height), (64, 48));
    assert_eq!(scene.background, Color::rgb(250, 250, 250));
    assert_eq!(
        scene.figures,
        vec![Figure::circle((10, 10), 4, Color::rgb(255, 0, 0)).unwrap()]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn load_reports_missing_file() {
    let err = Scene::load("/definitely/not/a/scene.json").unwrap_err();
    assert!(matches!(err, SceneError::Io { .. }));
}

#[test]
fn figure_order_follows_the_document() {
    let scene = Scene::from_json(
        r#"{
            "Screen": {"width": 100, "height": 100, "bg_color": "white"},
            "Figures": [
                {"type": "rectangle", "x": 0, "width": 1, "height": 1},
                {"type": "circle", "x": 1, "radius": 1},
                {"type": "polygon", "x": 2, "points": [[0,0],[1,0],[0,1]]},
                {"type": "square", "x": 3, "size": 1},
                {"type": "point", "x": 4}
            ]
        }"#,
    )
    .unwrap();

    let xs: Vec<i32> = scene.figures.iter().map(|f| f.position().0).collect();
    assert_eq!(xs, vec![0, 1, 2, 3, 4]);
}

#[test]
fn unknown_figure_type_rejects_the_whole_scene() {
    let err = Scene::from_json(
        r#"{
            "Screen": {"width": 100, "height": 100, "bg_color": "white"},
            "Figures": [
                {"type": "point", "x": 1},
                {"type": "hexagon", "x": 2}
            ]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::UnknownFigureType(_)));
}

#[test]
fn negative_radius_never_clamps() {
    let err = Scene::from_json(
        r#"{
            "Screen": {"width": 100, "height": 100, "bg_color": "white"},
            "Figures": [{"type": "circle", "radius": -1}]
        }"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::InvalidGeometry(_)));
}

#[test]
fn unresolvable_background_fails() {
    let err = Scene::from_json(
        r#"{"Screen": {"width": 1, "height": 1, "bg_color": "chartreuse-ish"}, "Figures": []}"#,
    )
    .unwrap_err();
    assert!(matches!(err, SceneError::InvalidColor(_)));
}
