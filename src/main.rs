use anyhow::Result;
use clap::Parser;

use scene_painter::app::Viewer;
use scene_painter::cli::Cli;
use scene_painter::scene::Scene;
use scene_painter::{export, renderer};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let scene = Scene::load(&cli.file)?;
    log::info!(
        "loaded scene {:?}: {}x{}, {} figures",
        cli.file,
        scene.width,
        scene.height,
        scene.figures.len()
    );

    let canvas = renderer::render(&scene);

    if let Some(output) = &cli.output {
        export::save(&canvas, output)?;
        log::info!("saved image to {:?}", output);
    }

    let title = format!("Visualization of: {}", cli.file.display());
    Viewer::new(title, canvas).run()
}
