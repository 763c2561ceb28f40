// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "scene-painter")]
#[command(about = "Draws 2D graphics defined in a JSON scene file", long_about = None)]
pub struct Cli {
    /// JSON file containing the description of the graphics to display
    pub file: PathBuf,

    /// File the rendered graphics will be saved to
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,
}
