use clap::Parser;
use std::path::PathBuf;

use favgen::DEFAULT_SOURCE;

#[derive(Parser)]
#[command(
    name = "favgen",
    version,
    about = "Crop a logo to its content and write 16x16 and 128x128 favicons beside it"
)]
pub struct CliArgs {
    /// Source image; favicons are written into the same directory
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
}
