use std::io::Write;
use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use favgen::{Error, FaviconParams, Generation, generate_favicons_with_progress};

use super::args::CliArgs;
use super::errors::AppError;

/// Runs one generation against `source`, writing a status line per outcome to `out`.
///
/// Missing source and missing content are reported and count as success;
/// everything else is returned to the caller.
fn generate_with_status<W: Write>(source: &Path, out: &mut W) -> Result<(), AppError> {
    let params = FaviconParams::default();

    let generation = generate_favicons_with_progress(source, &params, |written| {
        writeln!(out, "Successfully created {}", written.path.display())?;
        Ok(())
    });

    match generation {
        Ok(Generation::Created(files)) => {
            info!("Created {} favicon(s)", files.len());
        }
        Ok(Generation::NoContent) => {
            writeln!(out, "Could not find any content in the image.")?;
        }
        Err(Error::NotFound { path }) => {
            warn!("Source not found: {:?}", path);
            writeln!(out, "Error: The file '{}' was not found.", path.display())?;
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    let cwd = std::env::current_dir()?;
    println!("Current working directory: {}", cwd.display());

    info!("Generating favicons from {:?}", args.source);
    let stdout = std::io::stdout();
    generate_with_status(&args.source, &mut stdout.lock())
}
