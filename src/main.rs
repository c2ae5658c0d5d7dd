use eyre::WrapErr;
use std::path::Path;
use tracing::{info, Level};

mod cli;
mod composer;
mod console;
mod logging;
mod matrix;
mod output;

use cli::Args;
use matrix::{Hardware, Target};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            return Err(error).wrap_err("invalid .env file");
        }
    }

    let args = cli::parse();
    logging::init(Level::WARN, args.log_level.as_deref());

    if let Err(error) = run(args) {
        console::error("Dockerfile generation failed.");
        return Err(error);
    }

    Ok(())
}

/// Generate the Dockerfiles for every registered version of the requested operating system
fn run(
    Args {
        os,
        hardware,
        os_version,
        output_dir,
        dry_run,
        ..
    }: Args,
) -> eyre::Result<()> {
    let directory = match output_dir {
        Some(directory) => directory,
        None => output::default_directory()?,
    };
    info!(%os, %hardware, directory = %directory.display(), dry_run, "starting generation");

    match hardware {
        Hardware::Cpu => console::info("Generating Dockerfile(s) for CPU."),
        Hardware::Gpu => console::info("Generating Dockerfile(s) for GPU."),
    }

    let targets = match os_version {
        Some(version) => vec![Target::new(os, &version, hardware)?],
        None => os.targets(hardware).collect::<Vec<_>>(),
    };
    if targets.is_empty() {
        console::warn(&format!("No versions are registered for {os}, nothing to generate."));
    }

    for target in targets {
        console::info(&format!("OS: {os}, version: {}", target.version()));
        let artifact = composer::generate(target);

        if dry_run {
            emit(&artifact, &directory);
        } else {
            console::info(&format!(
                "Storing at: {}",
                directory.join(&artifact.filename).display()
            ));
            output::write(&artifact, &directory)
                .wrap_err_with(|| format!("failed to store dockerfile for {}", artifact.target))?;
        }
    }

    console::success("Dockerfile generation is complete.");
    Ok(())
}

/// Print the artifact instead of storing it
fn emit(artifact: &composer::Artifact, directory: &Path) {
    console::info(&format!(
        "Would store at: {}",
        directory.join(&artifact.filename).display()
    ));
    console::plain(&artifact.contents);
}
