use crate::composer::Artifact;
use eyre::{eyre, WrapErr};
use std::{
    env,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, instrument};

/// The directory containing the running executable
pub fn default_directory() -> eyre::Result<PathBuf> {
    let executable = env::current_exe().wrap_err("could not locate the running executable")?;
    let directory = executable
        .parent()
        .ok_or_else(|| eyre!("executable has no parent directory"))?;

    Ok(directory.to_owned())
}

/// Write the artifact into the directory, replacing any existing file
#[instrument(skip_all, fields(filename = %artifact.filename))]
pub fn write(artifact: &Artifact, directory: &Path) -> eyre::Result<PathBuf> {
    let path = directory.join(&artifact.filename);

    let mut file = File::create(&path)
        .wrap_err_with(|| format!("could not create {}", path.display()))?;
    file.write_all(artifact.contents.as_bytes())
        .wrap_err_with(|| format!("could not write {}", path.display()))?;

    debug!(path = %path.display(), bytes = artifact.contents.len(), "stored dockerfile");
    Ok(path)
}
