use crate::matrix::{Hardware, OperatingSystem};
use clap::Parser;
use std::path::PathBuf;

mod parsers;

/// Parse the command line arguments
pub fn parse() -> Args {
    Args::parse()
}

/// Generate the CI Dockerfiles for every registered version of an operating system
///
/// Example usage:
///     dockergen -o ubuntu -t cpu
#[derive(Debug, Parser)]
#[command(author, version, about, verbatim_doc_comment, arg_required_else_help = true)]
pub struct Args {
    /// The target os of the Dockerfile
    #[arg(short, long, value_enum)]
    pub os: OperatingSystem,

    /// The target hardware of the Dockerfile
    #[arg(short = 't', long = "target", value_enum)]
    pub hardware: Hardware,

    /// Only generate the Dockerfile for this version of the operating system
    #[arg(long, value_parser = parsers::string())]
    pub os_version: Option<String>,

    /// Where to store the generated Dockerfiles
    ///
    /// Defaults to the directory containing this executable.
    #[arg(long, env = "OUTPUT_DIR", value_parser = parsers::directory())]
    pub output_dir: Option<PathBuf>,

    /// Print the generated Dockerfiles instead of storing them
    #[arg(long)]
    pub dry_run: bool,

    /// The filter for diagnostic logs, in `tracing` env-filter syntax
    #[arg(long, env = "LOG_LEVEL", value_parser = parsers::string())]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_short_flags() {
        let args = Args::try_parse_from(["dockergen", "-o", "ubuntu", "-t", "gpu"]).unwrap();
        assert_eq!(args.os, OperatingSystem::Ubuntu);
        assert_eq!(args.hardware, Hardware::Gpu);
        assert!(!args.dry_run);
    }

    #[test]
    fn parses_long_flags() {
        let args = Args::try_parse_from([
            "dockergen",
            "--os",
            "macos",
            "--target",
            "cpu",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.os, OperatingSystem::Macos);
        assert_eq!(args.hardware, Hardware::Cpu);
        assert!(args.dry_run);
        assert_eq!(args.os_version, None);
    }

    #[test]
    fn parses_os_version() {
        let args = Args::try_parse_from([
            "dockergen",
            "-o",
            "ubuntu",
            "-t",
            "cpu",
            "--os-version",
            "20.04",
        ])
        .unwrap();
        assert_eq!(args.os_version.as_deref(), Some("20.04"));
    }

    #[test]
    fn rejects_unknown_os() {
        let error = Args::try_parse_from(["dockergen", "-o", "debian", "-t", "cpu"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidValue);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn rejects_unknown_hardware() {
        let error = Args::try_parse_from(["dockergen", "-o", "ubuntu", "-t", "tpu"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn requires_hardware() {
        let error = Args::try_parse_from(["dockergen", "-o", "ubuntu"]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn output_dir_must_exist() {
        let error = Args::try_parse_from([
            "dockergen",
            "-o",
            "ubuntu",
            "-t",
            "cpu",
            "--output-dir",
            "/definitely/not/a/real/directory",
        ])
        .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn output_dir_accepts_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let args = Args::try_parse_from([
            "dockergen",
            "-o",
            "ubuntu",
            "-t",
            "cpu",
            "--output-dir",
            dir.path().to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(args.output_dir.as_deref(), Some(dir.path()));
    }
}
