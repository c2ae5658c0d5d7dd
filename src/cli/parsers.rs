use clap::{
    builder::{NonEmptyStringValueParser, PathBufValueParser, StyledStr, TypedValueParser},
    error::{ContextKind, ContextValue, ErrorKind},
    Arg, Command, Error,
};
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

/// Parse as a non-empty string
pub fn string() -> NonEmptyStringValueParser {
    NonEmptyStringValueParser::default()
}

/// Parse a path to a directory that already exists
pub fn directory() -> DirectoryValueParser {
    DirectoryValueParser::default()
}

#[derive(Clone, Debug, Default)]
pub struct DirectoryValueParser {
    inner: PathBufValueParser,
}

impl TypedValueParser for DirectoryValueParser {
    type Value = PathBuf;

    fn parse_ref(
        &self,
        cmd: &Command,
        arg: Option<&Arg>,
        value: &OsStr,
    ) -> Result<Self::Value, Error> {
        let path = self.inner.parse_ref(cmd, arg, value)?;

        if path.is_dir() {
            Ok(path)
        } else if path.exists() {
            Err(validation_error(cmd, arg, &path, "not a directory"))
        } else {
            Err(validation_error(cmd, arg, &path, "directory does not exist"))
        }
    }
}

fn validation_error(
    cmd: &Command,
    arg: Option<&Arg>,
    value: &Path,
    message: impl std::fmt::Display,
) -> Error {
    let arg = arg
        .map(|a| a.to_string())
        .unwrap_or_else(|| "...".to_owned());

    let mut error = Error::new(ErrorKind::ValueValidation).with_cmd(cmd);
    error.insert(ContextKind::InvalidArg, ContextValue::String(arg));
    error.insert(
        ContextKind::InvalidValue,
        ContextValue::String(value.display().to_string()),
    );

    let message = StyledStr::from(format!("  reason: {message}"));
    error.insert(ContextKind::Usage, ContextValue::StyledStr(message));

    error
}
