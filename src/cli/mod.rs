//! CLI argument parsing for yaml-get.
//!
//! Uses clap derive macros. The positional layout is fixed by the shell
//! callers: `<yaml_file> <key_path> [default]`. There are no flags; every
//! argument, including ones that start with `-`, is taken by position.

use crate::lookup::LookupRequest;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Print the value at a dot-separated key path in a YAML file.
///
/// Any failure (missing file, bad YAML, missing key, null value) prints the
/// default instead, or an empty line when no default is given. The exit
/// status is 0 in every such case.
#[derive(Parser, Debug)]
#[command(name = "yaml-get")]
#[command(author, version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Path to the YAML document.
    #[arg(value_name = "yaml_file", allow_hyphen_values = true)]
    pub yaml_file: PathBuf,

    /// Dot-separated keys to descend through, e.g. `image.node`.
    #[arg(value_name = "key_path", allow_hyphen_values = true)]
    pub key_path: OsString,

    /// Printed when the key path does not resolve to a value.
    #[arg(value_name = "default", allow_hyphen_values = true)]
    pub default: Option<OsString>,

    /// Extra positionals are accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true, trailing_var_arg = true)]
    _ignored: Vec<OsString>,
}

impl Cli {
    /// One-line usage message printed when positionals are missing.
    pub fn usage() -> &'static str {
        "Usage: yaml-get <yaml_file> <key_path> [default]"
    }

    /// Parse `args` (program name first).
    ///
    /// Returns `None` only when fewer than two positionals were given. If
    /// clap rejects an argument list that does have two, the positionals are
    /// taken as they stand. A literal `--` is an ordinary positional, so
    /// argument lists containing one skip clap's escape handling.
    pub fn parse_positional<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let positionals = args.get(1..).unwrap_or_default();

        if positionals.iter().any(|arg| arg == "--") {
            return Self::from_positionals(positionals);
        }

        match Self::try_parse_from(&args) {
            Ok(cli) => Some(cli),
            Err(_) => Self::from_positionals(positionals),
        }
    }

    fn from_positionals(args: &[OsString]) -> Option<Self> {
        let [yaml_file, key_path, rest @ ..] = args else {
            return None;
        };

        Some(Self {
            yaml_file: PathBuf::from(yaml_file),
            key_path: key_path.clone(),
            default: rest.first().cloned(),
            _ignored: rest.iter().skip(1).cloned().collect(),
        })
    }

    /// Non-UTF-8 key paths and defaults are converted lossily.
    pub fn into_request(self) -> LookupRequest {
        LookupRequest::new(
            self.yaml_file,
            self.key_path.to_string_lossy(),
            self.default.map(|d| d.to_string_lossy().into_owned()),
        )
    }
}
