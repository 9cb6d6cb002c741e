//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// mkenv - Python environment bootstrapper
///
/// Recreate a project's virtualenv and install its requirements into it.
#[derive(Parser, Debug)]
#[command(
    name = "mkenv",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create a project virtualenv and install its requirements",
    long_about = "mkenv deletes and recreates the project's virtualenv, bootstrapping pip and \
                  setuptools from a local wheels directory, and installs requirements.txt \
                  (and requirements-dev.txt with --dev) into it.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  mkenv                        \x1b[90m# Create ./env and install requirements.txt\x1b[0m\n   \
                  mkenv --dev                  \x1b[90m# Also install requirements-dev.txt\x1b[0m\n   \
                  mkenv -t .venv --always-copy \x1b[90m# Create .venv without symlinks\x1b[0m\n   \
                  mkenv --wheels               \x1b[90m# Install only from the wheels directory\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Activate debug output (echo external commands and their output)
    #[arg(
        long,
        env = "MKENV_DEBUG",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub debug: bool,

    /// Install development requirements (requirements-dev.txt)
    #[arg(long, short = 'd')]
    pub dev: bool,

    /// Where to put the new env, relative to the project root [default: env]
    #[arg(long, short = 't', value_name = "DIR")]
    pub target: Option<String>,

    /// Install from wheels. If a wheel does not exist it will be created
    #[arg(long, short = 'w')]
    pub wheels: bool,

    /// Directory holding cached wheels [default: ~/.cache/mkenv]
    #[arg(long, value_name = "DIR", env = "MKENV_WHEELS_DIR")]
    pub wheels_dir: Option<PathBuf>,

    /// Don't create symlinks (use on windows and/or shared folders)
    #[arg(long, short = 'c')]
    pub always_copy: bool,

    /// Project root holding the requirement files (defaults to current directory)
    #[arg(long, short = 'p', value_name = "DIR", env = "MKENV_PROJECT")]
    pub project: Option<PathBuf>,

    /// Python interpreter used to run virtualenv [default: python3]
    #[arg(long, value_name = "PATH", env = "MKENV_PYTHON")]
    pub python: Option<PathBuf>,
}
