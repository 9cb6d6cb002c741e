//! Local wheels directory
//!
//! ## Layout
//!
//! ```text
//! ~/.cache/mkenv/
//! ├── pip-8.0.2-py2.py3-none-any.whl         <- bootstrap wheels, one version each
//! ├── setuptools-19.4-py2.py3-none-any.whl
//! └── <wheels built by `pip wheel` in --wheels mode>
//! ```
//!
//! The directory is passed to virtualenv as `--extra-search-dir` and to pip as
//! `--find-links`. Nothing inside it is interpreted beyond file name prefixes.

pub mod cleanup;
pub mod download;
pub mod paths;

pub use cleanup::remove_stale;
pub use download::{DownloadOutcome, Fetcher, HttpFetcher, download};
pub use paths::{default_wheels_dir, ensure_dir};
