//! Activation of a freshly built environment for child processes
//!
//! Equivalent of sourcing `bin/activate`: the environment's script directory
//! goes first on `PATH` and `VIRTUAL_ENV` points at it. Only the child
//! environment map changes.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::process::ChildEnv;

/// Directory holding the environment's executables
#[cfg(windows)]
pub const BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const BIN_DIR: &str = "bin";

#[cfg(windows)]
const EXE_SUFFIX: &str = ".exe";
#[cfg(not(windows))]
const EXE_SUFFIX: &str = "";

/// An activated environment
#[derive(Debug, Clone)]
pub struct Activation {
    pub root: PathBuf,
    pub env: ChildEnv,
}

impl Activation {
    /// Activate the environment at `root` on top of `base`
    pub fn new(root: &Path, base: &ChildEnv) -> Result<Self> {
        let env = base
            .clone()
            .without("PYTHONHOME")
            .with("VIRTUAL_ENV", root)
            .with_path_prepended(&root.join(BIN_DIR))?;
        Ok(Self {
            root: root.to_path_buf(),
            env,
        })
    }

    /// Path of an executable installed in the environment
    pub fn executable(&self, name: &str) -> PathBuf {
        self.root.join(BIN_DIR).join(format!("{name}{EXE_SUFFIX}"))
    }

    pub fn pip(&self) -> PathBuf {
        self.executable("pip")
    }
}
