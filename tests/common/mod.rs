//! Common test utilities for mkenv integration tests
//!
//! A [`TestProject`] is a temp directory holding a project root, a seeded
//! wheels directory and a fake Python interpreter. The fake interpreter
//! answers `-m virtualenv <target> ...` by creating `<target>/bin/pip`, a
//! shell script that appends its arguments to a log file. Both scripts read
//! their exit codes from `MKENV_TEST_*` variables, so no real Python or
//! network is needed.

#![allow(dead_code)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Bootstrap wheel file names the binary looks for in the wheels directory
pub const BOOTSTRAP_WHEELS: [&str; 2] = [
    "pip-8.0.2-py2.py3-none-any.whl",
    "setuptools-19.4-py2.py3-none-any.whl",
];

const FAKE_PYTHON: &str = r#"#!/bin/sh
echo "python $*" >> "$MKENV_TEST_LOG"
if [ "${MKENV_TEST_BUILD_EXIT:-0}" != "0" ]; then
    exit "$MKENV_TEST_BUILD_EXIT"
fi
mkdir -p "$3/bin"
cp "$MKENV_TEST_PIP" "$3/bin/pip"
chmod +x "$3/bin/pip"
"#;

// `install --no-index` fails until `pip wheel` has run once, like a cache
// that is missing the project's wheels
const FAKE_PIP: &str = r#"#!/bin/sh
echo "pip $*" >> "$MKENV_TEST_LOG"
echo "VIRTUAL_ENV=$VIRTUAL_ENV" >> "$MKENV_TEST_LOG"
if [ "$1 $2" = "install --no-index" ] && ! grep -q '^pip wheel' "$MKENV_TEST_LOG"; then
    exit 1
fi
exit "${MKENV_TEST_PIP_EXIT:-0}"
"#;

/// A throwaway project with a fake interpreter
pub struct TestProject {
    pub temp: TempDir,
    /// Project root (holds requirements.txt)
    pub path: PathBuf,
    pub wheels_dir: PathBuf,
    pub python: PathBuf,
    pip_template: PathBuf,
    pub log: PathBuf,
}

impl TestProject {
    /// Create a project with `requirements.txt` and a seeded wheels directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let wheels_dir = temp.path().join("wheels");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&wheels_dir).expect("Failed to create wheels directory");

        for wheel in BOOTSTRAP_WHEELS {
            std::fs::write(wheels_dir.join(wheel), "cached").expect("Failed to seed wheel");
        }

        let python = temp.path().join("fake-python");
        write_script(&python, FAKE_PYTHON);
        let pip_template = temp.path().join("fake-pip");
        write_script(&pip_template, FAKE_PIP);

        let project = Self {
            log: temp.path().join("calls.log"),
            temp,
            path,
            wheels_dir,
            python,
            pip_template,
        };
        project.write_file("requirements.txt", "requests\n");
        project
    }

    /// Write a file relative to the project root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Every line the fake interpreter and pip logged, empty if none ran
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Command for the real binary, isolated from the caller's environment
    #[allow(deprecated)]
    pub fn mkenv(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::cargo_bin("mkenv").expect("mkenv binary not built");
        cmd.current_dir(&self.path)
            .env_remove("VIRTUAL_ENV")
            .env_remove("MKENV_DEBUG")
            .env_remove("MKENV_PROJECT")
            .env_remove("MKENV_WHEELS_DIR")
            .env_remove("RUST_LOG")
            .env("HOME", self.temp.path())
            .env("MKENV_PYTHON", &self.python)
            .env("MKENV_TEST_PIP", &self.pip_template)
            .env("MKENV_TEST_LOG", &self.log)
            .arg("--wheels-dir")
            .arg(&self.wheels_dir);
        cmd
    }
}

fn write_script(path: &Path, body: &str) {
    std::fs::write(path, body).expect("Failed to write script");
    let mut perms = std::fs::metadata(path)
        .expect("Failed to stat script")
        .permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("Failed to make script executable");
}
