//! Fixed bootstrap wheels needed by virtualenv itself
//!
//! virtualenv seeds a new environment with pip and setuptools. When it cannot
//! find them it fails, and mkenv downloads these exact versions into the wheels
//! directory (passed as `--extra-search-dir`) before retrying.

/// A pinned wheel download with its expected MD5 digest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapArtifact {
    pub url: &'static str,
    pub md5: &'static str,
}

pub const PIP: BootstrapArtifact = BootstrapArtifact {
    url: "https://pypi.python.org/packages/py2.py3/p/pip/pip-8.0.2-py2.py3-none-any.whl",
    md5: "2056f553d5b593d3a970296f229c1b79",
};

pub const SETUPTOOLS: BootstrapArtifact = BootstrapArtifact {
    url: "https://pypi.python.org/packages/3.5/s/setuptools/setuptools-19.4-py2.py3-none-any.whl",
    md5: "45ad8918e4dc2568cdefe3c4138d0760",
};

/// Both bootstrap wheels, in the order they are fetched
pub const BOOTSTRAP: [BootstrapArtifact; 2] = [PIP, SETUPTOOLS];

impl BootstrapArtifact {
    /// File name the wheel is stored under (last URL path segment)
    pub fn filename(&self) -> &'static str {
        let path = self.url.split(['#', '?']).next().unwrap_or(self.url);
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Distribution name, e.g. `pip` for `pip-8.0.2-py2.py3-none-any.whl`
    pub fn package_name(&self) -> &'static str {
        let filename = self.filename();
        filename.split('-').next().unwrap_or(filename)
    }
}
