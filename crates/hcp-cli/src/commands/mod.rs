//! CLI commands

use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{Error, Result};

pub mod ingress_controller;
pub mod parse_name;
pub mod passthrough_service;

/// Path argument meaning "read from stdin"
pub const STDIN_PATH: &str = "-";

/// Read and parse a YAML object from a file, or from stdin when the path is `-`
pub fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::io(path, e))?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?
    };
    Ok(serde_yaml::from_str(&content)?)
}

/// Render an object as YAML
pub fn to_yaml<T: Serialize>(obj: &T) -> Result<String> {
    Ok(serde_yaml::to_string(obj)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_path() {
        let err = read_yaml::<serde_yaml::Value>(Path::new("/nonexistent/hcp-ingress.yaml"))
            .expect_err("missing file should fail");
        assert!(err.to_string().contains("/nonexistent/hcp-ingress.yaml"));
    }
}
