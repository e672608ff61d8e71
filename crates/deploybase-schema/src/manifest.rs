use crate::base::BaseError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("unsupported manifest_version: {0}, expected 1")]
    UnsupportedVersion(u32),
    #[error("manifest declares no targets")]
    NoTargets,
    #[error("manifest error: target #{index}: {source}")]
    InvalidTarget {
        index: usize,
        #[source]
        source: BaseError,
    },
}

/// A TOML file listing the bases a project deploys to.
///
/// ```toml
/// manifest_version = 1
///
/// [[targets]]
/// base = "ubuntu/20.04/stable"
/// architectures = ["amd64", "ppc64el"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TargetsManifest {
    pub manifest_version: u32,
    #[serde(default)]
    pub targets: Vec<TargetSection>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    pub base: String,
    #[serde(default)]
    pub architectures: Vec<String>,
}

pub fn parse_manifest_str(input: &str) -> Result<TargetsManifest, ManifestError> {
    Ok(toml::from_str(input)?)
}

pub fn parse_manifest_file(path: impl AsRef<Path>) -> Result<TargetsManifest, ManifestError> {
    let content = fs::read_to_string(path)?;
    parse_manifest_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_manifest() {
        let input = r#"
manifest_version = 1

[[targets]]
base = "ubuntu/20.04/stable"
architectures = ["amd64", "ppc64"]

[[targets]]
base = "windows/win10/stable"
"#;
        let manifest = parse_manifest_str(input).expect("should parse");
        assert_eq!(manifest.manifest_version, 1);
        assert_eq!(manifest.targets.len(), 2);
        assert_eq!(manifest.targets[0].base, "ubuntu/20.04/stable");
        assert_eq!(manifest.targets[0].architectures, vec!["amd64", "ppc64"]);
        assert!(manifest.targets[1].architectures.is_empty());
    }

    #[test]
    fn parses_manifest_without_targets() {
        let manifest = parse_manifest_str("manifest_version = 1\n").expect("should parse");
        assert!(manifest.targets.is_empty());
    }

    #[test]
    fn rejects_unknown_fields() {
        let input = r#"
manifest_version = 1

[[targets]]
base = "ubuntu/20.04/stable"
channel = "20.04/stable"
"#;
        assert!(parse_manifest_str(input).is_err());
    }

    #[test]
    fn rejects_target_without_base() {
        let input = r#"
manifest_version = 1

[[targets]]
architectures = ["amd64"]
"#;
        assert!(parse_manifest_str(input).is_err());
    }

    #[test]
    fn reads_manifest_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploybase.toml");
        fs::write(
            &path,
            "manifest_version = 1\n[[targets]]\nbase = \"ubuntu/22.04/edge\"\n",
        )
        .unwrap();
        let manifest = parse_manifest_file(&path).unwrap();
        assert_eq!(manifest.targets[0].base, "ubuntu/22.04/edge");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_manifest_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Io(_)));
    }
}
