//! Known operating-system families and their canonical names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating-system families a base may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OsType {
    Ubuntu,
    Windows,
    Centos,
    Opensuse,
    GenericLinux,
    Kubernetes,
    Osx,
}

impl OsType {
    pub const ALL: [OsType; 7] = [
        OsType::Ubuntu,
        OsType::Windows,
        OsType::Centos,
        OsType::Opensuse,
        OsType::GenericLinux,
        OsType::Kubernetes,
        OsType::Osx,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ubuntu => "ubuntu",
            Self::Windows => "windows",
            Self::Centos => "centos",
            Self::Opensuse => "opensuse",
            Self::GenericLinux => "genericlinux",
            Self::Kubernetes => "kubernetes",
            Self::Osx => "osx",
        }
    }

    /// Case-insensitive exact match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|os| os.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for OsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OsType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown os: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(OsType::from_name("Ubuntu"), Some(OsType::Ubuntu));
        assert_eq!(OsType::from_name("WINDOWS"), Some(OsType::Windows));
        assert_eq!(OsType::from_name("GenericLinux"), Some(OsType::GenericLinux));
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(OsType::from_name("mythicalos"), None);
        assert_eq!(OsType::from_name("ubuntu "), None);
        assert_eq!(OsType::from_name("ubunt"), None);
        assert_eq!(OsType::from_name(""), None);
    }

    #[test]
    fn names_are_lowercase() {
        for os in OsType::ALL {
            assert_eq!(os.as_str(), os.as_str().to_lowercase());
            assert_eq!(os.to_string().parse::<OsType>().unwrap(), os);
        }
    }
}
