//! Known CPU architectures and the spellings they are recognised by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A canonical CPU architecture.
///
/// Serializes as the canonical lower-case token (`amd64`, `ppc64el`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    Amd64,
    I386,
    Arm64,
    Armhf,
    Ppc64el,
    S390x,
    Riscv64,
}

impl Arch {
    pub const ALL: [Arch; 7] = [
        Arch::Amd64,
        Arch::I386,
        Arch::Arm64,
        Arch::Armhf,
        Arch::Ppc64el,
        Arch::S390x,
        Arch::Riscv64,
    ];

    /// Canonical token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Amd64 => "amd64",
            Self::I386 => "i386",
            Self::Arm64 => "arm64",
            Self::Armhf => "armhf",
            Self::Ppc64el => "ppc64el",
            Self::S390x => "s390x",
            Self::Riscv64 => "riscv64",
        }
    }

    /// Every accepted spelling, canonical token first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Amd64 => &["amd64", "x86_64", "x64"],
            Self::I386 => &["i386", "i486", "i586", "i686", "x86"],
            Self::Arm64 => &["arm64", "aarch64"],
            Self::Armhf => &["armhf", "arm", "armv6l", "armv7l", "armel"],
            Self::Ppc64el => &["ppc64el", "ppc64le", "ppc64"],
            Self::S390x => &["s390x"],
            Self::Riscv64 => &["riscv64", "riscv"],
        }
    }

    /// Case-insensitive lookup against canonical tokens and aliases.
    pub fn from_name(token: &str) -> Option<Self> {
        let token = token.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|arch| arch.aliases().contains(&token.as_str()))
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown architecture: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_tokens_resolve_to_themselves() {
        for arch in Arch::ALL {
            assert_eq!(Arch::from_name(arch.as_str()), Some(arch));
            assert_eq!(arch.aliases()[0], arch.as_str());
        }
    }

    #[test]
    fn aliases_resolve_to_canonical() {
        assert_eq!(Arch::from_name("x86_64"), Some(Arch::Amd64));
        assert_eq!(Arch::from_name("aarch64"), Some(Arch::Arm64));
        assert_eq!(Arch::from_name("ppc64"), Some(Arch::Ppc64el));
        assert_eq!(Arch::from_name("ppc64le"), Some(Arch::Ppc64el));
        assert_eq!(Arch::from_name("armv7l"), Some(Arch::Armhf));
        assert_eq!(Arch::from_name("i686"), Some(Arch::I386));
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(Arch::from_name("AMD64"), Some(Arch::Amd64));
        assert_eq!(Arch::from_name("X86_64"), Some(Arch::Amd64));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(Arch::from_name("testme"), None);
        assert_eq!(Arch::from_name(""), None);
        assert_eq!(Arch::from_name(" amd64"), None);
        assert!("sparc".parse::<Arch>().is_err());
    }

    #[test]
    fn no_alias_is_claimed_twice() {
        let mut all: Vec<&str> = Arch::ALL.iter().flat_map(|a| a.aliases()).copied().collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }

    #[test]
    fn serializes_as_canonical_token() {
        let json = serde_json::to_string(&[Arch::Amd64, Arch::Ppc64el]).unwrap();
        assert_eq!(json, r#"["amd64","ppc64el"]"#);
    }
}
