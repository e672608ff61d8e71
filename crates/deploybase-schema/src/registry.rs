//! Lookup seam between the base parser and the OS/architecture tables.
//!
//! The parser only ever asks "is this token known, and what is its canonical
//! form?". [`KnownRegistry`] answers from the built-in tables; callers with a
//! different set of operating systems can supply their own implementation.

use crate::arch::Arch;
use crate::os::OsType;

pub trait Registry: Send + Sync {
    /// Canonical (lower-case) OS name for `name`, or `None` if unknown.
    fn canonical_os(&self, name: &str) -> Option<String>;

    /// Canonical architecture for `token`, or `None` if unknown.
    fn canonical_arch(&self, token: &str) -> Option<Arch>;
}

/// Registry backed by [`OsType`] and [`Arch`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownRegistry;

impl Registry for KnownRegistry {
    fn canonical_os(&self, name: &str) -> Option<String> {
        OsType::from_name(name).map(|os| os.as_str().to_owned())
    }

    fn canonical_arch(&self, token: &str) -> Option<Arch> {
        Arch::from_name(token)
    }
}
