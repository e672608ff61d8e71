//! Parsing, validation and canonical formatting of deployment bases.
//!
//! A base names an operating system, a release channel (`<track>/<risk>`) and
//! an optional list of CPU architectures, e.g. `ubuntu/20.04/stable on amd64,
//! ppc64el`. This crate defines the value types (`Base`, `Channel`, `Risk`,
//! `Arch`), the string parser (`parse_base`), the structured record codec,
//! and the TOML targets manifest (`TargetsManifest`) built on top of them.

pub mod arch;
pub mod base;
pub mod channel;
pub mod codec;
pub mod manifest;
pub mod normalize;
pub mod os;
pub mod registry;

pub use arch::Arch;
pub use base::{
    parse_base, parse_base_with, parse_base_with_architectures, Base, BaseContext, BaseError,
};
pub use channel::{Channel, ChannelError, Risk};
pub use codec::CodecError;
pub use manifest::{
    parse_manifest_file, parse_manifest_str, ManifestError, TargetSection, TargetsManifest,
};
pub use os::OsType;
pub use registry::{KnownRegistry, Registry};
