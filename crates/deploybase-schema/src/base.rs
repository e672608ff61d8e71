//! Deployment bases: an OS name, a channel and a list of architectures.
//!
//! The string grammar is `<os>/<track>/<risk>`. Architectures never appear
//! in that grammar; they are passed alongside it and appended to the display
//! form as ` on <arch>, <arch>`.

use crate::arch::Arch;
use crate::channel::{Channel, ChannelError};
use crate::registry::{KnownRegistry, Registry};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const ARCH_SEPARATOR: &str = ", ";
const ARCH_MARKER: &str = " on ";

/// The call a failed parse came from, echoed at the front of every error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseContext {
    pub input: String,
    pub architectures: Vec<String>,
}

impl BaseContext {
    fn new(input: &str, architectures: &[impl AsRef<str>]) -> Self {
        Self {
            input: input.to_owned(),
            architectures: architectures
                .iter()
                .map(|a| a.as_ref().to_owned())
                .collect(),
        }
    }
}

impl fmt::Display for BaseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid base string \"{}\"", self.input)?;
        if !self.architectures.is_empty() {
            write!(
                f,
                " with architectures \"{}\"",
                self.architectures.join(ARCH_SEPARATOR)
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BaseError {
    #[error("{context}: os \"{os}\" not valid")]
    OsNotValid { context: BaseContext, os: String },
    #[error("{context}: channel not valid")]
    ChannelNotValid {
        context: BaseContext,
        #[source]
        source: ChannelError,
    },
    #[error("{context}: architecture \"{arch}\" not valid")]
    ArchitectureNotValid { context: BaseContext, arch: String },
}

impl BaseError {
    pub fn context(&self) -> &BaseContext {
        match self {
            Self::OsNotValid { context, .. }
            | Self::ChannelNotValid { context, .. }
            | Self::ArchitectureNotValid { context, .. } => context,
        }
    }
}

/// A deployment target.
///
/// `Base::default()` is the zero value: empty name, empty channel, no
/// architectures. Equality is order-sensitive over `architectures`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Base {
    pub name: String,
    pub channel: Channel,
    #[serde(skip)]
    pub architectures: Vec<Arch>,
}

impl Base {
    pub fn new(name: impl Into<String>, channel: Channel) -> Self {
        Self {
            name: name.into(),
            channel,
            architectures: Vec::new(),
        }
    }

    /// Replace the architecture list, dropping repeats (first occurrence wins).
    #[must_use]
    pub fn with_architectures(mut self, architectures: impl IntoIterator<Item = Arch>) -> Self {
        self.architectures.clear();
        for arch in architectures {
            push_unique(&mut self.architectures, arch);
        }
        self
    }

    /// `<os>[/<track>/<risk>]`, without the architecture suffix.
    pub fn display_name(&self) -> String {
        if self.channel.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.name, self.channel)
        }
    }

    /// Check a directly-assembled base against the built-in registry.
    pub fn validate(&self) -> Result<(), BaseError> {
        self.validate_with(&KnownRegistry)
    }

    pub fn validate_with(&self, registry: &impl Registry) -> Result<(), BaseError> {
        let architectures: Vec<&str> = self
            .architectures
            .iter()
            .copied()
            .map(Arch::as_str)
            .collect();
        let context = || BaseContext::new(&self.display_name(), &architectures);

        let canonical = registry.canonical_os(&self.name).map(|c| c.to_lowercase());
        if canonical.as_deref() != Some(self.name.as_str()) {
            return Err(BaseError::OsNotValid {
                context: context(),
                os: self.name.clone(),
            });
        }
        Channel::parse(&self.channel.to_string()).map_err(|source| {
            BaseError::ChannelNotValid {
                context: context(),
                source,
            }
        })?;
        Ok(())
    }
}

fn push_unique(list: &mut Vec<Arch>, arch: Arch) {
    if !list.contains(&arch) {
        list.push(arch);
    }
}

/// Parse a base string with no architectures.
pub fn parse_base(input: &str) -> Result<Base, BaseError> {
    let none: &[&str] = &[];
    parse_base_with(&KnownRegistry, input, none)
}

/// Parse a base string together with separately supplied architecture tokens.
pub fn parse_base_with_architectures(
    input: &str,
    architectures: &[impl AsRef<str>],
) -> Result<Base, BaseError> {
    parse_base_with(&KnownRegistry, input, architectures)
}

/// Parse against an arbitrary registry.
///
/// Checks run in order OS, channel, architectures; the first failure is
/// returned and nothing of the partially parsed base escapes.
pub fn parse_base_with(
    registry: &impl Registry,
    input: &str,
    architectures: &[impl AsRef<str>],
) -> Result<Base, BaseError> {
    match parse_base_inner(registry, input, architectures) {
        Ok(base) => {
            tracing::debug!(base = %base, "parsed base");
            Ok(base)
        }
        Err(err) => {
            tracing::debug!(error = %err, "rejected base string");
            Err(err)
        }
    }
}

fn parse_base_inner(
    registry: &impl Registry,
    input: &str,
    architectures: &[impl AsRef<str>],
) -> Result<Base, BaseError> {
    let context = || BaseContext::new(input, architectures);

    let (os_token, channel_part) = match input.split_once('/') {
        Some((os, rest)) => (os, Some(rest)),
        None => (input, None),
    };

    let Some(name) = registry.canonical_os(os_token) else {
        return Err(BaseError::OsNotValid {
            context: context(),
            os: os_token.to_owned(),
        });
    };

    let channel = channel_part
        .map_or_else(
            || {
                Err(ChannelError::Format {
                    input: String::new(),
                })
            },
            Channel::parse_normalize,
        )
        .map_err(|source| BaseError::ChannelNotValid {
            context: context(),
            source,
        })?;

    let mut arches = Vec::with_capacity(architectures.len());
    for token in architectures {
        let token = token.as_ref();
        let Some(arch) = registry.canonical_arch(token) else {
            return Err(BaseError::ArchitectureNotValid {
                context: context(),
                arch: token.to_owned(),
            });
        };
        push_unique(&mut arches, arch);
    }

    Ok(Base {
        name: name.to_lowercase(),
        channel,
        architectures: arches,
    })
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.channel.is_empty() {
            write!(f, "/{}", self.channel)?;
        }
        for (i, arch) in self.architectures.iter().enumerate() {
            f.write_str(if i == 0 { ARCH_MARKER } else { ARCH_SEPARATOR })?;
            f.write_str(arch.as_str())?;
        }
        Ok(())
    }
}

/// Accepts the full display form, `ubuntu/20.04/stable on amd64, ppc64el`.
///
/// A track may itself contain ` on `, so the suffix is only read as an
/// architecture list when the text before the last marker is a base.
impl FromStr for Base {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((head, arches)) = s.rsplit_once(ARCH_MARKER) else {
            return parse_base(s);
        };
        let tokens: Vec<&str> = arches.split(',').map(str::trim).collect();
        let none: &[&str] = &[];
        if parse_base_inner(&KnownRegistry, head, none).is_ok() {
            return parse_base_with_architectures(head, &tokens);
        }
        parse_base(s).or_else(|_| parse_base_with_architectures(head, &tokens))
    }
}
