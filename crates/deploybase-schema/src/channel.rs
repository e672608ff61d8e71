//! Release channels: a track (release line) paired with a risk level.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    #[error("channel \"{input}\" not valid: expected \"<track>/<risk>\"")]
    Format { input: String },
    #[error(
        "channel \"{input}\" not valid: risk \"{risk}\" not one of stable, candidate, beta, edge"
    )]
    Risk { input: String, risk: String },
}

/// Stability tier of a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Risk {
    Stable,
    Candidate,
    Beta,
    Edge,
}

impl Risk {
    pub const ALL: [Risk; 4] = [Risk::Stable, Risk::Candidate, Risk::Beta, Risk::Edge];

    const NAMES: &'static [&'static str] = &["stable", "candidate", "beta", "edge"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stable => "stable",
            Self::Candidate => "candidate",
            Self::Beta => "beta",
            Self::Edge => "edge",
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }
}

impl fmt::Display for Risk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Risk {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown risk: {s}"))
    }
}

/// A release channel.
///
/// `Channel::default()` is the empty channel, meaning "not specified". It
/// formats to the empty string and is never equal to a parsed channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Channel {
    pub track: String,
    #[serde(with = "risk_field")]
    pub risk: Option<Risk>,
}

impl Channel {
    /// Build a channel from already-known parts. No validation is done.
    pub fn new(track: impl Into<String>, risk: Risk) -> Self {
        Self {
            track: track.into(),
            risk: Some(risk),
        }
    }

    /// Parse a strict `<track>/<risk>` string.
    pub fn parse(input: &str) -> Result<Self, ChannelError> {
        parse_channel(input, false)
    }

    /// Like [`Channel::parse`], but accepts the risk in any case.
    pub fn parse_normalize(input: &str) -> Result<Self, ChannelError> {
        parse_channel(input, true)
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_empty() && self.risk.is_none()
    }
}

fn parse_channel(input: &str, lowercase_risk: bool) -> Result<Channel, ChannelError> {
    let format_err = || ChannelError::Format {
        input: input.to_owned(),
    };

    let mut parts = input.split('/');
    let (Some(track), Some(raw_risk), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format_err());
    };
    if track.is_empty() || raw_risk.is_empty() {
        return Err(format_err());
    }

    let raw_risk = if lowercase_risk {
        raw_risk.to_lowercase()
    } else {
        raw_risk.to_owned()
    };
    let Some(risk) = Risk::from_name(&raw_risk) else {
        return Err(ChannelError::Risk {
            input: input.to_owned(),
            risk: raw_risk,
        });
    };

    Ok(Channel {
        track: track.to_owned(),
        risk: Some(risk),
    })
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        write!(f, "{}/{}", self.track, self.risk.map_or("", Risk::as_str))
    }
}

impl FromStr for Channel {
    type Err = ChannelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The record form carries the risk as a plain string, empty when unset.
mod risk_field {
    use super::Risk;
    use serde::{de::Error as _, Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(risk: &Option<Risk>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(risk.map_or("", Risk::as_str))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Risk>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        Risk::from_name(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::unknown_variant(&raw, Risk::NAMES))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_track_and_risk() {
        let ch = Channel::parse("20.04/stable").unwrap();
        assert_eq!(ch.track, "20.04");
        assert_eq!(ch.risk, Some(Risk::Stable));
        assert_eq!(ch, Channel::new("20.04", Risk::Stable));
    }

    #[test]
    fn rejects_wrong_number_of_parts() {
        for input in ["", "20.04", "20.04/stable/branch", "/stable", "20.04/", "/"] {
            assert_eq!(
                Channel::parse(input),
                Err(ChannelError::Format {
                    input: input.to_owned()
                }),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn rejects_unknown_risk() {
        let err = Channel::parse("20.04/unstable").unwrap_err();
        assert_eq!(
            err,
            ChannelError::Risk {
                input: "20.04/unstable".to_owned(),
                risk: "unstable".to_owned(),
            }
        );
        assert_eq!(
            err.to_string(),
            r#"channel "20.04/unstable" not valid: risk "unstable" not one of stable, candidate, beta, edge"#
        );
    }

    #[test]
    fn strict_parse_is_case_sensitive() {
        assert!(Channel::parse("20.04/Stable").is_err());
    }

    #[test]
    fn normalize_lowercases_risk_only() {
        let ch = Channel::parse_normalize("Focal/EDGE").unwrap();
        assert_eq!(ch.track, "Focal");
        assert_eq!(ch.risk, Some(Risk::Edge));
    }

    #[test]
    fn normalize_still_rejects_unknown_risk() {
        let err = Channel::parse_normalize("20.04/Daily").unwrap_err();
        assert!(matches!(err, ChannelError::Risk { ref risk, .. } if risk == "daily"));
    }

    #[test]
    fn formats_track_slash_risk() {
        assert_eq!(Channel::new("win10", Risk::Candidate).to_string(), "win10/candidate");
    }

    #[test]
    fn empty_channel_formats_to_empty_string() {
        let ch = Channel::default();
        assert!(ch.is_empty());
        assert_eq!(ch.to_string(), "");
        assert_ne!(ch, Channel::new("20.04", Risk::Stable));
    }

    #[test]
    fn from_str_matches_parse() {
        let ch: Channel = "22.04/beta".parse().unwrap();
        assert_eq!(ch, Channel::new("22.04", Risk::Beta));
    }

    #[test]
    fn record_uses_plain_risk_string() {
        let json = serde_json::to_string(&Channel::new("20.04", Risk::Stable)).unwrap();
        assert_eq!(json, r#"{"track":"20.04","risk":"stable"}"#);

        let empty = serde_json::to_string(&Channel::default()).unwrap();
        assert_eq!(empty, r#"{"track":"","risk":""}"#);
        let back: Channel = serde_json::from_str(&empty).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn record_rejects_unknown_risk() {
        assert!(serde_json::from_str::<Channel>(r#"{"track":"20.04","risk":"daily"}"#).is_err());
    }

    #[test]
    fn risk_names_round_trip() {
        for risk in Risk::ALL {
            assert_eq!(risk.as_str().parse::<Risk>().unwrap(), risk);
        }
        assert!("Stable".parse::<Risk>().is_err());
    }
}
