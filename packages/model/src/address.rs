//! # Edit Addresses
//!
//! Dotted paths that name one field inside a document, e.g.
//! `experience.2.bulletPoints.0` or `personalInfo.fullName`.
//!
//! An address is parsed once into typed segments. Segments that parse as
//! an unsigned integer address list indices, everything else addresses a
//! record key. Shape checks against an actual document happen in the
//! editor, which reports them as address or type-mismatch errors.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(index) => write!(f, "{}", index),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("Address is empty")]
    Empty,

    #[error("Address '{address}' has an empty segment at position {position}")]
    EmptySegment { address: String, position: usize },
}

/// Validated, parsed field address
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditAddress {
    segments: Vec<Segment>,
}

impl EditAddress {
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        if raw.trim().is_empty() {
            return Err(AddressError::Empty);
        }

        let segments = raw
            .split('.')
            .enumerate()
            .map(|(position, part)| {
                if part.is_empty() {
                    return Err(AddressError::EmptySegment {
                        address: raw.to_string(),
                        position,
                    });
                }
                Ok(match canonical_index(part) {
                    Some(index) => Segment::Index(index),
                    None => Segment::Key(part.to_string()),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { segments })
    }

    /// Single-key address such as `skills`
    pub fn key(key: impl Into<String>) -> Self {
        Self {
            segments: vec![Segment::Key(key.into())],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a record key
    pub fn field(&self, key: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.into()));
        Self { segments }
    }

    /// Append a list index
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Address of the enclosing container, `None` for top-level keys
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn last(&self) -> &Segment {
        // parse() and the constructors never produce an empty address
        &self.segments[self.segments.len() - 1]
    }

    pub fn starts_with(&self, prefix: &EditAddress) -> bool {
        self.segments.starts_with(&prefix.segments)
    }
}

/// Digits only, without leading zeros, so the index prints back as written
fn canonical_index(part: &str) -> Option<usize> {
    let digits = part.bytes().all(|b| b.is_ascii_digit());
    if !digits || (part.len() > 1 && part.starts_with('0')) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for EditAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for EditAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditAddress::parse(s)
    }
}

impl Serialize for EditAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for EditAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EditAddress::parse(&raw).map_err(serde::de::Error::custom)
    }
}
