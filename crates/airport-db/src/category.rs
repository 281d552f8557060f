// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Airport categories and category filters.
//!
//! Every stored airport has exactly one [`AirportType`]. Queries take an
//! [`AirportTypes`] set, which is a union of types combined with `|`, and
//! match an airport when its type is a member of the set.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a category code or raw bit pattern is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseAirportTypeError {
    #[error("unknown airport type: {0}")]
    UnknownType(String),

    #[error("invalid airport type bits: {0:#04x}")]
    InvalidBits(u8),

    #[error("no airport types given")]
    Empty,
}

/// Category of a single airport, as given by the OurAirports `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AirportType {
    Closed,
    Heliport,
    SeaplaneBase,
    Small,
    Medium,
    Large,
}

impl AirportType {
    /// All categories in bit order.
    pub const VARIANTS: [AirportType; 6] = [
        AirportType::Closed,
        AirportType::Heliport,
        AirportType::SeaplaneBase,
        AirportType::Small,
        AirportType::Medium,
        AirportType::Large,
    ];

    /// The single flag bit for this category.
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Self::Closed => 0x01,
            Self::Heliport => 0x02,
            Self::SeaplaneBase => 0x04,
            Self::Small => 0x08,
            Self::Medium => 0x10,
            Self::Large => 0x20,
        }
    }

    /// Source data code, e.g. `large_airport`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Heliport => "heliport",
            Self::SeaplaneBase => "seaplane_base",
            Self::Small => "small_airport",
            Self::Medium => "medium_airport",
            Self::Large => "large_airport",
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for AirportType {
    type Err = ParseAirportTypeError;

    /// Accepts the source codes plus the short names `small`, `medium`, `large`, `seaplane`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closed" => Ok(Self::Closed),
            "heliport" => Ok(Self::Heliport),
            "seaplane_base" | "seaplane" => Ok(Self::SeaplaneBase),
            "small_airport" | "small" => Ok(Self::Small),
            "medium_airport" | "medium" => Ok(Self::Medium),
            "large_airport" | "large" => Ok(Self::Large),
            _ => Err(ParseAirportTypeError::UnknownType(s.to_string())),
        }
    }
}

/// A set of airport categories used as a query filter.
///
/// ```
/// use airport_db::{AirportType, AirportTypes};
///
/// let filter = AirportType::Large | AirportType::Medium;
/// assert!(filter.contains(AirportType::Medium));
/// assert!(!filter.contains(AirportType::Heliport));
/// assert!(AirportTypes::ACTIVE.contains(AirportType::Heliport));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AirportTypes(u8);

impl AirportTypes {
    /// Matches nothing.
    pub const NONE: Self = Self(0);
    /// Every category, including closed airports.
    pub const ALL: Self = Self(0x3f);
    /// Everything that is not closed.
    pub const ACTIVE: Self = Self(0x3e);
    /// Land airports with runways (small, medium and large).
    pub const RUNWAYS: Self = Self(0x38);

    /// Build a set from raw bits. Zero and bits that name no category are rejected.
    pub fn from_bits(bits: u8) -> Result<Self, ParseAirportTypeError> {
        if bits != 0 && bits & !Self::ALL.0 == 0 {
            Ok(Self(bits))
        } else {
            Err(ParseAirportTypeError::InvalidBits(bits))
        }
    }

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn contains(self, airport_type: AirportType) -> bool {
        self.0 & airport_type.bit() != 0
    }

    /// True when the two sets share at least one category.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Categories in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over the member categories in bit order.
    pub fn iter(self) -> impl Iterator<Item = AirportType> {
        AirportType::VARIANTS
            .into_iter()
            .filter(move |t| self.contains(*t))
    }
}

impl fmt::Debug for AirportTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromStr for AirportTypes {
    type Err = ParseAirportTypeError;

    /// Parse a comma separated list of categories, or one of the preset names
    /// `all`, `active` and `runways`. At least one category is required.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut types = Self::NONE;
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            types |= match part.to_ascii_lowercase().as_str() {
                "all" => Self::ALL,
                "active" => Self::ACTIVE,
                "runways" => Self::RUNWAYS,
                other => Self::from(other.parse::<AirportType>()?),
            };
        }
        if types.is_empty() {
            return Err(ParseAirportTypeError::Empty);
        }
        Ok(types)
    }
}

impl From<AirportType> for AirportTypes {
    fn from(airport_type: AirportType) -> Self {
        Self(airport_type.bit())
    }
}

impl FromIterator<AirportType> for AirportTypes {
    fn from_iter<I: IntoIterator<Item = AirportType>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |acc, t| acc | t)
    }
}

impl BitOr for AirportTypes {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOr<AirportType> for AirportTypes {
    type Output = Self;

    fn bitor(self, rhs: AirportType) -> Self {
        self.union(rhs.into())
    }
}

impl BitOr for AirportType {
    type Output = AirportTypes;

    fn bitor(self, rhs: Self) -> AirportTypes {
        AirportTypes::from(self) | rhs
    }
}

impl BitOrAssign for AirportTypes {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for AirportTypes {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

/// Complement within [`AirportTypes::ALL`].
impl Not for AirportTypes {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL.difference(self)
    }
}

impl BitAndAssign for AirportTypes {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}
