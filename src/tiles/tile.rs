//! Tile identity: color, rank, and the hint tokens that describe them.
//!
//! Every tile prints as a two-character token, color first (`R3`, `P5`).
//! Hints are single-character tokens naming either a color or a rank.

use serde::{Deserialize, Serialize};

/// Tile color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    White,
    Purple,
}

impl Color {
    /// All colors in display order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Purple,
    ];

    /// Single-character token for this color.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::White => 'W',
            Color::Purple => 'P',
        }
    }

    /// Parse an uppercase color token.
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.token() == token)
    }

    /// Position in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Tile rank, 1 through 5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 5] = [Rank::One, Rank::Two, Rank::Three, Rank::Four, Rank::Five];

    /// Numeric value (1-5).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Rank with the given numeric value, if it is in 1..=5.
    #[must_use]
    pub fn from_value(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.value() == value)
    }

    /// Single-character token for this rank.
    #[must_use]
    pub const fn token(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Parse a rank token (`'1'..='5'`).
    #[must_use]
    pub fn from_token(token: char) -> Option<Self> {
        token
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Self::from_value)
    }

    /// How many copies of each color exist at this rank.
    #[must_use]
    pub const fn copies(self) -> usize {
        match self {
            Rank::One => 3,
            Rank::Two | Rank::Three | Rank::Four => 2,
            Rank::Five => 1,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A single tile. Tiles have no identity beyond their color and rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub color: Color,
    pub rank: Rank,
}

impl Tile {
    #[must_use]
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color, self.rank)
    }
}

/// A disclosed color or rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hint {
    Color(Color),
    Rank(Rank),
}

impl Hint {
    /// Parse a hint token, canonicalizing to uppercase.
    ///
    /// The token must be exactly one character naming a color or a rank.
    ///
    /// ```
    /// use hanabi_engine::tiles::{Color, Hint, Rank};
    ///
    /// assert_eq!(Hint::parse("r"), Some(Hint::Color(Color::Red)));
    /// assert_eq!(Hint::parse("4"), Some(Hint::Rank(Rank::Four)));
    /// assert_eq!(Hint::parse("RG"), None);
    /// assert_eq!(Hint::parse("7"), None);
    /// ```
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let canonical = token.to_uppercase();
        let mut chars = canonical.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Color::from_token(c)
            .map(Hint::Color)
            .or_else(|| Rank::from_token(c).map(Hint::Rank))
    }

    /// Single-character token for this hint.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Hint::Color(c) => c.token(),
            Hint::Rank(r) => r.token(),
        }
    }

    /// Does this hint describe the tile?
    #[must_use]
    pub fn matches(self, tile: Tile) -> bool {
        match self {
            Hint::Color(c) => tile.color == c,
            Hint::Rank(r) => tile.rank == r,
        }
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}
