//! Player identification, names, colors, and scores.
//!
//! ## PlayerId
//!
//! Roster position of a player (0-based). Stable once play starts, since the
//! roster is frozen outside the setup phase.
//!
//! ## PlayerColor
//!
//! Fixed 8-entry palette. A joining player takes the first color no current
//! roster member holds, so with no removals colors follow join order.

use serde::{Deserialize, Serialize};

use crate::session::Rejection;

/// Roster position of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster of `player_count` players.
    ///
    /// ```
    /// use party_quiz::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Display color tag from the fixed palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Pink,
    Indigo,
    Orange,
}

impl PlayerColor {
    /// Palette in assignment order.
    pub const PALETTE: [PlayerColor; 8] = [
        PlayerColor::Red,
        PlayerColor::Blue,
        PlayerColor::Green,
        PlayerColor::Yellow,
        PlayerColor::Purple,
        PlayerColor::Pink,
        PlayerColor::Indigo,
        PlayerColor::Orange,
    ];

    /// First palette color not contained in `taken`.
    ///
    /// Returns `None` once every color is in use.
    #[must_use]
    pub fn first_unused(taken: &[PlayerColor]) -> Option<Self> {
        Self::PALETTE.into_iter().find(|color| !taken.contains(color))
    }

    /// Lowercase name, used by the terminal renderer.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PlayerColor::Red => "red",
            PlayerColor::Blue => "blue",
            PlayerColor::Green => "green",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Purple => "purple",
            PlayerColor::Pink => "pink",
            PlayerColor::Indigo => "indigo",
            PlayerColor::Orange => "orange",
        }
    }
}

/// A trimmed, non-empty display name with bounded length.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validate raw input into a name.
    ///
    /// Length is counted in characters after trimming.
    pub fn parse(raw: &str, max_len: usize) -> Result<Self, Rejection> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Rejection::EmptyName);
        }
        let len = trimmed.chars().count();
        if len > max_len {
            return Err(Rejection::NameTooLong { len, max: max_len });
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A roster entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: PlayerName,
    pub score: u32,
    pub color: PlayerColor,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(name: PlayerName, color: PlayerColor) -> Self {
        Self {
            name,
            score: 0,
            color,
        }
    }
}
