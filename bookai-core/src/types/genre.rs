//! The closed set of supported genres and their display metadata

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! cover_url {
    ($file:literal) => {
        concat!(
            "https://cdn.poehali.dev/projects/0b848d32-ff37-4cd5-899c-ad4e560c06c7/files/",
            $file
        )
    };
}

const COVER_BASE: &str = cover_url!("");

/// Display metadata attached to every genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenreInfo {
    /// Stable key used on the wire
    pub key: &'static str,

    /// Human-readable name
    pub name: &'static str,

    /// Icon identifier
    pub icon: &'static str,

    /// Cover image reference
    pub cover: &'static str,
}

/// Book genre
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Fantasy,
    Detective,
    Romance,
    Scifi,
}

const FANTASY: GenreInfo = GenreInfo {
    key: "fantasy",
    name: "Фэнтези",
    icon: "Sparkles",
    cover: cover_url!("a0fc3e7c-ab8e-42e8-8c6e-824e5fe65e04.jpg"),
};

const DETECTIVE: GenreInfo = GenreInfo {
    key: "detective",
    name: "Детектив",
    icon: "Search",
    cover: cover_url!("0a128244-d870-46ba-b2b8-fd556ff590ce.jpg"),
};

// Romance shares the fantasy artwork.
const ROMANCE: GenreInfo = GenreInfo {
    key: "romance",
    name: "Роман",
    icon: "Heart",
    cover: FANTASY.cover,
};

const SCIFI: GenreInfo = GenreInfo {
    key: "scifi",
    name: "Фантастика",
    icon: "Rocket",
    cover: cover_url!("a8963248-b197-403a-9cf4-d6d3819b58f9.jpg"),
};

impl Genre {
    /// All genres in display order
    pub const ALL: [Genre; 4] = [Genre::Fantasy, Genre::Detective, Genre::Romance, Genre::Scifi];

    /// Static metadata for this genre
    pub const fn info(self) -> &'static GenreInfo {
        match self {
            Genre::Fantasy => &FANTASY,
            Genre::Detective => &DETECTIVE,
            Genre::Romance => &ROMANCE,
            Genre::Scifi => &SCIFI,
        }
    }

    pub const fn key(self) -> &'static str {
        self.info().key
    }

    pub const fn name(self) -> &'static str {
        self.info().name
    }

    pub const fn icon(self) -> &'static str {
        self.info().icon
    }

    /// Cover image reference, a pure function of the genre
    pub const fn cover(self) -> &'static str {
        self.info().cover
    }

    /// Iterate over the genre table
    pub fn catalog() -> impl Iterator<Item = &'static GenreInfo> {
        Self::ALL.into_iter().map(Genre::info)
    }

    /// Base URL all covers are served from
    pub fn cover_base() -> &'static str {
        COVER_BASE
    }
}

impl FromStr for Genre {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Genre::ALL
            .into_iter()
            .find(|g| g.key() == key)
            .ok_or(ValidationError::UnknownGenre(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
