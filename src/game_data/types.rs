use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Battle.net API region. Scopes both the API host and the `namespace` strings
/// (`static-us`, `dynamic-us`, ...).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Origin {
    Us,
    Eu,
    Kr,
    Tw,
    Cn,
}

impl Origin {
    /// Returns the API host serving this region.
    #[must_use]
    pub fn host(self) -> &'static str {
        match self {
            Origin::Us => "https://us.api.blizzard.com",
            Origin::Eu => "https://eu.api.blizzard.com",
            Origin::Kr => "https://kr.api.blizzard.com",
            Origin::Tw => "https://tw.api.blizzard.com",
            Origin::Cn => "https://gateway.battlenet.com.cn",
        }
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "us" => Ok(Origin::Us),
            "eu" => Ok(Origin::Eu),
            "kr" => Ok(Origin::Kr),
            "tw" => Ok(Origin::Tw),
            "cn" => Ok(Origin::Cn),
            _ => Err(Error::validation(format!("unknown origin: {s}"))),
        }
    }
}

/// Player faction, used by the mythic raid hall of fame.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Faction {
    Alliance,
    Horde,
}

/// PvP leaderboard bracket.
///
/// Brackets without a dedicated variant, such as the per-specialization solo shuffle brackets
/// (`shuffle-mage-frost`), are passed through [`PvpBracket::Other`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PvpBracket {
    TwoVsTwo,
    ThreeVsThree,
    RatedBattleground,
    Other(String),
}

impl fmt::Display for PvpBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PvpBracket::TwoVsTwo => f.write_str("2v2"),
            PvpBracket::ThreeVsThree => f.write_str("3v3"),
            PvpBracket::RatedBattleground => f.write_str("rbg"),
            PvpBracket::Other(bracket) => f.write_str(bracket),
        }
    }
}

impl From<&str> for PvpBracket {
    fn from(value: &str) -> Self {
        match value {
            "2v2" => PvpBracket::TwoVsTwo,
            "3v3" => PvpBracket::ThreeVsThree,
            "rbg" => PvpBracket::RatedBattleground,
            other => PvpBracket::Other(other.to_owned()),
        }
    }
}
