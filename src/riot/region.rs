//! Platform routing values.

use std::fmt;
use std::str::FromStr;

use crate::riot::types::GameDataError;

/// A Riot platform, the host prefix for platform-scoped API calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Na1,
    Euw1,
    Eun1,
    Kr,
    Br1,
    Jp1,
    La1,
    La2,
    Oc1,
    Tr1,
    Ru,
}

impl Region {
    /// Platform id used in API hostnames.
    pub fn platform_id(self) -> &'static str {
        match self {
            Region::Na1 => "na1",
            Region::Euw1 => "euw1",
            Region::Eun1 => "eun1",
            Region::Kr => "kr",
            Region::Br1 => "br1",
            Region::Jp1 => "jp1",
            Region::La1 => "la1",
            Region::La2 => "la2",
            Region::Oc1 => "oc1",
            Region::Tr1 => "tr1",
            Region::Ru => "ru",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.platform_id())
    }
}

/// Accepts platform ids (`euw1`) and the short names players use (`euw`).
impl FromStr for Region {
    type Err = GameDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let region = match s.trim().to_ascii_lowercase().as_str() {
            "na" | "na1" => Region::Na1,
            "euw" | "euw1" => Region::Euw1,
            "eune" | "eun1" => Region::Eun1,
            "kr" => Region::Kr,
            "br" | "br1" => Region::Br1,
            "jp" | "jp1" => Region::Jp1,
            "lan" | "la1" => Region::La1,
            "las" | "la2" => Region::La2,
            "oce" | "oc1" => Region::Oc1,
            "tr" | "tr1" => Region::Tr1,
            "ru" => Region::Ru,
            _ => return Err(GameDataError::UnknownRegion(s.to_string())),
        };
        Ok(region)
    }
}
