use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which canned reply generator answers `/chat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResponderKind {
    Echo,
    #[default]
    Memory,
    RichMedia,
    Image,
}

impl ResponderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Echo => "echo",
            Self::Memory => "memory",
            Self::RichMedia => "rich_media",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ResponderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "echo" => Ok(Self::Echo),
            "memory" => Ok(Self::Memory),
            "rich_media" => Ok(Self::RichMedia),
            "image" => Ok(Self::Image),
            other => Err(format!("unknown responder kind: {}", other)),
        }
    }
}
