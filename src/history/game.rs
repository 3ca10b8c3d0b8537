/// The variant named in a hand header.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum GameType {
    HoldemNoLimit,
    OmahaPotLimit,
    Unknown,
}

/// header labels differ across sites ("Hold'em No Limit", "No Limit Holdem")
impl From<&str> for GameType {
    fn from(label: &str) -> Self {
        let label = label.to_lowercase();
        let holdem = label.contains("hold'em") || label.contains("holdem");
        match () {
            _ if holdem && label.contains("no limit") => Self::HoldemNoLimit,
            _ if label.contains("omaha") && label.contains("pot limit") => Self::OmahaPotLimit,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for GameType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::HoldemNoLimit => write!(f, "Hold'em No Limit"),
            Self::OmahaPotLimit => write!(f, "Omaha Pot Limit"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
