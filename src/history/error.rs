/// Mandatory parts of a hand record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Seats,
    SmallBlind,
    BigBlind,
    HoleCards,
    Summary,
    SummaryTotal,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Seats => write!(f, "seat list"),
            Self::SmallBlind => write!(f, "small blind post"),
            Self::BigBlind => write!(f, "big blind post"),
            Self::HoleCards => write!(f, "hole cards marker"),
            Self::Summary => write!(f, "summary marker"),
            Self::SummaryTotal => write!(f, "summary total line"),
        }
    }
}

/// Why a single hand was dropped. Never fatal to the surrounding batch.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),
    #[error("missing {0}")]
    MissingSection(Section),
    #[error("malformed line: {0}")]
    MalformedLine(String),
    #[error("unknown player in reveal: {0}")]
    UnknownPlayer(String),
    #[error("bad cards: {0}")]
    Card(String),
}
