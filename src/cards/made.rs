/// Made-hand category, strongest first.
///
/// Unlike a full evaluator this carries no kicker or rank information:
/// the feature rows only need the category. `Air` covers every holding
/// that does not qualify for anything above, including all of preflop
/// without a pocket pair.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MadeHand {
    StraightFlush,
    FourOAK,
    FullHouse,
    Flush,
    Straight,
    ThreeOAK,
    TwoPair,
    OnePair,
    HighCard,
    Air,
}

impl MadeHand {
    pub const fn all() -> [Self; 10] {
        [
            Self::StraightFlush,
            Self::FourOAK,
            Self::FullHouse,
            Self::Flush,
            Self::Straight,
            Self::ThreeOAK,
            Self::TwoPair,
            Self::OnePair,
            Self::HighCard,
            Self::Air,
        ]
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StraightFlush => "STRAIGHT_FLUSH",
            Self::FourOAK => "FOUR_OF_A_KIND",
            Self::FullHouse => "FULL_HOUSE",
            Self::Flush => "FLUSH",
            Self::Straight => "STRAIGHT",
            Self::ThreeOAK => "THREE_OF_A_KIND",
            Self::TwoPair => "TWO_PAIR",
            Self::OnePair => "ONE_PAIR",
            Self::HighCard => "HIGH_CARD",
            Self::Air => "AIR",
        }
    }
}

impl std::fmt::Display for MadeHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for MadeHand {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
