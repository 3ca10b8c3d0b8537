/// Drawing potential, strongest first.
///
/// Backdoor variants only exist on the flop, where two more board cards
/// are still to come.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Draw {
    FlushDraw,
    DoubleBackdoor,
    DoubleStraightDraw,
    Gutshot,
    BackdoorStraight,
    BackdoorFlush,
    Nothing,
}

impl Draw {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::FlushDraw => "FLUSH_DRAW",
            Self::DoubleBackdoor => "DOUBLE_BACKDOOR",
            Self::DoubleStraightDraw => "DOUBLE_STRAIGHT_DRAW",
            Self::Gutshot => "GUTSHOT",
            Self::BackdoorStraight => "BACKDOOR_STRAIGHT",
            Self::BackdoorFlush => "BACKDOOR_FLUSH",
            Self::Nothing => "NO_DRAW_COMBINATIONS",
        }
    }
}

impl std::fmt::Display for Draw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
