use crate::Chips;

/// What a player did, as far as feature replay cares.
///
/// The two blind variants never come from an action line. The parser
/// synthesizes them from the blind-post lines so that every preflop action
/// list opens with exactly one `SmallBlind` then one `BigBlind`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum ActionKind {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl ActionKind {
    /// The five voluntary kinds, in feature-column order.
    pub const fn choices() -> [Self; 5] {
        [Self::Call, Self::Check, Self::Bet, Self::Raise, Self::Fold]
    }
    /// True if this is a forced blind post.
    pub fn is_blind(&self) -> bool {
        matches!(self, Self::SmallBlind | Self::BigBlind)
    }
    /// True if this action puts chips in the pot.
    pub fn is_wager(&self) -> bool {
        !matches!(self, Self::Fold | Self::Check)
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SmallBlind => "SMALLBLIND",
            Self::BigBlind => "BIGBLIND",
            Self::Fold => "FOLD",
            Self::Check => "CHECK",
            Self::Call => "CALL",
            Self::Bet => "BET",
            Self::Raise => "RAISE",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl serde::Serialize for ActionKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One entry of a street's action list.
///
/// `amount` is what the log reports: the chips added by a blind, call or
/// bet; the new street-level total for a raise ("raises 2.30 to 4.30"
/// stores 4.30); zero for folds and checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    player: String,
    kind: ActionKind,
    amount: Chips,
}

impl Action {
    pub fn new(player: impl Into<String>, kind: ActionKind, amount: Chips) -> Self {
        debug_assert!(kind.is_wager() || amount == 0.);
        Self {
            player: player.into(),
            kind,
            amount,
        }
    }
    pub fn passive(player: impl Into<String>, kind: ActionKind) -> Self {
        Self::new(player, kind, 0.)
    }
    pub fn player(&self) -> &str {
        &self.player
    }
    pub fn kind(&self) -> ActionKind {
        self.kind
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind {
            ActionKind::Fold | ActionKind::Check => write!(f, "{} {}", self.player, self.kind),
            _ => write!(f, "{} {} {}", self.player, self.kind, self.amount),
        }
    }
}
