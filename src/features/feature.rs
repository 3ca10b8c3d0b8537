use crate::Chips;
use crate::cards::Street;
use crate::history::Action;

/// one aggregator unit of a FeaturePack.
///
/// units are driven in strict log order: for each street, exactly one
/// street_start, then every action of that street as it was logged.
/// reading a unit's value lives on the concrete type so that snapshots
/// stay typed (counts as integers, money as chips).
pub trait Feature {
    fn street_start(&mut self, street: Street);
    fn handle_action(&mut self, event: &Event);
}

/// An action plus what its actor had already put in on this street,
/// as tracked by the pack's CurrentBet before the action applies.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    pub action: &'a Action,
    pub committed: Chips,
}

impl<'a> Event<'a> {
    /// Chips this action moves from the actor's stack into the pot.
    /// A raise reports its new street level, so only the difference moves.
    pub fn added(&self) -> Chips {
        use crate::history::ActionKind::*;
        match self.action.kind() {
            SmallBlind | BigBlind | Call | Bet => self.action.amount(),
            Raise => self.action.amount() - self.committed,
            Fold | Check => 0.,
        }
    }
}
