use super::*;
use crate::Chips;
use crate::cards::Street;
use crate::history::ActionKind;
use std::collections::HashMap;

/// Table bet level on this street plus each player's street contribution.
///
/// Blinds, bets and raises assign both. A call sets the level to the call
/// amount but adds to the caller's contribution, mirroring how the logs
/// report calls as increments and raises as totals.
#[derive(Debug, Clone, Default)]
pub struct CurrentBet {
    level: Chips,
    committed: HashMap<String, Chips>,
}

impl CurrentBet {
    pub fn value(&self) -> Chips {
        self.level
    }
    /// What `player` has put in on this street so far.
    pub fn committed(&self, player: &str) -> Chips {
        self.committed.get(player).copied().unwrap_or_default()
    }
}

impl Feature for CurrentBet {
    fn street_start(&mut self, _: Street) {
        self.level = 0.;
        self.committed.clear();
    }
    fn handle_action(&mut self, event: &Event) {
        let action = event.action;
        match action.kind() {
            ActionKind::SmallBlind | ActionKind::BigBlind | ActionKind::Bet | ActionKind::Raise => {
                self.level = action.amount();
                self.committed.insert(action.player().to_string(), action.amount());
            }
            ActionKind::Call => {
                self.level = action.amount();
                *self.committed.entry(action.player().to_string()).or_default() += action.amount();
            }
            ActionKind::Fold | ActionKind::Check => {}
        }
    }
}

/// Everything put in the pot since the blinds.
#[derive(Debug, Clone, Default)]
pub struct PotSize(Chips);

impl PotSize {
    pub fn value(&self) -> Chips {
        self.0
    }
}

impl Feature for PotSize {
    fn street_start(&mut self, _: Street) {}
    fn handle_action(&mut self, event: &Event) {
        self.0 += event.added();
    }
}

/// Tracked player's remaining stack.
#[derive(Debug, Clone)]
pub struct PlayerChips {
    player: String,
    chips: Chips,
}

impl PlayerChips {
    pub fn new(player: &str, stack: Chips) -> Self {
        Self {
            player: player.to_string(),
            chips: stack,
        }
    }
    pub fn value(&self) -> Chips {
        self.chips
    }
}

impl Feature for PlayerChips {
    fn street_start(&mut self, _: Street) {}
    fn handle_action(&mut self, event: &Event) {
        if event.action.player() == self.player {
            self.chips -= event.added();
        }
    }
}

/// Tracked player's money on the current street, as the logs count it.
#[derive(Debug, Clone)]
pub struct StreetMoney {
    player: String,
    paid: Chips,
}

impl StreetMoney {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            paid: 0.,
        }
    }
    pub fn value(&self) -> Chips {
        self.paid
    }
}

impl Feature for StreetMoney {
    fn street_start(&mut self, _: Street) {
        self.paid = 0.;
    }
    fn handle_action(&mut self, event: &Event) {
        let action = event.action;
        if action.player() != self.player {
            return;
        }
        match action.kind() {
            ActionKind::Raise => self.paid = action.amount(),
            ActionKind::Fold | ActionKind::Check => {}
            _ => self.paid += action.amount(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Action;

    /// drives one unit the way a pack does, with a shared CurrentBet
    fn replay(unit: &mut impl Feature, actions: &[Action]) -> CurrentBet {
        let mut bet = CurrentBet::default();
        bet.street_start(Street::Pref);
        unit.street_start(Street::Pref);
        for action in actions {
            let event = Event { action, committed: bet.committed(action.player()) };
            unit.handle_action(&event);
            bet.handle_action(&event);
        }
        bet
    }

    fn preflop() -> Vec<Action> {
        vec![
            Action::new("sb", ActionKind::SmallBlind, 50.),
            Action::new("bb", ActionKind::BigBlind, 100.),
            Action::new("sb", ActionKind::Raise, 300.),
            Action::new("bb", ActionKind::Call, 200.),
        ]
    }

    #[test]
    fn raise_assigns_call_accumulates() {
        let bet = replay(&mut PotSize::default(), &preflop());
        assert_eq!(bet.value(), 200.);
        assert_eq!(bet.committed("sb"), 300.);
        assert_eq!(bet.committed("bb"), 300.);
        assert_eq!(bet.committed("nobody"), 0.);
    }

    #[test]
    fn pot_counts_raise_difference() {
        let mut pot = PotSize::default();
        replay(&mut pot, &preflop());
        assert_eq!(pot.value(), 600.);
    }

    #[test]
    fn chips_follow_contribution() {
        let mut chips = PlayerChips::new("sb", 10245.);
        replay(&mut chips, &preflop());
        assert_eq!(chips.value(), 9945.);
    }

    #[test]
    fn street_money_resets() {
        let mut paid = StreetMoney::new("sb");
        replay(&mut paid, &preflop());
        assert_eq!(paid.value(), 300.);
        paid.street_start(Street::Flop);
        assert_eq!(paid.value(), 0.);
    }
}
