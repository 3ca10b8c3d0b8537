use crate::Chips;

/// Aggregator values at one decision point.
///
/// Money fields are in big blinds. Counts and positions are raw.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct Snapshot {
    pub total_call_amount: usize,
    pub total_check_amount: usize,
    pub total_bet_amount: usize,
    pub total_raise_amount: usize,
    pub total_fold_amount: usize,
    pub street_call_amount: usize,
    pub street_check_amount: usize,
    pub street_bet_amount: usize,
    pub street_raise_amount: usize,
    pub street_fold_amount: usize,
    pub player_position: usize,
    pub players_in_pot: usize,
    pub current_pot_size: Chips,
    pub player_stack_size: Chips,
    pub paid_on_all_streets: Chips,
    pub pay_for_continue_play: Chips,
    pub current_bet: Chips,
    pub after_us_decision_players: usize,
}

impl Snapshot {
    pub const NAMES: [&'static str; 18] = [
        "total_call_amount",
        "total_check_amount",
        "total_bet_amount",
        "total_raise_amount",
        "total_fold_amount",
        "street_call_amount",
        "street_check_amount",
        "street_bet_amount",
        "street_raise_amount",
        "street_fold_amount",
        "player_position",
        "players_in_pot",
        "current_pot_size",
        "player_stack_size",
        "paid_on_all_streets",
        "pay_for_continue_play",
        "current_bet",
        "after_us_decision_players",
    ];

    /// Field values in [`Snapshot::NAMES`] order.
    pub fn values(&self) -> [f64; 18] {
        [
            self.total_call_amount as f64,
            self.total_check_amount as f64,
            self.total_bet_amount as f64,
            self.total_raise_amount as f64,
            self.total_fold_amount as f64,
            self.street_call_amount as f64,
            self.street_check_amount as f64,
            self.street_bet_amount as f64,
            self.street_raise_amount as f64,
            self.street_fold_amount as f64,
            self.player_position as f64,
            self.players_in_pot as f64,
            self.current_pot_size,
            self.player_stack_size,
            self.paid_on_all_streets,
            self.pay_for_continue_play,
            self.current_bet,
            self.after_us_decision_players as f64,
        ]
    }

    /// Field-wise comparison with an absolute tolerance on money.
    #[cfg(test)]
    pub fn assert_close(&self, expected: &Self) {
        for ((name, a), b) in Self::NAMES
            .iter()
            .zip(self.values())
            .zip(expected.values())
        {
            assert!((a - b).abs() < 1e-9, "{name}: got {a}, expected {b}");
        }
    }
}
