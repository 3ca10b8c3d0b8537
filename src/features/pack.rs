use super::*;
use crate::Chips;
use crate::cards::Street;
use crate::history::Action;
use crate::history::Hand;
use crate::history::Player;

/// Per-decision feature state for one tracked player in one hand.
///
/// Holds an ordered set of independent aggregator units and replays the
/// hand's actions through all of them. Street-scoped units reset on every
/// `street_start`; hand-scoped ones accumulate. Reading is non-destructive,
/// so `collect_features` can be taken before each tracked decision and the
/// replay continues unchanged.
#[derive(Debug, Clone)]
pub struct FeaturePack {
    player: String,
    stack: Chips,
    big_blind: Chips,
    seating: Vec<String>,
    street: Option<Street>,
    totals: [Tally; 5],
    streets: [Tally; 5],
    position: PlayerPosition,
    in_pot: PlayersInPot,
    pot: PotSize,
    chips: PlayerChips,
    bet: CurrentBet,
    paid: StreetMoney,
    raiser: LastRaise,
    folded: FoldPlayers,
}

impl FeaturePack {
    pub fn new(hand: &Hand, player: &Player) -> Self {
        Self {
            player: player.name().to_string(),
            stack: player.chips(),
            big_blind: hand.big_blind(),
            seating: hand.seating().into_iter().map(String::from).collect(),
            street: None,
            totals: Tally::each(Scope::Hand),
            streets: Tally::each(Scope::Street),
            position: PlayerPosition::new(player.name()),
            in_pot: PlayersInPot::default(),
            pot: PotSize::default(),
            chips: PlayerChips::new(player.name(), player.chips()),
            bet: CurrentBet::default(),
            paid: StreetMoney::new(player.name()),
            raiser: LastRaise::default(),
            folded: FoldPlayers::default(),
        }
    }

    /// Row identity columns followed by every snapshot column.
    pub fn names() -> Vec<&'static str> {
        ["hand_id", "player_name", "street", "action", "player_bet_size"]
            .into_iter()
            .chain(Snapshot::NAMES)
            .collect()
    }

    pub fn street_start(&mut self, street: Street) {
        debug_assert!(match self.street {
            None => street == Street::Pref,
            Some(last) => last.next() == Some(street),
        });
        self.street = Some(street);
        for unit in self.units() {
            unit.street_start(street);
        }
    }

    pub fn handle_action(&mut self, action: &Action) {
        debug_assert!(self.street.is_some());
        let event = Event {
            action,
            committed: self.bet.committed(action.player()),
        };
        for unit in self.units() {
            unit.handle_action(&event);
        }
    }

    pub fn collect_features(&self) -> Snapshot {
        let bb = self.big_blind;
        let [tc, tk, tb, tr, tf] = self.totals.each_ref().map(Tally::value);
        let [sc, sk, sb, sr, sf] = self.streets.each_ref().map(Tally::value);
        Snapshot {
            total_call_amount: tc,
            total_check_amount: tk,
            total_bet_amount: tb,
            total_raise_amount: tr,
            total_fold_amount: tf,
            street_call_amount: sc,
            street_check_amount: sk,
            street_bet_amount: sb,
            street_raise_amount: sr,
            street_fold_amount: sf,
            player_position: self.position.value(),
            players_in_pot: self.in_pot.value(),
            current_pot_size: self.pot.value() / bb,
            player_stack_size: self.chips.value() / bb,
            paid_on_all_streets: (self.stack - self.chips.value()) / bb,
            pay_for_continue_play: (self.bet.value() - self.paid.value()) / bb,
            current_bet: self.bet.value() / bb,
            after_us_decision_players: self.players_to_act(),
        }
    }

    /// Walks clockwise from the tracked seat, counting players who have not
    /// folded, until reaching whoever last set the bet level (or our own
    /// seat when nobody has this street).
    pub fn players_to_act(&self) -> usize {
        let n = self.seating.len();
        let Some(ours) = self.seating.iter().position(|name| name == &self.player) else {
            return 0;
        };
        let finish = self.raiser.value().unwrap_or(&self.player);
        (1..n)
            .map(|k| self.seating[(ours + k) % n].as_str())
            .take_while(|name| *name != finish)
            .filter(|name| !self.folded.contains(name))
            .count()
    }

    fn units(&mut self) -> impl Iterator<Item = &mut dyn Feature> {
        let rest: [&mut dyn Feature; 8] = [
            &mut self.position,
            &mut self.in_pot,
            &mut self.pot,
            &mut self.chips,
            &mut self.bet,
            &mut self.paid,
            &mut self.raiser,
            &mut self.folded,
        ];
        self.totals
            .iter_mut()
            .chain(self.streets.iter_mut())
            .map(|tally| tally as &mut dyn Feature)
            .chain(rest)
    }
}
