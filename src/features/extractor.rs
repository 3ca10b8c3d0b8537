use super::*;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Combination;
use crate::cards::Street;
use crate::history::GameType;
use crate::history::Hand;
use crate::history::Player;
use std::collections::BTreeSet;

/// Emits feature rows for the decisions of a fixed set of players.
///
/// Only No-Limit Hold'em hands are supported; anything else yields no rows.
/// A tracked player contributes rows only when their hole cards are known.
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    nicknames: BTreeSet<String>,
}

impl FeatureExtractor {
    pub fn new<I, S>(nicknames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nicknames: nicknames.into_iter().map(Into::into).collect(),
        }
    }

    pub fn nicknames(&self) -> &BTreeSet<String> {
        &self.nicknames
    }

    pub fn extract(&self, hand: &Hand) -> Vec<FeatureRow> {
        if hand.game() != GameType::HoldemNoLimit {
            log::trace!("{:<32}{:<32}", "unsupported game", hand.id());
            return Vec::new();
        }
        hand.players()
            .iter()
            .filter(|player| self.nicknames.contains(player.name()))
            .filter_map(|player| player.cards().map(|hole| (player, hole)))
            .flat_map(|(player, hole)| Self::replay(hand, player, hole))
            .collect()
    }

    /// Replays every street for one player, snapshotting before each of
    /// their voluntary actions and applying every action afterwards.
    pub fn replay(hand: &Hand, player: &Player, hole: &[Card]) -> Vec<FeatureRow> {
        let mut pack = FeaturePack::new(hand, player);
        let mut rows = Vec::new();
        for &street in Street::all() {
            pack.street_start(street);
            let board = hand.board(street);
            let counts = Board::from(board).features();
            let made = Combination::new(board, hole).made();
            for action in hand.actions(street) {
                if action.player() == player.name() && !action.kind().is_blind() {
                    rows.push(FeatureRow {
                        hand_id: hand.id().to_string(),
                        player_name: player.name().to_string(),
                        street,
                        action: action.kind(),
                        player_bet_size: action.amount() / hand.big_blind(),
                        features: pack.collect_features(),
                        board: counts,
                        ready_combination: made,
                    });
                }
                pack.handle_action(action);
            }
        }
        rows
    }
}
