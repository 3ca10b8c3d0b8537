use super::*;
use crate::cards::Street;
use crate::history::ActionKind;
use std::collections::BTreeSet;

/// Index of the tracked player's first action on this street. Before they
/// act, the number of actions seen so far.
#[derive(Debug, Clone)]
pub struct PlayerPosition {
    player: String,
    seen: usize,
    first: Option<usize>,
}

impl PlayerPosition {
    pub fn new(player: &str) -> Self {
        Self {
            player: player.to_string(),
            seen: 0,
            first: None,
        }
    }
    pub fn value(&self) -> usize {
        self.first.unwrap_or(self.seen)
    }
}

impl Feature for PlayerPosition {
    fn street_start(&mut self, _: Street) {
        self.seen = 0;
        self.first = None;
    }
    fn handle_action(&mut self, event: &Event) {
        if self.first.is_none() && event.action.player() == self.player {
            self.first = Some(self.seen);
        }
        self.seen += 1;
    }
}

/// Players who have voluntarily put chips in and not folded since.
#[derive(Debug, Clone, Default)]
pub struct PlayersInPot(BTreeSet<String>);

impl PlayersInPot {
    pub fn value(&self) -> usize {
        self.0.len()
    }
}

impl Feature for PlayersInPot {
    fn street_start(&mut self, _: Street) {}
    fn handle_action(&mut self, event: &Event) {
        let player = event.action.player();
        match event.action.kind() {
            ActionKind::Call | ActionKind::Bet | ActionKind::Raise => {
                self.0.insert(player.to_string());
            }
            ActionKind::Fold => {
                self.0.remove(player);
            }
            _ => {}
        }
    }
}

/// Last player to set the bet level on this street.
#[derive(Debug, Clone, Default)]
pub struct LastRaise(Option<String>);

impl LastRaise {
    pub fn value(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl Feature for LastRaise {
    fn street_start(&mut self, _: Street) {
        self.0 = None;
    }
    fn handle_action(&mut self, event: &Event) {
        if let ActionKind::BigBlind | ActionKind::Bet | ActionKind::Raise = event.action.kind() {
            self.0 = Some(event.action.player().to_string());
        }
    }
}

/// Everyone who has folded this hand.
#[derive(Debug, Clone, Default)]
pub struct FoldPlayers(BTreeSet<String>);

impl FoldPlayers {
    pub fn contains(&self, player: &str) -> bool {
        self.0.contains(player)
    }
    pub fn value(&self) -> usize {
        self.0.len()
    }
}

impl Feature for FoldPlayers {
    fn street_start(&mut self, _: Street) {}
    fn handle_action(&mut self, event: &Event) {
        if event.action.kind() == ActionKind::Fold {
            self.0.insert(event.action.player().to_string());
        }
    }
}
