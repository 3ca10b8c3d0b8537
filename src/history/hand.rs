use super::*;
use crate::Chips;
use crate::cards::Card;
use crate::cards::Street;

/// One fully parsed hand record.
///
/// Players keep header order (ascending seat). Boards are cumulative: the
/// turn board is the flop plus one card, the river board is the turn plus
/// one card, and the preflop board is always empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    pub(super) id: String,
    pub(super) game: GameType,
    pub(super) small_blind: Chips,
    pub(super) big_blind: Chips,
    pub(super) button: Option<usize>,
    pub(super) players: Vec<Player>,
    pub(super) actions: [Vec<Action>; 4],
    pub(super) boards: [Vec<Card>; 4],
    pub(super) total_pot: Chips,
    pub(super) rake: Chips,
}

impl Hand {
    pub(super) fn new(id: String, game: GameType, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            id,
            game,
            small_blind,
            big_blind,
            button: None,
            players: Vec::new(),
            actions: Default::default(),
            boards: Default::default(),
            total_pot: 0.,
            rake: 0.,
        }
    }

    /// Source-prefixed id, e.g. `ps_192510344085`.
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn game(&self) -> GameType {
        self.game
    }
    pub fn small_blind(&self) -> Chips {
        self.small_blind
    }
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }
    pub fn button(&self) -> Option<usize> {
        self.button
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }
    /// Clockwise table order, by seat number.
    pub fn seating(&self) -> Vec<&str> {
        let mut seats = self.players.iter().collect::<Vec<_>>();
        seats.sort_by_key(|p| p.seat());
        seats.into_iter().map(Player::name).collect()
    }
    pub fn actions(&self, street: Street) -> &[Action] {
        &self.actions[street as usize]
    }
    pub fn board(&self, street: Street) -> &[Card] {
        &self.boards[street as usize]
    }
    pub fn flop(&self) -> &[Card] {
        self.board(Street::Flop)
    }
    pub fn turn(&self) -> &[Card] {
        self.board(Street::Turn)
    }
    pub fn river(&self) -> &[Card] {
        self.board(Street::Rive)
    }
    pub fn total_pot(&self) -> Chips {
        self.total_pot
    }
    pub fn rake(&self) -> Chips {
        self.rake
    }

    pub(super) fn seat(&mut self, player: Player) {
        self.players.push(player);
    }
    pub(super) fn act(&mut self, street: Street, action: Action) {
        self.actions[street as usize].push(action);
    }
    pub(super) fn deal(&mut self, street: Street, board: Vec<Card>) {
        self.boards[street as usize] = board;
    }
    pub(super) fn reveal(&mut self, name: &str, cards: Vec<Card>) -> Result<(), ParseError> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or_else(|| ParseError::UnknownPlayer(name.to_string()))?;
        if !player.reveal(cards) {
            log::trace!("{:<32}{:<32}", "ignoring repeated reveal", name);
        }
        Ok(())
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} {} {}/{}", self.id, self.game, self.small_blind, self.big_blind)?;
        for player in self.players.iter() {
            writeln!(f, "  {}", player)?;
        }
        for &street in Street::all() {
            write!(f, "{:<8}", street.label())?;
            for card in self.board(street) {
                write!(f, "{} ", card)?;
            }
            writeln!(f)?;
            for action in self.actions(street) {
                writeln!(f, "  {}", action)?;
            }
        }
        write!(f, "pot {} rake {}", self.total_pot, self.rake)
    }
}
