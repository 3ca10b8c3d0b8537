use crate::Chips;
use crate::cards::Card;

/// A seated player as listed in the hand header.
///
/// `seat` is the table seat number from the `Seat k:` line, which also fixes
/// the clockwise order used to count players still to act. Hole cards stay
/// unknown unless the log reveals them.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    seat: usize,
    name: String,
    chips: Chips,
    cards: Option<Vec<Card>>,
}

impl Player {
    pub fn new(seat: usize, name: impl Into<String>, chips: Chips) -> Self {
        Self {
            seat,
            name: name.into(),
            chips,
            cards: None,
        }
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Starting stack.
    pub fn chips(&self) -> Chips {
        self.chips
    }
    pub fn cards(&self) -> Option<&[Card]> {
        self.cards.as_deref()
    }
    /// Writes hole cards once; later reveals of the same player are ignored.
    pub fn reveal(&mut self, cards: Vec<Card>) -> bool {
        match self.cards {
            Some(_) => false,
            None => {
                self.cards = Some(cards);
                true
            }
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.seat, self.name, self.chips)?;
        if let Some(cards) = &self.cards {
            for card in cards {
                write!(f, " {}", card)?;
            }
        }
        Ok(())
    }
}
