use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards map bijectively onto `0..52` as `rank * 4 + suit`, so cards
/// sort first by rank, then by suit within each rank.
///
/// # Parsing
///
/// Cards parse from two-character tokens like `"As"` or `"Tc"`. Hand
/// histories list cards inside brackets, either space separated
/// (`[6h 4c Kc]`) or comma separated (`[ 6h, 4c, Kc ]`); [`Card::parse`]
/// accepts both.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards in sorted order.
    pub fn deck() -> Vec<Self> {
        (0..52u8).map(Self::from).collect()
    }
    /// Parses a delimited card list as it appears between brackets.
    pub fn parse(s: &str) -> Result<Vec<Self>, String> {
        s.split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// str isomorphism
/// the rank may take two characters ("10h") in some exports
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        match s.char_indices().last() {
            Some((split, _)) if split > 0 => {
                let rank = Rank::try_from(&s[..split])?;
                let suit = Suit::try_from(&s[split..])?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(format!("invalid card str: {}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
