use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// Two cards as dealt to one seat.
///
/// Unlike [`Hand`](super::hand::Hand) this keeps both cards verbatim, so a
/// multi-deck shoe may produce a pair of identical cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct Hole(Card, Card);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        [self.0, self.1]
    }
    pub fn has(&self, rank: Rank) -> bool {
        self.0.rank() == rank || self.1.rank() == rank
    }
    pub fn suited(&self) -> bool {
        self.0.suit() == self.1.suit()
    }
    pub fn same_color(&self) -> bool {
        self.0.suit().color() == self.1.suit().color()
    }
    /// the suit shared by both cards, if any
    pub fn suit(&self) -> Option<Suit> {
        self.suited().then(|| self.0.suit())
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        Self(a, b)
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match Card::parse(s)?.as_slice() {
            [a, b] => Ok(Self(*a, *b)),
            _ => Err(format!("hole needs exactly 2 cards: {}", s)),
        }
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.0, self.1)
    }
}
