use super::premium::Premium;
use crate::cards::Hand;
use crate::cards::Rank;
use crate::cards::Suit;

/// T J Q K A as a rank mask
const ROYAL: u16 = 0b_1111100000000;
/// A 2 3 4 5 as a rank mask
const WHEEL: u16 = 0b_1000000001111;

/// five consecutive ranks, ace-low included
pub fn is_straight(ranks: u16) -> bool {
    let mut bits = ranks;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits &= bits << 1;
    bits > 0 || WHEEL == (WHEEL & ranks)
}

/// some suit holds T J Q K A, whatever else is in the hand
pub fn is_royal_flush(hand: Hand) -> bool {
    Suit::all()
        .iter()
        .map(|s| u16::from(hand.of(s)))
        .any(|ranks| ROYAL == (ROYAL & ranks))
}

/// the five board cards alone are a royal flush
pub fn is_community_royal(board: Hand) -> bool {
    board.size() == 5
        && Suit::all()
            .iter()
            .map(|s| u16::from(board.of(s)))
            .any(|ranks| ranks == ROYAL)
}

/// five or more cards of one suit, five of them consecutive
pub fn is_straight_flush(hand: Hand) -> bool {
    Suit::all()
        .iter()
        .map(|s| hand.of(s))
        .filter(|flush| flush.size() >= 5)
        .any(|flush| is_straight(u16::from(flush)))
}

pub fn is_four_oak(hand: Hand) -> bool {
    Rank::all().iter().any(|r| hand.ranked(r) >= 4)
}

/// the two largest rank counts are at least three and two
pub fn is_full_house(hand: Hand) -> bool {
    let mut counts = Rank::all().map(|r| hand.ranked(&r));
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts[0] >= 3 && counts[1] >= 2
}

/// Classifies two hole cards and five community cards into at most one
/// [`Premium`], highest priority first.
///
/// The royal flush check runs over all seven cards, so a board royal is
/// always claimed by [`Premium::RoyalFlush`] before the community royal
/// check is reached.
pub struct Evaluator {
    hole: Hand,
    board: Hand,
}

impl From<(Hand, Hand)> for Evaluator {
    fn from((hole, board): (Hand, Hand)) -> Self {
        Self { hole, board }
    }
}

impl Evaluator {
    pub fn find_premium(&self) -> Option<Premium> {
        None.or_else(|| self.find_royal_flush())
            .or_else(|| self.find_community_royal())
            .or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
    }

    fn hand(&self) -> Hand {
        Hand::add(self.hole, self.board)
    }

    fn find_royal_flush(&self) -> Option<Premium> {
        is_royal_flush(self.hand()).then_some(Premium::RoyalFlush)
    }
    fn find_community_royal(&self) -> Option<Premium> {
        is_community_royal(self.board).then_some(Premium::CommunityRoyal)
    }
    fn find_straight_flush(&self) -> Option<Premium> {
        is_straight_flush(self.hand()).then_some(Premium::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Premium> {
        is_four_oak(self.hand()).then_some(Premium::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Premium> {
        is_full_house(self.hand()).then_some(Premium::FullHouse)
    }
}
