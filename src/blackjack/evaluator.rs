use super::bonus::Bonus;
use crate::cards::Hole;
use crate::cards::Rank;

/// How the Ace and Jack of an A-J hand relate by suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AceJack {
    Suited,
    Colored,
    Mixed,
}

impl From<Hole> for Option<AceJack> {
    fn from(hole: Hole) -> Self {
        match (hole.has(Rank::Ace) && hole.has(Rank::Jack), hole.suited(), hole.same_color()) {
            (false, _, _) => None,
            (true, true, _) => Some(AceJack::Suited),
            (true, false, true) => Some(AceJack::Colored),
            (true, false, false) => Some(AceJack::Mixed),
        }
    }
}

/// an Ace with a ten-valued card
pub fn is_blackjack(hole: &Hole) -> bool {
    let [a, b] = hole.cards();
    match (a.rank(), b.rank()) {
        (Rank::Ace, other) | (other, Rank::Ace) => other.is_ten(),
        _ => false,
    }
}

/// Classifies the player's and dealer's two-card hands into at most one
/// [`Bonus`]. Only the player's hand ever pays; the dealer's matters only
/// when both sides hold blackjack.
pub struct Evaluator {
    player: Hole,
    dealer: Hole,
}

impl From<(Hole, Hole)> for Evaluator {
    fn from((player, dealer): (Hole, Hole)) -> Self {
        Self { player, dealer }
    }
}

impl Evaluator {
    pub fn find_bonus(&self) -> Option<Bonus> {
        match (is_blackjack(&self.player), is_blackjack(&self.dealer)) {
            (true, true) => self.find_progressive(),
            (true, false) => self.find_ace_jack().or_else(|| Some(Bonus::OtherBlackjack)),
            (false, _) => None,
        }
    }

    /// both sides have blackjack. only a suited player A-J against a dealer
    /// A-J pays; every other pairing of blackjacks pays nothing.
    fn find_progressive(&self) -> Option<Bonus> {
        let player = Option::<AceJack>::from(self.player);
        let dealer = Option::<AceJack>::from(self.dealer);
        match (player, dealer) {
            (Some(AceJack::Suited), Some(AceJack::Suited)) => Some(Bonus::MajorProgressive),
            (Some(AceJack::Suited), Some(_)) => Some(Bonus::MinorProgressive),
            _ => None,
        }
    }

    fn find_ace_jack(&self) -> Option<Bonus> {
        Option::<AceJack>::from(self.player).map(|aj| match aj {
            AceJack::Suited => Bonus::SuitedAceJack,
            AceJack::Colored => Bonus::ColoredAceJack,
            AceJack::Mixed => Bonus::MixedAceJack,
        })
    }
}
