use crate::simulation::Category;

/// Outcomes of the blackjack side bet, highest tier first.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Bonus {
    /// player and dealer both hold a suited A-J
    MajorProgressive,
    /// player holds a suited A-J, dealer an unsuited one
    MinorProgressive,
    SuitedAceJack,
    /// same color, different suits
    ColoredAceJack,
    /// red and black
    MixedAceJack,
    /// any blackjack without a jack
    OtherBlackjack,
}

impl Category for Bonus {
    fn all() -> &'static [Self] {
        &[
            Bonus::MajorProgressive,
            Bonus::MinorProgressive,
            Bonus::SuitedAceJack,
            Bonus::ColoredAceJack,
            Bonus::MixedAceJack,
            Bonus::OtherBlackjack,
        ]
    }
}

impl std::fmt::Display for Bonus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Bonus::MajorProgressive => "Major Progressive",
            Bonus::MinorProgressive => "Minor Progressive",
            Bonus::SuitedAceJack => "Suited A/J",
            Bonus::ColoredAceJack => "Colored A/J",
            Bonus::MixedAceJack => "Mixed A/J",
            Bonus::OtherBlackjack => "Other BJ",
        })
    }
}
