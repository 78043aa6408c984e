use crate::simulation::Category;

/// Premium seven-card hands that pay on the Hold'em side bet, in priority
/// order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Premium {
    RoyalFlush,
    /// all five board cards form the royal
    CommunityRoyal,
    StraightFlush,
    FourOAK,
    FullHouse,
}

impl Category for Premium {
    fn all() -> &'static [Self] {
        &[
            Premium::RoyalFlush,
            Premium::CommunityRoyal,
            Premium::StraightFlush,
            Premium::FourOAK,
            Premium::FullHouse,
        ]
    }
}

impl std::fmt::Display for Premium {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(match self {
            Premium::RoyalFlush => "Royal Flush",
            Premium::CommunityRoyal => "Community Royal",
            Premium::StraightFlush => "Straight Flush",
            Premium::FourOAK => "Four of a Kind",
            Premium::FullHouse => "Full House",
        })
    }
}
