/// Reward tier for the number of focus sessions completed today.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Badge {
    JustStarting,
    OnFire,
    RisingStar,
    StrongWork,
    Rocketing,
    Royalty,
    SuperStar,
    Legend,
}

/// Minimum session count for each tier, lowest first.
const TIERS: [(u32, Badge); 8] = [
    (0, Badge::JustStarting),
    (1, Badge::OnFire),
    (3, Badge::RisingStar),
    (5, Badge::StrongWork),
    (8, Badge::Rocketing),
    (10, Badge::Royalty),
    (15, Badge::SuperStar),
    (20, Badge::Legend),
];

impl Badge {
    pub fn for_sessions(today: u32) -> Self {
        TIERS
            .iter()
            .rev()
            .find(|(min, _)| today >= *min)
            .map(|(_, badge)| *badge)
            .unwrap_or(Badge::JustStarting)
    }

    pub fn label(self) -> &'static str {
        match self {
            Badge::JustStarting => "Just Starting",
            Badge::OnFire => "On Fire!",
            Badge::RisingStar => "Rising Star",
            Badge::StrongWork => "Strong Work",
            Badge::Rocketing => "Rocketing",
            Badge::Royalty => "Royalty",
            Badge::SuperStar => "Super Star",
            Badge::Legend => "Legend",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Badge::JustStarting => "🌱",
            Badge::OnFire => "🔥",
            Badge::RisingStar => "⭐",
            Badge::StrongWork => "💪",
            Badge::Rocketing => "🚀",
            Badge::Royalty => "👑",
            Badge::SuperStar => "🌟",
            Badge::Legend => "💎",
        }
    }
}
