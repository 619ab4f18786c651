//! Zone Registry
//!
//! The five simulated ocean depth bands, each paired with one representative
//! species. Everything here is static: the scientific name is the WoRMS
//! lookup key, the rest is display copy for the zone page.
//!
//! | Zone     | Species                     | Common name           |
//! |----------|-----------------------------|-----------------------|
//! | sunlit   | Thunnus thynnus             | Atlantic Bluefin Tuna |
//! | twilight | Myctophum punctatum         | Lantern Fish          |
//! | midnight | Vampyroteuthis infernalis   | Vampire Squid         |
//! | abyss    | Grimpoteuthis discoveryi    | Dumbo Octopus         |
//! | trench   | Pseudoliparis swirei        | Marina Snailfish      |

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the five fixed depth bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Sunlit,
    Twilight,
    Midnight,
    Abyss,
    Trench,
}

/// Static display copy for a zone page
#[derive(Debug, Clone, Copy)]
pub struct ZoneCopy {
    pub title: &'static str,
    pub common_name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

// ============================================================================
// Registry Data
// ============================================================================

const SUNLIT: ZoneCopy = ZoneCopy {
    title: "Sunlit Zone",
    common_name: "Atlantic Bluefin Tuna",
    description: "The Atlantic bluefin tuna is a powerful, fast, predator that cruises the sunlit surface waters in search of smaller fish and squid. It can reach incredible speeds and is one of the largest bony fish in the ocean. Known for their powerful migrations, some individuals cross entire oceans during their lifetime",
    image: "tuna.jpg",
};

const TWILIGHT: ZoneCopy = ZoneCopy {
    title: "Twilight Zone",
    common_name: "Lantern Fish",
    description: "Lanternfish get their name from the rows of natural lights that cover their bodies like glowing constellations. These lights help them communicate, camouflage, and confuse predators. They are a part of the 'daily vertical migration', rising toward the surface at night to feed and returning to the depths by day.",
    image: "lantern.jpg",
};

const MIDNIGHT: ZoneCopy = ZoneCopy {
    title: "Midnight Zone",
    common_name: "Vampire Squid",
    description: "Despite its name, the vampire squid is a gentle creature that does not attack living prey. It floats through the dark midwaters using minimal energy and feeds on drifting marine snow. Its reddish skin, cloak-like arms, and glowing blue eyes give it a striking, eerie appearance in the darkness.",
    image: "squid.jpg",
};

const ABYSS: ZoneCopy = ZoneCopy {
    title: "Abyss",
    common_name: "Dumbo Octopus",
    description: "Dumbo octopuses are named for their charming ear like fins, which resemble the floppy ears of Dumbo the elephant. These fins allow them to glide gracefully through deep ocean waters. Found at depths up to 7,000 meters, they flap and drift in a slow, ghostly movement that looks more like flying than swimming.",
    image: "dumbo.jpg",
};

const TRENCH: ZoneCopy = ZoneCopy {
    title: "Deep Trenches",
    common_name: "Marina Snailfish",
    description: "The Mariana snailfish holds the record as one of the deepest living fish ever discovered. Found more than 8,000 meters below the surface, its soft, scaleless body and flexible bones help it withstand enormous pressure. Far from being sluggish, these tiny fish are surprisingly active predators in their extreme environment.",
    image: "snailfish.jpg",
};

impl Zone {
    /// All zones, shallowest first.
    pub const ALL: [Zone; 5] = [
        Zone::Sunlit,
        Zone::Twilight,
        Zone::Midnight,
        Zone::Abyss,
        Zone::Trench,
    ];

    /// Scientific name used as the WoRMS lookup key.
    pub fn scientific_name(self) -> &'static str {
        match self {
            Zone::Sunlit => "Thunnus thynnus",
            Zone::Twilight => "Myctophum punctatum",
            Zone::Midnight => "Vampyroteuthis infernalis",
            Zone::Abyss => "Grimpoteuthis discoveryi",
            Zone::Trench => "Pseudoliparis swirei",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Zone::Sunlit => "sunlit",
            Zone::Twilight => "twilight",
            Zone::Midnight => "midnight",
            Zone::Abyss => "abyss",
            Zone::Trench => "trench",
        }
    }

    /// Route path of the zone page, e.g. "/sunlit"
    pub fn path(self) -> &'static str {
        match self {
            Zone::Sunlit => "/sunlit",
            Zone::Twilight => "/twilight",
            Zone::Midnight => "/midnight",
            Zone::Abyss => "/abyss",
            Zone::Trench => "/trench",
        }
    }

    pub fn copy(self) -> &'static ZoneCopy {
        match self {
            Zone::Sunlit => &SUNLIT,
            Zone::Twilight => &TWILIGHT,
            Zone::Midnight => &MIDNIGHT,
            Zone::Abyss => &ABYSS,
            Zone::Trench => &TRENCH,
        }
    }

    pub fn title(self) -> &'static str {
        self.copy().title
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Slug that does not name any zone
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown zone: {0}")]
pub struct UnknownZone(pub String);

impl FromStr for Zone {
    type Err = UnknownZone;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Zone::ALL
            .into_iter()
            .find(|zone| zone.slug() == slug)
            .ok_or_else(|| UnknownZone(s.to_string()))
    }
}
