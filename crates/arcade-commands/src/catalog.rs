//! Curated static link lists served by the lookup commands.

use arcade_common::ResourceCategory;

/// A named external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// Display name.
    pub name: &'static str,
    /// Target URL.
    pub url: &'static str,
}

const fn link(name: &'static str, url: &'static str) -> Link {
    Link { name, url }
}

const MAGAZINES: &[Link] = &[
    link(
        "Video Game History Foundation (Library/Archive)",
        "https://gamehistory.org/",
    ),
    link(
        "Internet Archive — video game magazines (search)",
        "https://archive.org/search?query=video+game+magazine",
    ),
    link("Retromags (index/community)", "https://retromags.com/"),
];

const BOOKS: &[Link] = &[
    link(
        "The Video Game Library (catalog)",
        "https://www.thevideogamelibrary.org/",
    ),
    link(
        "Internet Archive — game history books (search)",
        "https://archive.org/search?query=video+game+history+book",
    ),
];

const ARCHIVES: &[Link] = &[
    link(
        "Internet Archive — Software & Games",
        "https://archive.org/details/software",
    ),
    link("Video Game History Foundation", "https://gamehistory.org/"),
    link(
        "The Strong National Museum of Play (museum + digital)",
        "https://www.museumofplay.org/",
    ),
];

/// Official brand stores for gaming gear.
pub const GEAR_STORES: &[Link] = &[
    link("Logitech G", "https://www.logitechg.com/"),
    link("Razer", "https://www.razer.com/"),
    link("SteelSeries", "https://steelseries.com/"),
    link("Corsair", "https://www.corsair.com/"),
];

/// Major international game awards.
pub const AWARDS: &[Link] = &[
    link("The Game Awards", "https://thegameawards.com/"),
    link("BAFTA Games Awards", "https://www.bafta.org/awards/games"),
    link(
        "D.I.C.E. Awards (AIAS)",
        "https://www.interactive.org/awards/",
    ),
    link(
        "Game Developers Choice Awards (GDC)",
        "https://gdconf.com/awards",
    ),
    link(
        "Golden Joystick Awards",
        "https://www.gamesradar.com/goldenjoystickawards/",
    ),
    link("Independent Games Festival (IGF)", "https://igf.com/"),
];

/// Free-access resources for a category.
#[must_use]
pub const fn resources(category: ResourceCategory) -> &'static [Link] {
    match category {
        ResourceCategory::Magazines => MAGAZINES,
        ResourceCategory::Books => BOOKS,
        ResourceCategory::Archives => ARCHIVES,
    }
}
