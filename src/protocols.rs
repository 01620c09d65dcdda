//! Catalog of well-known application URI schemes.
//!
//! Used to suggest launch entries for installed applications (`steam://`,
//! `discord://`, ...). Whether a scheme is installed is not checked.

use serde::Serialize;

/// Grouping used when browsing the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolCategory {
    Game,
    Communication,
    Media,
    Productivity,
    Dev,
    Other,
}

impl ProtocolCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Communication => "communication",
            Self::Media => "media",
            Self::Productivity => "productivity",
            Self::Dev => "dev",
            Self::Other => "other",
        }
    }
}

/// A known application and the scheme that launches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AppProtocol {
    pub name: &'static str,
    pub protocol: &'static str,
    pub description: &'static str,
    pub category: ProtocolCategory,
}

const fn app(
    name: &'static str,
    protocol: &'static str,
    description: &'static str,
    category: ProtocolCategory,
) -> AppProtocol {
    AppProtocol {
        name,
        protocol,
        description,
        category,
    }
}

use ProtocolCategory::{Communication, Dev, Game, Media, Productivity};

pub const POPULAR_PROTOCOLS: &[AppProtocol] = &[
    app("Steam", "steam://", "Steam game platform", Game),
    app("Discord", "discord://", "Discord messenger", Communication),
    app("Telegram", "tg://", "Telegram messenger", Communication),
    app("Skype", "skype:", "Skype video calls", Communication),
    app("Zoom", "zoommtg://", "Zoom video conferencing", Communication),
    app("Spotify", "spotify:", "Spotify music service", Media),
    app("iTunes", "itunes://", "iTunes media player", Media),
    app("VLC", "vlc://", "VLC media player", Media),
    app("VS Code", "vscode://", "VS Code editor", Dev),
    app("Notion", "notion://", "Notion notes", Productivity),
    app("Slack", "slack://", "Slack team messenger", Communication),
    app("Microsoft Teams", "msteams://", "Microsoft Teams", Communication),
    app("WhatsApp", "whatsapp://", "WhatsApp messenger", Communication),
    app("Epic Games", "com.epicgames.launcher://", "Epic Games Store", Game),
    app("Battle.net", "battlenet://", "Blizzard Battle.net", Game),
    app("Origin", "origin://", "EA Origin", Game),
    app("Uplay", "uplay://", "Ubisoft Connect", Game),
    app("GOG Galaxy", "goggalaxy://", "GOG Galaxy", Game),
];

/// Catalog entries in `category`, or all of them for `"all"`.
///
/// An unknown category yields nothing.
pub fn by_category(category: &str) -> impl Iterator<Item = &'static AppProtocol> + '_ {
    POPULAR_PROTOCOLS
        .iter()
        .filter(move |p| category == "all" || p.category.as_str() == category)
}

/// Whether `url` uses an application scheme rather than plain web navigation.
///
/// ```
/// use launchdeck::protocols::is_custom_protocol;
///
/// assert!(is_custom_protocol("steam://rungameid/730"));
/// assert!(!is_custom_protocol("https://store.steampowered.com"));
/// assert!(!is_custom_protocol("spotify:track:1"));
/// ```
#[must_use]
pub fn is_custom_protocol(url: &str) -> bool {
    url.contains("://") && !url.starts_with("http://") && !url.starts_with("https://")
}
