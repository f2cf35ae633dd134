use serde::{Serialize, Deserialize};

use crate::voice_data::locale::VoiceLocale;

/// Key of the game selected by default
pub const DEFAULT_GAME: Game = Game::Genshin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Game {
    Genshin,
    StarRail,
    Zzz
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        DEFAULT_GAME
    }
}

impl Game {
    #[inline]
    pub fn list() -> &'static [Game] {
        &[Self::Genshin, Self::StarRail, Self::Zzz]
    }

    /// Game key used in the files API
    ///
    /// `Game::Genshin` -> `hk4e`
    #[inline]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Genshin  => "hk4e",
            Self::StarRail => "hkrpg",
            Self::Zzz      => "nap"
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Genshin  => "原神",
            Self::StarRail => "崩坏：星穹铁道",
            Self::Zzz      => "绝区零"
        }
    }

    #[inline]
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Genshin  => "/icon/hk4e.png",
            Self::StarRail => "/icon/hkrpg.png",
            Self::Zzz      => "/icon/nap.png"
        }
    }

    /// Voiceover languages which have separate files listings
    #[inline]
    pub fn voice_locales(&self) -> &'static [VoiceLocale] {
        match self {
            Self::Genshin => VoiceLocale::list(),

            Self::StarRail |
            Self::Zzz => &[]
        }
    }

    #[inline]
    pub fn from_key<T: AsRef<str>>(key: T) -> Option<Self> {
        Self::list().iter()
            .find(|game| game.key() == key.as_ref())
            .copied()
    }
}

impl std::fmt::Display for Game {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        for game in Game::list() {
            assert_eq!(Game::from_key(game.key()), Some(*game));
        }

        assert_eq!(Game::from_key("bh3"), None);
        assert_eq!(Game::default().to_string(), "hk4e");
    }

    #[test]
    fn voice_locales() {
        assert_eq!(Game::Genshin.voice_locales().len(), 4);
        assert!(Game::Zzz.voice_locales().is_empty());
    }
}
