use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VoiceLocale {
    Chinese,
    English,
    Japanese,
    Korean
}

impl VoiceLocale {
    #[inline]
    pub fn list() -> &'static [VoiceLocale] {
        &[Self::Chinese, Self::English, Self::Japanese, Self::Korean]
    }

    /// Convert enum value to its name
    ///
    /// `VoiceLocale::English` -> `English`
    #[inline]
    pub fn to_name(&self) -> &'static str {
        match self {
            Self::Chinese  => "Chinese",
            Self::English  => "English",
            Self::Japanese => "Japanese",
            Self::Korean   => "Korean"
        }
    }

    /// Convert enum value to its display name
    ///
    /// `VoiceLocale::English` -> `英语`
    #[inline]
    pub fn to_display_name(&self) -> &'static str {
        match self {
            Self::Chinese  => "汉语",
            Self::English  => "英语",
            Self::Japanese => "日语",
            Self::Korean   => "韩语"
        }
    }

    /// Convert enum value to its code, used as a voice package key in manifests
    ///
    /// `VoiceLocale::English` -> `en-us`
    #[inline]
    pub fn to_code(&self) -> &'static str {
        match self {
            Self::Chinese  => "zh-cn",
            Self::English  => "en-us",
            Self::Japanese => "ja-jp",
            Self::Korean   => "ko-kr"
        }
    }

    /// Convert enum value to its files listing name
    ///
    /// `VoiceLocale::English` -> `Audio_English(US)_pkg_version`
    #[inline]
    pub fn to_listing(&self) -> &'static str {
        match self {
            Self::Chinese  => "Audio_Chinese_pkg_version",
            Self::English  => "Audio_English(US)_pkg_version",
            Self::Japanese => "Audio_Japanese_pkg_version",
            Self::Korean   => "Audio_Korean_pkg_version"
        }
    }

    #[inline]
    /// Try to convert string to enum
    ///
    /// - `English` -> `VoiceLocale::English`
    /// - `英语` -> `VoiceLocale::English`
    /// - `en-us` -> `VoiceLocale::English`
    /// - `Audio_English(US)_pkg_version` -> `VoiceLocale::English`
    pub fn from_str<T: AsRef<str>>(str: T) -> Option<Self> {
        let str = str.as_ref();

        Self::list().iter()
            .find(|locale| {
                locale.to_name().eq_ignore_ascii_case(str) ||
                locale.to_display_name() == str ||
                locale.to_code() == str ||
                locale.to_listing() == str
            })
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str() {
        for locale in VoiceLocale::list() {
            assert_eq!(VoiceLocale::from_str(locale.to_name()), Some(*locale));
            assert_eq!(VoiceLocale::from_str(locale.to_display_name()), Some(*locale));
            assert_eq!(VoiceLocale::from_str(locale.to_code()), Some(*locale));
            assert_eq!(VoiceLocale::from_str(locale.to_listing()), Some(*locale));
        }

        assert_eq!(VoiceLocale::from_str("japanese"), Some(VoiceLocale::Japanese));
        assert_eq!(VoiceLocale::from_str("Klingon"), None);
    }
}
