pub mod locale;

pub mod prelude {
    pub use super::locale::VoiceLocale;
}
