//! User preferences and the settings store
//!
//! `Settings` is a small `Copy` record. The store only supports wholesale
//! replacement; single-field edits go through the `with_*` builders, which
//! copy the current record and change one field.

use serde::Deserialize;
use tracing::info;

/// Sign language used for recognition and playback
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    British,
    Vietnamese,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::British, Language::Vietnamese];

    /// Full name shown in the language picker
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "American Sign Language (ASL)",
            Language::British => "British Sign Language (BSL)",
            Language::Vietnamese => "Vietnamese Sign Language (VSL)",
        }
    }
}

/// Voice used when speaking detected text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceType {
    Male,
    #[default]
    Female,
    Neutral,
}

impl VoiceType {
    pub const ALL: [VoiceType; 3] = [VoiceType::Male, VoiceType::Female, VoiceType::Neutral];

    pub fn label(&self) -> &'static str {
        match self {
            VoiceType::Male => "Male",
            VoiceType::Female => "Female",
            VoiceType::Neutral => "Neutral",
        }
    }
}

/// Text size for translated output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn label(&self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }

    /// Body text size in points
    pub fn points(&self) -> f32 {
        match self {
            FontSize::Small => 13.0,
            FontSize::Medium => 15.0,
            FontSize::Large => 18.0,
        }
    }
}

/// The user's preference record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    pub language: Language,
    pub voice_type: VoiceType,
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub vibration_feedback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::English,
            voice_type: VoiceType::Female,
            font_size: FontSize::Medium,
            high_contrast: false,
            vibration_feedback: true,
        }
    }
}

impl Settings {
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn with_voice_type(self, voice_type: VoiceType) -> Self {
        Self { voice_type, ..self }
    }

    pub fn with_font_size(self, font_size: FontSize) -> Self {
        Self { font_size, ..self }
    }

    pub fn with_high_contrast(self, high_contrast: bool) -> Self {
        Self {
            high_contrast,
            ..self
        }
    }

    pub fn with_vibration_feedback(self, vibration_feedback: bool) -> Self {
        Self {
            vibration_feedback,
            ..self
        }
    }
}

/// Process-wide holder of the current `Settings`
#[derive(Clone, Debug, Default)]
pub struct SettingsStore {
    current: Settings,
}

impl SettingsStore {
    pub fn new(initial: Settings) -> Self {
        Self { current: initial }
    }

    /// Current settings, by value
    pub fn get(&self) -> Settings {
        self.current
    }

    /// Replace the whole record
    pub fn replace(&mut self, next: Settings) {
        if next != self.current {
            info!("[SETTINGS] Replaced: {:?} -> {:?}", self.current, next);
        }
        self.current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_first_launch() {
        let settings = Settings::default();
        assert_eq!(settings.language, Language::English);
        assert_eq!(settings.voice_type, VoiceType::Female);
        assert_eq!(settings.font_size, FontSize::Medium);
        assert!(!settings.high_contrast);
        assert!(settings.vibration_feedback);
    }

    #[test]
    fn test_single_field_replace_keeps_other_fields() {
        let mut store = SettingsStore::new(
            Settings::default()
                .with_high_contrast(true)
                .with_voice_type(VoiceType::Neutral),
        );
        let before = store.get();

        store.replace(before.with_language(Language::Vietnamese));
        let after = store.get();

        assert_eq!(after.language, Language::Vietnamese);
        assert_eq!(Settings { language: before.language, ..after }, before);
    }

    #[test]
    fn test_every_builder_changes_exactly_one_field() {
        let base = Settings::default();
        let changed = [
            base.with_language(Language::British),
            base.with_voice_type(VoiceType::Male),
            base.with_font_size(FontSize::Large),
            base.with_high_contrast(true),
            base.with_vibration_feedback(false),
        ];

        for next in changed {
            let diffs = [
                next.language != base.language,
                next.voice_type != base.voice_type,
                next.font_size != base.font_size,
                next.high_contrast != base.high_contrast,
                next.vibration_feedback != base.vibration_feedback,
            ];
            assert_eq!(diffs.iter().filter(|d| **d).count(), 1, "{:?}", next);
        }
    }

    #[test]
    fn test_parse_partial_settings_from_toml() {
        let settings: Settings = toml::from_str(
            r#"
            language = "british"
            font_size = "large"
        "#,
        )
        .unwrap();
        assert_eq!(settings.language, Language::British);
        assert_eq!(settings.font_size, FontSize::Large);
        assert_eq!(settings.voice_type, VoiceType::Female);
        assert!(settings.vibration_feedback);
    }

    #[test]
    fn test_font_size_points_increase() {
        assert!(FontSize::Small.points() < FontSize::Medium.points());
        assert!(FontSize::Medium.points() < FontSize::Large.points());
    }
}
