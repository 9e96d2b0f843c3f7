use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::alphabet::{AlphabetSet, NUMBERS};
use crate::diff::DiffStrategy;
use crate::easing::EasingType;
use crate::format::{CurrencyPlacement, LocaleFormat};
use crate::path::Direction;
use crate::transition::{BusyPolicy, ColumnAlignment, TransitionOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub alphabets: AlphabetConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Named animation durations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationPreset {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl DurationPreset {
    pub fn millis(self) -> u64 {
        match self {
            DurationPreset::Slow => 800,
            DurationPreset::Medium => 400,
            DurationPreset::Fast => 200,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Length of one transition in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Preferred scrolling direction
    #[serde(default)]
    pub direction: Direction,
    /// Diff variant: "full" or "simple"
    #[serde(default)]
    pub strategy: DiffStrategy,
    /// How columns are paired with diff actions
    #[serde(default)]
    pub alignment: ColumnAlignment,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Animate text changes at all
    #[serde(default = "default_true")]
    pub animate_changes: bool,
    /// What to do with a target that arrives mid-animation
    #[serde(default)]
    pub on_busy: BusyPolicy,
    /// Frame rate while an animation is running
    #[serde(default = "default_fps")]
    pub fps: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            direction: Direction::default(),
            strategy: DiffStrategy::default(),
            alignment: ColumnAlignment::default(),
            easing: EasingType::default(),
            animate_changes: default_true(),
            on_busy: BusyPolicy::default(),
            fps: default_fps(),
        }
    }
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Options for a transition controller
    pub fn transition_options(&self) -> TransitionOptions {
        TransitionOptions {
            duration: self.duration(),
            direction: self.direction,
            strategy: self.strategy,
            alignment: self.alignment,
            easing: self.easing,
            animate_changes: self.animate_changes,
            on_busy: self.on_busy,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlphabetConfig {
    /// Ordered character lists; earlier lists win when several contain a pair
    #[serde(default = "default_lists")]
    pub lists: Vec<String>,
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self {
            lists: default_lists(),
        }
    }
}

impl AlphabetConfig {
    pub fn build(&self) -> crate::Result<AlphabetSet> {
        AlphabetSet::new(&self.lists)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub currency_placement: CurrencyPlacement,
    /// Fraction digits for decimal and currency values
    #[serde(default = "default_decimals")]
    pub decimals: usize,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
            currency_symbol: default_currency_symbol(),
            currency_placement: CurrencyPlacement::default(),
            decimals: default_decimals(),
        }
    }
}

impl LocaleConfig {
    pub fn format(&self) -> LocaleFormat {
        LocaleFormat {
            decimal_separator: self.decimal_separator,
            grouping_separator: self.grouping_separator,
            currency_symbol: self.currency_symbol.clone(),
            currency_placement: self.currency_placement,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds while idle
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Interval between demo value changes in milliseconds
    #[serde(default = "default_demo_interval")]
    pub demo_interval_ms: u64,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            demo_interval_ms: default_demo_interval(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Hex colors (e.g. "#d4be98") for the terminal widget
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Resting and centered glyphs
    pub foreground: Option<String>,
    /// Glyphs scrolling in or out
    pub dim: Option<String>,
    /// Labels and highlights
    pub accent: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DurationPreset::default().millis()
}

fn default_fps() -> u32 {
    60
}

fn default_lists() -> Vec<String> {
    vec![NUMBERS.to_string()]
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_grouping_separator() -> char {
    ','
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_decimals() -> usize {
    2
}

fn default_tick_rate() -> u64 {
    100
}

fn default_demo_interval() -> u64 {
    2000
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults when it is missing
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/rolltext/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("rolltext")
            .join("config.toml")
    }
}
