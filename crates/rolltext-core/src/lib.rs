pub mod alphabet;
pub mod config;
pub mod currency;
pub mod diff;
pub mod easing;
pub mod error;
pub mod format;
pub mod path;
pub mod sample;
pub mod transition;

pub use alphabet::{Alphabet, AlphabetSet, Symbol, EMPTY};
pub use config::{AppConfig, DurationPreset};
pub use currency::CurrencyTicker;
pub use diff::{compute_actions, compute_actions_simple, ColumnAction, DiffStrategy};
pub use easing::EasingType;
pub use error::{Error, Result};
pub use format::{CurrencyPlacement, CurrencyText, LocaleFormat};
pub use path::{resolve_path, AnimationPath, Direction};
pub use sample::{sample, SampleWindow};
pub use transition::{
    BusyPolicy, ColumnAlignment, ColumnState, TargetOutcome, TransitionController,
    TransitionOptions,
};
