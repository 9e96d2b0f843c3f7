pub mod rolling_text;
mod status_bar;
mod ticker_panel;

pub use rolling_text::RollingText;
pub use status_bar::StatusBarWidget;
pub use ticker_panel::TickerPanelWidget;
