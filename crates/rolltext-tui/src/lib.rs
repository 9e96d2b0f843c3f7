pub mod app;
pub mod config;
pub mod event;
pub mod input;
pub mod theme;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

pub use app::App;
pub use config::AnimationConfigExt;
pub use theme::Theme;

use widgets::{StatusBarWidget, TickerPanelWidget};

/// Draw the whole demo screen
pub fn draw(frame: &mut Frame, app: &App) {
    let [main, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    TickerPanelWidget::render(frame, main, app);
    StatusBarWidget::render(frame, status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use rolltext_core::AppConfig;

    #[test]
    fn test_draw_shows_tickers() {
        let app = App::new(&AppConfig::default(), Theme::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("counter"));
        assert!(text.contains("1234"));
        assert!(text.contains("ABC123"));
        assert!(text.contains("$ 0.00"));
        assert!(text.contains("RUNNING"));
    }
}
