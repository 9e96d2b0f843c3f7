use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{direction_name, strategy_name, App};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => format!(
                " {} | direction: {} | diff: {} | dropped: {}",
                if app.paused { "PAUSED" } else { "RUNNING" },
                direction_name(app.options.direction),
                strategy_name(app.options.strategy),
                app.dropped
            ),
        };

        let help_hint = " q:quit space:pause n:next d:direction s:diff ";
        let padding_len = area
            .width
            .saturating_sub(status_text.chars().count() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(status_text, app.theme.status_bar()),
            Span::styled(" ".repeat(padding_len), app.theme.status_bar()),
            Span::styled(help_hint, app.theme.status_hint()),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
