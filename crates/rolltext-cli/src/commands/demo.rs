use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

use rolltext_core::AppConfig;
use rolltext_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    AnimationConfigExt, Theme,
};

/// Signal from the value generator that every ticker should move on
struct DemoTick;

pub async fn run(config: AppConfig) -> Result<()> {
    let theme = Theme::from_config(&config.ui.theme);
    let mut app = App::new(&config, theme)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms)
        .with_animation_tick(config.animation.animation_tick_duration());

    // Value generator
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel::<DemoTick>();
    let interval = Duration::from_millis(config.ui.demo_interval_ms.max(1));
    let generator = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // First tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            if tick_tx.send(DemoTick).is_err() {
                break;
            }
        }
    });

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("rolltext"))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(smooth = config.animation.is_smooth(), "Starting demo");
    let result = run_loop(&mut terminal, &mut app, &event_handler, &mut tick_rx);

    generator.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
    tick_rx: &mut mpsc::UnboundedReceiver<DemoTick>,
) -> Result<()> {
    loop {
        let now = Instant::now();

        // Drain generator ticks (non-blocking)
        while tick_rx.try_recv().is_ok() {
            app.on_demo_tick(now);
        }

        let animating = app.update_at(now);

        terminal.draw(|frame| rolltext_tui::draw(frame, app))?;

        if let Some(event) = event_handler.next(animating)? {
            match event {
                AppEvent::Key(key) => handle_action(app, handle_key_event(key)),
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_action(app: &mut App, action: Action) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::TogglePause => app.toggle_pause(),
        Action::Advance => app.advance_at(Instant::now()),
        Action::CycleDirection => app.cycle_direction(),
        Action::ToggleStrategy => app.toggle_strategy(),
        Action::None => {}
    }
}
