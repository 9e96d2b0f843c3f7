use std::time::{Duration, Instant};

use anyhow::Result;

use rolltext_core::{
    AppConfig, ColumnAction, ColumnState, Direction, Symbol, TransitionController, EMPTY,
};

use super::alphabet_set;

pub fn run(
    config: &AppConfig,
    from: &str,
    to: &str,
    direction: Option<Direction>,
    lists: &[String],
) -> Result<()> {
    let alphabets = alphabet_set(config, lists)?;

    let mut options = config.animation.transition_options();
    options.animate_changes = true;
    options.duration = options.duration.max(Duration::from_millis(1));
    if let Some(direction) = direction {
        options.direction = direction;
    }

    let mut controller = TransitionController::new(from, alphabets, options);
    controller.set_target_at(to, Instant::now());

    println!(
        "{:>3}  {:<7} {:>7} {:>7} {:>6} {:>6} {:>8}",
        "col", "action", "from", "to", "start", "end", "distance"
    );
    for (i, column) in controller.columns().iter().enumerate() {
        println!("{}", render_column(i, column));
    }

    Ok(())
}

fn show(symbol: Symbol) -> String {
    if symbol == EMPTY {
        "empty".to_string()
    } else {
        format!("{:?}", symbol)
    }
}

fn render_column(index: usize, column: &ColumnState) -> String {
    let action = match column.action {
        ColumnAction::Same => "same",
        ColumnAction::Insert => "insert",
        ColumnAction::Delete => "delete",
    };
    format!(
        "{:>3}  {:<7} {:>7} {:>7} {:>6} {:>6} {:>8}",
        index,
        action,
        show(column.current),
        show(column.target),
        column.path.start(),
        column.path.end(),
        column.path.distance()
    )
}
