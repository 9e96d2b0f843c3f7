use anyhow::Result;
use serde::Serialize;

use rolltext_core::{AppConfig, ColumnAction, DiffStrategy, Symbol};

use super::alphabet_set;

#[derive(Debug, Serialize)]
struct DiffReport<'a> {
    from: &'a str,
    to: &'a str,
    strategy: DiffStrategy,
    actions: Vec<ColumnAction>,
}

pub fn run(
    config: &AppConfig,
    from: &str,
    to: &str,
    simple: bool,
    lists: &[String],
    json: bool,
) -> Result<()> {
    let alphabets = alphabet_set(config, lists)?;
    let strategy = if simple {
        DiffStrategy::Simple
    } else {
        config.animation.strategy
    };

    let source: Vec<Symbol> = from.chars().collect();
    let target: Vec<Symbol> = to.chars().collect();
    let actions = strategy.compute(&source, &target, alphabets.supported());

    let report = DiffReport {
        from,
        to,
        strategy,
        actions,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render(&report));
    }

    Ok(())
}

fn render(report: &DiffReport) -> String {
    let actions: Vec<&str> = report
        .actions
        .iter()
        .map(|action| match action {
            ColumnAction::Same => "same",
            ColumnAction::Insert => "insert",
            ColumnAction::Delete => "delete",
        })
        .collect();
    format!(
        "from:    {:?}\nto:      {:?}\nactions: {}",
        report.from,
        report.to,
        actions.join(" ")
    )
}
