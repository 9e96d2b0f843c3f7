use anyhow::Result;

use rolltext_core::{format, AppConfig};

pub fn run(config: &AppConfig, amount: f64, decimals: Option<usize>, currency: bool) -> Result<()> {
    println!("{}", render(config, amount, decimals, currency));
    Ok(())
}

fn render(config: &AppConfig, amount: f64, decimals: Option<usize>, currency: bool) -> String {
    let locale = config.locale.format();
    let decimals = decimals
        .unwrap_or(config.locale.decimals)
        .min(format::MAX_DECIMALS);
    if currency {
        format::format_currency(amount, decimals, &locale).to_display_string()
    } else if decimals == 0 && amount.fract() == 0.0 && amount.abs() < i64::MAX as f64 {
        format::format_integer(amount as i64, locale.grouping_separator, true)
    } else {
        format::format_decimal(amount, decimals, &locale, true)
    }
}
