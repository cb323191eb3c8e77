use super::ui;
use crate::core::{RateProvider, RateSnapshot};
use anyhow::Result;
use chrono::{DateTime, Utc};

fn format_time(time: Option<DateTime<Utc>>, fallback: &str) -> String {
    time.map_or_else(
        || fallback.to_string(),
        |t| t.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}

impl RateSnapshot {
    pub fn display_as_table(&self) -> String {
        let mut table = ui::new_styled_table();
        table.set_header(vec![ui::header_cell("Currency"), ui::header_cell("Rate")]);

        for (code, rate) in &self.rates {
            table.add_row(vec![
                comfy_table::Cell::new(code),
                ui::number_cell(format!("{rate:.4}")),
            ]);
        }

        let mut output = format!(
            "Rates for 1 {}\n\n",
            ui::style_text(&self.base_code, ui::StyleType::Title)
        );
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\nLast update: {}\nNext update: {}",
            format_time(self.last_update(), &self.last_update_utc),
            ui::style_text(
                &format_time(self.next_update(), &self.next_update_utc),
                ui::StyleType::Subtle
            )
        ));
        output
    }
}

pub async fn run(provider: &dyn RateProvider, base: &str) -> Result<()> {
    let spinner = ui::new_spinner(&format!("Fetching {base} rates..."));
    let result = provider.latest(base).await;
    spinner.finish_and_clear();

    println!("{}", result?.display_as_table());
    Ok(())
}
