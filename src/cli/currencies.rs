use super::ui;
use crate::core::currency::filter_currencies;

/// Lists catalogue codes matching `query`, several per row.
pub fn display_currencies(query: &str) -> String {
    let codes = filter_currencies(query);
    if codes.is_empty() {
        return ui::style_text("No results", ui::StyleType::Subtle);
    }

    let mut table = ui::new_styled_table();
    for row in codes.chunks(10) {
        table.add_row(row.to_vec());
    }
    table.to_string()
}

pub fn run(query: &str) {
    println!("{}", display_currencies(query));
}
