use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    core::{
        month::Month,
        row::{Breakdown, Totals},
    },
    fmt::WholeKroner,
    quantity::cost::Kroner,
    rates::MonthlyRate,
};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

fn difference_color(difference: Kroner) -> Color {
    if difference <= Kroner::ZERO { Color::Green } else { Color::Red }
}

pub fn build_breakdown_table(breakdown: &Breakdown) -> Table {
    let mut table = base_table();
    table.set_header(vec![
        "Month",
        "Consumption",
        "Spot",
        "Adjustment",
        "Subsidy",
        "Norgespris",
        "Strømstøtte",
        "Difference",
    ]);
    for row in &breakdown.rows {
        table.add_row(vec![
            Cell::new(row.month).add_attribute(Attribute::Dim),
            Cell::new(row.consumption).set_alignment(CellAlignment::Right),
            Cell::new(row.spot_average).set_alignment(CellAlignment::Right),
            Cell::new(row.adjustment)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(row.effective_subsidy).set_alignment(CellAlignment::Right),
            Cell::new(row.flat_rate_cost).set_alignment(CellAlignment::Right),
            Cell::new(row.market_cost).set_alignment(CellAlignment::Right),
            Cell::new(row.difference)
                .set_alignment(CellAlignment::Right)
                .fg(difference_color(row.difference)),
        ]);
    }
    let totals = &breakdown.totals;
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(""),
        Cell::new(totals.flat_rate).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(totals.market).set_alignment(CellAlignment::Right).add_attribute(Attribute::Bold),
        Cell::new(totals.difference)
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold)
            .fg(difference_color(totals.difference)),
    ]);
    table
}

pub fn build_summary_table(totals: &Totals) -> Table {
    let mut table = base_table();
    table
        .set_header(vec![
            Cell::from("Norgespris"),
            Cell::from("Strømstøtte"),
            Cell::from("Subsidy paid"),
            Cell::from("Difference"),
        ])
        .add_row(vec![
            Cell::new(WholeKroner(totals.flat_rate)),
            Cell::new(WholeKroner(totals.market)),
            Cell::new(WholeKroner(totals.subsidy)),
            Cell::new(WholeKroner(totals.difference)).fg(difference_color(totals.difference)),
        ]);
    table
}

pub fn build_rates_table(rows: &[(Month, MonthlyRate)]) -> Table {
    let mut table = base_table();
    table.set_header(vec!["Month", "Spot average", "Subsidy average"]);
    for (month, rate) in rows {
        table.add_row(vec![
            Cell::new(month).add_attribute(Attribute::Dim),
            Cell::new(rate.spot_average).set_alignment(CellAlignment::Right),
            Cell::new(rate.subsidy_average).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}
