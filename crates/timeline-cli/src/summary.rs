use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use timeline_cli::axis::render_labelled_axis;
use timeline_core::{InvestorCard, TimelineView, to_query};
use timeline_model::ResolvedEvent;

const AXIS_WIDTH: usize = 32;

pub fn print_view(view: &TimelineView) {
    println!("Language: {}", view.lang);
    println!(
        "Showing {} of {} investors, {}-{}",
        view.cards.len(),
        view.total_records,
        view.state.year_range.min,
        view.state.year_range.max
    );
    if view.report.tag_text_reverted {
        println!("No investor matched the tag and search filters; showing everyone instead.");
    }
    if view.report.year_reverted {
        println!("No investor matched the year range; showing everyone instead.");
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Investor"),
        header_cell("Region"),
        header_cell("Tags"),
        header_cell("Since"),
        header_cell("Timeline"),
        header_cell("Highlights"),
    ]);
    apply_view_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);
    for card in &view.cards {
        table.add_row(card_row(card));
    }
    println!("{table}");
    println!("Query: ?{}", to_query(&view.lang, &view.state));
}

pub fn print_json(view: &TimelineView) -> Result<()> {
    let json = serde_json::to_string_pretty(view).context("serialize view")?;
    println!("{json}");
    Ok(())
}

fn card_row(card: &InvestorCard) -> Vec<Cell> {
    let record = &card.record;
    let name = if record.name.is_empty() {
        &record.id
    } else {
        &record.name
    };
    let mut axis = render_labelled_axis(&card.geometry, AXIS_WIDTH);
    if card.geometry.showing_all_events {
        axis.push_str("\n(no events in range)");
    }
    vec![
        Cell::new(name)
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        dim_cell(&record.region),
        tags_cell(&record.tags),
        record
            .first_year()
            .map_or_else(|| dim_cell("-"), Cell::new),
        Cell::new(axis),
        highlights_cell(&card.highlights),
    ]
}

fn tags_cell(tags: &[String]) -> Cell {
    if tags.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(tags.join(", ")).fg(Color::Yellow)
    }
}

fn highlights_cell(events: &[ResolvedEvent]) -> Cell {
    if events.is_empty() {
        return dim_cell("-");
    }
    let lines: Vec<String> = events
        .iter()
        .map(|event| match event.year {
            Some(year) => format!("{year}  {}", event.text),
            None => format!("----  {}", event.text),
        })
        .collect();
    Cell::new(lines.join("\n"))
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_view_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(165);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(18)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::UpperBoundary(Width::Percentage(15)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::LowerBoundary(Width::Fixed(44)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
