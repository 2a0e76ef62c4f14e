use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use reclink_cli::report::{CheckReport, ScoreReport};
use reclink_core::{FieldOutcome, ScoreBreakdown};

pub fn print_score(report: &ScoreReport) {
    println!("Model: {}", report.kind);
    if let Some(key) = &report.matching_key {
        println!("Matched on: {key}");
    }
    if let Some(breakdown) = &report.breakdown {
        print_breakdown(breakdown);
    }
    println!("Score: {}", report.score);
}

fn print_breakdown(breakdown: &ScoreBreakdown) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Outcome"),
        header_cell("Weight"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for contribution in &breakdown.contributions {
        let (outcome, weight) = match contribution.outcome {
            FieldOutcome::Agree => (
                Cell::new("agree").fg(Color::Green),
                weight_cell(contribution.weight),
            ),
            FieldOutcome::Disagree => (
                Cell::new("disagree").fg(Color::Red),
                weight_cell(contribution.weight),
            ),
            FieldOutcome::Skipped => (dim_cell("skipped"), dim_cell("-")),
        };
        table.add_row(vec![Cell::new(&contribution.key), outcome, weight]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell(format!(
            "{} agree / {} disagree / {} skipped",
            breakdown.count(FieldOutcome::Agree),
            breakdown.count(FieldOutcome::Disagree),
            breakdown.count(FieldOutcome::Skipped)
        )),
        weight_cell(breakdown.total()).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

pub fn print_check(report: &CheckReport) {
    println!("Model: {}", report.kind);
    if !report.keys.is_empty() {
        println!("Identity keys (in order): {}", report.keys.join(", "));
    }
    if report.fields.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Comparator"),
        header_cell("m"),
        header_cell("u"),
        header_cell("Agree"),
        header_cell("Disagree"),
        header_cell("Problem"),
    ]);
    apply_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for field in &report.fields {
        table.add_row(vec![
            Cell::new(&field.key),
            Cell::new(&field.comparator),
            Cell::new(field.match_probability),
            Cell::new(field.unmatch_probability),
            weight_cell(field.agreement_weight),
            weight_cell(field.disagreement_weight),
            match &field.problem {
                Some(problem) => Cell::new(problem).fg(Color::Red),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
    if let Some((low, high)) = report.score_bounds {
        println!("Score range: {low:.4} (all disagree) to {high:.4} (all agree)");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn weight_cell(weight: f64) -> Cell {
    let cell = Cell::new(format!("{weight:+.4}"));
    if weight > 0.0 {
        cell.fg(Color::Green)
    } else if weight < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
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
