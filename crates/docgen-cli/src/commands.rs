use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use tracing::info;

use docgen_ingest::{UploadedFile, analyze_files};
use docgen_model::{GenerationStrategy, TemplateId};
use docgen_template::spec_for;

use crate::cli::AnalyzeArgs;

/// Read and classify the given files, then print the resulting catalog.
pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let uploads: Vec<UploadedFile> = args
        .files
        .iter()
        .map(|path| UploadedFile::from_path(path.clone()))
        .collect();
    let catalog = analyze_files(&uploads)?;
    info!(
        file_count = uploads.len(),
        sheet_count = catalog.len(),
        "analysis complete"
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("File"),
        header_cell("Sheet"),
        header_cell("Role"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for entry in catalog.summaries() {
        table.add_row(vec![
            entry.index.to_string(),
            entry.file_name,
            entry.sheet_name,
            entry.role.to_string(),
            entry.row_count.to_string(),
            entry.columns.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// List every supported template with its strategy and sheet keywords.
pub fn run_templates() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Template"),
        header_cell("Strategy"),
        header_cell("Sheet keywords"),
    ]);
    apply_table_style(&mut table);
    for id in TemplateId::ALL {
        let spec = spec_for(id);
        table.add_row(vec![
            id.as_str().to_string(),
            strategy_label(spec.strategy).to_string(),
            spec.required_sheet_keywords.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn strategy_label(strategy: GenerationStrategy) -> &'static str {
    match strategy {
        GenerationStrategy::PerRow => "one document per row",
        GenerationStrategy::SingleAggregate => "one document for all rows",
        GenerationStrategy::UnitCorrelated => "one document per unit, correlated",
        GenerationStrategy::UnitMultiOutput => "one document per unit",
        GenerationStrategy::FirstRowTable => "header plus standards table",
        GenerationStrategy::PerRowFlat => "one document per row, flat fields",
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::UpperBoundary(Width::Percentage(20)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(5)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
        ]);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
