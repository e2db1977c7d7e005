use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use vacancy_ingest::YearPart;
use vacancy_stats::{OTHER_CITIES_LABEL, Statistics};
use vacancy_transform::TableView;

/// Longest cell text printed before truncation.
pub const MAX_CELL_CHARS: usize = 100;

/// Width limit of each vacancy column.
const COLUMN_WIDTH: u16 = 20;

/// Cuts text longer than [`MAX_CELL_CHARS`] characters and marks the cut.
pub fn truncate_cell(value: &str) -> String {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => format!("{}...", &value[..cut]),
        None => value.to_string(),
    }
}

/// Builds the vacancy table: a row-number column followed by the selected fields.
pub fn vacancy_table(view: &TableView) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("№")];
    header.extend(view.columns.iter().map(|field| header_cell(field.label())));
    table.set_header(header);
    apply_table_style(&mut table);

    let mut constraints = vec![ColumnConstraint::LowerBoundary(Width::Fixed(3))];
    constraints.extend(
        view.columns
            .iter()
            .map(|_| ColumnConstraint::UpperBoundary(Width::Fixed(COLUMN_WIDTH))),
    );
    table.set_constraints(constraints);
    align_column(&mut table, 0, CellAlignment::Right);

    for row in &view.rows {
        let mut cells = vec![dim_cell(row.number)];
        cells.extend(
            row.cells(&view.columns)
                .into_iter()
                .map(|value| Cell::new(truncate_cell(value))),
        );
        table.add_row(cells);
    }
    table
}

pub fn print_vacancy_table(view: &TableView) {
    println!("{}", vacancy_table(view));
}

/// Year-by-year salary levels and counts, overall and for the job.
pub fn year_table(stats: &Statistics, job: &str) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Год"),
        header_cell("Средняя зарплата"),
        header_cell("Количество вакансий"),
        header_cell(&format!("Средняя зарплата - {job}")),
        header_cell(&format!("Количество вакансий - {job}")),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (year, salary) in &stats.salary_by_year {
        let count = stats.count_by_year.get(year).copied().unwrap_or_default();
        let job_salary = stats
            .job_salary_by_year
            .get(year)
            .copied()
            .unwrap_or_default();
        let job_count = stats
            .job_count_by_year
            .get(year)
            .copied()
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(year).add_attribute(Attribute::Bold),
            Cell::new(salary),
            Cell::new(count),
            count_cell(job_salary),
            count_cell(job_count),
        ]);
    }
    table
}

/// Mean salary of the top cities.
pub fn city_salary_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Город"), header_cell("Уровень зарплат")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (city, salary) in &stats.salary_by_city {
        table.add_row(vec![Cell::new(city), Cell::new(salary)]);
    }
    table
}

/// Vacancy share of the top cities, as percentages.
pub fn city_share_table(stats: &Statistics) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Город"), header_cell("Доля вакансий")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (city, share) in &stats.share_by_city {
        let city_cell = if city == OTHER_CITIES_LABEL {
            dim_cell(city)
        } else {
            Cell::new(city)
        };
        table.add_row(vec![city_cell, Cell::new(format_share(*share))]);
    }
    table
}

/// Formats a share as a percentage with two decimals.
pub fn format_share(share: f64) -> String {
    format!("{:.2}%", share * 100.0)
}

pub fn print_statistics(stats: &Statistics, job: &str) {
    println!("Динамика по годам:");
    println!("{}", year_table(stats, job));
    println!();
    println!("Уровень зарплат по городам (в порядке убывания):");
    println!("{}", city_salary_table(stats));
    println!();
    println!("Доля вакансий по городам (в порядке убывания):");
    println!("{}", city_share_table(stats));
}

pub fn print_split_summary(parts: &[YearPart]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Год"),
        header_cell("Вакансий"),
        header_cell("Файл"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for part in parts {
        table.add_row(vec![
            Cell::new(part.year).add_attribute(Attribute::Bold),
            Cell::new(part.rows),
            dim_cell(part.path.display()),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(200);
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

fn count_cell<T: ToString + Default + PartialEq>(value: T) -> Cell {
    if value == T::default() {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
