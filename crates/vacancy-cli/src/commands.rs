use anyhow::Result;

use vacancy_cli::config::{QueryOverrides, resolve_query};
use vacancy_cli::pipeline::{build_statistics, build_table, split_file, write_statistics_json};
use vacancy_cli::summary::{print_split_summary, print_statistics, print_vacancy_table};

use crate::cli::{SplitArgs, StatsArgs, TableArgs};

pub fn run_table(args: TableArgs) -> Result<()> {
    let overrides = QueryOverrides {
        filter: args.filter,
        sort: args.sort,
        reverse: args.reverse,
        range: args.range,
        columns: args.columns,
    };
    let input = resolve_query(args.query.as_deref(), overrides)?;
    let view = build_table(&args.csv, &input)?;
    print_vacancy_table(&view);
    Ok(())
}

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    let stats = build_statistics(&args.csv, &args.job, args.partitioned)?;
    if let Some(path) = &args.json {
        write_statistics_json(&stats, path)?;
    }
    print_statistics(&stats, &args.job);
    Ok(())
}

pub fn run_split(args: &SplitArgs) -> Result<()> {
    let parts = split_file(&args.csv, &args.output_dir)?;
    print_split_summary(&parts);
    Ok(())
}
