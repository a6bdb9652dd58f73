use std::path::PathBuf;

use clap::Parser;

use tabsift::render::OutputFormat;

/// Filter, sort and aggregate tabular files.
#[derive(Debug, Parser)]
#[command(name = "tabsift", version)]
pub struct Cli {
    /// Path to the input file (.csv, .tsv, .json, .parquet).
    pub file: PathBuf,

    /// Filter conditions like "rating>4.7"; every condition must hold.
    #[arg(long = "where", value_name = "CONDITION", num_args = 1..)]
    pub conditions: Vec<String>,

    /// Column to aggregate.
    #[arg(long, value_name = "COLUMN", requires = "agg_type")]
    pub aggregate_column: Option<String>,

    /// Type of aggregation.
    #[arg(
        long,
        value_name = "TYPE",
        value_parser = ["avg", "min", "max"],
        requires = "aggregate_column"
    )]
    pub agg_type: Option<String>,

    /// Order rows by a numeric column, e.g. "price=desc".
    #[arg(long, value_name = "COLUMN=DIRECTION")]
    pub order_by: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn where_accepts_many_values_and_repeats() {
        let cli = Cli::try_parse_from([
            "tabsift", "data.csv", "--where", "a>1", "b<2", "--where", "c=3",
        ])
        .unwrap();
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert_eq!(cli.conditions, vec!["a>1", "b<2", "c=3"]);
        assert_eq!(cli.format, OutputFormat::Pretty);
    }

    #[test]
    fn aggregation_flags_come_in_pairs() {
        assert!(Cli::try_parse_from(["tabsift", "d.csv", "--aggregate-column", "price"]).is_err());
        assert!(Cli::try_parse_from(["tabsift", "d.csv", "--agg-type", "avg"]).is_err());
        let cli = Cli::try_parse_from([
            "tabsift", "d.csv", "--aggregate-column", "price", "--agg-type", "max",
        ])
        .unwrap();
        assert_eq!(cli.aggregate_column.as_deref(), Some("price"));
        assert_eq!(cli.agg_type.as_deref(), Some("max"));
    }

    #[test]
    fn unknown_agg_type_is_rejected() {
        assert!(Cli::try_parse_from([
            "tabsift", "d.csv", "--aggregate-column", "price", "--agg-type", "sum",
        ])
        .is_err());
    }

    #[test]
    fn order_by_and_format() {
        let cli =
            Cli::try_parse_from(["tabsift", "d.csv", "--order-by", "price=desc", "--format", "json"])
                .unwrap();
        assert_eq!(cli.order_by.as_deref(), Some("price=desc"));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
