use anyhow::Result;
use clap::Args;
use stockratings_api::{Client, Query, RatingsQuery, SortDirection, VisibleColumns};

use crate::output::{
    print_json, print_ratings_csv, print_ratings_markdown, print_ratings_table, ratings_to_json,
    OutputFormat,
};
use crate::validation::{self, CliError};

#[derive(Args)]
pub struct RatingsArgs {
    /// Field the search text applies to: company, ticker, or none
    #[arg(long, default_value = "company")]
    pub search_by: String,

    /// Search text; an empty value is sent as an empty filter
    #[arg(long, default_value = "")]
    pub search: String,

    /// Sort column: target_from, target_to, target_delta, score, ticker,
    /// company, brokerage, action, rating_from, rating_to
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Comma-separated list of columns to show (default: all)
    #[arg(long, value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Hide a column (repeatable)
    #[arg(long)]
    pub hide: Vec<String>,
}

/// Turns command-line flags into the selection state sent to the API.
pub fn build_query(args: &RatingsArgs) -> Result<RatingsQuery, CliError> {
    let search = validation::validate_search(&args.search)?;
    let mut query = RatingsQuery::default().with_search(&search);

    query = match validation::validate_search_by(&args.search_by)? {
        Some(search_by) => query.with_search_by(search_by),
        None => query.without_search_by(),
    };

    if let Some(ref sort_by) = args.sort_by {
        query = query.with_sort_by(validation::validate_sort_by(sort_by)?);
    }

    if args.asc {
        query = query.with_sort_direction(SortDirection::Asc);
    }

    if !args.columns.is_empty() {
        let columns = args
            .columns
            .iter()
            .map(|c| validation::validate_column(c))
            .collect::<Result<Vec<_>, _>>()?;
        query = query.with_visible_columns(VisibleColumns::only(&columns));
    }

    for hidden in args.hide.iter() {
        query = query.with_column_visible(validation::validate_column(hidden)?, false);
    }

    Ok(query)
}

pub async fn run(args: &RatingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let query = build_query(args)?;
    tracing::debug!("Fetching ratings with {}", query.to_query_string());

    let ratings = client.get_ratings(&query).await?;
    let columns = query.visible_columns.visible();

    eprintln!("{} ratings", ratings.len());

    match format {
        OutputFormat::Table => print_ratings_table(&ratings, &columns),
        OutputFormat::Json => print_json(&ratings_to_json(&ratings, &columns)),
        OutputFormat::Csv => print_ratings_csv(&ratings, &columns)?,
        OutputFormat::Markdown => print_ratings_markdown(&ratings, &columns),
    }

    Ok(())
}
