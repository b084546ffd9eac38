//! Display columns of a rating list and which of them are shown.
//!
//! Column visibility is purely local: it is never part of a compiled query.

use std::collections::BTreeMap;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Ticker,
    Company,
    Brokerage,
    TargetFrom,
    TargetTo,
    TargetDelta,
    Action,
    RatingFrom,
    RatingTo,
    Score,
    At,
}

impl Column {
    /// Every column in display order.
    pub const ALL: [Column; 11] = [
        Column::Ticker,
        Column::Company,
        Column::Brokerage,
        Column::TargetFrom,
        Column::TargetTo,
        Column::TargetDelta,
        Column::Action,
        Column::RatingFrom,
        Column::RatingTo,
        Column::Score,
        Column::At,
    ];

    /// Human-readable header.
    pub fn title(&self) -> &'static str {
        match self {
            Column::Ticker => "Ticker",
            Column::Company => "Company",
            Column::Brokerage => "Brokerage",
            Column::TargetFrom => "Target From",
            Column::TargetTo => "Target To",
            Column::TargetDelta => "Target Delta",
            Column::Action => "Action",
            Column::RatingFrom => "Rating From",
            Column::RatingTo => "Rating To",
            Column::Score => "Score",
            Column::At => "At",
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Column::Ticker => "ticker",
                Column::Company => "company",
                Column::Brokerage => "brokerage",
                Column::TargetFrom => "target_from",
                Column::TargetTo => "target_to",
                Column::TargetDelta => "target_delta",
                Column::Action => "action",
                Column::RatingFrom => "rating_from",
                Column::RatingTo => "rating_to",
                Column::Score => "score",
                Column::At => "at",
            }
        )
    }
}

impl FromStr for Column {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.to_string() == s)
            .ok_or(())
    }
}

/// Mapping from column to visibility. Columns without an entry are visible.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleColumns(BTreeMap<Column, bool>);

impl VisibleColumns {
    /// Only the given columns are visible.
    pub fn only(columns: &[Column]) -> Self {
        Self(
            Column::ALL
                .into_iter()
                .map(|column| (column, columns.contains(&column)))
                .collect(),
        )
    }

    pub fn set(&mut self, column: Column, visible: bool) {
        self.0.insert(column, visible);
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.0.get(&column).copied().unwrap_or(true)
    }

    /// Visible columns in display order.
    pub fn visible(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|column| self.is_visible(*column))
            .collect()
    }
}
