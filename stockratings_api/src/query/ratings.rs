use std::str::FromStr;

use super::{
    columns::{Column, VisibleColumns},
    common::{SortDirection, PAGE_SIZE},
    Query,
};

/// Selection state for the ratings list.
///
/// Compiles to `sort_by`, `sort_order`, the search field and `limit`, in that
/// order. `visible_columns` only affects local display and is never emitted.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingsQuery {
    pub search_by: Option<SearchBy>,
    pub search: String,
    pub sort_by: Option<RatingsSortBy>,
    pub sort_direction: SortDirection,
    pub visible_columns: VisibleColumns,
}

impl Default for RatingsQuery {
    fn default() -> Self {
        Self {
            search_by: Some(SearchBy::Company),
            search: String::new(),
            sort_by: None,
            sort_direction: SortDirection::Desc,
            visible_columns: VisibleColumns::default(),
        }
    }
}

impl Query for RatingsQuery {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(4);
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sort_by", sort_by.as_str().to_string()));
        }
        pairs.push(("sort_order", self.sort_direction.to_string()));
        // Empty search text still emits the key.
        if let Some(search_by) = self.search_by {
            pairs.push((search_by.as_str(), self.search.clone()));
        }
        pairs.push(("limit", PAGE_SIZE.to_string()));
        pairs
    }
}

impl RatingsQuery {
    pub fn with_search_by(mut self, search_by: SearchBy) -> Self {
        self.search_by = Some(search_by);
        self
    }

    pub fn without_search_by(mut self) -> Self {
        self.search_by = None;
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    pub fn with_sort_by(mut self, sort_by: RatingsSortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    pub fn without_sort_by(mut self) -> Self {
        self.sort_by = None;
        self
    }

    pub fn with_sort_direction(mut self, sort_direction: SortDirection) -> Self {
        self.sort_direction = sort_direction;
        self
    }

    pub fn with_visible_columns(mut self, visible_columns: VisibleColumns) -> Self {
        self.visible_columns = visible_columns;
        self
    }

    pub fn with_column_visible(mut self, column: Column, visible: bool) -> Self {
        self.visible_columns.set(column, visible);
        self
    }
}

/// Field the search text is matched against. Its name is also the query key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchBy {
    Company,
    Ticker,
}
impl SearchBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchBy::Company => "company",
            SearchBy::Ticker => "ticker",
        }
    }
}
impl std::fmt::Display for SearchBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for SearchBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "company" => Ok(SearchBy::Company),
            "ticker" => Ok(SearchBy::Ticker),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatingsSortBy {
    TargetFrom,
    TargetTo,
    TargetDelta,
    Score,
    Ticker,
    Company,
    Brokerage,
    Action,
    RatingFrom,
    RatingTo,
}
impl RatingsSortBy {
    pub const ALL: [RatingsSortBy; 10] = [
        RatingsSortBy::TargetFrom,
        RatingsSortBy::TargetTo,
        RatingsSortBy::TargetDelta,
        RatingsSortBy::Score,
        RatingsSortBy::Ticker,
        RatingsSortBy::Company,
        RatingsSortBy::Brokerage,
        RatingsSortBy::Action,
        RatingsSortBy::RatingFrom,
        RatingsSortBy::RatingTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RatingsSortBy::TargetFrom => "target_from",
            RatingsSortBy::TargetTo => "target_to",
            RatingsSortBy::TargetDelta => "target_delta",
            RatingsSortBy::Score => "score",
            RatingsSortBy::Ticker => "ticker",
            RatingsSortBy::Company => "company",
            RatingsSortBy::Brokerage => "brokerage",
            RatingsSortBy::Action => "action",
            RatingsSortBy::RatingFrom => "rating_from",
            RatingsSortBy::RatingTo => "rating_to",
        }
    }
}
impl std::fmt::Display for RatingsSortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for RatingsSortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RatingsSortBy::ALL
            .into_iter()
            .find(|sort_by| sort_by.as_str() == s)
            .ok_or(())
    }
}
