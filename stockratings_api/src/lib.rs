mod client;
pub mod config;
mod errors;
mod query;
pub mod types;
pub use self::client::{Client, RequestOptions, RATINGS_PATH};
pub use self::config::Config;
pub use self::errors::Error;
pub use self::query::{
    Column, Query, RatingsQuery, RatingsSortBy, SearchBy, SortDirection, VisibleColumns,
    PAGE_SIZE,
};
pub use reqwest::{header, Method};
