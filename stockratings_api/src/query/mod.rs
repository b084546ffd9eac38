mod common;
pub use self::common::{Query, SortDirection, PAGE_SIZE};

mod columns;
pub use self::columns::{Column, VisibleColumns};

mod ratings;
pub use self::ratings::{RatingsQuery, RatingsSortBy, SearchBy};
