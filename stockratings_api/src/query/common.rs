//! Shared query infrastructure: the [`Query`] trait, [`SortDirection`] and the page size.

use std::str::FromStr;

use url::{form_urlencoded, Url};

/// Number of records requested per call. There is no offset parameter.
pub const PAGE_SIZE: u32 = 10;

/// Trait implemented by query builders. Provides URL serialization from an
/// ordered list of key/value pairs.
pub trait Query {
    /// Returns the parameters in the order they are emitted.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;

    /// Form-encodes the parameters into a query string (no leading `?`).
    fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut().extend_pairs(self.to_pairs());
        url
    }
}

/// Sort order for API results.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order (smallest first).
    Asc,
    /// Descending order (largest first). This is the default.
    #[default]
    Desc,
}
impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortDirection::Asc => "asc",
                SortDirection::Desc => "desc",
            }
        )
    }
}
impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}
