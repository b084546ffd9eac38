use stockratings_api::{Column, RatingsSortBy, SearchBy};

pub const MAX_SEARCH_LENGTH: usize = 100;

/// User-provided input that failed validation.
#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit. Empty input is allowed.
pub fn validate_search(input: &str) -> Result<String, CliError> {
    if input.len() > MAX_SEARCH_LENGTH {
        return Err(CliError::InvalidInput(format!(
            "search exceeds maximum length of {} bytes",
            MAX_SEARCH_LENGTH
        )));
    }
    Ok(input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string())
}

/// `none` disables the search filter entirely.
pub fn validate_search_by(input: &str) -> Result<Option<SearchBy>, CliError> {
    let lower = input.trim().to_lowercase();
    if lower == "none" {
        return Ok(None);
    }
    lower.parse::<SearchBy>().map(Some).map_err(|_| {
        CliError::InvalidInput(format!(
            "unknown search field '{}'. Valid values: company, ticker, none",
            input
        ))
    })
}

pub fn validate_sort_by(input: &str) -> Result<RatingsSortBy, CliError> {
    input
        .trim()
        .to_lowercase()
        .replace('-', "_")
        .parse::<RatingsSortBy>()
        .map_err(|_| {
            CliError::InvalidInput(format!(
                "unknown sort column '{}'. Valid values: {}",
                input,
                RatingsSortBy::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

pub fn validate_column(input: &str) -> Result<Column, CliError> {
    input
        .trim()
        .to_lowercase()
        .replace('-', "_")
        .parse::<Column>()
        .map_err(|_| {
            CliError::InvalidInput(format!(
                "unknown column '{}'. Valid values: {}",
                input,
                Column::ALL
                    .iter()
                    .map(|c| c.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_is_trimmed_and_stripped() {
        assert_eq!(validate_search("  Apple\u{7}  ").unwrap(), "Apple");
        assert_eq!(validate_search("").unwrap(), "");
    }

    #[test]
    fn search_too_long_is_rejected() {
        let long = "a".repeat(MAX_SEARCH_LENGTH + 1);
        assert!(validate_search(&long).is_err());
    }

    #[test]
    fn search_by_accepts_none() {
        assert_eq!(validate_search_by("Ticker").unwrap(), Some(SearchBy::Ticker));
        assert_eq!(validate_search_by("none").unwrap(), None);
        assert!(validate_search_by("brokerage").is_err());
    }

    #[test]
    fn sort_by_accepts_dashes() {
        assert_eq!(
            validate_sort_by("target-delta").unwrap(),
            RatingsSortBy::TargetDelta
        );
        let err = validate_sort_by("price").unwrap_err();
        assert!(err.to_string().contains("rating_from"));
    }

    #[test]
    fn column_accepts_at() {
        assert_eq!(validate_column("AT").unwrap(), Column::At);
        assert!(validate_column("volume").is_err());
    }
}
