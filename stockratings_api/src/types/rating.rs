use serde::{Deserialize, Serialize};

/// One analyst price-target/action record for a ticker.
///
/// Only ever built by deserializing a server response. Every field except
/// `brokerage` is required, and the enumerated fields reject unknown values.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Rating {
    pub ticker: String,

    pub company: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage: Option<String>,

    pub target_from: String,

    pub target_to: String,

    pub action: Action,

    pub rating_from: RatingValue,

    pub rating_to: RatingValue,

    pub at: String,

    pub target_delta: String,

    pub score: f64,
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Up,
    Down,
    Reiterated,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Action::Up => "up",
                Action::Down => "down",
                Action::Reiterated => "reiterated",
            }
        )
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RatingValue {
    Buy,
    Hold,
    Sell,
    Pending,
}

impl std::fmt::Display for RatingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RatingValue::Buy => "buy",
                RatingValue::Hold => "hold",
                RatingValue::Sell => "sell",
                RatingValue::Pending => "pending",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_is_rejected() {
        let json = r#"{
            "ticker": "AAPL", "company": "Apple Inc.",
            "target_from": "$150.00", "target_to": "$180.00",
            "action": "initiated", "rating_from": "hold", "rating_to": "buy",
            "at": "2025-01-10T00:00:00Z", "target_delta": "$30.00", "score": 8
        }"#;
        assert!(serde_json::from_str::<Rating>(json).is_err());
    }

    #[test]
    fn brokerage_is_optional() {
        let json = r#"{
            "ticker": "AAPL", "company": "Apple Inc.",
            "target_from": "$150.00", "target_to": "$180.00",
            "action": "up", "rating_from": "hold", "rating_to": "buy",
            "at": "2025-01-10T00:00:00Z", "target_delta": "$30.00", "score": 8
        }"#;
        let rating: Rating = serde_json::from_str(json).unwrap();
        assert_eq!(rating.brokerage, None);
        assert_eq!(rating.action, Action::Up);
        assert_eq!(rating.rating_to, RatingValue::Buy);
        assert_eq!(rating.score, 8.0);
    }

    #[test]
    fn display_uses_wire_names() {
        assert_eq!(Action::Reiterated.to_string(), "reiterated");
        assert_eq!(RatingValue::Pending.to_string(), "pending");
    }
}
