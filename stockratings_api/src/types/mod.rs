mod rating;
pub use self::rating::{Action, Rating, RatingValue};
