mod reviews;
pub use reviews::{CreateReview, ReviewList};
