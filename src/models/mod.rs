mod movie;
mod recommendation;

pub use movie::{Movie, MovieRow};
pub use recommendation::{GenrePrediction, Recommendation};
