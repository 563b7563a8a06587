pub mod matrix;
pub mod movie;
pub mod response;

pub use matrix::SimilarityMatrix;
pub use movie::{Movie, SHORT_OVERVIEW_CHARS};
pub use response::{MatchKind, QueryResponse, QueryStatus, Recommendation};
