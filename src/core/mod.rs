pub mod handler;
pub mod page;
pub mod render;

pub use crate::domain::model::{CropQuery, FieldIds, Recommendation, SubmitEvent, SubmitOutcome};
pub use crate::domain::ports::{
    ConfigProvider, FormSource, RecommendationApi, ResultsView, SubmitListener,
};
pub use crate::utils::error::Result;
