pub mod collector;
pub mod etl;
pub mod normalize;
pub mod reader;
pub mod writer;

pub use crate::domain::model::{CandidateRow, CollectionResult, Stratum, StratumSample};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
