pub mod consts;
pub mod corpus;
pub mod error;
pub mod export;
pub mod frequency;
pub mod trainer;

pub use error::{PfResult, PhraseForgeError};
pub use trainer::{train, TrainConfig, TrainReport};
