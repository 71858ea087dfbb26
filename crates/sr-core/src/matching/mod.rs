pub mod coverage;
pub mod pipeline;
pub mod similarity;
pub mod skills;
pub mod weights;
