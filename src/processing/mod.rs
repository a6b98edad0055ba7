pub mod corpus;
pub mod evaluate;
pub mod ranking;
pub mod scoring;
