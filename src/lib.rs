pub mod domain;
pub mod export;
pub mod fetchers;
pub mod models;
pub mod processing;
pub mod repository;

/// Query used when no keywords are configured.
pub const DEFAULT_KEYWORDS: &str = "creative coding, p5.js, generative art";
