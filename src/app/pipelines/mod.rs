pub mod seed_pipeline;

pub use seed_pipeline::SeedPipeline;
