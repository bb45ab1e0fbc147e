pub mod tweet_pipeline;

pub use tweet_pipeline::TweetPipeline;
