//! Case sink factory

use crate::adapters::sink::jsonl::JsonlCaseSink;
use crate::adapters::sink::traits::CaseSink;
use crate::config::schema::SinkConfig;
use crate::domain::Result;
use std::sync::Arc;

/// Create a case sink based on the configuration
///
/// # Errors
///
/// Returns an error if the sink cannot be created
pub fn create_case_sink(config: &SinkConfig) -> Result<Arc<dyn CaseSink + Send + Sync>> {
    tracing::info!(output_dir = %config.output_dir, "Creating JSONL case sink");
    Ok(Arc::new(JsonlCaseSink::new(&config.output_dir)) as Arc<dyn CaseSink + Send + Sync>)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_jsonl_sink() {
        let config = SinkConfig {
            output_dir: "./cases".to_string(),
        };
        let sink = create_case_sink(&config).unwrap();
        assert_eq!(sink.sink_name(), "jsonl");
    }
}
