/// Configuration for tracing initialization, mapped from the logging
/// section of the settings record.
pub struct TracingConfig {
    pub level: String,
    pub json_format: bool,
}
