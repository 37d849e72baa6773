use serde::Deserialize;

/// Prometheus exporter settings (`[metrics]`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Serve `/metrics` in Prometheus text format
    pub enabled: bool,
}
