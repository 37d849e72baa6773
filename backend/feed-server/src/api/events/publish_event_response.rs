use feed_bus::PublishReport;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PublishEventResponse {
    pub delivered: usize,
    pub evicted: usize,
}

impl From<PublishReport> for PublishEventResponse {
    fn from(report: PublishReport) -> Self {
        Self {
            delivered: report.delivered,
            evicted: report.evicted,
        }
    }
}
