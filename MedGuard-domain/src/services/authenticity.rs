use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use tracing::debug;

use crate::entities::scan::{ImageMeta, ScanDetails, Verdict};

pub const ORACLE_MANUFACTURER: &str = "PharmaCorp Inc.";
pub const ORACLE_EXPIRY_DATE: &str = "2025-12-31";

/// Judges whether a medicine photo shows a genuine product
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticityOracle: Send + Sync {
    async fn assess(&self, image: &ImageMeta) -> Verdict;
}

/// Oracle that draws a verdict at random after a delay
#[derive(Debug, Clone)]
pub struct RandomOracle {
    latency: Duration,
}

impl RandomOracle {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl AuthenticityOracle for RandomOracle {
    async fn assess(&self, image: &ImageMeta) -> Verdict {
        tokio::time::sleep(self.latency).await;

        // ThreadRng is not Send; keep it out of the await above
        let verdict = {
            let mut rng = rand::thread_rng();
            Verdict {
                authentic: rng.gen_bool(0.5),
                confidence: rng.gen_range(80..=99),
                details: ScanDetails {
                    manufacturer: ORACLE_MANUFACTURER.to_string(),
                    batch_number: format!("BC{}", rng.gen_range(0..=9999)),
                    expiry_date: ORACLE_EXPIRY_DATE.to_string(),
                    serial_number: format!("SN{}", rng.gen_range(0..=99999)),
                },
            }
        };

        debug!(image_id = %image.id, authentic = verdict.authentic, "Random verdict drawn");
        verdict
    }
}
