use anyhow::{bail, Result};
use tracing::{debug, warn};

use super::EigenSolver;
use crate::core::matrix::{self, ComplexMatrix};

/// Remote eigenvalue service.
///
/// `GET <endpoint>?matrix=<display string>` answered with a JSON array of
/// numbers. One round trip, no retries.
pub struct HttpEigenSolver {
    endpoint: String,
}

impl HttpEigenSolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EigenSolver for HttpEigenSolver {
    fn name(&self) -> &'static str {
        "http"
    }

    fn eigenvalues(&self, observable: &ComplexMatrix) -> Result<Vec<f64>> {
        let payload = matrix::to_display_string(observable);
        debug!(endpoint = %self.endpoint, %payload, "requesting eigenvalues");
        let client = reqwest::blocking::Client::builder().build()?;
        let resp = client
            .get(&self.endpoint)
            .query(&[("matrix", payload.as_str())])
            .send()?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().unwrap_or_default();
            warn!(%status, "eigen service rejected request");
            bail!("eigen service http error {status}: {text}");
        }
        let values: Vec<f64> = resp.json()?;
        Ok(values)
    }
}
