// ABOUTME: HTTP client for the remote pace prediction service
// ABOUTME: reqwest client with configured timeouts posting the estimation endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use stride_core::models::Performance;
use stride_intelligence::PerformancePrediction;
use tracing::{debug, warn};

use super::dto::{
    performances_to_dto, EstimationRequest, EstimationWithExponentRequest,
    MultipleEstimationRequest, MultiplePredictionDto, PerformancePredictionDto,
};
use super::{PaceCalculator, PaceCalculatorError};
use crate::config::PaceCalculatorConfig;

const ESTIMATE_PATH: &str = "/estimate";
const ESTIMATE_WITH_EXPONENT_PATH: &str = "/estimate-with-r";
const ESTIMATE_MULTIPLE_PATH: &str = "/estimate-multiple";

/// Pace calculator backed by the remote service
#[derive(Debug, Clone)]
pub struct HttpPaceCalculator {
    base_url: String,
    client: Client,
}

impl HttpPaceCalculator {
    /// Create a client for `base_url` using the configured timeouts
    ///
    /// # Errors
    ///
    /// Returns `PaceCalculatorError::Http` if the HTTP client cannot be built
    pub fn new(
        base_url: impl Into<String>,
        config: &PaceCalculatorConfig,
    ) -> Result<Self, PaceCalculatorError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Ok(Self { base_url, client })
    }

    /// Build from configuration; `None` when no service URL is configured
    ///
    /// # Errors
    ///
    /// Returns `PaceCalculatorError::Http` if the HTTP client cannot be built
    pub fn from_config(config: &PaceCalculatorConfig) -> Result<Option<Self>, PaceCalculatorError> {
        config
            .base_url
            .as_deref()
            .map(|url| Self::new(url, config))
            .transpose()
    }

    /// Service base URL without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, PaceCalculatorError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        debug!(%url, "Calling pace calculator");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(
                %url,
                status_code = status.as_u16(),
                message = %message,
                "Pace calculator request rejected"
            );
            return Err(PaceCalculatorError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaceCalculator for HttpPaceCalculator {
    async fn estimate(
        &self,
        performances: &[Performance],
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError> {
        let request = EstimationRequest {
            distance_meters: distance,
            performances: performances_to_dto(performances),
        };
        let dto: PerformancePredictionDto = self.post(ESTIMATE_PATH, &request).await?;
        Ok(dto.into())
    }

    async fn estimate_with_exponent(
        &self,
        performances: &[Performance],
        exponent: f64,
        distance: f64,
    ) -> Result<PerformancePrediction, PaceCalculatorError> {
        let request = EstimationWithExponentRequest {
            distance_meters: distance,
            r_parameter: exponent,
            performances: performances_to_dto(performances),
        };
        let dto: PerformancePredictionDto =
            self.post(ESTIMATE_WITH_EXPONENT_PATH, &request).await?;
        Ok(dto.into())
    }

    async fn estimate_multiple(
        &self,
        performances: &[Performance],
        distances: &[f64],
    ) -> Result<Vec<PerformancePrediction>, PaceCalculatorError> {
        let request = MultipleEstimationRequest {
            distances: distances.to_vec(),
            performances: performances_to_dto(performances),
        };
        let dto: MultiplePredictionDto = self.post(ESTIMATE_MULTIPLE_PATH, &request).await?;
        Ok(dto.into_predictions())
    }
}
