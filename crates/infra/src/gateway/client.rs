use std::time::Duration;

use async_trait::async_trait;
use salestrail_core::{LeadSource, PaymentSource, ProformaInvoiceSource, QuotationSource};
use salestrail_domain::{
    CancelRequest, FollowUpEvent, GatewayConfig, LeadId, LeadRecord, Payment, ProformaInvoice,
    Quotation, QuotationId, QuotationSummary, Result, SalesTrailError,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use super::envelope;
use super::routes::Route;
use crate::http::HttpClient;

/// CRM backend adapter implementing every timeline port over REST.
#[derive(Clone, Debug)]
pub struct GatewayClient {
    http: HttpClient,
    base_url: String,
}

impl GatewayClient {
    /// Build a gateway from configuration.
    ///
    /// The base URL must be an absolute `http`/`https` URL; a trailing slash
    /// is ignored.
    pub fn from_config(config: &GatewayConfig) -> Result<Self> {
        let base_url = validate_base_url(&config.base_url)?;

        let mut builder = HttpClient::builder().timeout(Duration::from_secs(config.timeout_secs));
        if let Some(token) = config.auth_token.as_deref().filter(|token| !token.trim().is_empty()) {
            builder = builder.bearer_token(token.trim());
        }

        Ok(Self { http: builder.build()?, base_url })
    }

    /// Wrap an existing HTTP client.
    pub fn with_http_client(http: HttpClient, base_url: &str) -> Result<Self> {
        Ok(Self { http, base_url: validate_base_url(base_url)? })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, route: Route) -> String {
        format!("{}{}", self.base_url, route.path())
    }

    async fn fetch_collection<T: DeserializeOwned>(&self, route: Route) -> Result<Vec<T>> {
        let body = self.http.get_json(&self.url(route)).await?;
        let records = envelope::decode_collection(route.entity(), body)?;
        debug!(%route, count = records.len(), "fetched collection");
        Ok(records)
    }

    async fn fetch_record<T: DeserializeOwned>(&self, route: Route) -> Result<T> {
        let body = self.http.get_json(&self.url(route)).await?;
        let record = envelope::decode_record(route.entity(), body)?;
        debug!(%route, "fetched record");
        Ok(record)
    }
}

pub(crate) fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let parsed = Url::parse(trimmed)
        .map_err(|err| SalesTrailError::Config(format!("invalid API base URL {trimmed:?}: {err}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SalesTrailError::Config(format!(
            "API base URL must use http or https, got {}",
            parsed.scheme()
        )));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

#[async_trait]
impl LeadSource for GatewayClient {
    async fn get_follow_up_history(&self, lead_id: LeadId) -> Result<Vec<FollowUpEvent>> {
        self.fetch_collection(Route::LeadHistory(lead_id)).await
    }

    async fn get_lead_by_id(&self, lead_id: LeadId) -> Result<LeadRecord> {
        self.fetch_record(Route::Lead(lead_id)).await
    }

    async fn get_cancel_requests_by_customer(
        &self,
        lead_id: LeadId,
    ) -> Result<Vec<CancelRequest>> {
        self.fetch_collection(Route::CancelRequestsByCustomer(lead_id)).await
    }
}

#[async_trait]
impl QuotationSource for GatewayClient {
    async fn get_quotations_by_customer(&self, lead_id: LeadId) -> Result<Vec<Quotation>> {
        self.fetch_collection(Route::QuotationsByCustomer(lead_id)).await
    }

    async fn get_quotation_summary(&self, quotation_id: QuotationId) -> Result<QuotationSummary> {
        self.fetch_record(Route::QuotationSummary(quotation_id)).await
    }
}

#[async_trait]
impl ProformaInvoiceSource for GatewayClient {
    async fn get_pis_by_quotation(
        &self,
        quotation_id: QuotationId,
    ) -> Result<Vec<ProformaInvoice>> {
        self.fetch_collection(Route::PisByQuotation(quotation_id)).await
    }
}

#[async_trait]
impl PaymentSource for GatewayClient {
    async fn get_payments_by_quotation(&self, quotation_id: QuotationId) -> Result<Vec<Payment>> {
        self.fetch_collection(Route::PaymentsByQuotation(quotation_id)).await
    }
}
