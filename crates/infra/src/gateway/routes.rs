//! Backend routes used by the timeline

use std::fmt;

use salestrail_domain::{LeadId, QuotationId};

/// One backend endpoint, with its path parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    LeadHistory(LeadId),
    Lead(LeadId),
    QuotationsByCustomer(LeadId),
    CancelRequestsByCustomer(LeadId),
    PisByQuotation(QuotationId),
    PaymentsByQuotation(QuotationId),
    QuotationSummary(QuotationId),
}

impl Route {
    /// Path relative to the API base URL, always with a leading slash.
    pub fn path(&self) -> String {
        match self {
            Route::LeadHistory(id) => format!("/leads/{id}/history"),
            Route::Lead(id) => format!("/leads/{id}"),
            Route::QuotationsByCustomer(id) => format!("/quotations/customer/{id}"),
            Route::CancelRequestsByCustomer(id) => format!("/cancel-requests/customer/{id}"),
            Route::PisByQuotation(id) => format!("/proforma-invoices/quotation/{id}"),
            Route::PaymentsByQuotation(id) => format!("/payments/quotation/{id}"),
            Route::QuotationSummary(id) => format!("/payments/quotation/{id}/summary"),
        }
    }

    /// Entity name used in logs.
    pub fn entity(&self) -> &'static str {
        match self {
            Route::LeadHistory(_) => "follow_up",
            Route::Lead(_) => "lead",
            Route::QuotationsByCustomer(_) => "quotation",
            Route::CancelRequestsByCustomer(_) => "cancel_request",
            Route::PisByQuotation(_) => "proforma_invoice",
            Route::PaymentsByQuotation(_) => "payment",
            Route::QuotationSummary(_) => "quotation_summary",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
