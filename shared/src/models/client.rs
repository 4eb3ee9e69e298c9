//! Client, company, and payment detail models
//!
//! These records are inert pass-through data: the quotation core stores and
//! forwards them to exported documents but never computes over them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Client and project information captured on the first wizard step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetails {
    pub client_name: String,
    pub client_email: String,
    #[serde(default)]
    pub client_phone: String,
    pub project_name: String,
    pub project_address: String,
    #[serde(default)]
    pub project_description: String,
    /// Quotation validity cut-off; the wizard defaults this to 30 days out
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<NaiveDate>,
    #[serde(default = "default_payment_terms")]
    pub payment_terms: String,
}

fn default_payment_terms() -> String {
    DEFAULT_PAYMENT_TERMS.to_string()
}

/// Default payment terms offered on the client form
pub const DEFAULT_PAYMENT_TERMS: &str = "50% upfront, 50% on completion";

/// Company letterhead printed on exported documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetails {
    pub name: String,
    pub tagline: String,
    pub registration_no: String,
    pub address_lines: Vec<String>,
}

impl Default for CompanyDetails {
    fn default() -> Self {
        Self {
            name: "Soterra Zenith".to_string(),
            tagline: "Turning idea into Structure Builder".to_string(),
            registration_no: "CA0397550-H".to_string(),
            address_lines: vec![
                "Level 3A, Sunway Visio Tower, Lingkaran".to_string(),
                "SV, Sunway Velocity, 55100 Kuala Lumpur.".to_string(),
            ],
        }
    }
}

/// Payment instructions shown on the export step
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    #[serde(default)]
    pub terms: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
}

/// Default terms and conditions for a construction quotation
pub const DEFAULT_TERMS_AND_CONDITIONS: &str = "\
1. VALIDITY: This quotation is valid for 30 days from the date of issue.

2. PAYMENT TERMS:
   - 30% deposit upon acceptance of quotation
   - 40% upon completion of 50% of work
   - 30% upon completion of work and prior to handover

3. SCOPE OF WORK: Only works specified in this quotation are included. Any additional work will be charged separately.

4. MATERIALS: All materials supplied will be of good quality and as per specifications. Any changes must be agreed in writing.

5. TIMING: Completion dates are estimates only and subject to site conditions, weather, and material availability.

6. VARIATIONS: Any variations or additional works requested by the client will be subject to additional charges and may affect completion timeline.

7. DISPUTES: Any disputes arising shall be resolved through negotiation in good faith before any legal action.

8. WARRANTY: Workmanship is guaranteed for 6 months from completion date. Material warranties as per manufacturer terms.

9. SITE ACCESS: Client must provide reasonable access to site, water, and electricity for construction purposes.

10. PERMITS & APPROVALS: Client is responsible for obtaining necessary permits unless specifically included in this quotation.

11. SITE SAFETY: All reasonable safety precautions will be taken during construction. Site visitors must adhere to safety guidelines.

12. CLEAN-UP: Basic clean-up is included, but not detailed or professional cleaning services.";
