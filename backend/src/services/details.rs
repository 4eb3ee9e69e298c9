//! Pass-through detail records for a wizard session
//!
//! Client info, company letterhead, payment instructions, terms text, and
//! the logo image are stored and returned verbatim; the quotation core never
//! computes over them.

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::store::{keys, session_key, KeyValueStore};
use shared::{
    validate_client_details, ClientDetails, CompanyDetails, PaymentDetails,
    DEFAULT_TERMS_AND_CONDITIONS,
};

/// Service managing the inert wizard-session records
#[derive(Clone)]
pub struct DetailsService {
    store: Arc<dyn KeyValueStore>,
}

impl DetailsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        session_id: Uuid,
        key: &str,
    ) -> AppResult<Option<T>> {
        match self.store.get(&session_key(session_id, key))? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| AppError::Internal(format!("corrupt {}: {}", key, e))),
            None => Ok(None),
        }
    }

    fn set_json<T: serde::Serialize>(&self, session_id: Uuid, key: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value).map_err(|e| AppError::Internal(e.to_string()))?;
        self.store.set(&session_key(session_id, key), &json)?;
        Ok(())
    }

    /// Client details captured on the first wizard step, if any
    pub fn client(&self, session_id: Uuid) -> AppResult<Option<ClientDetails>> {
        self.get_json(session_id, keys::CLIENT_DATA)
    }

    pub fn set_client(&self, session_id: Uuid, client: ClientDetails) -> AppResult<ClientDetails> {
        validate_client_details(&client)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;
        self.set_json(session_id, keys::CLIENT_DATA, &client)?;
        Ok(client)
    }

    /// Company letterhead; the configured default until overridden
    pub fn company(&self, session_id: Uuid) -> AppResult<CompanyDetails> {
        Ok(self
            .get_json(session_id, keys::COMPANY_DETAILS)?
            .unwrap_or_default())
    }

    pub fn set_company(&self, session_id: Uuid, company: CompanyDetails) -> AppResult<CompanyDetails> {
        if company.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Company name is required".to_string(),
            });
        }
        self.set_json(session_id, keys::COMPANY_DETAILS, &company)?;
        Ok(company)
    }

    pub fn payment(&self, session_id: Uuid) -> AppResult<PaymentDetails> {
        Ok(self
            .get_json(session_id, keys::PAYMENT_DETAILS)?
            .unwrap_or_default())
    }

    pub fn set_payment(&self, session_id: Uuid, payment: PaymentDetails) -> AppResult<PaymentDetails> {
        self.set_json(session_id, keys::PAYMENT_DETAILS, &payment)?;
        Ok(payment)
    }

    /// Terms and conditions text; the construction default until edited
    pub fn terms(&self, session_id: Uuid) -> AppResult<String> {
        Ok(self
            .store
            .get(&session_key(session_id, keys::TERMS_AND_CONDITIONS))?
            .unwrap_or_else(|| DEFAULT_TERMS_AND_CONDITIONS.to_string()))
    }

    pub fn set_terms(&self, session_id: Uuid, terms: &str) -> AppResult<()> {
        self.store
            .set(&session_key(session_id, keys::TERMS_AND_CONDITIONS), terms)?;
        Ok(())
    }

    /// Stored logo image data (base64), if any
    pub fn logo(&self, session_id: Uuid) -> AppResult<Option<String>> {
        Ok(self.store.get(&session_key(session_id, keys::LOGO))?)
    }

    /// Store logo image data; accepts raw base64 or a data URL
    pub fn set_logo(&self, session_id: Uuid, data: &str) -> AppResult<()> {
        let encoded = data
            .split_once(";base64,")
            .map(|(_, payload)| payload)
            .unwrap_or(data);
        BASE64.decode(encoded).map_err(|_| AppError::Validation {
            field: "logo".to_string(),
            message: "Logo must be base64 image data".to_string(),
        })?;
        self.store.set(&session_key(session_id, keys::LOGO), data)?;
        Ok(())
    }

    /// Discard the session: clears every quotation key so the wizard starts
    /// from a blank state
    pub fn reset(&self, session_id: Uuid) -> AppResult<()> {
        for key in keys::ALL {
            self.store.remove(&session_key(session_id, key))?;
        }
        Ok(())
    }
}
