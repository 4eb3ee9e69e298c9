//! Key-value persistence for quotation wizard state
//!
//! The wizard stores its state as JSON strings under well-known keys, the
//! same contract the browser build uses with local storage: last write wins,
//! no transactions. Keys are namespaced per wizard session.

mod file;
mod memory;

use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Well-known store keys for one wizard session
pub mod keys {
    pub const LINE_ITEMS: &str = "quotationLineItems";
    pub const TAX_RATE: &str = "quotationTaxRate";
    pub const DISCOUNT: &str = "quotationDiscount";
    pub const CLIENT_DATA: &str = "quotationClientData";
    pub const COMPANY_DETAILS: &str = "quotationCompanyDetails";
    pub const PAYMENT_DETAILS: &str = "quotationPaymentDetails";
    pub const TERMS_AND_CONDITIONS: &str = "quotationTermsAndConditions";
    pub const LOGO: &str = "quotationLogo";
    pub const EDITING_ITEM: &str = "quotationEditingItem";

    /// Every session-scoped key, in the order a reset clears them
    pub const ALL: &[&str] = &[
        CLIENT_DATA,
        LINE_ITEMS,
        TAX_RATE,
        DISCOUNT,
        COMPANY_DETAILS,
        PAYMENT_DETAILS,
        TERMS_AND_CONDITIONS,
        LOGO,
        EDITING_ITEM,
    ];
}

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,

    #[error("storage lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// The persistence collaborator contract: string values under string keys,
/// last write wins
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Namespace a well-known key under a wizard session
pub fn session_key(session_id: uuid::Uuid, key: &str) -> String {
    format!("{}:{}", session_id, key)
}
