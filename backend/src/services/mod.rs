//! Business logic services for the Construction Quotation Builder

pub mod details;
pub mod export;
pub mod quotation;

pub use details::DetailsService;
pub use export::ExportService;
pub use quotation::QuotationService;
