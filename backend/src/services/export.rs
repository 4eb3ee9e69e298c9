//! Document export service
//!
//! Assembles the fully-resolved snapshot a document generator consumes:
//! resolved labels, category sections, and the derived totals. CSV is
//! rendered here; PDF/XLSX generators are external collaborators fed from
//! the same JSON snapshot.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::{DetailsService, QuotationService};
use crate::store::KeyValueStore;
use shared::{
    category_label, subcategory_label, ClientDetails, CompanyDetails, PaymentDetails,
    QuotationState, QuotationTotals,
};

/// Service producing exportable quotation documents
#[derive(Clone)]
pub struct ExportService {
    quotations: QuotationService,
    details: DetailsService,
    currency_code: String,
}

/// A stable, fully-resolved quotation snapshot
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuotationDocument {
    pub quotation_number: String,
    pub issued_on: NaiveDate,
    pub currency: String,
    pub company: CompanyDetails,
    pub client: ClientDetails,
    pub payment: PaymentDetails,
    pub terms_and_conditions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub sections: Vec<DocumentSection>,
    pub tax_rate: Decimal,
    pub discount: Decimal,
    pub totals: QuotationTotals,
}

/// Line items grouped under one category, in first-appearance order
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSection {
    pub category: String,
    pub category_label: String,
    pub items: Vec<DocumentLine>,
    pub section_total: Decimal,
}

/// One resolved line on the document
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLine {
    pub id: Uuid,
    pub description: String,
    pub subcategory_label: String,
    pub quantity: Decimal,
    pub unit: String,
    pub unit_price: Decimal,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material_name: Option<String>,
}

impl ExportService {
    pub fn new(store: Arc<dyn KeyValueStore>, currency_code: String) -> Self {
        Self {
            quotations: QuotationService::new(store.clone()),
            details: DetailsService::new(store),
            currency_code,
        }
    }

    /// Build the export snapshot for a session
    ///
    /// Refuses while the quotation is empty or a line item is still being
    /// edited; the wizard surfaces that as a blocking notice.
    pub fn snapshot(&self, session_id: Uuid) -> AppResult<QuotationDocument> {
        let state = self.quotations.ensure_exportable(session_id)?;
        let client = self
            .details
            .client(session_id)?
            .ok_or_else(|| AppError::NotFound("Client details".to_string()))?;

        let issued_on = Utc::now().date_naive();
        let totals = state.totals();

        Ok(QuotationDocument {
            quotation_number: generate_quotation_number(issued_on),
            issued_on,
            currency: self.currency_code.clone(),
            company: self.details.company(session_id)?,
            client,
            payment: self.details.payment(session_id)?,
            terms_and_conditions: self.details.terms(session_id)?,
            logo: self.details.logo(session_id)?,
            sections: build_sections(&state),
            tax_rate: state.tax_rate,
            discount: state.discount,
            totals,
        })
    }

    /// Render a snapshot as a CSV document
    pub fn render_csv(&self, document: &QuotationDocument) -> AppResult<String> {
        render_csv(document).map_err(|e| AppError::Internal(e.to_string()))
    }
}

/// Group line items into category sections, preserving both the order of
/// first appearance and the item order inside each section
fn build_sections(state: &QuotationState) -> Vec<DocumentSection> {
    let mut sections: Vec<DocumentSection> = Vec::new();
    for item in &state.line_items {
        let line = DocumentLine {
            id: item.id,
            description: item.description.clone(),
            subcategory_label: subcategory_label(&item.category, &item.subcategory),
            quantity: item.quantity,
            unit: item.unit.clone(),
            unit_price: item.unit_price,
            total: item.total,
            material_name: item.material_name.clone(),
        };
        match sections
            .iter_mut()
            .find(|section| section.category == item.category)
        {
            Some(section) => {
                section.section_total += line.total;
                section.items.push(line);
            }
            None => sections.push(DocumentSection {
                category: item.category.clone(),
                category_label: category_label(&item.category),
                section_total: line.total,
                items: vec![line],
            }),
        }
    }
    sections
}

/// Quotation reference in the Q{yy}{mm}-{nnn} format
fn generate_quotation_number(issued_on: NaiveDate) -> String {
    let year = issued_on.year() % 100;
    let month = issued_on.month();
    let bytes = *Uuid::new_v4().as_bytes();
    let suffix = u16::from_be_bytes([bytes[0], bytes[1]]) % 1000;
    format!("Q{:02}{:02}-{:03}", year, month, suffix)
}

fn render_csv(document: &QuotationDocument) -> Result<String, anyhow::Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    // Letterhead
    writer.write_record([""])?;
    writer.write_record(["", "", "", document.company.name.as_str()])?;
    writer.write_record(["", "", "", document.company.tagline.as_str()])?;
    writer.write_record(["", "", "", document.company.registration_no.as_str()])?;
    writer.write_record([""])?;
    for line in &document.company.address_lines {
        writer.write_record([line.as_str()])?;
    }
    writer.write_record([""])?;
    writer.write_record(["", "", "", "", "", "", "", "Quotation"])?;
    writer.write_record([""])?;

    // Client block
    writer.write_record(["Name:", document.client.client_name.as_str()])?;
    writer.write_record(["H/P:", document.client.client_phone.as_str()])?;
    writer.write_record(["Email:", document.client.client_email.as_str()])?;
    writer.write_record([""])?;
    writer.write_record([
        "", "", "", "", "", "", "",
        "Ref:",
        document.quotation_number.as_str(),
    ])?;
    let date = document.issued_on.format("%d/%m/%Y").to_string();
    writer.write_record(["", "", "", "", "", "", "", "Date:", date.as_str()])?;
    writer.write_record([""])?;
    writer.write_record(["ATTN TO:", document.client.client_name.as_str()])?;
    writer.write_record(["", document.client.project_name.as_str()])?;
    writer.write_record(["", document.client.project_address.as_str()])?;
    writer.write_record([""])?;
    writer.write_record(["", document.client.project_description.as_str()])?;
    writer.write_record([""])?;

    // Item table, one section per category
    writer.write_record(["No", "DESCRIPTION", "Size", "QTY", "Price", "AMOUNT"])?;
    let mut row = 0usize;
    for section in &document.sections {
        if !section.category_label.is_empty() {
            writer.write_record(["", section.category_label.as_str()])?;
        }
        for item in &section.items {
            row += 1;
            writer.write_record([
                row.to_string().as_str(),
                item.description.as_str(),
                item.unit.as_str(),
                item.quantity.to_string().as_str(),
                item.unit_price.to_string().as_str(),
                item.total.to_string().as_str(),
            ])?;
        }
    }
    writer.write_record([""])?;

    // Totals block; tax and discount both apply to the subtotal
    let totals = &document.totals;
    writer.write_record(["", "", "", "", "Subtotal:", totals.subtotal.to_string().as_str()])?;
    let tax_rate = format!("{}%", document.tax_rate);
    writer.write_record(["", "", "", "", "Tax Rate:", tax_rate.as_str()])?;
    writer.write_record([
        "", "", "", "",
        "Tax Amount:",
        totals.tax_amount.to_string().as_str(),
    ])?;
    let discount = format!("{}%", document.discount);
    writer.write_record(["", "", "", "", "Discount:", discount.as_str()])?;
    writer.write_record([
        "", "", "", "",
        "Discount Amount:",
        totals.discount_amount.to_string().as_str(),
    ])?;
    writer.write_record([
        "", "", "", "",
        "Total:",
        totals.grand_total.to_string().as_str(),
    ])?;

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
