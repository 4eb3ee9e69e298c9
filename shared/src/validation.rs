//! Validation utilities for the Construction Quotation Builder
//!
//! Boundary checks applied before mutations reach the quotation state. The
//! calculation engine itself never validates; callers reject bad input here.

use rust_decimal::Decimal;

use crate::models::ClientDetails;
use crate::types::is_known_unit;

// ============================================================================
// Quotation Numeric Validations
// ============================================================================

/// Validate a line-item quantity
pub fn validate_quantity(quantity: Decimal) -> Result<(), &'static str> {
    if quantity < Decimal::ZERO {
        return Err("Quantity cannot be negative");
    }
    Ok(())
}

/// Validate a line-item unit price
pub fn validate_unit_price(unit_price: Decimal) -> Result<(), &'static str> {
    if unit_price < Decimal::ZERO {
        return Err("Unit price cannot be negative");
    }
    Ok(())
}

/// Validate a tax or discount percentage
pub fn validate_rate_percent(rate: Decimal) -> Result<(), &'static str> {
    if rate < Decimal::ZERO || rate > Decimal::from(100) {
        return Err("Rate must be between 0 and 100%");
    }
    Ok(())
}

/// Validate a unit code against the editor vocabulary
pub fn validate_unit(unit: &str) -> Result<(), &'static str> {
    if unit.trim().is_empty() {
        return Err("Unit is required");
    }
    if !is_known_unit(unit) {
        return Err("Unknown unit of measure");
    }
    Ok(())
}

// ============================================================================
// Client Detail Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() == 2 && !parts[0].is_empty() && parts[1].contains('.') {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate the client form before it is stored
pub fn validate_client_details(client: &ClientDetails) -> Result<(), &'static str> {
    if client.client_name.trim().is_empty() {
        return Err("Client name is required");
    }
    validate_email(&client.client_email)?;
    if client.project_name.trim().is_empty() {
        return Err("Project name is required");
    }
    if client.project_address.trim().is_empty() {
        return Err("Project address is required");
    }
    Ok(())
}
