// src/models/requests.rs

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use super::lead::{FuelType, LeadSource, LeadStatus, TransmissionType};

// ---
// Validações customizadas
// ---
pub(crate) fn validate_not_negative(val: &Decimal) -> Result<(), ValidationError> {
    if val.is_sign_negative() {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &0.0);
        err.message = Some("Price must be positive".into());
        return Err(err);
    }
    Ok(())
}

// O limite superior é o ano corrente, então não dá para usar `range` estático
fn validate_registration_year(year: i32) -> Result<(), ValidationError> {
    let current_year = Utc::now().year();
    if !(1990..=current_year).contains(&year) {
        let mut err = ValidationError::new("range");
        err.add_param("min".into(), &1990);
        err.add_param("max".into(), &current_year);
        err.message = Some(format!("Registration year must be between 1990 and {current_year}").into());
        return Err(err);
    }
    Ok(())
}

// ---
// Payload: Novo lead (formulário de cadastro)
// ---
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLeadPayload {
    // Dados do cliente
    #[validate(length(min = 2, message = "Dealer name must be at least 2 characters"))]
    pub customer_name: String,

    #[validate(length(min = 10, message = "Phone number must be at least 10 digits"))]
    pub phone: String,

    pub alternate_phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(min = 2, message = "City is required"))]
    pub city: String,

    pub source: LeadSource,

    #[validate(length(min = 2, message = "Sales executive is required"))]
    pub assigned_sales_executive: String,

    // Dados do veículo
    #[validate(length(min = 2, message = "Brand is required"))]
    pub brand: String,

    #[validate(length(min = 2, message = "Model is required"))]
    pub model: String,

    #[validate(length(min = 2, message = "Variant is required"))]
    pub variant: String,

    #[validate(length(min = 5, message = "Registration number is required"))]
    pub registration_number: String,

    #[validate(custom(function = "validate_registration_year"))]
    pub registration_year: i32,

    pub fuel_type: FuelType,

    pub transmission: TransmissionType,

    pub kms_driven: u32,

    #[validate(range(min = 1, max = 5, message = "Ownership must be between 1 and 5"))]
    pub ownership: u8,

    pub insurance_valid_till: Option<NaiveDate>,

    #[validate(custom(function = "validate_not_negative"))]
    pub expected_price: Option<Decimal>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusPayload {
    pub status: LeadStatus,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNotePayload {
    pub note: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFollowUpPayload {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleInspectionPayload {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "Valuer is required"))]
    pub valuer: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordValuationPayload {
    #[validate(custom(function = "validate_not_negative"))]
    pub estimated_price: Option<Decimal>,

    #[validate(custom(function = "validate_not_negative"))]
    pub final_offer_price: Option<Decimal>,

    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1990, true)]
    #[case(2015, true)]
    #[case(1989, false)]
    #[case(-1, false)]
    fn registration_year_bounds(#[case] year: i32, #[case] accepted: bool) {
        assert_eq!(validate_registration_year(year).is_ok(), accepted);
    }

    #[test]
    fn registration_year_tracks_the_calendar() {
        let current = Utc::now().year();
        assert!(validate_registration_year(current).is_ok());

        let err = validate_registration_year(current + 1).unwrap_err();
        assert_eq!(err.code, "range");
        assert_eq!(err.params["max"], serde_json::json!(current));
    }
}
