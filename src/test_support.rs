// src/test_support.rs

// Fábricas de leads para os testes unitários

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::models::lead::{
    CustomerDetails, FuelType, InternalProcess, Lead, LeadSource, LeadStatus, TransmissionType,
    ValuationDetails, VehicleDetails,
};

pub(crate) fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
}

pub(crate) fn lead(id: &str, status: LeadStatus) -> Lead {
    lead_at(id, status, base_time())
}

pub(crate) fn lead_at(id: &str, status: LeadStatus, created_at: DateTime<Utc>) -> Lead {
    Lead {
        id: id.to_string(),
        customer: CustomerDetails {
            name: format!("Customer {id}"),
            phone: "9000000000".to_string(),
            alternate_phone: None,
            email: None,
            city: "Pune".to_string(),
            source: LeadSource::Website,
            assigned_sales_executive: "Vikram Singh".to_string(),
        },
        vehicle: VehicleDetails {
            brand: "Maruti".to_string(),
            model: "Baleno".to_string(),
            variant: "Zeta".to_string(),
            registration_number: "MH12AB1234".to_string(),
            registration_year: 2019,
            fuel_type: FuelType::Petrol,
            transmission: TransmissionType::Manual,
            kms_driven: 42_000,
            ownership: 1,
            insurance_valid_till: None,
            expected_price: None,
        },
        valuation: ValuationDetails::default(),
        internal: InternalProcess::default(),
        status,
        created_at,
        updated_at: created_at,
    }
}

pub(crate) fn closed(id: &str, offer: i64) -> Lead {
    let mut l = lead(id, LeadStatus::Closed);
    l.valuation.final_offer_price = Some(Decimal::from(offer));
    l
}

pub(crate) fn sold_by(mut l: Lead, executive: &str) -> Lead {
    l.customer.assigned_sales_executive = executive.to_string();
    l
}
