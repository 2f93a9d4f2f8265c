// src/models/lead.rs

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// --- ENUMS ---

// Estágio do funil. Os rótulos são os mesmos que o front-end exibe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    #[serde(rename = "Valuation Scheduled")]
    ValuationScheduled,
    #[serde(rename = "Valuation Completed")]
    ValuationCompleted,
    Negotiation,
    Closed,
    Rejected,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 7] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::ValuationScheduled,
        LeadStatus::ValuationCompleted,
        LeadStatus::Negotiation,
        LeadStatus::Closed,
        LeadStatus::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::ValuationScheduled => "Valuation Scheduled",
            LeadStatus::ValuationCompleted => "Valuation Completed",
            LeadStatus::Negotiation => "Negotiation",
            LeadStatus::Closed => "Closed",
            LeadStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Call,
    #[serde(rename = "Walk-in")]
    WalkIn,
    Partner,
}

impl LeadSource {
    pub const ALL: [LeadSource; 4] = [
        LeadSource::Website,
        LeadSource::Call,
        LeadSource::WalkIn,
        LeadSource::Partner,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Call => "Call",
            LeadSource::WalkIn => "Walk-in",
            LeadSource::Partner => "Partner",
        }
    }
}

// Cor do badge no front-end (antes era um Record<string, string>)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTone {
    Blue,
    Purple,
    Amber,
    Indigo,
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FuelType {
    Petrol,
    Diesel,
    #[serde(rename = "CNG")]
    Cng,
    Electric,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransmissionType {
    Manual,
    Automatic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValuationStatus {
    Pending,
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

// --- Parse dos rótulos (query string, ex: ?status=New,Closed) ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLabel(pub String);

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownLabel {}

impl FromStr for LeadStatus {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LeadStatus::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl FromStr for LeadSource {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        LeadSource::ALL
            .into_iter()
            .find(|source| source.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- O LEAD ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub city: String,
    pub source: LeadSource,
    pub assigned_sales_executive: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub brand: String,
    pub model: String,
    pub variant: String,
    pub registration_number: String,
    pub registration_year: i32,
    pub fuel_type: FuelType,
    pub transmission: TransmissionType,
    pub kms_driven: u32,
    pub ownership: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance_valid_till: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_price: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationDetails {
    pub status: ValuationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_valuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_offer_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Default for ValuationDetails {
    fn default() -> Self {
        Self {
            status: ValuationStatus::Pending,
            assigned_valuer: None,
            inspection_date: None,
            estimated_price: None,
            final_offer_price: None,
            notes: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalProcess {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_manager: Option<String>,
    // Listas só crescem (append-only)
    #[serde(default)]
    pub follow_up_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub call_notes: Vec<String>,
    pub document_status: DocumentStatus,
    pub approval_status: ApprovalStatus,
}

impl Default for InternalProcess {
    fn default() -> Self {
        Self {
            relationship_manager: None,
            follow_up_dates: Vec::new(),
            call_notes: Vec::new(),
            document_status: DocumentStatus::Pending,
            approval_status: ApprovalStatus::Pending,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: String,
    pub customer: CustomerDetails,
    pub vehicle: VehicleDetails,
    pub valuation: ValuationDetails,
    pub internal: InternalProcess,
    pub status: LeadStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Lead {
    /// Valor que conta como receita: só quando o lead está fechado E tem oferta final.
    pub fn closed_revenue(&self) -> Option<Decimal> {
        match self.status {
            LeadStatus::Closed => self.valuation.final_offer_price,
            _ => None,
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
