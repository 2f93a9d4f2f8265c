// src/models/filters.rs

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::lead::{LeadSource, LeadStatus, UnknownLabel};

// Seletor de período do dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateSelector {
    Today,
    #[serde(rename = "last-7-days")]
    Last7Days,
    #[serde(rename = "last-30-days")]
    Last30Days,
    ThisMonth,
    LastMonth,
    #[default]
    AllTime,
    Custom,
}

// Mesmos rótulos do serde (kebab-case), usados na query string
impl FromStr for DateSelector {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(DateSelector::Today),
            "last-7-days" => Ok(DateSelector::Last7Days),
            "last-30-days" => Ok(DateSelector::Last30Days),
            "this-month" => Ok(DateSelector::ThisMonth),
            "last-month" => Ok(DateSelector::LastMonth),
            "all-time" => Ok(DateSelector::AllTime),
            "custom" => Ok(DateSelector::Custom),
            _ => Err(UnknownLabel(s.trim().to_string())),
        }
    }
}

/// Filtro de data completo: o seletor e, para `Custom`, as datas cruas
/// (`YYYY-MM-DD`) como vieram do formulário.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DateFilter {
    pub selector: DateSelector,
    pub custom_start: Option<String>,
    pub custom_end: Option<String>,
}

impl DateFilter {
    pub fn new(selector: DateSelector) -> Self {
        Self {
            selector,
            custom_start: None,
            custom_end: None,
        }
    }

    pub fn custom(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            selector: DateSelector::Custom,
            custom_start: start.map(str::to_string),
            custom_end: end.map(str::to_string),
        }
    }
}

/// Janela fechada `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateRange {
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// Tudo que a tela de leads pode filtrar. Conjuntos vazios = "todos".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadFilters {
    pub date: DateFilter,
    pub search: String,
    pub statuses: Vec<LeadStatus>,
    pub sources: Vec<LeadSource>,
}

// Usado pelo resolvedor para datas custom
pub(crate) fn parse_calendar_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
