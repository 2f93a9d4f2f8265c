// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;

use super::filters::DateRange;
use super::lead::{BadgeTone, Lead, LeadStatus};

// 1. Os Cards do Topo
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_leads: usize,
    pub new_leads: usize,
    pub closed_leads: usize,
    pub rejected_leads: usize,
    pub total_revenue: Decimal,
    pub conversion_rate: f64,
    pub average_deal_value: Decimal,
}

// 2. Distribuição por status. "Valuation" junta Scheduled e Completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StatusBucket {
    New,
    Contacted,
    Valuation,
    Negotiation,
    Closed,
    Rejected,
}

impl StatusBucket {
    pub const ALL: [StatusBucket; 6] = [
        StatusBucket::New,
        StatusBucket::Contacted,
        StatusBucket::Valuation,
        StatusBucket::Negotiation,
        StatusBucket::Closed,
        StatusBucket::Rejected,
    ];

    pub fn of(status: LeadStatus) -> Self {
        match status {
            LeadStatus::New => StatusBucket::New,
            LeadStatus::Contacted => StatusBucket::Contacted,
            LeadStatus::ValuationScheduled | LeadStatus::ValuationCompleted => {
                StatusBucket::Valuation
            }
            LeadStatus::Negotiation => StatusBucket::Negotiation,
            LeadStatus::Closed => StatusBucket::Closed,
            LeadStatus::Rejected => StatusBucket::Rejected,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusBucket::New => "New",
            StatusBucket::Contacted => "Contacted",
            StatusBucket::Valuation => "Valuation",
            StatusBucket::Negotiation => "Negotiation",
            StatusBucket::Closed => "Closed",
            StatusBucket::Rejected => "Rejected",
        }
    }

    pub fn tone(self) -> BadgeTone {
        match self {
            StatusBucket::New => BadgeTone::Blue,
            StatusBucket::Contacted => BadgeTone::Purple,
            StatusBucket::Valuation => BadgeTone::Amber,
            StatusBucket::Negotiation => BadgeTone::Indigo,
            StatusBucket::Closed => BadgeTone::Green,
            StatusBucket::Rejected => BadgeTone::Red,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusShare {
    pub bucket: StatusBucket,
    pub label: &'static str,
    pub tone: BadgeTone,
    pub count: usize,
    pub percentage: u32,
}

// 3. Ranking de vendedores
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformerEntry {
    pub name: String,
    pub total: usize,
    pub closed: usize,
    pub revenue: Decimal,
}

// Tela de equipe: ranking completo com a taxa de conversão individual
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberPerformance {
    pub rank: usize,
    pub name: String,
    pub total: usize,
    pub closed: usize,
    pub revenue: Decimal,
    pub conversion_rate: f64,
}

// Totais do topo da tela de equipe
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub total_revenue: Decimal,
    pub total_leads: usize,
    pub total_converted: usize,
    pub average_conversion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamView {
    pub summary: TeamSummary,
    pub members: Vec<TeamMemberPerformance>,
}

// 4. Cards da tela de leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSummary {
    pub total: usize,
    pub new: usize,
    pub in_progress: usize,
    pub closed: usize,
}

// 5. Tendências reais (período atual vs anterior)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend<T> {
    pub current: T,
    pub previous: T,
    pub change_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTrends {
    pub previous_window: DateRange,
    pub total_leads: Trend<usize>,
    pub closed_leads: Trend<usize>,
    pub total_revenue: Trend<Decimal>,
    pub conversion_rate: Trend<f64>,
}

// Resposta completa do dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub window: Option<DateRange>,
    pub stats: DashboardStats,
    pub status_distribution: Vec<StatusShare>,
    pub recent_leads: Vec<Lead>,
    pub top_performers: Vec<PerformerEntry>,
    pub trends: Option<DashboardTrends>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadListView {
    pub window: Option<DateRange>,
    pub summary: PipelineSummary,
    pub leads: Vec<Lead>,
}
