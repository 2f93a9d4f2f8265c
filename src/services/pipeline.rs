// src/services/pipeline.rs

use crate::models::{dashboard::PipelineSummary, lead::{Lead, LeadStatus}};

// "Em andamento" nos cards da tela de leads. Valuation Completed fica de fora.
const IN_PROGRESS: [LeadStatus; 3] = [
    LeadStatus::Contacted,
    LeadStatus::ValuationScheduled,
    LeadStatus::Negotiation,
];

pub fn pipeline_summary(leads: &[Lead]) -> PipelineSummary {
    leads.iter().fold(
        PipelineSummary {
            total: leads.len(),
            ..Default::default()
        },
        |mut acc, lead| {
            match lead.status {
                LeadStatus::New => acc.new += 1,
                LeadStatus::Closed => acc.closed += 1,
                s if IN_PROGRESS.contains(&s) => acc.in_progress += 1,
                _ => {}
            }
            acc
        },
    )
}
