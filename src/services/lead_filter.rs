// src/services/lead_filter.rs

use crate::models::{
    filters::{DateRange, LeadFilters},
    lead::Lead,
};

/// Aplica todos os filtros (E lógico entre eles, OU dentro de cada conjunto).
/// A ordem original é preservada e o slice de entrada nunca é alterado.
pub fn filter_leads(leads: &[Lead], window: Option<&DateRange>, filters: &LeadFilters) -> Vec<Lead> {
    let query = filters.search.to_lowercase();

    leads
        .iter()
        .filter(|lead| matches_window(lead, window))
        .filter(|lead| matches_search(lead, &query))
        .filter(|lead| filters.statuses.is_empty() || filters.statuses.contains(&lead.status))
        .filter(|lead| filters.sources.is_empty() || filters.sources.contains(&lead.customer.source))
        .cloned()
        .collect()
}

pub fn matches_window(lead: &Lead, window: Option<&DateRange>) -> bool {
    window.is_none_or(|range| range.contains(lead.created_at))
}

// `query` já vem em minúsculas, sem trim: espaços contam. Vazia = aceita tudo.
fn matches_search(lead: &Lead, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    [
        lead.customer.name.as_str(),
        lead.customer.phone.as_str(),
        lead.vehicle.model.as_str(),
        lead.vehicle.brand.as_str(),
        lead.id.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}
