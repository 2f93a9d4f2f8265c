// src/services/trends.rs

//! Variação real entre o período ativo e o período anterior de mesmo tamanho.
//! Substitui os "+12.5% vs last month" fixos que o front-end exibia.

use chrono::Duration;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::{
    dashboard::{DashboardTrends, Trend},
    filters::DateRange,
    lead::{Lead, LeadStatus},
};
use crate::services::{lead_filter::matches_window, stats};

/// Janela imediatamente anterior, terminando 1ns antes de `current.start`.
pub fn previous_window(current: &DateRange) -> DateRange {
    let span = current.end - current.start;
    let end = current.start - Duration::nanoseconds(1);
    DateRange { start: end - span, end }
}

fn change_pct(current: f64, previous: f64) -> Option<f64> {
    if previous == 0.0 {
        return None;
    }
    let pct = (current - previous) / previous * 100.0;
    Some((pct * 10.0).round() / 10.0)
}

fn count_trend(current: usize, previous: usize) -> Trend<usize> {
    Trend {
        current,
        previous,
        change_pct: change_pct(current as f64, previous as f64),
    }
}

fn money_trend(current: Decimal, previous: Decimal) -> Trend<Decimal> {
    let pct = match (current.to_f64(), previous.to_f64()) {
        (Some(c), Some(p)) => change_pct(c, p),
        _ => None,
    };
    Trend {
        current,
        previous,
        change_pct: pct,
    }
}

/// `current` já é a coleção filtrada da janela ativa; `pool` é a coleção
/// filtrada sem a restrição de data, de onde sai o período anterior.
pub fn compute_trends(current: &[Lead], pool: &[Lead], window: &DateRange) -> DashboardTrends {
    let previous_window = previous_window(window);
    let previous: Vec<Lead> = pool
        .iter()
        .filter(|lead| matches_window(lead, Some(&previous_window)))
        .cloned()
        .collect();

    let closed_now = stats::count_by_status(current, LeadStatus::Closed);
    let closed_before = stats::count_by_status(&previous, LeadStatus::Closed);
    let rate_now = stats::conversion_rate(current);
    let rate_before = stats::conversion_rate(&previous);

    tracing::debug!(
        current = current.len(),
        previous = previous.len(),
        "Calculando tendências do dashboard"
    );

    DashboardTrends {
        previous_window,
        total_leads: count_trend(current.len(), previous.len()),
        closed_leads: count_trend(closed_now, closed_before),
        total_revenue: money_trend(stats::total_revenue(current), stats::total_revenue(&previous)),
        conversion_rate: Trend {
            current: rate_now,
            previous: rate_before,
            change_pct: change_pct(rate_now, rate_before),
        },
    }
}
