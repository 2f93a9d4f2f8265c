// src/services/stats.rs

//! Métricas do dashboard sobre uma coleção (normalmente já filtrada).
//! Nada aqui falha: coleção vazia dá zero, preço ausente soma zero.

use rust_decimal::Decimal;

use crate::models::{
    dashboard::{DashboardStats, StatusBucket, StatusShare},
    lead::{Lead, LeadStatus},
};

pub const DEFAULT_RECENT_LIMIT: usize = 5;

pub fn count_by_status(leads: &[Lead], status: LeadStatus) -> usize {
    leads.iter().filter(|l| l.status == status).count()
}

pub fn count_by_bucket(leads: &[Lead], bucket: StatusBucket) -> usize {
    leads.iter().filter(|l| StatusBucket::of(l.status) == bucket).count()
}

pub fn total_revenue(leads: &[Lead]) -> Decimal {
    leads.iter().filter_map(Lead::closed_revenue).sum()
}

/// `closed / total * 100` com uma casa decimal; 0 para coleção vazia.
pub fn percentage_one_decimal(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = part as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}

pub fn conversion_rate(leads: &[Lead]) -> f64 {
    percentage_one_decimal(count_by_status(leads, LeadStatus::Closed), leads.len())
}

pub fn average_deal_value(leads: &[Lead]) -> Decimal {
    let closed = count_by_status(leads, LeadStatus::Closed);
    if closed == 0 {
        return Decimal::ZERO;
    }
    total_revenue(leads) / Decimal::from(closed)
}

pub fn summarize(leads: &[Lead]) -> DashboardStats {
    DashboardStats {
        total_leads: leads.len(),
        new_leads: count_by_status(leads, LeadStatus::New),
        closed_leads: count_by_status(leads, LeadStatus::Closed),
        rejected_leads: count_by_status(leads, LeadStatus::Rejected),
        total_revenue: total_revenue(leads),
        conversion_rate: conversion_rate(leads),
        average_deal_value: average_deal_value(leads),
    }
}

pub fn status_distribution(leads: &[Lead]) -> Vec<StatusShare> {
    let total = leads.len();

    StatusBucket::ALL
        .into_iter()
        .map(|bucket| {
            let count = count_by_bucket(leads, bucket);
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u32
            };
            StatusShare {
                bucket,
                label: bucket.label(),
                tone: bucket.tone(),
                count,
                percentage,
            }
        })
        .collect()
}

/// Os `limit` leads mais novos. `sort_by` é estável, então empates mantêm a ordem original.
pub fn recent_leads(leads: &[Lead], limit: usize) -> Vec<Lead> {
    let mut sorted: Vec<&Lead> = leads.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{base_time, closed, lead, lead_at};
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn example_scenario_from_the_sales_floor() {
        let leads = vec![
            closed("L001", 500_000),
            closed("L002", 300_000),
            lead("L003", LeadStatus::New),
        ];

        let stats = summarize(&leads);

        assert_eq!(stats.total_revenue, Decimal::from(800_000));
        assert_eq!(stats.closed_leads, 2);
        assert_eq!(stats.conversion_rate, 66.7);
        assert_eq!(stats.average_deal_value, Decimal::from(400_000));
        assert_eq!(stats.new_leads, 1);
        assert_eq!(stats.total_leads, 3);
    }

    #[test]
    fn empty_collection_is_all_zeros() {
        let stats = summarize(&[]);

        assert_eq!(
            stats,
            DashboardStats {
                total_leads: 0,
                new_leads: 0,
                closed_leads: 0,
                rejected_leads: 0,
                total_revenue: Decimal::ZERO,
                conversion_rate: 0.0,
                average_deal_value: Decimal::ZERO,
            }
        );
        for share in status_distribution(&[]) {
            assert_eq!((share.count, share.percentage), (0, 0));
        }
    }

    #[test]
    fn revenue_needs_closed_status_and_an_offer() {
        let mut negotiating = lead("L001", LeadStatus::Negotiation);
        negotiating.valuation.final_offer_price = Some(Decimal::from(250_000));
        let closed_without_offer = lead("L002", LeadStatus::Closed);
        let leads = vec![negotiating, closed_without_offer, closed("L003", 100_000)];

        assert_eq!(total_revenue(&leads), Decimal::from(100_000));
        // O fechado sem oferta entra na média como zero
        assert_eq!(average_deal_value(&leads), Decimal::from(50_000));
    }

    #[test]
    fn average_is_the_plain_quotient() {
        let leads = vec![closed("L001", 1), closed("L002", 0), closed("L003", 0)];

        let expected = Decimal::ONE / Decimal::from(3);
        assert_eq!(average_deal_value(&leads), expected);
        assert!(average_deal_value(&leads).scale() > 2);
    }

    #[test]
    fn valuation_statuses_share_one_bucket() {
        let leads = vec![
            lead("L001", LeadStatus::ValuationScheduled),
            lead("L002", LeadStatus::ValuationCompleted),
            lead("L003", LeadStatus::Contacted),
            lead("L004", LeadStatus::Closed),
        ];

        let distribution = status_distribution(&leads);
        let valuation = distribution
            .iter()
            .find(|s| s.bucket == StatusBucket::Valuation)
            .unwrap();

        assert_eq!(valuation.count, 2);
        assert_eq!(valuation.percentage, 50);
        assert_eq!(distribution.len(), 6);
        assert_eq!(distribution[0].label, "New");
    }

    #[test]
    fn percentages_round_to_whole_numbers() {
        let leads = vec![
            lead("L001", LeadStatus::New),
            lead("L002", LeadStatus::Contacted),
            lead("L003", LeadStatus::Contacted),
        ];
        let distribution = status_distribution(&leads);

        assert_eq!(distribution[0].percentage, 33);
        assert_eq!(distribution[1].percentage, 67);
    }

    #[test]
    fn recent_leads_sorts_newest_first_and_keeps_ties_stable() {
        let t = base_time();
        let leads = vec![
            lead_at("L001", LeadStatus::New, t),
            lead_at("L002", LeadStatus::New, t + Duration::days(2)),
            lead_at("L003", LeadStatus::New, t + Duration::days(1)),
            lead_at("L004", LeadStatus::New, t + Duration::days(2)),
            lead_at("L005", LeadStatus::New, t - Duration::days(1)),
            lead_at("L006", LeadStatus::New, t + Duration::days(3)),
        ];

        let recent: Vec<String> = recent_leads(&leads, DEFAULT_RECENT_LIMIT)
            .into_iter()
            .map(|l| l.id)
            .collect();

        assert_eq!(recent, vec!["L006", "L002", "L004", "L003", "L001"]);
    }

    #[test]
    fn recent_leads_handles_short_collections() {
        let leads = vec![lead("L001", LeadStatus::New)];
        assert_eq!(recent_leads(&leads, 5).len(), 1);
        assert!(recent_leads(&[], 5).is_empty());
    }

    proptest! {
        #[test]
        fn buckets_partition_the_collection(
            statuses in proptest::collection::vec(proptest::sample::select(LeadStatus::ALL.to_vec()), 0..60)
        ) {
            let leads: Vec<Lead> = statuses
                .iter()
                .enumerate()
                .map(|(i, s)| lead(&format!("L{i:03}"), *s))
                .collect();

            let total: usize = status_distribution(&leads).iter().map(|s| s.count).sum();
            prop_assert_eq!(total, leads.len());

            let rate = conversion_rate(&leads);
            prop_assert!((0.0..=100.0).contains(&rate));
        }
    }
}
