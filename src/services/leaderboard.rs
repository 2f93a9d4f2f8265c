// src/services/leaderboard.rs

use rust_decimal::Decimal;

use crate::models::{
    dashboard::{PerformerEntry, TeamMemberPerformance, TeamSummary, TeamView},
    lead::{Lead, LeadStatus},
};
use crate::services::stats::percentage_one_decimal;

pub const DEFAULT_TOP_PERFORMERS: usize = 3;

/// Agrupa por vendedor, na ordem em que cada nome aparece pela primeira vez.
pub fn group_by_executive(leads: &[Lead]) -> Vec<PerformerEntry> {
    let mut groups: Vec<PerformerEntry> = Vec::new();

    for lead in leads {
        let name = &lead.customer.assigned_sales_executive;
        let idx = match groups.iter().position(|g| &g.name == name) {
            Some(idx) => idx,
            None => {
                groups.push(PerformerEntry {
                    name: name.clone(),
                    total: 0,
                    closed: 0,
                    revenue: Decimal::ZERO,
                });
                groups.len() - 1
            }
        };

        let entry = &mut groups[idx];
        entry.total += 1;
        if let Some(revenue) = lead.closed_revenue() {
            entry.revenue += revenue;
        }
        if lead.status == LeadStatus::Closed {
            entry.closed += 1;
        }
    }

    groups
}

// Ordenação estável: empates ficam na ordem de aparição
fn ranked(leads: &[Lead]) -> Vec<PerformerEntry> {
    let mut groups = group_by_executive(leads);
    groups.sort_by(|a, b| b.closed.cmp(&a.closed));
    groups
}

pub fn top_performers(leads: &[Lead], limit: usize) -> Vec<PerformerEntry> {
    let mut groups = ranked(leads);
    groups.truncate(limit);
    groups
}

/// Ranking completo da equipe, com taxa de conversão individual.
pub fn team_performance(leads: &[Lead]) -> Vec<TeamMemberPerformance> {
    ranked(leads)
        .into_iter()
        .enumerate()
        .map(|(i, g)| TeamMemberPerformance {
            rank: i + 1,
            conversion_rate: percentage_one_decimal(g.closed, g.total),
            name: g.name,
            total: g.total,
            closed: g.closed,
            revenue: g.revenue,
        })
        .collect()
}

/// Somatório da equipe; a conversão média é fechados / total, com 1 casa.
pub fn team_summary(members: &[TeamMemberPerformance]) -> TeamSummary {
    let total_leads = members.iter().map(|m| m.total).sum();
    let total_converted = members.iter().map(|m| m.closed).sum();

    TeamSummary {
        total_revenue: members.iter().map(|m| m.revenue).sum(),
        total_leads,
        total_converted,
        average_conversion: percentage_one_decimal(total_converted, total_leads),
    }
}

pub fn team_view(leads: &[Lead]) -> TeamView {
    let members = team_performance(leads);
    TeamView {
        summary: team_summary(&members),
        members,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed, lead, sold_by};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn floor() -> Vec<Lead> {
        vec![
            sold_by(lead("L001", LeadStatus::New), "Anita"),
            sold_by(closed("L002", 400_000), "Rohan"),
            sold_by(closed("L003", 350_000), "Anita"),
            sold_by(closed("L004", 200_000), "Rohan"),
            sold_by(lead("L005", LeadStatus::Rejected), "Meera"),
            sold_by(closed("L006", 150_000), "Kabir"),
            sold_by(lead("L007", LeadStatus::Negotiation), "Kabir"),
        ]
    }

    #[test]
    fn ranks_by_closed_deals() {
        let top = top_performers(&floor(), DEFAULT_TOP_PERFORMERS);

        assert_eq!(
            top,
            vec![
                PerformerEntry {
                    name: "Rohan".into(),
                    total: 2,
                    closed: 2,
                    revenue: Decimal::from(600_000),
                },
                PerformerEntry {
                    name: "Anita".into(),
                    total: 2,
                    closed: 1,
                    revenue: Decimal::from(350_000),
                },
                PerformerEntry {
                    name: "Kabir".into(),
                    total: 2,
                    closed: 1,
                    revenue: Decimal::from(150_000),
                },
            ]
        );
    }

    #[test]
    fn closed_without_offer_counts_but_adds_no_revenue() {
        let leads = vec![sold_by(lead("L001", LeadStatus::Closed), "Anita")];
        let top = top_performers(&leads, 3);
        assert_eq!(top[0].closed, 1);
        assert_eq!(top[0].revenue, Decimal::ZERO);
    }

    #[test]
    fn empty_names_are_just_another_group() {
        let leads = vec![
            sold_by(closed("L001", 10), ""),
            sold_by(lead("L002", LeadStatus::New), ""),
        ];
        let top = top_performers(&leads, 3);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "");
        assert_eq!(top[0].total, 2);
    }

    #[test]
    fn team_view_keeps_everyone_with_conversion() {
        let team = team_performance(&floor());

        assert_eq!(team.len(), 4);
        assert_eq!(team[0].rank, 1);
        assert_eq!(team[0].conversion_rate, 100.0);
        assert_eq!(team[1].conversion_rate, 50.0);
        assert_eq!(team[3].name, "Meera");
        assert_eq!(team[3].conversion_rate, 0.0);
    }

    #[test]
    fn team_totals_add_up_the_members() {
        let view = team_view(&floor());

        assert_eq!(view.members.len(), 4);
        assert_eq!(
            view.summary,
            TeamSummary {
                total_revenue: Decimal::from(1_100_000),
                total_leads: 7,
                total_converted: 4,
                average_conversion: 57.1,
            }
        );
    }

    #[test]
    fn empty_team_has_zero_totals() {
        let view = team_view(&[]);

        assert!(view.members.is_empty());
        assert_eq!(view.summary.total_revenue, Decimal::ZERO);
        assert_eq!(view.summary.total_leads, 0);
        assert_eq!(view.summary.total_converted, 0);
        assert_eq!(view.summary.average_conversion, 0.0);
    }

    proptest! {
        #[test]
        fn leaderboard_is_sorted_and_consistent(
            rows in proptest::collection::vec((0usize..5, proptest::bool::ANY), 0..40),
            limit in 0usize..6,
        ) {
            let leads: Vec<Lead> = rows
                .iter()
                .enumerate()
                .map(|(i, (who, is_closed))| {
                    let status = if *is_closed { LeadStatus::Closed } else { LeadStatus::Contacted };
                    sold_by(lead(&format!("L{i:03}"), status), &format!("exec-{who}"))
                })
                .collect();

            let top = top_performers(&leads, limit);
            prop_assert!(top.len() <= limit);
            for entry in &top {
                prop_assert!(entry.closed <= entry.total);
            }
            for pair in top.windows(2) {
                prop_assert!(pair[0].closed >= pair[1].closed);
            }
        }
    }
}
