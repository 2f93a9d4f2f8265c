// src/services/dashboard_service.rs

use chrono::{DateTime, FixedOffset, Utc};

use crate::{
    db::LeadRepository,
    models::{
        dashboard::{DashboardReport, LeadListView, TeamView},
        filters::{DateRange, LeadFilters},
        lead::Lead,
    },
    services::{date_range, lead_filter, leaderboard, pipeline, stats, trends},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub recent_leads: usize,
    pub top_performers: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            recent_leads: stats::DEFAULT_RECENT_LIMIT,
            top_performers: leaderboard::DEFAULT_TOP_PERFORMERS,
        }
    }
}

#[derive(Clone)]
pub struct DashboardService {
    repo: LeadRepository,
    offset: FixedOffset,
    limits: DashboardLimits,
}

impl DashboardService {
    pub fn new(repo: LeadRepository, offset: FixedOffset, limits: DashboardLimits) -> Self {
        Self { repo, offset, limits }
    }

    /// "Agora" no fuso do dashboard; os limites de dia são calculados nele.
    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    // Snapshot + janela + filtro: base de todas as telas
    async fn filtered(
        &self,
        filters: &LeadFilters,
        now: DateTime<FixedOffset>,
    ) -> (Vec<Lead>, Option<DateRange>, Vec<Lead>) {
        let snapshot = self.repo.snapshot().await;
        let window = date_range::resolve(&filters.date, now);
        let filtered = lead_filter::filter_leads(&snapshot, window.as_ref(), filters);
        (snapshot, window, filtered)
    }

    // =========================================================================
    //  DASHBOARD
    // =========================================================================

    pub async fn report_at(&self, filters: &LeadFilters, now: DateTime<FixedOffset>) -> DashboardReport {
        let (snapshot, window, filtered) = self.filtered(filters, now).await;

        // Tendências: mesmos filtros de busca/status/origem, sem a janela
        let trends = window.as_ref().map(|window| {
            let pool = lead_filter::filter_leads(&snapshot, None, filters);
            trends::compute_trends(&filtered, &pool, window)
        });

        tracing::debug!(
            total = snapshot.len(),
            filtered = filtered.len(),
            selector = ?filters.date.selector,
            "Relatório do dashboard montado"
        );

        DashboardReport {
            window,
            stats: stats::summarize(&filtered),
            status_distribution: stats::status_distribution(&filtered),
            recent_leads: stats::recent_leads(&filtered, self.limits.recent_leads),
            top_performers: leaderboard::top_performers(&filtered, self.limits.top_performers),
            trends,
        }
    }

    pub async fn report(&self, filters: &LeadFilters) -> DashboardReport {
        self.report_at(filters, self.now()).await
    }

    // =========================================================================
    //  LISTA DE LEADS
    // =========================================================================

    pub async fn lead_list_at(&self, filters: &LeadFilters, now: DateTime<FixedOffset>) -> LeadListView {
        let (_, window, leads) = self.filtered(filters, now).await;
        LeadListView {
            window,
            summary: pipeline::pipeline_summary(&leads),
            leads,
        }
    }

    pub async fn lead_list(&self, filters: &LeadFilters) -> LeadListView {
        self.lead_list_at(filters, self.now()).await
    }

    // =========================================================================
    //  EQUIPE
    // =========================================================================

    pub async fn team_at(
        &self,
        filters: &LeadFilters,
        now: DateTime<FixedOffset>,
    ) -> TeamView {
        let (_, _, leads) = self.filtered(filters, now).await;
        leaderboard::team_view(&leads)
    }

    pub async fn team(&self, filters: &LeadFilters) -> TeamView {
        self.team_at(filters, self.now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        filters::{DateFilter, DateSelector},
        lead::LeadStatus,
    };
    use crate::test_support::{base_time, closed, lead, lead_at, sold_by};
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap()
    }

    fn now() -> DateTime<FixedOffset> {
        base_time().with_timezone(&ist())
    }

    fn service(seed: Vec<Lead>) -> DashboardService {
        DashboardService::new(LeadRepository::new(seed), ist(), DashboardLimits::default())
    }

    fn team_seed() -> Vec<Lead> {
        vec![
            sold_by(closed("L001", 500_000), "Amit Sharma"),
            sold_by(closed("L002", 300_000), "Priya Patel"),
            sold_by(closed("L003", 400_000), "Priya Patel"),
            sold_by(lead("L004", LeadStatus::New), "Amit Sharma"),
            sold_by(lead("L005", LeadStatus::Rejected), "Rahul Mehta"),
            sold_by(lead("L006", LeadStatus::Negotiation), "Neha Reddy"),
        ]
    }

    #[tokio::test]
    async fn all_time_report_covers_every_lead_without_trends() {
        let service = service(team_seed());
        let report = service.report_at(&LeadFilters::default(), now()).await;

        assert_eq!(report.window, None);
        assert!(report.trends.is_none());
        assert_eq!(report.stats.total_leads, 6);
        assert_eq!(report.stats.closed_leads, 3);
        assert_eq!(report.stats.total_revenue, Decimal::from(1_200_000));
        assert_eq!(report.stats.conversion_rate, 50.0);
        assert_eq!(report.recent_leads.len(), 5);
        assert_eq!(report.top_performers.len(), 3);
        assert_eq!(report.top_performers[0].name, "Priya Patel");
    }

    #[tokio::test]
    async fn windowed_report_compares_with_previous_period() {
        let t = base_time();
        let seed = vec![
            lead_at("L001", LeadStatus::New, t - Duration::hours(1)),
            lead_at("L002", LeadStatus::Contacted, t - Duration::days(2)),
            // Só entra no período anterior (8 a 15 dias atrás)
            lead_at("L003", LeadStatus::Closed, t - Duration::days(10)),
        ];
        let service = service(seed);
        let filters = LeadFilters {
            date: DateFilter::new(DateSelector::Last7Days),
            ..Default::default()
        };

        let report = service.report_at(&filters, now()).await;

        assert!(report.window.is_some());
        assert_eq!(report.stats.total_leads, 2);
        let trends = report.trends.unwrap();
        assert_eq!(trends.total_leads.current, 2);
        assert_eq!(trends.total_leads.previous, 1);
        assert_eq!(trends.total_leads.change_pct, Some(100.0));
        assert_eq!(trends.closed_leads.previous, 1);
    }

    #[tokio::test]
    async fn lead_list_carries_the_pipeline_summary() {
        let service = service(team_seed());
        let filters = LeadFilters {
            search: "amit".into(),
            ..Default::default()
        };
        // "amit" não casa com nome do vendedor, só com campos do cliente/veículo
        let view = service.lead_list_at(&filters, now()).await;
        assert!(view.leads.is_empty());
        assert_eq!(view.summary.total, 0);

        let filters = LeadFilters {
            statuses: vec![LeadStatus::Closed, LeadStatus::Negotiation],
            ..Default::default()
        };
        let view = service.lead_list_at(&filters, now()).await;
        assert_eq!(view.leads.len(), 4);
        assert_eq!(view.summary.closed, 3);
        assert_eq!(view.summary.in_progress, 1);
    }

    #[tokio::test]
    async fn team_view_ranks_everyone() {
        let service = service(team_seed());
        let team = service.team_at(&LeadFilters::default(), now()).await;

        let names: Vec<_> = team.members.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Priya Patel", "Amit Sharma", "Rahul Mehta", "Neha Reddy"]);
        assert_eq!(team.members[0].rank, 1);
        assert_eq!(team.members[0].conversion_rate, 100.0);
        assert_eq!(team.summary.total_leads, 6);
        assert_eq!(team.summary.total_converted, 3);
        assert_eq!(team.summary.average_conversion, 50.0);
    }

    #[tokio::test]
    async fn limits_come_from_configuration() {
        let service = DashboardService::new(
            LeadRepository::new(team_seed()),
            ist(),
            DashboardLimits {
                recent_leads: 2,
                top_performers: 1,
            },
        );
        let report = service.report_at(&LeadFilters::default(), now()).await;
        assert_eq!(report.recent_leads.len(), 2);
        assert_eq!(report.top_performers.len(), 1);
    }
}
