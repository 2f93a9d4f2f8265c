// src/config.rs

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr};

use anyhow::Context;
use chrono::FixedOffset;

use crate::{
    db::{LeadRepository, NotificationRepository},
    services::{
        notification_bus, DashboardLimits, DashboardService, LeadService, NotificationBus,
        NotificationCenter,
    },
};

// --- Configuração (variáveis de ambiente / .env) ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub leads_seed_path: PathBuf,
    // Fuso usado para "hoje", "este mês" etc. (IST por padrão)
    pub dashboard_offset: FixedOffset,
    pub limits: DashboardLimits,
    pub notification_capacity: usize,
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("{key} inválida ('{raw}'): {e}")),
        _ => Ok(default),
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // O .env é opcional; em produção as variáveis vêm do ambiente
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = DashboardLimits::default();
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60)
            .context("Offset padrão do dashboard inválido")?;

        Ok(Self {
            bind_addr: parse_or(&lookup, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
            leads_seed_path: lookup("LEADS_SEED_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/leads.json")),
            dashboard_offset: parse_or(&lookup, "DASHBOARD_UTC_OFFSET", ist)?,
            limits: DashboardLimits {
                recent_leads: parse_or(&lookup, "RECENT_LEADS_LIMIT", defaults.recent_leads)?,
                top_performers: parse_or(&lookup, "TOP_PERFORMERS_LIMIT", defaults.top_performers)?,
            },
            notification_capacity: parse_or(
                &lookup,
                "NOTIFICATION_CHANNEL_CAPACITY",
                notification_bus::DEFAULT_CAPACITY,
            )?,
        })
    }
}

// --- Estado compartilhado ---

#[derive(Clone)]
pub struct AppState {
    pub lead_service: LeadService,
    pub dashboard_service: DashboardService,
    pub notification_center: NotificationCenter,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let lead_repo = LeadRepository::from_seed_file(&config.leads_seed_path).await?;
        Ok(Self::with_repository(config, lead_repo))
    }

    /// Monta o gráfico de dependências sobre um repositório já carregado.
    /// Precisa de um runtime tokio ativo (o listener de notificações é spawnado aqui).
    pub fn with_repository(config: &AppConfig, lead_repo: LeadRepository) -> Self {
        let bus = NotificationBus::new(config.notification_capacity);

        let notification_center =
            NotificationCenter::new(NotificationRepository::new(vec![NotificationCenter::welcome()]));
        notification_center.spawn_listener(&bus);

        let lead_service = LeadService::new(lead_repo.clone(), bus);
        let dashboard_service =
            DashboardService::new(lead_repo, config.dashboard_offset, config.limits);

        Self {
            lead_service,
            dashboard_service,
            notification_center,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(config.leads_seed_path, PathBuf::from("data/leads.json"));
        assert_eq!(config.dashboard_offset.local_minus_utc(), 19_800);
        assert_eq!(config.limits, DashboardLimits::default());
        assert_eq!(config.notification_capacity, 64);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("DASHBOARD_UTC_OFFSET", "-03:00"),
            ("RECENT_LEADS_LIMIT", "10"),
            ("TOP_PERFORMERS_LIMIT", " 5 "),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.dashboard_offset.local_minus_utc(), -3 * 3600);
        assert_eq!(config.limits.recent_leads, 10);
        assert_eq!(config.limits.top_performers, 5);
    }

    #[test]
    fn garbage_values_are_reported() {
        let err = AppConfig::from_lookup(lookup(&[("RECENT_LEADS_LIMIT", "many")])).unwrap_err();
        assert!(err.to_string().contains("RECENT_LEADS_LIMIT"));
    }
}
