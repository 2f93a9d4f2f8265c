// src/db/lead_repo.rs

use std::{collections::HashSet, path::Path, sync::Arc};

use anyhow::Context;
use tokio::sync::RwLock;

use crate::{common::error::AppError, models::lead::Lead};

// O "banco" é a lista em memória carregada do arquivo de seed.
// Uma trava só: mutações são aplicadas uma de cada vez.
#[derive(Clone, Default)]
pub struct LeadRepository {
    leads: Arc<RwLock<Vec<Lead>>>,
}

impl LeadRepository {
    pub fn new(seed: Vec<Lead>) -> Self {
        Self {
            leads: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn from_seed_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Falha ao ler o arquivo de seed {}", path.display()))?;
        let leads: Vec<Lead> = serde_json::from_str(&raw)
            .with_context(|| format!("Arquivo de seed inválido: {}", path.display()))?;

        let mut seen = HashSet::new();
        if let Some(dup) = leads.iter().find(|l| !seen.insert(l.id.as_str())) {
            anyhow::bail!("ID de lead duplicado no seed: {}", dup.id);
        }

        tracing::info!("✅ {} leads carregados de {}", leads.len(), path.display());
        Ok(Self::new(leads))
    }

    /// Cópia da lista atual, na ordem de exibição.
    pub async fn snapshot(&self) -> Vec<Lead> {
        self.leads.read().await.clone()
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Lead, AppError> {
        self.leads
            .read()
            .await
            .iter()
            .find(|l| l.id == id)
            .cloned()
            .ok_or_else(|| AppError::LeadNotFound(id.to_string()))
    }

    /// Gera o próximo ID e insere no topo da lista, tudo sob a mesma trava.
    pub async fn insert_new<F>(&self, build: F) -> Result<Lead, AppError>
    where
        F: FnOnce(String) -> Lead,
    {
        let mut leads = self.leads.write().await;
        let lead = build(next_id(&leads)?);
        leads.insert(0, lead.clone());
        Ok(lead)
    }

    /// Aplica `f` ao lead e devolve o estado final.
    pub async fn update<F>(&self, id: &str, f: F) -> Result<Lead, AppError>
    where
        F: FnOnce(&mut Lead) -> Result<(), AppError>,
    {
        let mut leads = self.leads.write().await;
        let lead = leads
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| AppError::LeadNotFound(id.to_string()))?;
        f(lead)?;
        Ok(lead.clone())
    }
}

// "L" + número com 3 dígitos, um acima do maior sufixo existente
pub(crate) fn next_id(leads: &[Lead]) -> Result<String, AppError> {
    let highest = leads
        .iter()
        .filter_map(|l| l.id.strip_prefix('L'))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    let next = highest
        .checked_add(1)
        .ok_or_else(|| anyhow::anyhow!("Sequência de IDs de lead esgotada (maior sufixo: {highest})"))?;
    Ok(format!("L{next:03}"))
}
