// src/db/notification_repo.rs

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::notification::{Notification, NotificationFilter},
};

// Caixa de entrada em memória, mais recente primeiro
#[derive(Clone, Default)]
pub struct NotificationRepository {
    items: Arc<RwLock<Vec<Notification>>>,
}

impl NotificationRepository {
    pub fn new(seed: Vec<Notification>) -> Self {
        Self {
            items: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn push(&self, notification: Notification) {
        self.items.write().await.insert(0, notification);
    }

    pub async fn list(&self, filter: NotificationFilter) -> Vec<Notification> {
        self.items
            .read()
            .await
            .iter()
            .filter(|n| match filter {
                NotificationFilter::All => true,
                NotificationFilter::Unread => !n.read,
            })
            .cloned()
            .collect()
    }

    pub async fn unread_count(&self) -> usize {
        self.items.read().await.iter().filter(|n| !n.read).count()
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification, AppError> {
        let mut items = self.items.write().await;
        let item = items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(AppError::NotificationNotFound(id))?;
        item.read = true;
        Ok(item.clone())
    }

    pub async fn mark_all_read(&self) -> usize {
        let mut items = self.items.write().await;
        let mut changed = 0;
        for item in items.iter_mut().filter(|n| !n.read) {
            item.read = true;
            changed += 1;
        }
        changed
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|n| n.id != id);
        if items.len() == before {
            return Err(AppError::NotificationNotFound(id));
        }
        Ok(())
    }
}
