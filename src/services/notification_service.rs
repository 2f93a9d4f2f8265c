// src/services/notification_service.rs

use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::NotificationRepository,
    models::notification::{Notification, NotificationFilter, NotificationInbox, NotificationType},
    services::notification_bus::NotificationBus,
};

#[derive(Clone)]
pub struct NotificationCenter {
    repo: NotificationRepository,
}

impl NotificationCenter {
    pub fn new(repo: NotificationRepository) -> Self {
        Self { repo }
    }

    pub fn welcome() -> Notification {
        Notification::new(
            NotificationType::System,
            "Welcome to CARTHI",
            "Lead dashboard is up. New activity will show up here.",
        )
        .with_action_url("/dashboard")
    }

    /// Assina o bus e guarda tudo que chegar. A tarefa termina quando o bus fecha.
    pub fn spawn_listener(&self, bus: &NotificationBus) -> JoinHandle<()> {
        let mut subscription = bus.subscribe();
        let repo = self.repo.clone();

        tokio::spawn(async move {
            while let Some(notification) = subscription.recv().await {
                tracing::debug!(title = %notification.title, "Notificação recebida");
                repo.push(notification).await;
            }
            tracing::info!("Bus de notificações encerrado, listener finalizado");
        })
    }

    pub async fn inbox(&self, filter: NotificationFilter) -> NotificationInbox {
        NotificationInbox {
            unread_count: self.repo.unread_count().await,
            notifications: self.repo.list(filter).await,
        }
    }

    pub async fn unread_count(&self) -> usize {
        self.repo.unread_count().await
    }

    pub async fn mark_read(&self, id: Uuid) -> Result<Notification, AppError> {
        self.repo.mark_read(id).await
    }

    pub async fn mark_all_read(&self) -> usize {
        let changed = self.repo.mark_all_read().await;
        tracing::info!(changed, "Todas as notificações marcadas como lidas");
        changed
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await
    }
}
