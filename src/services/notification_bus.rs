// src/services/notification_bus.rs

//! Canal publish/subscribe entre quem altera dados (LeadService) e quem
//! exibe avisos (NotificationCenter, futuros websockets...).
//!
//! O bus é passado explicitamente para cada componente. Assinar devolve uma
//! `Subscription`; soltar (drop) a assinatura cancela o recebimento.

use tokio::sync::broadcast::{self, error::RecvError};

use crate::models::notification::Notification;

pub const DEFAULT_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct NotificationBus {
    sender: broadcast::Sender<Notification>,
}

impl NotificationBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publica para todos os assinantes ativos. Retorna quantos receberam.
    /// Sem assinantes não é erro: o aviso simplesmente se perde.
    pub fn publish(&self, notification: Notification) -> usize {
        match self.sender.send(notification) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::debug!("Notificação publicada sem nenhum assinante");
                0
            }
        }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

pub struct Subscription {
    receiver: broadcast::Receiver<Notification>,
}

impl Subscription {
    /// Próxima notificação; `None` quando o bus foi encerrado.
    /// Se o assinante ficou para trás, as perdidas são puladas.
    pub async fn recv(&mut self) -> Option<Notification> {
        loop {
            match self.receiver.recv().await {
                Ok(notification) => return Some(notification),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Assinante atrasado, notificações descartadas");
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
