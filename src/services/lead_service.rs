// src/services/lead_service.rs

use chrono::{NaiveDate, Utc};
use validator::Validate;

use crate::{
    common::error::AppError,
    db::LeadRepository,
    models::{
        lead::{
            CustomerDetails, InternalProcess, Lead, LeadStatus, ValuationDetails, ValuationStatus,
            VehicleDetails,
        },
        notification::{Notification, NotificationType},
        requests::{CreateLeadPayload, RecordValuationPayload, ScheduleInspectionPayload},
    },
    services::notification_bus::NotificationBus,
};

#[derive(Clone)]
pub struct LeadService {
    repo: LeadRepository,
    bus: NotificationBus,
}

// Campos opcionais de texto: "" e "   " viram None
fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl LeadService {
    pub fn new(repo: LeadRepository, bus: NotificationBus) -> Self {
        Self { repo, bus }
    }

    pub async fn get(&self, id: &str) -> Result<Lead, AppError> {
        self.repo.find_by_id(id).await
    }

    // =========================================================================
    //  1. CADASTRO
    // =========================================================================

    pub async fn create_lead(&self, mut payload: CreateLeadPayload) -> Result<Lead, AppError> {
        // O formulário manda email vazio quando o campo não é preenchido
        payload.email = non_blank(payload.email);
        payload.alternate_phone = non_blank(payload.alternate_phone);
        payload.validate()?;

        let now = Utc::now();
        let lead = self
            .repo
            .insert_new(|id| Lead {
                id,
                customer: CustomerDetails {
                    name: payload.customer_name,
                    phone: payload.phone,
                    alternate_phone: payload.alternate_phone,
                    email: payload.email,
                    city: payload.city,
                    source: payload.source,
                    assigned_sales_executive: payload.assigned_sales_executive,
                },
                vehicle: VehicleDetails {
                    brand: payload.brand,
                    model: payload.model,
                    variant: payload.variant,
                    registration_number: payload.registration_number,
                    registration_year: payload.registration_year,
                    fuel_type: payload.fuel_type,
                    transmission: payload.transmission,
                    kms_driven: payload.kms_driven,
                    ownership: payload.ownership,
                    insurance_valid_till: payload.insurance_valid_till,
                    expected_price: payload.expected_price,
                },
                valuation: ValuationDetails::default(),
                internal: InternalProcess::default(),
                status: LeadStatus::New,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(lead_id = %lead.id, executive = %lead.customer.assigned_sales_executive, "Lead criado");
        self.bus.publish(Notification::for_lead(
            NotificationType::Lead,
            "New Lead Created",
            format!("Lead {} created successfully!", lead.id),
            &lead.id,
        ));

        Ok(lead)
    }

    // =========================================================================
    //  2. ATUALIZAÇÕES
    // =========================================================================

    pub async fn update_status(&self, id: &str, status: LeadStatus) -> Result<Lead, AppError> {
        let lead = self
            .repo
            .update(id, |lead| {
                lead.status = status;
                lead.touch(Utc::now());
                Ok(())
            })
            .await?;

        tracing::info!(lead_id = %id, status = %status, "Status do lead atualizado");
        self.bus.publish(Notification::for_lead(
            NotificationType::Status,
            "Lead Status Updated",
            format!("Lead status updated to {status}"),
            id,
        ));

        Ok(lead)
    }

    pub async fn add_note(&self, id: &str, note: &str) -> Result<Lead, AppError> {
        let note = note.trim();
        if note.is_empty() {
            return Err(AppError::EmptyNote);
        }

        let lead = self
            .repo
            .update(id, |lead| {
                lead.internal.call_notes.push(note.to_string());
                lead.touch(Utc::now());
                Ok(())
            })
            .await?;

        tracing::info!(lead_id = %id, "Nota adicionada");
        self.bus.publish(Notification::for_lead(
            NotificationType::Lead,
            "Note Added",
            "Note added successfully",
            id,
        ));

        Ok(lead)
    }

    pub async fn add_follow_up(&self, id: &str, date: NaiveDate) -> Result<Lead, AppError> {
        let lead = self
            .repo
            .update(id, |lead| {
                lead.internal.follow_up_dates.push(date);
                lead.touch(Utc::now());
                Ok(())
            })
            .await?;

        tracing::info!(lead_id = %id, %date, "Follow-up agendado");
        self.bus.publish(Notification::for_lead(
            NotificationType::Lead,
            "Follow-up Scheduled",
            format!("Follow-up with lead {id} scheduled for {date}"),
            id,
        ));

        Ok(lead)
    }

    // =========================================================================
    //  3. AVALIAÇÃO
    // =========================================================================

    pub async fn schedule_inspection(
        &self,
        id: &str,
        mut payload: ScheduleInspectionPayload,
    ) -> Result<Lead, AppError> {
        payload.valuer = payload.valuer.trim().to_string();
        payload.validate()?;

        let ScheduleInspectionPayload { date, valuer } = payload;
        let lead = self
            .repo
            .update(id, |lead| {
                lead.valuation.status = ValuationStatus::Scheduled;
                lead.valuation.inspection_date = Some(date);
                lead.valuation.assigned_valuer = Some(valuer);
                // Agendar a inspeção faz o lead andar no funil, mas nunca para trás
                if matches!(lead.status, LeadStatus::New | LeadStatus::Contacted) {
                    lead.status = LeadStatus::ValuationScheduled;
                }
                lead.touch(Utc::now());
                Ok(())
            })
            .await?;

        tracing::info!(lead_id = %id, %date, "Inspeção agendada");
        self.bus.publish(Notification::for_lead(
            NotificationType::Valuation,
            "Inspection Scheduled",
            format!("Inspection scheduled for {date}"),
            id,
        ));

        Ok(lead)
    }

    pub async fn record_valuation(
        &self,
        id: &str,
        payload: RecordValuationPayload,
    ) -> Result<Lead, AppError> {
        payload.validate()?;

        let RecordValuationPayload {
            estimated_price,
            final_offer_price,
            notes,
        } = payload;
        let lead = self
            .repo
            .update(id, |lead| {
                if estimated_price.is_some() {
                    lead.valuation.estimated_price = estimated_price;
                }
                if final_offer_price.is_some() {
                    lead.valuation.final_offer_price = final_offer_price;
                }
                if let Some(notes) = non_blank(notes) {
                    lead.valuation.notes = Some(notes);
                }
                lead.valuation.status = ValuationStatus::Completed;
                if lead.status == LeadStatus::ValuationScheduled {
                    lead.status = LeadStatus::ValuationCompleted;
                }
                lead.touch(Utc::now());
                Ok(())
            })
            .await?;

        tracing::info!(lead_id = %id, "Avaliação registrada");
        let message = match lead.valuation.final_offer_price {
            Some(offer) => format!("Valuation for lead {id} has been completed. Final offer: {offer}"),
            None => format!("Valuation for lead {id} has been completed."),
        };
        self.bus.publish(Notification::for_lead(
            NotificationType::Valuation,
            "Valuation Completed",
            message,
            id,
        ));

        Ok(lead)
    }
}
