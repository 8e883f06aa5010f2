//! Moderation actions taken from the review screens.
//!
//! Records are never mutated; an accepted action is acknowledged with a receipt kept in an
//! in-process log.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{AdminCatalog, DatasetKind};
use crate::labels::{DisplayTag, Language, Tone};

/// The dataset an action is aimed at.
pub type ActionTarget = DatasetKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Approve,
    Reject,
    Suspend,
    Activate,
    RequestDocuments,
    Resolve,
    Escalate,
    Assign,
}

impl AdminAction {
    pub const fn applies_to(self, target: ActionTarget) -> bool {
        match target {
            DatasetKind::Users => matches!(self, Self::Suspend | Self::Activate),
            DatasetKind::Vendors | DatasetKind::BnplApplications => {
                matches!(self, Self::Approve | Self::Reject | Self::RequestDocuments)
            }
            DatasetKind::SecurityEvents => matches!(self, Self::Resolve | Self::Escalate),
            DatasetKind::SupportTickets => {
                matches!(self, Self::Resolve | Self::Escalate | Self::Assign)
            }
        }
    }

    /// Actions offered for a dataset, in display order.
    pub fn available_for(target: ActionTarget) -> Vec<Self> {
        Self::ALL
            .iter()
            .copied()
            .filter(|action| action.applies_to(target))
            .collect()
    }
}

impl DisplayTag for AdminAction {
    const ALL: &'static [Self] = &[
        Self::Approve,
        Self::Reject,
        Self::Suspend,
        Self::Activate,
        Self::RequestDocuments,
        Self::Resolve,
        Self::Escalate,
        Self::Assign,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Reject => "reject",
            Self::Suspend => "suspend",
            Self::Activate => "activate",
            Self::RequestDocuments => "request_documents",
            Self::Resolve => "resolve",
            Self::Escalate => "escalate",
            Self::Assign => "assign",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Approve => "Approve",
                Self::Reject => "Reject",
                Self::Suspend => "Suspend",
                Self::Activate => "Activate",
                Self::RequestDocuments => "Request Documents",
                Self::Resolve => "Mark Resolved",
                Self::Escalate => "Escalate",
                Self::Assign => "Assign",
            },
            Language::Arabic => match self {
                Self::Approve => "موافقة",
                Self::Reject => "رفض",
                Self::Suspend => "تعليق",
                Self::Activate => "تفعيل",
                Self::RequestDocuments => "طلب مستندات",
                Self::Resolve => "تم الحل",
                Self::Escalate => "تصعيد",
                Self::Assign => "تعيين",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Approve | Self::Activate | Self::Resolve => Tone::Success,
            Self::Reject | Self::Suspend => Tone::Danger,
            Self::Escalate => Tone::Warning,
            Self::RequestDocuments | Self::Assign => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub target: ActionTarget,
    pub id: String,
    pub action: AdminAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReceipt {
    pub sequence: u64,
    pub target: ActionTarget,
    pub id: String,
    pub action: AdminAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no {target} record with id '{id}'")]
    NotFound { target: ActionTarget, id: String },
    #[error("action '{}' does not apply to {target}", .action.as_str())]
    NotApplicable {
        target: ActionTarget,
        action: AdminAction,
    },
}

/// Validates actions against the catalog and keeps the receipts in submission order.
#[derive(Debug)]
pub struct ActionLog {
    catalog: Arc<AdminCatalog>,
    receipts: Mutex<Vec<ActionReceipt>>,
    sequence: AtomicU64,
}

impl ActionLog {
    pub fn new(catalog: Arc<AdminCatalog>) -> Self {
        Self {
            catalog,
            receipts: Mutex::new(Vec::new()),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn submit(&self, request: ActionRequest) -> Result<ActionReceipt, ActionError> {
        let ActionRequest {
            target,
            id,
            action,
            note,
        } = request;

        if !self.catalog.contains(target, &id) {
            return Err(ActionError::NotFound { target, id });
        }
        if !action.applies_to(target) {
            return Err(ActionError::NotApplicable { target, action });
        }

        let note = note
            .map(|note| note.trim().to_string())
            .filter(|note| !note.is_empty());
        let receipt = ActionReceipt {
            sequence: self.sequence.fetch_add(1, Ordering::Relaxed),
            target,
            id,
            action,
            note,
            recorded_at: Utc::now(),
        };

        info!(
            sequence = receipt.sequence,
            target = %receipt.target,
            id = %receipt.id,
            action = receipt.action.as_str(),
            "admin action recorded"
        );

        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(receipt.clone());
        Ok(receipt)
    }

    /// All receipts, oldest first.
    pub fn receipts(&self) -> Vec<ActionReceipt> {
        self.receipts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log() -> ActionLog {
        ActionLog::new(Arc::new(AdminCatalog::fixtures()))
    }

    fn request(target: ActionTarget, id: &str, action: AdminAction) -> ActionRequest {
        ActionRequest {
            target,
            id: id.to_string(),
            action,
            note: None,
        }
    }

    #[test]
    fn applicability_matches_review_screens() {
        assert_eq!(
            AdminAction::available_for(DatasetKind::Users),
            vec![AdminAction::Suspend, AdminAction::Activate]
        );
        assert_eq!(
            AdminAction::available_for(DatasetKind::BnplApplications),
            vec![
                AdminAction::Approve,
                AdminAction::Reject,
                AdminAction::RequestDocuments
            ]
        );
        assert_eq!(
            AdminAction::available_for(DatasetKind::SupportTickets),
            vec![
                AdminAction::Resolve,
                AdminAction::Escalate,
                AdminAction::Assign
            ]
        );
        assert!(!AdminAction::Approve.applies_to(DatasetKind::SecurityEvents));
    }

    #[test]
    fn accepted_actions_are_logged_in_order() {
        let log = log();
        let mut first = request(DatasetKind::BnplApplications, "BNPL-001", AdminAction::Approve);
        first.note = Some("  income verified  ".to_string());
        let first = log.submit(first).expect("approve accepted");
        let second = log
            .submit(request(DatasetKind::SupportTickets, "TKT-002", AdminAction::Assign))
            .expect("assign accepted");

        assert_eq!(first.note.as_deref(), Some("income verified"));
        assert!(second.sequence > first.sequence);
        let receipts = log.receipts();
        assert_eq!(receipts, vec![first, second]);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let err = log()
            .submit(request(DatasetKind::Users, "USR-999", AdminAction::Suspend))
            .expect_err("missing user");
        assert_eq!(
            err,
            ActionError::NotFound {
                target: DatasetKind::Users,
                id: "USR-999".to_string()
            }
        );
    }

    #[test]
    fn inapplicable_actions_are_rejected_without_a_receipt() {
        let log = log();
        let err = log
            .submit(request(DatasetKind::Users, "USR-001", AdminAction::Approve))
            .expect_err("users cannot be approved");
        assert!(matches!(err, ActionError::NotApplicable { .. }));
        assert_eq!(err.to_string(), "action 'approve' does not apply to users");
        assert!(log.receipts().is_empty());
    }

    #[test]
    fn request_deserializes_from_wire_names() {
        let request: ActionRequest = serde_json::from_str(
            r#"{"target":"security_events","id":"SEC-002","action":"escalate"}"#,
        )
        .expect("request parses");
        assert_eq!(request.target, DatasetKind::SecurityEvents);
        assert_eq!(request.action, AdminAction::Escalate);
        assert_eq!(request.note, None);
    }
}
