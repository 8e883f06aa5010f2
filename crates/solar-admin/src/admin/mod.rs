//! Record shapes for each admin screen, with their list columns, label tables and views.

pub mod bnpl;
pub mod security;
pub mod support;
pub mod users;
pub mod vendors;

use serde::{Deserialize, Serialize};

use crate::labels::{DisplayTag, Language, Tone};

pub use bnpl::{BnplApplication, BnplApplicationView, BnplField, BnplStatus};
pub use security::{
    SecurityEvent, SecurityEventField, SecurityEventType, SecurityEventView, Severity,
};
pub use support::{
    SupportTicket, SupportTicketView, TicketCategory, TicketField, TicketPriority, TicketStatus,
};
pub use users::{User, UserField, UserRole, UserStatus, UserView};
pub use vendors::{BusinessType, VendorApplication, VendorApplicationView, VendorField, VendorStatus};

/// Underwriting risk shared by vendor and financing reviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl DisplayTag for RiskLevel {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Low => "Low Risk",
                Self::Medium => "Medium Risk",
                Self::High => "High Risk",
            },
            Language::Arabic => match self {
                Self::Low => "مخاطر منخفضة",
                Self::Medium => "مخاطر متوسطة",
                Self::High => "مخاطر عالية",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Success,
            Self::Medium => Tone::Warning,
            Self::High => Tone::Danger,
        }
    }
}
