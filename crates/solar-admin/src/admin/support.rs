use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::{DisplayTag, Language, TagView, Tone};
use crate::listing::{FieldValue, ListRecord, RecordField, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    Technical,
    Billing,
    Installation,
    Financing,
    Account,
    Other,
}

impl DisplayTag for TicketCategory {
    const ALL: &'static [Self] = &[
        Self::Technical,
        Self::Billing,
        Self::Installation,
        Self::Financing,
        Self::Account,
        Self::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::Billing => "billing",
            Self::Installation => "installation",
            Self::Financing => "financing",
            Self::Account => "account",
            Self::Other => "other",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Technical => "Technical",
                Self::Billing => "Billing",
                Self::Installation => "Installation",
                Self::Financing => "Financing",
                Self::Account => "Account",
                Self::Other => "Other",
            },
            Language::Arabic => match self {
                Self::Technical => "دعم فني",
                Self::Billing => "الفواتير",
                Self::Installation => "التركيب",
                Self::Financing => "التمويل",
                Self::Account => "الحساب",
                Self::Other => "أخرى",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl DisplayTag for TicketPriority {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Urgent];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Low => "Low",
                Self::Medium => "Medium",
                Self::High => "High",
                Self::Urgent => "Urgent",
            },
            Language::Arabic => match self {
                Self::Low => "منخفضة",
                Self::Medium => "متوسطة",
                Self::High => "عالية",
                Self::Urgent => "عاجلة",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Neutral,
            Self::Medium => Tone::Info,
            Self::High => Tone::Warning,
            Self::Urgent => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Open,
    InProgress,
    WaitingCustomer,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Resolved | Self::Closed)
    }
}

impl DisplayTag for TicketStatus {
    const ALL: &'static [Self] = &[
        Self::Open,
        Self::InProgress,
        Self::WaitingCustomer,
        Self::Resolved,
        Self::Closed,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::WaitingCustomer => "waiting_customer",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Open => "Open",
                Self::InProgress => "In Progress",
                Self::WaitingCustomer => "Waiting on Customer",
                Self::Resolved => "Resolved",
                Self::Closed => "Closed",
            },
            Language::Arabic => match self {
                Self::Open => "مفتوحة",
                Self::InProgress => "قيد المعالجة",
                Self::WaitingCustomer => "بانتظار العميل",
                Self::Resolved => "تم الحل",
                Self::Closed => "مغلقة",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Open => Tone::Warning,
            Self::InProgress => Tone::Info,
            Self::WaitingCustomer => Tone::Neutral,
            Self::Resolved => Tone::Success,
            Self::Closed => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub customer_name: String,
    pub customer_email: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(default)]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketField {
    Id,
    Subject,
    CustomerName,
    CustomerEmail,
    Category,
    Priority,
    Status,
    AssignedTo,
    CreatedAt,
    UpdatedAt,
}

impl RecordField for TicketField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Subject,
        Self::CustomerName,
        Self::CustomerEmail,
        Self::Category,
        Self::Priority,
        Self::Status,
        Self::AssignedTo,
        Self::CreatedAt,
        Self::UpdatedAt,
    ];
    const DEFAULT_SORT: Self = Self::CreatedAt;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;
    const SEARCHABLE: &'static [Self] = &[
        Self::Id,
        Self::Subject,
        Self::CustomerName,
        Self::CustomerEmail,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Subject => "subject",
            Self::CustomerName => "customer_name",
            Self::CustomerEmail => "customer_email",
            Self::Category => "category",
            Self::Priority => "priority",
            Self::Status => "status",
            Self::AssignedTo => "assigned_to",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl ListRecord for SupportTicket {
    type Field = TicketField;

    fn field(&self, field: TicketField) -> FieldValue<'_> {
        match field {
            TicketField::Id => FieldValue::Text(&self.id),
            TicketField::Subject => FieldValue::Text(&self.subject),
            TicketField::CustomerName => FieldValue::Text(&self.customer_name),
            TicketField::CustomerEmail => FieldValue::Text(&self.customer_email),
            TicketField::Category => FieldValue::tag(self.category),
            TicketField::Priority => FieldValue::ranked(self.priority),
            TicketField::Status => FieldValue::tag(self.status),
            TicketField::AssignedTo => FieldValue::optional_text(self.assigned_to.as_deref()),
            TicketField::CreatedAt => FieldValue::Timestamp(self.created_at),
            TicketField::UpdatedAt => FieldValue::Timestamp(self.updated_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportTicketView {
    pub id: String,
    pub subject: String,
    pub customer_name: String,
    pub customer_email: String,
    pub category: TagView,
    pub priority: TagView,
    pub status: TagView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SupportTicket {
    pub fn to_view(&self, lang: Language) -> SupportTicketView {
        SupportTicketView {
            id: self.id.clone(),
            subject: self.subject.clone(),
            customer_name: self.customer_name.clone(),
            customer_email: self.customer_email.clone(),
            category: TagView::of(self.category, lang),
            priority: TagView::of(self.priority, lang),
            status: TagView::of(self.status, lang),
            assigned_to: self.assigned_to.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl SupportTicketView {
    pub fn headline(&self) -> String {
        format!(
            "{} | {} | {} | {} | {} | {}",
            self.id,
            self.priority.label,
            self.status.label,
            self.category.label,
            self.subject,
            self.assigned_to.as_deref().unwrap_or("unassigned")
        )
    }
}
