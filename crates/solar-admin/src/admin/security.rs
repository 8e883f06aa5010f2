use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::{DisplayTag, Language, TagView, Tone};
use crate::listing::{FieldValue, ListRecord, RecordField, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEventType {
    LoginSuccess,
    LoginFailed,
    PasswordChange,
    PermissionChange,
    SuspiciousActivity,
    DataExport,
    AccountLocked,
}

impl DisplayTag for SecurityEventType {
    const ALL: &'static [Self] = &[
        Self::LoginSuccess,
        Self::LoginFailed,
        Self::PasswordChange,
        Self::PermissionChange,
        Self::SuspiciousActivity,
        Self::DataExport,
        Self::AccountLocked,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::LoginSuccess => "login_success",
            Self::LoginFailed => "login_failed",
            Self::PasswordChange => "password_change",
            Self::PermissionChange => "permission_change",
            Self::SuspiciousActivity => "suspicious_activity",
            Self::DataExport => "data_export",
            Self::AccountLocked => "account_locked",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::LoginSuccess => "Successful Login",
                Self::LoginFailed => "Failed Login",
                Self::PasswordChange => "Password Change",
                Self::PermissionChange => "Permission Change",
                Self::SuspiciousActivity => "Suspicious Activity",
                Self::DataExport => "Data Export",
                Self::AccountLocked => "Account Locked",
            },
            Language::Arabic => match self {
                Self::LoginSuccess => "تسجيل دخول ناجح",
                Self::LoginFailed => "فشل تسجيل الدخول",
                Self::PasswordChange => "تغيير كلمة المرور",
                Self::PermissionChange => "تغيير الصلاحيات",
                Self::SuspiciousActivity => "نشاط مشبوه",
                Self::DataExport => "تصدير بيانات",
                Self::AccountLocked => "حساب مقفل",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::LoginSuccess => Tone::Success,
            Self::LoginFailed | Self::AccountLocked => Tone::Warning,
            Self::SuspiciousActivity => Tone::Danger,
            Self::PasswordChange | Self::PermissionChange | Self::DataExport => Tone::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl DisplayTag for Severity {
    const ALL: &'static [Self] = &[Self::Low, Self::Medium, Self::High, Self::Critical];

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Low => "Low",
                Self::Medium => "Medium",
                Self::High => "High",
                Self::Critical => "Critical",
            },
            Language::Arabic => match self {
                Self::Low => "منخفض",
                Self::Medium => "متوسط",
                Self::High => "مرتفع",
                Self::Critical => "حرج",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Low => Tone::Neutral,
            Self::Medium => Tone::Warning,
            Self::High | Self::Critical => Tone::Danger,
        }
    }
}

/// Entry in the security and audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityEvent {
    pub id: String,
    pub event_type: SecurityEventType,
    pub severity: Severity,
    pub user_email: String,
    pub ip_address: String,
    pub location: String,
    pub description: String,
    pub resolved: bool,
    pub occurred_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityEventField {
    Id,
    EventType,
    Severity,
    UserEmail,
    IpAddress,
    Location,
    Description,
    Resolved,
    OccurredAt,
}

impl RecordField for SecurityEventField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::EventType,
        Self::Severity,
        Self::UserEmail,
        Self::IpAddress,
        Self::Location,
        Self::Description,
        Self::Resolved,
        Self::OccurredAt,
    ];
    const DEFAULT_SORT: Self = Self::OccurredAt;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;
    const SEARCHABLE: &'static [Self] = &[
        Self::UserEmail,
        Self::IpAddress,
        Self::Location,
        Self::Description,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::EventType => "event_type",
            Self::Severity => "severity",
            Self::UserEmail => "user_email",
            Self::IpAddress => "ip_address",
            Self::Location => "location",
            Self::Description => "description",
            Self::Resolved => "resolved",
            Self::OccurredAt => "occurred_at",
        }
    }
}

impl ListRecord for SecurityEvent {
    type Field = SecurityEventField;

    fn field(&self, field: SecurityEventField) -> FieldValue<'_> {
        match field {
            SecurityEventField::Id => FieldValue::Text(&self.id),
            SecurityEventField::EventType => FieldValue::tag(self.event_type),
            SecurityEventField::Severity => FieldValue::ranked(self.severity),
            SecurityEventField::UserEmail => FieldValue::Text(&self.user_email),
            SecurityEventField::IpAddress => FieldValue::Text(&self.ip_address),
            SecurityEventField::Location => FieldValue::Text(&self.location),
            SecurityEventField::Description => FieldValue::Text(&self.description),
            SecurityEventField::Resolved => FieldValue::Flag(self.resolved),
            SecurityEventField::OccurredAt => FieldValue::Timestamp(self.occurred_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityEventView {
    pub id: String,
    pub event_type: TagView,
    pub severity: TagView,
    pub user_email: String,
    pub ip_address: String,
    pub location: String,
    pub description: String,
    pub resolved: bool,
    pub occurred_at: DateTime<Utc>,
}

impl SecurityEvent {
    pub fn to_view(&self, lang: Language) -> SecurityEventView {
        SecurityEventView {
            id: self.id.clone(),
            event_type: TagView::of(self.event_type, lang),
            severity: TagView::of(self.severity, lang),
            user_email: self.user_email.clone(),
            ip_address: self.ip_address.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            resolved: self.resolved,
            occurred_at: self.occurred_at,
        }
    }
}

impl SecurityEventView {
    pub fn headline(&self) -> String {
        format!(
            "{} | {} | {} | {} from {} ({}) | {}",
            self.id,
            self.occurred_at.format("%Y-%m-%d %H:%M"),
            self.severity.label,
            self.event_type.label,
            self.ip_address,
            self.user_email,
            if self.resolved { "resolved" } else { "open" }
        )
    }
}
