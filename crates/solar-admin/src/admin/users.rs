use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::labels::{format_amount, DisplayTag, Language, TagView, Tone};
use crate::listing::{FieldValue, ListRecord, RecordField, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Customer,
    Vendor,
    Installer,
    Admin,
}

impl DisplayTag for UserRole {
    const ALL: &'static [Self] = &[Self::Customer, Self::Vendor, Self::Installer, Self::Admin];

    fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Vendor => "vendor",
            Self::Installer => "installer",
            Self::Admin => "admin",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Customer => "Customer",
                Self::Vendor => "Vendor",
                Self::Installer => "Installer",
                Self::Admin => "Administrator",
            },
            Language::Arabic => match self {
                Self::Customer => "عميل",
                Self::Vendor => "مورد",
                Self::Installer => "فني تركيب",
                Self::Admin => "مدير النظام",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Admin => Tone::Danger,
            Self::Vendor => Tone::Info,
            Self::Installer => Tone::Warning,
            Self::Customer => Tone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
    Suspended,
    PendingVerification,
}

impl DisplayTag for UserStatus {
    const ALL: &'static [Self] = &[
        Self::Active,
        Self::Inactive,
        Self::Suspended,
        Self::PendingVerification,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::PendingVerification => "pending_verification",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Active => "Active",
                Self::Inactive => "Inactive",
                Self::Suspended => "Suspended",
                Self::PendingVerification => "Pending Verification",
            },
            Language::Arabic => match self {
                Self::Active => "نشط",
                Self::Inactive => "غير نشط",
                Self::Suspended => "موقوف",
                Self::PendingVerification => "بانتظار التحقق",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Active => Tone::Success,
            Self::Inactive => Tone::Neutral,
            Self::Suspended => Tone::Danger,
            Self::PendingVerification => Tone::Warning,
        }
    }
}

/// Marketplace account as shown on the user management screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub kyc_verified: bool,
    pub total_orders: u32,
    pub total_spent: u64,
    pub joined_at: DateTime<Utc>,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Name,
    Email,
    Phone,
    City,
    Role,
    Status,
    KycVerified,
    TotalOrders,
    TotalSpent,
    JoinedAt,
    LastLoginAt,
}

impl RecordField for UserField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::City,
        Self::Role,
        Self::Status,
        Self::KycVerified,
        Self::TotalOrders,
        Self::TotalSpent,
        Self::JoinedAt,
        Self::LastLoginAt,
    ];
    const DEFAULT_SORT: Self = Self::JoinedAt;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;
    const SEARCHABLE: &'static [Self] = &[Self::Name, Self::Email, Self::Phone, Self::Id];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::City => "city",
            Self::Role => "role",
            Self::Status => "status",
            Self::KycVerified => "kyc_verified",
            Self::TotalOrders => "total_orders",
            Self::TotalSpent => "total_spent",
            Self::JoinedAt => "joined_at",
            Self::LastLoginAt => "last_login_at",
        }
    }
}

impl ListRecord for User {
    type Field = UserField;

    fn field(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Id => FieldValue::Text(&self.id),
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Phone => FieldValue::Text(&self.phone),
            UserField::City => FieldValue::Text(&self.city),
            UserField::Role => FieldValue::tag(self.role),
            UserField::Status => FieldValue::tag(self.status),
            UserField::KycVerified => FieldValue::Flag(self.kyc_verified),
            UserField::TotalOrders => FieldValue::Number(f64::from(self.total_orders)),
            UserField::TotalSpent => FieldValue::Number(self.total_spent as f64),
            UserField::JoinedAt => FieldValue::Timestamp(self.joined_at),
            UserField::LastLoginAt => FieldValue::optional_timestamp(self.last_login_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub role: TagView,
    pub status: TagView,
    pub kyc_verified: bool,
    pub total_orders: u32,
    pub total_spent: u64,
    pub total_spent_display: String,
    pub joined_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn to_view(&self, lang: Language) -> UserView {
        UserView {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            role: TagView::of(self.role, lang),
            status: TagView::of(self.status, lang),
            kyc_verified: self.kyc_verified,
            total_orders: self.total_orders,
            total_spent: self.total_spent,
            total_spent_display: format_amount(self.total_spent, lang),
            joined_at: self.joined_at,
            last_login_at: self.last_login_at,
        }
    }
}

impl UserView {
    pub fn headline(&self) -> String {
        format!(
            "{} | {} <{}> | {} | {} | KYC {}",
            self.id,
            self.name,
            self.email,
            self.role.label,
            self.status.label,
            if self.kyc_verified { "yes" } else { "no" }
        )
    }
}
