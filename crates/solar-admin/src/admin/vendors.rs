use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::labels::{DisplayTag, Language, TagView, Tone};
use crate::listing::{FieldValue, ListRecord, RecordField, SortDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    Manufacturer,
    Distributor,
    Installer,
    ServiceProvider,
}

impl DisplayTag for BusinessType {
    const ALL: &'static [Self] = &[
        Self::Manufacturer,
        Self::Distributor,
        Self::Installer,
        Self::ServiceProvider,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Manufacturer => "manufacturer",
            Self::Distributor => "distributor",
            Self::Installer => "installer",
            Self::ServiceProvider => "service_provider",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Manufacturer => "Manufacturer",
                Self::Distributor => "Distributor",
                Self::Installer => "Installer",
                Self::ServiceProvider => "Service Provider",
            },
            Language::Arabic => match self {
                Self::Manufacturer => "مصنّع",
                Self::Distributor => "موزّع",
                Self::Installer => "شركة تركيب",
                Self::ServiceProvider => "مزود خدمة",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VendorStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl VendorStatus {
    /// Still waiting on an approval decision.
    pub const fn awaiting_decision(self) -> bool {
        matches!(self, Self::Pending | Self::UnderReview)
    }
}

impl DisplayTag for VendorStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Pending => "Pending",
                Self::UnderReview => "Under Review",
                Self::Approved => "Approved",
                Self::Rejected => "Rejected",
            },
            Language::Arabic => match self {
                Self::Pending => "قيد الانتظار",
                Self::UnderReview => "قيد المراجعة",
                Self::Approved => "مقبول",
                Self::Rejected => "مرفوض",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Warning,
            Self::UnderReview => Tone::Info,
            Self::Approved => Tone::Success,
            Self::Rejected => Tone::Danger,
        }
    }
}

/// Vendor onboarding request awaiting admin approval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorApplication {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub business_type: BusinessType,
    pub status: VendorStatus,
    pub risk_level: RiskLevel,
    pub years_in_business: u32,
    pub documents_complete: bool,
    pub rating: f32,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorField {
    Id,
    CompanyName,
    ContactName,
    Email,
    Phone,
    City,
    BusinessType,
    Status,
    RiskLevel,
    YearsInBusiness,
    DocumentsComplete,
    Rating,
    SubmittedAt,
}

impl RecordField for VendorField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::CompanyName,
        Self::ContactName,
        Self::Email,
        Self::Phone,
        Self::City,
        Self::BusinessType,
        Self::Status,
        Self::RiskLevel,
        Self::YearsInBusiness,
        Self::DocumentsComplete,
        Self::Rating,
        Self::SubmittedAt,
    ];
    const DEFAULT_SORT: Self = Self::SubmittedAt;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;
    const SEARCHABLE: &'static [Self] = &[
        Self::CompanyName,
        Self::ContactName,
        Self::Email,
        Self::City,
        Self::Id,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::CompanyName => "company_name",
            Self::ContactName => "contact_name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::City => "city",
            Self::BusinessType => "business_type",
            Self::Status => "status",
            Self::RiskLevel => "risk_level",
            Self::YearsInBusiness => "years_in_business",
            Self::DocumentsComplete => "documents_complete",
            Self::Rating => "rating",
            Self::SubmittedAt => "submitted_at",
        }
    }
}

impl ListRecord for VendorApplication {
    type Field = VendorField;

    fn field(&self, field: VendorField) -> FieldValue<'_> {
        match field {
            VendorField::Id => FieldValue::Text(&self.id),
            VendorField::CompanyName => FieldValue::Text(&self.company_name),
            VendorField::ContactName => FieldValue::Text(&self.contact_name),
            VendorField::Email => FieldValue::Text(&self.email),
            VendorField::Phone => FieldValue::Text(&self.phone),
            VendorField::City => FieldValue::Text(&self.city),
            VendorField::BusinessType => FieldValue::tag(self.business_type),
            VendorField::Status => FieldValue::tag(self.status),
            VendorField::RiskLevel => FieldValue::ranked(self.risk_level),
            VendorField::YearsInBusiness => FieldValue::Number(f64::from(self.years_in_business)),
            VendorField::DocumentsComplete => FieldValue::Flag(self.documents_complete),
            VendorField::Rating => FieldValue::Number(f64::from(self.rating)),
            VendorField::SubmittedAt => FieldValue::Timestamp(self.submitted_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorApplicationView {
    pub id: String,
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub business_type: TagView,
    pub status: TagView,
    pub risk_level: TagView,
    pub years_in_business: u32,
    pub documents_complete: bool,
    pub rating: f32,
    pub submitted_at: DateTime<Utc>,
}

impl VendorApplication {
    pub fn to_view(&self, lang: Language) -> VendorApplicationView {
        VendorApplicationView {
            id: self.id.clone(),
            company_name: self.company_name.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            business_type: TagView::of(self.business_type, lang),
            status: TagView::of(self.status, lang),
            risk_level: TagView::of(self.risk_level, lang),
            years_in_business: self.years_in_business,
            documents_complete: self.documents_complete,
            rating: self.rating,
            submitted_at: self.submitted_at,
        }
    }
}

impl VendorApplicationView {
    pub fn headline(&self) -> String {
        format!(
            "{} | {} ({}) | {} | {} | risk {} | {}",
            self.id,
            self.company_name,
            self.city,
            self.business_type.label,
            self.status.label,
            self.risk_level.label,
            self.submitted_at.format("%Y-%m-%d")
        )
    }
}
