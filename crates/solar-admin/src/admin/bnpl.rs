use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RiskLevel;
use crate::labels::{format_amount, DisplayTag, Language, TagView, Tone};
use crate::listing::{FieldValue, ListRecord, RecordField, SortDirection};

/// Decision state of a buy-now-pay-later financing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BnplStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
    ConditionalApproval,
}

impl BnplStatus {
    /// Approved outright or with conditions; counts toward committed financing.
    pub const fn is_approved(self) -> bool {
        matches!(self, Self::Approved | Self::ConditionalApproval)
    }

    pub const fn is_decided(self) -> bool {
        matches!(
            self,
            Self::Approved | Self::ConditionalApproval | Self::Rejected
        )
    }
}

impl DisplayTag for BnplStatus {
    const ALL: &'static [Self] = &[
        Self::Pending,
        Self::UnderReview,
        Self::Approved,
        Self::Rejected,
        Self::ConditionalApproval,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::UnderReview => "under_review",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::ConditionalApproval => "conditional_approval",
        }
    }

    fn label(self, lang: Language) -> &'static str {
        match lang {
            Language::English => match self {
                Self::Pending => "Pending",
                Self::UnderReview => "Under Review",
                Self::Approved => "Approved",
                Self::Rejected => "Rejected",
                Self::ConditionalApproval => "Conditional Approval",
            },
            Language::Arabic => match self {
                Self::Pending => "قيد الانتظار",
                Self::UnderReview => "قيد المراجعة",
                Self::Approved => "موافق عليه",
                Self::Rejected => "مرفوض",
                Self::ConditionalApproval => "موافقة مشروطة",
            },
        }
    }

    fn tone(self) -> Tone {
        match self {
            Self::Pending => Tone::Warning,
            Self::UnderReview => Tone::Info,
            Self::Approved => Tone::Success,
            Self::Rejected => Tone::Danger,
            Self::ConditionalApproval => Tone::Info,
        }
    }
}

/// Financing request for a solar system purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BnplApplication {
    pub id: String,
    pub applicant_name: String,
    pub email: String,
    pub vendor_name: String,
    pub product: String,
    pub requested_amount: u64,
    pub term_months: u32,
    pub monthly_income: u64,
    pub credit_score: u16,
    pub status: BnplStatus,
    pub risk_level: RiskLevel,
    pub kyc_verified: bool,
    pub aml_cleared: bool,
    pub submitted_at: DateTime<Utc>,
}

impl BnplApplication {
    /// Installment before fees, rounded up to the whole riyal.
    pub fn monthly_installment(&self) -> u64 {
        if self.term_months == 0 {
            return self.requested_amount;
        }
        self.requested_amount.div_ceil(u64::from(self.term_months))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BnplField {
    Id,
    ApplicantName,
    Email,
    VendorName,
    Product,
    RequestedAmount,
    TermMonths,
    MonthlyIncome,
    CreditScore,
    Status,
    RiskLevel,
    KycVerified,
    AmlCleared,
    SubmittedAt,
}

impl RecordField for BnplField {
    const ALL: &'static [Self] = &[
        Self::Id,
        Self::ApplicantName,
        Self::Email,
        Self::VendorName,
        Self::Product,
        Self::RequestedAmount,
        Self::TermMonths,
        Self::MonthlyIncome,
        Self::CreditScore,
        Self::Status,
        Self::RiskLevel,
        Self::KycVerified,
        Self::AmlCleared,
        Self::SubmittedAt,
    ];
    const DEFAULT_SORT: Self = Self::SubmittedAt;
    const DEFAULT_DIRECTION: SortDirection = SortDirection::Descending;
    const SEARCHABLE: &'static [Self] = &[
        Self::ApplicantName,
        Self::Email,
        Self::VendorName,
        Self::Product,
        Self::Id,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::ApplicantName => "applicant_name",
            Self::Email => "email",
            Self::VendorName => "vendor_name",
            Self::Product => "product",
            Self::RequestedAmount => "requested_amount",
            Self::TermMonths => "term_months",
            Self::MonthlyIncome => "monthly_income",
            Self::CreditScore => "credit_score",
            Self::Status => "status",
            Self::RiskLevel => "risk_level",
            Self::KycVerified => "kyc_verified",
            Self::AmlCleared => "aml_cleared",
            Self::SubmittedAt => "submitted_at",
        }
    }
}

impl ListRecord for BnplApplication {
    type Field = BnplField;

    fn field(&self, field: BnplField) -> FieldValue<'_> {
        match field {
            BnplField::Id => FieldValue::Text(&self.id),
            BnplField::ApplicantName => FieldValue::Text(&self.applicant_name),
            BnplField::Email => FieldValue::Text(&self.email),
            BnplField::VendorName => FieldValue::Text(&self.vendor_name),
            BnplField::Product => FieldValue::Text(&self.product),
            BnplField::RequestedAmount => FieldValue::Number(self.requested_amount as f64),
            BnplField::TermMonths => FieldValue::Number(f64::from(self.term_months)),
            BnplField::MonthlyIncome => FieldValue::Number(self.monthly_income as f64),
            BnplField::CreditScore => FieldValue::Number(f64::from(self.credit_score)),
            BnplField::Status => FieldValue::tag(self.status),
            BnplField::RiskLevel => FieldValue::ranked(self.risk_level),
            BnplField::KycVerified => FieldValue::Flag(self.kyc_verified),
            BnplField::AmlCleared => FieldValue::Flag(self.aml_cleared),
            BnplField::SubmittedAt => FieldValue::Timestamp(self.submitted_at),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BnplApplicationView {
    pub id: String,
    pub applicant_name: String,
    pub email: String,
    pub vendor_name: String,
    pub product: String,
    pub requested_amount: u64,
    pub requested_amount_display: String,
    pub term_months: u32,
    pub monthly_installment: u64,
    pub monthly_income: u64,
    pub credit_score: u16,
    pub status: TagView,
    pub risk_level: TagView,
    pub kyc_verified: bool,
    pub aml_cleared: bool,
    pub submitted_at: DateTime<Utc>,
}

impl BnplApplication {
    pub fn to_view(&self, lang: Language) -> BnplApplicationView {
        BnplApplicationView {
            id: self.id.clone(),
            applicant_name: self.applicant_name.clone(),
            email: self.email.clone(),
            vendor_name: self.vendor_name.clone(),
            product: self.product.clone(),
            requested_amount: self.requested_amount,
            requested_amount_display: format_amount(self.requested_amount, lang),
            term_months: self.term_months,
            monthly_installment: self.monthly_installment(),
            monthly_income: self.monthly_income,
            credit_score: self.credit_score,
            status: TagView::of(self.status, lang),
            risk_level: TagView::of(self.risk_level, lang),
            kyc_verified: self.kyc_verified,
            aml_cleared: self.aml_cleared,
            submitted_at: self.submitted_at,
        }
    }
}

impl BnplApplicationView {
    pub fn headline(&self) -> String {
        format!(
            "{} | {} | {} via {} | {} over {} months | {} | risk {}",
            self.id,
            self.applicant_name,
            self.product,
            self.vendor_name,
            self.requested_amount_display,
            self.term_months,
            self.status.label,
            self.risk_level.label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn application(amount: u64, term: u32) -> BnplApplication {
        BnplApplication {
            id: "BNPL-T".to_string(),
            applicant_name: "Test".to_string(),
            email: "t@example.com".to_string(),
            vendor_name: "Vendor".to_string(),
            product: "Kit".to_string(),
            requested_amount: amount,
            term_months: term,
            monthly_income: 10_000,
            credit_score: 700,
            status: BnplStatus::Pending,
            risk_level: RiskLevel::Low,
            kyc_verified: true,
            aml_cleared: true,
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn installment_rounds_up() {
        assert_eq!(application(85_000, 12).monthly_installment(), 7_084);
        assert_eq!(application(120_000, 24).monthly_installment(), 5_000);
        assert_eq!(application(9_000, 0).monthly_installment(), 9_000);
    }

    #[test]
    fn approval_states() {
        assert!(BnplStatus::ConditionalApproval.is_approved());
        assert!(!BnplStatus::UnderReview.is_decided());
        assert!(BnplStatus::Rejected.is_decided());
    }
}
