//! Aggregate figures for the analytics dashboard.

use serde::Serialize;

use crate::admin::{
    BnplStatus, RiskLevel, SecurityEventType, Severity, TicketPriority, TicketStatus, UserRole,
    UserStatus, VendorStatus,
};
use crate::catalog::AdminCatalog;
use crate::labels::{format_amount, DisplayTag, Language, Tone};

#[derive(Debug, Clone, Serialize)]
pub struct CountEntry {
    pub value: &'static str,
    pub label: &'static str,
    pub tone: Tone,
    pub count: usize,
}

/// Counts per variant in declared order, omitting variants with no records.
fn tally<T, I>(values: I, lang: Language) -> Vec<CountEntry>
where
    T: DisplayTag,
    I: IntoIterator<Item = T>,
{
    let values: Vec<T> = values.into_iter().collect();
    T::ALL
        .iter()
        .filter_map(|variant| {
            let count = values.iter().filter(|value| value == &variant).count();
            (count > 0).then(|| CountEntry {
                value: variant.as_str(),
                label: variant.label(lang),
                tone: variant.tone(),
                count,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub total: usize,
    pub active: usize,
    pub kyc_verified: usize,
    pub by_status: Vec<CountEntry>,
    pub by_role: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorStats {
    pub total: usize,
    pub awaiting_decision: usize,
    pub by_status: Vec<CountEntry>,
    pub by_risk: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FinancingStats {
    pub total_applications: usize,
    pub requested_amount: u64,
    pub requested_amount_display: String,
    pub approved_amount: u64,
    pub approved_amount_display: String,
    /// Approved (outright or conditional) over decided applications.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_rate: Option<f32>,
    pub by_status: Vec<CountEntry>,
    pub by_risk: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SupportStats {
    pub total: usize,
    pub open: usize,
    pub unassigned_open: usize,
    pub by_status: Vec<CountEntry>,
    pub by_priority: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityStats {
    pub total: usize,
    pub unresolved: usize,
    pub unresolved_high_or_critical: usize,
    pub by_severity: Vec<CountEntry>,
    pub by_type: Vec<CountEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub language: Language,
    pub users: UserStats,
    pub vendors: VendorStats,
    pub financing: FinancingStats,
    pub support: SupportStats,
    pub security: SecurityStats,
}

impl DashboardSummary {
    pub fn build(catalog: &AdminCatalog, lang: Language) -> Self {
        Self {
            language: lang,
            users: user_stats(catalog, lang),
            vendors: vendor_stats(catalog, lang),
            financing: financing_stats(catalog, lang),
            support: support_stats(catalog, lang),
            security: security_stats(catalog, lang),
        }
    }
}

fn user_stats(catalog: &AdminCatalog, lang: Language) -> UserStats {
    let users = &catalog.users;
    UserStats {
        total: users.len(),
        active: users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count(),
        kyc_verified: users.iter().filter(|user| user.kyc_verified).count(),
        by_status: tally(users.iter().map(|user| user.status), lang),
        by_role: tally::<UserRole, _>(users.iter().map(|user| user.role), lang),
    }
}

fn vendor_stats(catalog: &AdminCatalog, lang: Language) -> VendorStats {
    let vendors = &catalog.vendors;
    VendorStats {
        total: vendors.len(),
        awaiting_decision: vendors
            .iter()
            .filter(|vendor| vendor.status.awaiting_decision())
            .count(),
        by_status: tally::<VendorStatus, _>(vendors.iter().map(|vendor| vendor.status), lang),
        by_risk: tally::<RiskLevel, _>(vendors.iter().map(|vendor| vendor.risk_level), lang),
    }
}

fn financing_stats(catalog: &AdminCatalog, lang: Language) -> FinancingStats {
    let applications = &catalog.bnpl_applications;
    let requested_amount: u64 = applications
        .iter()
        .map(|application| application.requested_amount)
        .sum();
    let approved_amount: u64 = applications
        .iter()
        .filter(|application| application.status.is_approved())
        .map(|application| application.requested_amount)
        .sum();

    let decided = applications
        .iter()
        .filter(|application| application.status.is_decided())
        .count();
    let approved = applications
        .iter()
        .filter(|application| application.status.is_approved())
        .count();
    let approval_rate = (decided > 0).then(|| approved as f32 / decided as f32);

    FinancingStats {
        total_applications: applications.len(),
        requested_amount,
        requested_amount_display: format_amount(requested_amount, lang),
        approved_amount,
        approved_amount_display: format_amount(approved_amount, lang),
        approval_rate,
        by_status: tally::<BnplStatus, _>(applications.iter().map(|app| app.status), lang),
        by_risk: tally::<RiskLevel, _>(applications.iter().map(|app| app.risk_level), lang),
    }
}

fn support_stats(catalog: &AdminCatalog, lang: Language) -> SupportStats {
    let tickets = &catalog.support_tickets;
    SupportStats {
        total: tickets.len(),
        open: tickets.iter().filter(|ticket| ticket.status.is_open()).count(),
        unassigned_open: tickets
            .iter()
            .filter(|ticket| ticket.status.is_open() && ticket.assigned_to.is_none())
            .count(),
        by_status: tally::<TicketStatus, _>(tickets.iter().map(|ticket| ticket.status), lang),
        by_priority: tally::<TicketPriority, _>(tickets.iter().map(|ticket| ticket.priority), lang),
    }
}

fn security_stats(catalog: &AdminCatalog, lang: Language) -> SecurityStats {
    let events = &catalog.security_events;
    SecurityStats {
        total: events.len(),
        unresolved: events.iter().filter(|event| !event.resolved).count(),
        unresolved_high_or_critical: events
            .iter()
            .filter(|event| !event.resolved && event.severity.needs_attention())
            .count(),
        by_severity: tally::<Severity, _>(events.iter().map(|event| event.severity), lang),
        by_type: tally::<SecurityEventType, _>(events.iter().map(|event| event.event_type), lang),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn financing_totals_follow_fixture_amounts() {
        let summary = DashboardSummary::build(&AdminCatalog::fixtures(), Language::English);
        let financing = &summary.financing;

        assert_eq!(financing.total_applications, 5);
        assert_eq!(financing.requested_amount, 835_000);
        assert_eq!(financing.approved_amount, 275_000);
        assert_eq!(financing.requested_amount_display, "SAR 835,000");
        let rate = financing.approval_rate.expect("decided applications exist");
        assert!((rate - 2.0 / 3.0).abs() < 1e-6);

        let statuses: Vec<&str> = financing.by_status.iter().map(|entry| entry.value).collect();
        assert_eq!(
            statuses,
            vec![
                "pending",
                "under_review",
                "approved",
                "rejected",
                "conditional_approval"
            ]
        );
    }

    #[test]
    fn zero_counts_are_omitted() {
        let summary = DashboardSummary::build(&AdminCatalog::fixtures(), Language::English);
        assert!(summary.users.by_status.iter().all(|entry| entry.count > 0));
        assert!(summary
            .security
            .by_severity
            .iter()
            .all(|entry| entry.count > 0));
    }

    #[test]
    fn support_and_security_counts() {
        let summary = DashboardSummary::build(&AdminCatalog::fixtures(), Language::Arabic);

        assert_eq!(summary.support.total, 7);
        assert_eq!(summary.support.open, 5);
        assert_eq!(summary.support.unassigned_open, 2);
        assert_eq!(summary.security.unresolved, 3);
        assert_eq!(summary.security.unresolved_high_or_critical, 2);
        assert_eq!(summary.vendors.awaiting_decision, 3);
        assert_eq!(summary.users.active, 5);
        assert_eq!(summary.users.kyc_verified, 5);

        let critical = summary
            .security
            .by_severity
            .iter()
            .find(|entry| entry.value == "critical")
            .expect("critical entry");
        assert_eq!(critical.label, "حرج");
    }

    #[test]
    fn empty_catalog_has_no_approval_rate() {
        let summary = DashboardSummary::build(&AdminCatalog::default(), Language::English);
        assert_eq!(summary.financing.approval_rate, None);
        assert!(summary.users.by_status.is_empty());
        assert_eq!(summary.financing.requested_amount_display, "SAR 0");
    }
}
