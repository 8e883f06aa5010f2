//! The immutable set of admin datasets held for the lifetime of the process.

pub mod fixtures;
mod import;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::admin::{
    BnplApplication, BnplApplicationView, BnplField, SecurityEvent, SecurityEventField,
    SecurityEventView, SupportTicket, SupportTicketView, TicketField, User, UserField, UserView,
    VendorApplication, VendorApplicationView, VendorField,
};
use crate::labels::Language;
use crate::listing::{ListPage, ListQueryError, ListQueryParams};

pub use import::{load_file, read_records, ImportError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    Users,
    Vendors,
    BnplApplications,
    SecurityEvents,
    SupportTickets,
}

impl DatasetKind {
    pub const ALL: [Self; 5] = [
        Self::Users,
        Self::Vendors,
        Self::BnplApplications,
        Self::SecurityEvents,
        Self::SupportTickets,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Vendors => "vendors",
            Self::BnplApplications => "bnpl_applications",
            Self::SecurityEvents => "security_events",
            Self::SupportTickets => "support_tickets",
        }
    }

    /// URL segment used by the admin API.
    pub const fn route_segment(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Vendors => "vendors",
            Self::BnplApplications => "bnpl-applications",
            Self::SecurityEvents => "security-events",
            Self::SupportTickets => "support-tickets",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Users => "users.csv",
            Self::Vendors => "vendors.csv",
            Self::BnplApplications => "bnpl_applications.csv",
            Self::SecurityEvents => "security_events.csv",
            Self::SupportTickets => "support_tickets.csv",
        }
    }

    /// Accepts the wire name, the URL segment and a few short aliases.
    pub fn from_name(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "users" | "user" => Some(Self::Users),
            "vendors" | "vendor" | "vendor_applications" => Some(Self::Vendors),
            "bnpl_applications" | "bnpl" | "financing" => Some(Self::BnplApplications),
            "security_events" | "security" | "audit" => Some(Self::SecurityEvents),
            "support_tickets" | "support" | "tickets" => Some(Self::SupportTickets),
            _ => None,
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminCatalog {
    pub users: Vec<User>,
    pub vendors: Vec<VendorApplication>,
    pub bnpl_applications: Vec<BnplApplication>,
    pub security_events: Vec<SecurityEvent>,
    pub support_tickets: Vec<SupportTicket>,
}

impl AdminCatalog {
    pub fn fixtures() -> Self {
        Self {
            users: fixtures::users(),
            vendors: fixtures::vendors(),
            bnpl_applications: fixtures::bnpl_applications(),
            security_events: fixtures::security_events(),
            support_tickets: fixtures::support_tickets(),
        }
    }

    /// Reads each dataset's CSV export from `dir`, using the fixture set for any export
    /// that is not present.
    pub fn from_dir(dir: &Path) -> Result<Self, ImportError> {
        let catalog = Self {
            users: load_or_fixture(dir, DatasetKind::Users, fixtures::users)?,
            vendors: load_or_fixture(dir, DatasetKind::Vendors, fixtures::vendors)?,
            bnpl_applications: load_or_fixture(
                dir,
                DatasetKind::BnplApplications,
                fixtures::bnpl_applications,
            )?,
            security_events: load_or_fixture(
                dir,
                DatasetKind::SecurityEvents,
                fixtures::security_events,
            )?,
            support_tickets: load_or_fixture(
                dir,
                DatasetKind::SupportTickets,
                fixtures::support_tickets,
            )?,
        };

        info!(
            dir = %dir.display(),
            users = catalog.users.len(),
            vendors = catalog.vendors.len(),
            bnpl_applications = catalog.bnpl_applications.len(),
            security_events = catalog.security_events.len(),
            support_tickets = catalog.support_tickets.len(),
            "admin catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self, kind: DatasetKind) -> usize {
        match kind {
            DatasetKind::Users => self.users.len(),
            DatasetKind::Vendors => self.vendors.len(),
            DatasetKind::BnplApplications => self.bnpl_applications.len(),
            DatasetKind::SecurityEvents => self.security_events.len(),
            DatasetKind::SupportTickets => self.support_tickets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        DatasetKind::ALL.iter().all(|kind| self.len(*kind) == 0)
    }

    pub fn contains(&self, kind: DatasetKind, id: &str) -> bool {
        match kind {
            DatasetKind::Users => self.users.iter().any(|record| record.id == id),
            DatasetKind::Vendors => self.vendors.iter().any(|record| record.id == id),
            DatasetKind::BnplApplications => {
                self.bnpl_applications.iter().any(|record| record.id == id)
            }
            DatasetKind::SecurityEvents => {
                self.security_events.iter().any(|record| record.id == id)
            }
            DatasetKind::SupportTickets => {
                self.support_tickets.iter().any(|record| record.id == id)
            }
        }
    }

    /// Runs a string-keyed listing request against one dataset and renders the page.
    pub fn query(
        &self,
        kind: DatasetKind,
        params: ListQueryParams,
        default_page_size: usize,
        lang: Language,
    ) -> Result<DatasetPage, ListQueryError> {
        let page = match kind {
            DatasetKind::Users => DatasetPage::Users(
                params
                    .into_query::<UserField>(default_page_size)?
                    .run(&self.users)?
                    .map(|record| record.to_view(lang)),
            ),
            DatasetKind::Vendors => DatasetPage::Vendors(
                params
                    .into_query::<VendorField>(default_page_size)?
                    .run(&self.vendors)?
                    .map(|record| record.to_view(lang)),
            ),
            DatasetKind::BnplApplications => DatasetPage::BnplApplications(
                params
                    .into_query::<BnplField>(default_page_size)?
                    .run(&self.bnpl_applications)?
                    .map(|record| record.to_view(lang)),
            ),
            DatasetKind::SecurityEvents => DatasetPage::SecurityEvents(
                params
                    .into_query::<SecurityEventField>(default_page_size)?
                    .run(&self.security_events)?
                    .map(|record| record.to_view(lang)),
            ),
            DatasetKind::SupportTickets => DatasetPage::SupportTickets(
                params
                    .into_query::<TicketField>(default_page_size)?
                    .run(&self.support_tickets)?
                    .map(|record| record.to_view(lang)),
            ),
        };

        debug!(
            dataset = %kind,
            matched = page.total_matched(),
            returned = page.len(),
            "listing evaluated"
        );
        Ok(page)
    }
}

fn load_or_fixture<T, F>(dir: &Path, kind: DatasetKind, fallback: F) -> Result<Vec<T>, ImportError>
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    let path = dir.join(kind.file_name());
    match load_file(&path)? {
        Some(records) => Ok(records),
        None => {
            debug!(dataset = %kind, path = %path.display(), "no export found, using fixtures");
            Ok(fallback())
        }
    }
}

/// Rendered page for one dataset.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum DatasetPage {
    Users(ListPage<UserView>),
    Vendors(ListPage<VendorApplicationView>),
    BnplApplications(ListPage<BnplApplicationView>),
    SecurityEvents(ListPage<SecurityEventView>),
    SupportTickets(ListPage<SupportTicketView>),
}

impl DatasetPage {
    pub fn total_matched(&self) -> usize {
        match self {
            Self::Users(page) => page.total_matched,
            Self::Vendors(page) => page.total_matched,
            Self::BnplApplications(page) => page.total_matched,
            Self::SecurityEvents(page) => page.total_matched,
            Self::SupportTickets(page) => page.total_matched,
        }
    }

    pub fn total_pages(&self) -> usize {
        match self {
            Self::Users(page) => page.total_pages,
            Self::Vendors(page) => page.total_pages,
            Self::BnplApplications(page) => page.total_pages,
            Self::SecurityEvents(page) => page.total_pages,
            Self::SupportTickets(page) => page.total_pages,
        }
    }

    pub fn page(&self) -> usize {
        match self {
            Self::Users(page) => page.page,
            Self::Vendors(page) => page.page,
            Self::BnplApplications(page) => page.page,
            Self::SecurityEvents(page) => page.page,
            Self::SupportTickets(page) => page.page,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Users(page) => page.items.len(),
            Self::Vendors(page) => page.items.len(),
            Self::BnplApplications(page) => page.items.len(),
            Self::SecurityEvents(page) => page.items.len(),
            Self::SupportTickets(page) => page.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One summary line per visible record, for console output.
    pub fn headlines(&self) -> Vec<String> {
        match self {
            Self::Users(page) => page.items.iter().map(UserView::headline).collect(),
            Self::Vendors(page) => page
                .items
                .iter()
                .map(VendorApplicationView::headline)
                .collect(),
            Self::BnplApplications(page) => page
                .items
                .iter()
                .map(BnplApplicationView::headline)
                .collect(),
            Self::SecurityEvents(page) => page
                .items
                .iter()
                .map(SecurityEventView::headline)
                .collect(),
            Self::SupportTickets(page) => page
                .items
                .iter()
                .map(SupportTicketView::headline)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_names_resolve_from_routes_and_aliases() {
        for kind in DatasetKind::ALL {
            assert_eq!(DatasetKind::from_name(kind.as_str()), Some(kind));
            assert_eq!(DatasetKind::from_name(kind.route_segment()), Some(kind));
        }
        assert_eq!(
            DatasetKind::from_name("BNPL"),
            Some(DatasetKind::BnplApplications)
        );
        assert_eq!(DatasetKind::from_name("invoices"), None);
    }

    #[test]
    fn fixtures_populate_every_dataset() {
        let catalog = AdminCatalog::fixtures();
        for kind in DatasetKind::ALL {
            assert!(catalog.len(kind) > 0, "{kind} is empty");
        }
        assert!(catalog.contains(DatasetKind::BnplApplications, "BNPL-003"));
        assert!(!catalog.contains(DatasetKind::Users, "BNPL-003"));
    }

    #[test]
    fn fixture_enumerations_stay_within_declared_sets() {
        let catalog = AdminCatalog::fixtures();
        let json = serde_json::to_value(&catalog.bnpl_applications).expect("serializes");
        let statuses: Vec<&str> = json
            .as_array()
            .expect("array")
            .iter()
            .filter_map(|record| record["status"].as_str())
            .collect();
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
    fn from_dir_falls_back_to_fixtures() {
        let catalog =
            AdminCatalog::from_dir(Path::new("./no-such-export-dir")).expect("fallback works");
        assert_eq!(catalog, AdminCatalog::fixtures());
    }

    #[test]
    fn query_renders_labels_in_requested_language() {
        let catalog = AdminCatalog::fixtures();
        let params = ListQueryParams::from_pairs([("status", "approved")]);
        let page = catalog
            .query(DatasetKind::BnplApplications, params, 10, Language::Arabic)
            .expect("query runs");

        match page {
            DatasetPage::BnplApplications(page) => {
                assert_eq!(page.total_matched, 1);
                assert_eq!(page.items[0].status.label, "موافق عليه");
                assert_eq!(page.items[0].requested_amount_display, "180,000 ر.س");
            }
            other => panic!("unexpected page {other:?}"),
        }
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "solar-admin-{name}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    #[test]
    fn from_dir_replaces_only_the_exported_datasets() {
        let dir = scratch_dir("users-export");
        std::fs::write(
            dir.join("users.csv"),
            "id,name,email,phone,city,role,status,kyc_verified,total_orders,total_spent,joined_at,last_login_at\n\
USR-900,Rana Saleh,rana@example.sa,+966 55 000 0900,Tabuk,vendor,active,true,4,88000,2023-09-10T07:30:00Z,\n",
        )
        .expect("write users export");

        let catalog = AdminCatalog::from_dir(&dir).expect("catalog loads");
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(catalog.users.len(), 1);
        assert_eq!(catalog.users[0].id, "USR-900");
        assert_eq!(catalog.users[0].last_login_at, None);
        assert_eq!(catalog.vendors, fixtures::vendors());
        assert_eq!(catalog.bnpl_applications, fixtures::bnpl_applications());
        assert_eq!(catalog.security_events, fixtures::security_events());
        assert_eq!(catalog.support_tickets, fixtures::support_tickets());
    }

    #[test]
    fn from_dir_reports_the_malformed_export() {
        let dir = scratch_dir("bad-vendors");
        std::fs::write(
            dir.join("users.csv"),
            "id,name,email,phone,city,role,status,kyc_verified,total_orders,total_spent,joined_at,last_login_at\n\
USR-901,Omar Zaid,omar@example.sa,+966 55 000 0901,Najran,customer,active,false,0,0,2024-02-02T10:00:00Z,\n",
        )
        .expect("write users export");
        std::fs::write(
            dir.join("vendors.csv"),
            "id,company_name,email,phone,city,business_type,status,risk_level,years_in_business,documents_complete,rating,submitted_at\n\
VND-900,Sun Works,ops@sunworks.sa,+966 11 000 0900,Riyadh,installer,pending,low,3,true,4.2,2025-01-10T09:00:00Z\n",
        )
        .expect("write vendors export");

        let result = AdminCatalog::from_dir(&dir);
        let _ = std::fs::remove_dir_all(&dir);

        match result {
            Err(err @ ImportError::Csv { .. }) => {
                let message = err.to_string();
                assert!(message.contains("vendors.csv"), "{message}");
                assert!(message.contains("contact_name"), "{message}");
            }
            other => panic!("expected a CSV error, got {other:?}"),
        }
    }

    #[test]
    fn fixture_timestamps_are_real_dates() {
        use chrono::TimeZone;

        let floor = chrono::Utc
            .with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
            .single()
            .expect("valid date");
        let catalog = AdminCatalog::fixtures();

        let mut stamps = Vec::new();
        for user in &catalog.users {
            stamps.push(user.joined_at);
            stamps.extend(user.last_login_at);
        }
        stamps.extend(catalog.vendors.iter().map(|vendor| vendor.submitted_at));
        stamps.extend(catalog.bnpl_applications.iter().map(|app| app.submitted_at));
        stamps.extend(catalog.security_events.iter().map(|event| event.occurred_at));
        for ticket in &catalog.support_tickets {
            stamps.push(ticket.created_at);
            stamps.push(ticket.updated_at);
        }

        assert!(!stamps.is_empty());
        for stamp in stamps {
            assert!(stamp > floor, "fixture timestamp {stamp} fell back to the epoch");
        }
    }
}
