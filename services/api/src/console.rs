use crate::infra::{load_catalog, parse_dataset, parse_filter};
use chrono::Local;
use clap::Args;
use solar_admin::catalog::DatasetKind;
use solar_admin::config::AppConfig;
use solar_admin::dashboard::{CountEntry, DashboardSummary};
use solar_admin::error::AppError;
use solar_admin::labels::Language;
use solar_admin::listing::ListQueryParams;
use solar_admin::telemetry;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Dataset to list: users, vendors, bnpl-applications, security-events, support-tickets
    #[arg(value_parser = parse_dataset)]
    pub(crate) dataset: DatasetKind,
    /// Case-insensitive text matched against the searchable columns
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Column to sort by (defaults to the dataset's own ordering)
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// Sort descending
    #[arg(long)]
    pub(crate) desc: bool,
    /// 1-based page number
    #[arg(long)]
    pub(crate) page: Option<u32>,
    /// Rows per page (defaults to ADMIN_PAGE_SIZE)
    #[arg(long)]
    pub(crate) page_size: Option<u32>,
    /// Facet filter as KEY=VALUE; repeat for several columns
    #[arg(long = "filter", value_parser = parse_filter)]
    pub(crate) filters: Vec<(String, String)>,
    /// Label language (en or ar)
    #[arg(long)]
    pub(crate) lang: Option<String>,
    /// Directory of CSV exports (overrides ADMIN_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Label language (en or ar)
    #[arg(long)]
    pub(crate) lang: Option<String>,
    /// Directory of CSV exports (overrides ADMIN_DATA_DIR)
    #[arg(long)]
    pub(crate) data_dir: Option<PathBuf>,
}

impl ListArgs {
    fn params(&self) -> ListQueryParams {
        let mut params = ListQueryParams::default();
        params.filters.extend(self.filters.iter().cloned());
        params.search = self.search.clone();
        params.sort = self.sort.clone();
        params.direction = if self.desc {
            Some("desc".to_string())
        } else {
            self.sort.as_ref().map(|_| "asc".to_string())
        };
        params.page = self.page.map(|page| page.to_string());
        params.page_size = self.page_size.map(|size| size.to_string());
        params
    }
}

fn resolve_language(raw: Option<&str>, fallback: Language) -> Language {
    raw.map_or(fallback, Language::from_code)
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let lang = resolve_language(args.lang.as_deref(), config.admin.language);
    let data_dir = args.data_dir.clone().or(config.admin.data_dir);
    let catalog = load_catalog(data_dir.as_deref())?;

    let page = catalog.query(args.dataset, args.params(), config.admin.page_size, lang)?;

    println!("== {} ==", args.dataset.route_segment());
    if page.is_empty() {
        println!("No records match.");
    }
    for line in page.headlines() {
        println!("- {line}");
    }
    println!(
        "Page {} of {} ({} matched)",
        page.page(),
        page.total_pages().max(1),
        page.total_matched()
    );
    Ok(())
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init_for_cli(&config.telemetry)?;

    let lang = resolve_language(args.lang.as_deref(), config.admin.language);
    let data_dir = args.data_dir.or(config.admin.data_dir);
    let catalog = load_catalog(data_dir.as_deref())?;
    let summary = DashboardSummary::build(&catalog, lang);

    println!("Dashboard as of {}", Local::now().format("%Y-%m-%d %H:%M"));
    for line in render_dashboard(&summary) {
        println!("{line}");
    }
    Ok(())
}

fn render_counts(title: &str, entries: &[CountEntry]) -> String {
    let parts: Vec<String> = entries
        .iter()
        .map(|entry| format!("{} {}", entry.label, entry.count))
        .collect();
    format!("  {title}: {}", parts.join(", "))
}

fn render_dashboard(summary: &DashboardSummary) -> Vec<String> {
    let mut lines = vec![
        "== Users ==".to_string(),
        format!(
            "  Total {} | Active {} | KYC verified {}",
            summary.users.total, summary.users.active, summary.users.kyc_verified
        ),
        render_counts("Status", &summary.users.by_status),
        render_counts("Role", &summary.users.by_role),
        "== Vendors ==".to_string(),
        format!(
            "  Total {} | Awaiting decision {}",
            summary.vendors.total, summary.vendors.awaiting_decision
        ),
        render_counts("Status", &summary.vendors.by_status),
        "== Financing ==".to_string(),
        format!(
            "  Applications {} | Requested {} | Approved {}",
            summary.financing.total_applications,
            summary.financing.requested_amount_display,
            summary.financing.approved_amount_display
        ),
    ];

    if let Some(rate) = summary.financing.approval_rate {
        lines.push(format!("  Approval rate {:.0}%", rate * 100.0));
    }
    lines.extend([
        render_counts("Status", &summary.financing.by_status),
        render_counts("Risk", &summary.financing.by_risk),
        "== Support ==".to_string(),
        format!(
            "  Total {} | Open {} | Unassigned {}",
            summary.support.total, summary.support.open, summary.support.unassigned_open
        ),
        render_counts("Priority", &summary.support.by_priority),
        "== Security ==".to_string(),
        format!(
            "  Events {} | Unresolved {} | High/critical open {}",
            summary.security.total,
            summary.security.unresolved,
            summary.security.unresolved_high_or_critical
        ),
        render_counts("Severity", &summary.security.by_severity),
    ]);
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_admin::catalog::AdminCatalog;

    fn list_args(dataset: DatasetKind) -> ListArgs {
        ListArgs {
            dataset,
            search: None,
            sort: None,
            desc: false,
            page: None,
            page_size: None,
            filters: Vec::new(),
            lang: None,
            data_dir: None,
        }
    }

    #[test]
    fn params_leave_direction_to_the_dataset_without_sort() {
        let params = list_args(DatasetKind::Users).params();
        assert_eq!(params.sort, None);
        assert_eq!(params.direction, None);
    }

    #[test]
    fn params_carry_flags_and_filters() {
        let mut args = list_args(DatasetKind::BnplApplications);
        args.sort = Some("requested_amount".to_string());
        args.page = Some(2);
        args.filters = vec![("status".to_string(), "approved".to_string())];

        let params = args.params();
        assert_eq!(params.direction.as_deref(), Some("asc"));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.filters.get("status").map(String::as_str), Some("approved"));
    }

    #[test]
    fn dashboard_render_lists_each_section() {
        let summary = DashboardSummary::build(&AdminCatalog::fixtures(), Language::English);
        let lines = render_dashboard(&summary);

        assert!(lines.contains(&"== Financing ==".to_string()));
        assert!(lines
            .iter()
            .any(|line| line.contains("Requested SAR 835,000")));
        assert!(lines.iter().any(|line| line == "  Approval rate 67%"));
    }
}
