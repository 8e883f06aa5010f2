//! Listing behavior over the built-in datasets, exercised through the public query API.

use solar_admin::admin::{
    BnplApplication, BnplField, SecurityEventField, TicketField, User, UserField,
};
use solar_admin::catalog::{fixtures, AdminCatalog, DatasetKind, DatasetPage};
use solar_admin::labels::Language;
use solar_admin::listing::{
    FacetFilter, ListQuery, ListQueryError, ListQueryParams, SortDirection,
};

fn ids<T, F>(items: &[&T], id: F) -> Vec<String>
where
    F: Fn(&T) -> &str,
{
    items.iter().map(|item| id(item).to_string()).collect()
}

#[test]
fn pending_filter_returns_the_single_pending_application() {
    let applications = fixtures::bnpl_applications();
    let page = ListQuery::<BnplField>::new()
        .equals(BnplField::Status, "pending")
        .run(&applications)
        .expect("query runs");

    assert_eq!(page.total_matched, 1);
    assert_eq!(page.items[0].id, "BNPL-001");
}

#[test]
fn requested_amount_sorts_ascending() {
    let applications = fixtures::bnpl_applications();
    let page = ListQuery::<BnplField>::new()
        .sort(BnplField::RequestedAmount, SortDirection::Ascending)
        .run(&applications)
        .expect("query runs");

    let amounts: Vec<u64> = page
        .items
        .iter()
        .map(|application| application.requested_amount)
        .collect();
    assert_eq!(amounts, vec![85_000, 95_000, 125_000, 180_000, 350_000]);
}

#[test]
fn all_filter_is_the_same_as_no_filter() {
    let applications = fixtures::bnpl_applications();
    let unfiltered = ListQuery::<BnplField>::new()
        .run(&applications)
        .expect("query runs");
    let all = ListQuery::<BnplField>::new()
        .filter(BnplField::Status, FacetFilter::parse("ALL"))
        .run(&applications)
        .expect("query runs");

    assert_eq!(unfiltered, all);
}

#[test]
fn ranked_priorities_sort_by_declared_order_and_keep_ties_stable() {
    let tickets = fixtures::support_tickets();
    let page = ListQuery::<TicketField>::new()
        .sort(TicketField::Priority, SortDirection::Descending)
        .run(&tickets)
        .expect("query runs");

    let order: Vec<&str> = page.items.iter().map(|ticket| ticket.id.as_str()).collect();
    assert_eq!(
        order,
        vec!["TKT-002", "TKT-001", "TKT-006", "TKT-003", "TKT-004", "TKT-005", "TKT-007"]
    );
}

#[test]
fn severity_filters_by_tag_even_though_it_sorts_by_rank() {
    let events = fixtures::security_events();
    let page = ListQuery::<SecurityEventField>::new()
        .equals(SecurityEventField::Severity, "high")
        .run(&events)
        .expect("query runs");

    let order: Vec<&str> = page.items.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(order, vec!["SEC-006", "SEC-004"]);
}

#[test]
fn concatenated_pages_reproduce_the_full_listing() {
    let users = fixtures::users();
    let full = ListQuery::<UserField>::new()
        .page_size(100)
        .run(&users)
        .expect("query runs");
    let expected = ids::<User, _>(&full.items, |user| user.id.as_str());

    let first = ListQuery::<UserField>::new()
        .page_size(3)
        .run(&users)
        .expect("query runs");
    assert_eq!(first.total_pages, 3);

    let mut collected = Vec::new();
    for page in 1..=first.total_pages {
        let window = ListQuery::<UserField>::new()
            .page_size(3)
            .page(page)
            .run(&users)
            .expect("query runs");
        assert!(window.items.len() <= 3);
        collected.extend(ids::<User, _>(&window.items, |user| user.id.as_str()));
    }

    assert_eq!(collected, expected);
}

#[test]
fn sorting_a_sorted_listing_changes_nothing() {
    let applications = fixtures::bnpl_applications();
    let query = ListQuery::<BnplField>::new().sort(BnplField::CreditScore, SortDirection::Descending);
    let once = query.run(&applications).expect("query runs");

    let resorted: Vec<BnplApplication> = once.items.iter().map(|item| (*item).clone()).collect();
    let twice = query.run(&resorted).expect("query runs");

    assert_eq!(
        ids::<BnplApplication, _>(&once.items, |app| app.id.as_str()),
        ids::<BnplApplication, _>(&twice.items, |app| app.id.as_str())
    );
}

#[test]
fn search_is_restricted_to_requested_fields() {
    let catalog = AdminCatalog::fixtures();
    let params = ListQueryParams::from_pairs([("search", "SARA"), ("search_fields", "applicant_name")]);
    let page = catalog
        .query(DatasetKind::BnplApplications, params, 10, Language::English)
        .expect("query runs");

    assert_eq!(page.total_matched(), 1);
    assert_eq!(page.headlines().len(), 1);
    assert!(matches!(page, DatasetPage::BnplApplications(_)));
}

#[test]
fn string_parameters_are_validated() {
    let catalog = AdminCatalog::fixtures();

    let err = catalog
        .query(
            DatasetKind::Users,
            ListQueryParams::from_pairs([("page_size", "0")]),
            10,
            Language::English,
        )
        .expect_err("zero page size rejected");
    assert_eq!(err, ListQueryError::InvalidPageSize);

    let err = catalog
        .query(
            DatasetKind::Users,
            ListQueryParams::from_pairs([("favourite_colour", "green")]),
            10,
            Language::English,
        )
        .expect_err("unknown filter rejected");
    assert_eq!(err, ListQueryError::UnknownField("favourite_colour".to_string()));

    let page = catalog
        .query(
            DatasetKind::Users,
            ListQueryParams::from_pairs([("sort", "shoe_size"), ("page", "9")]),
            10,
            Language::English,
        )
        .expect("unknown sort key falls back");
    assert_eq!(page.total_matched(), 8);
    assert!(page.is_empty());
}
