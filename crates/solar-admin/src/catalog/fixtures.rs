//! Built-in mock datasets served when no CSV exports are configured.

use chrono::{DateTime, TimeZone, Utc};

use crate::admin::{
    BnplApplication, BnplStatus, BusinessType, RiskLevel, SecurityEvent, SecurityEventType,
    Severity, SupportTicket, TicketCategory, TicketPriority, TicketStatus, User, UserRole,
    UserStatus, VendorApplication, VendorStatus,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    phone: &str,
    city: &str,
    role: UserRole,
    status: UserStatus,
    kyc_verified: bool,
    total_orders: u32,
    total_spent: u64,
    joined_at: DateTime<Utc>,
    last_login_at: Option<DateTime<Utc>>,
) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        role,
        status,
        kyc_verified,
        total_orders,
        total_spent,
        joined_at,
        last_login_at,
    }
}

pub fn users() -> Vec<User> {
    vec![
        user(
            "USR-001",
            "Ahmed Al-Rashid",
            "ahmed.rashid@example.sa",
            "+966 50 123 4567",
            "Riyadh",
            UserRole::Customer,
            UserStatus::Active,
            true,
            3,
            142_500,
            at(2024, 3, 12, 9, 15),
            Some(at(2025, 1, 20, 18, 42)),
        ),
        user(
            "USR-002",
            "Fatima Al-Zahra",
            "fatima.zahra@example.sa",
            "+966 55 234 5678",
            "Jeddah",
            UserRole::Customer,
            UserStatus::Active,
            true,
            1,
            85_000,
            at(2024, 6, 2, 14, 5),
            Some(at(2025, 1, 18, 10, 11)),
        ),
        user(
            "USR-003",
            "Desert Solar Co.",
            "ops@desertsolar.example.sa",
            "+966 11 345 6789",
            "Riyadh",
            UserRole::Vendor,
            UserStatus::Active,
            true,
            0,
            0,
            at(2023, 11, 20, 8, 0),
            Some(at(2025, 1, 21, 7, 30)),
        ),
        user(
            "USR-004",
            "Omar Al-Sayed",
            "omar.sayed@example.sa",
            "+966 54 456 7890",
            "Dammam",
            UserRole::Installer,
            UserStatus::PendingVerification,
            false,
            0,
            0,
            at(2025, 1, 8, 16, 45),
            None,
        ),
        user(
            "USR-005",
            "Noura Al-Mutairi",
            "noura.mutairi@example.sa",
            "+966 56 567 8901",
            "Khobar",
            UserRole::Customer,
            UserStatus::Suspended,
            true,
            2,
            61_200,
            at(2024, 1, 30, 11, 20),
            Some(at(2024, 12, 2, 9, 0)),
        ),
        user(
            "USR-006",
            "Layla Hassan",
            "layla.hassan@example.sa",
            "+966 53 678 9012",
            "Mecca",
            UserRole::Customer,
            UserStatus::Inactive,
            false,
            0,
            0,
            at(2024, 8, 14, 13, 10),
            Some(at(2024, 9, 1, 20, 5)),
        ),
        user(
            "USR-007",
            "Yousef Al-Ghamdi",
            "yousef.ghamdi@example.sa",
            "+966 50 789 0123",
            "Medina",
            UserRole::Admin,
            UserStatus::Active,
            true,
            0,
            0,
            at(2023, 9, 1, 9, 0),
            Some(at(2025, 1, 21, 8, 55)),
        ),
        user(
            "USR-008",
            "Reem Al-Dosari",
            "reem.dosari@example.sa",
            "+966 59 890 1234",
            "Riyadh",
            UserRole::Customer,
            UserStatus::Active,
            false,
            1,
            24_900,
            at(2024, 11, 23, 17, 35),
            Some(at(2025, 1, 15, 12, 0)),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: &str,
    company_name: &str,
    contact_name: &str,
    email: &str,
    phone: &str,
    city: &str,
    business_type: BusinessType,
    status: VendorStatus,
    risk_level: RiskLevel,
    years_in_business: u32,
    documents_complete: bool,
    rating: f32,
    submitted_at: DateTime<Utc>,
) -> VendorApplication {
    VendorApplication {
        id: id.to_string(),
        company_name: company_name.to_string(),
        contact_name: contact_name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        city: city.to_string(),
        business_type,
        status,
        risk_level,
        years_in_business,
        documents_complete,
        rating,
        submitted_at,
    }
}

pub fn vendors() -> Vec<VendorApplication> {
    vec![
        vendor(
            "VND-001",
            "SunPower Arabia",
            "Majed Al-Shehri",
            "majed@sunpower-arabia.example.sa",
            "+966 11 222 3333",
            "Riyadh",
            BusinessType::Distributor,
            VendorStatus::Pending,
            RiskLevel::Low,
            8,
            true,
            4.6,
            at(2025, 1, 14, 10, 0),
        ),
        vendor(
            "VND-002",
            "Desert Solar Co.",
            "Hind Al-Anazi",
            "hind@desertsolar.example.sa",
            "+966 12 333 4444",
            "Jeddah",
            BusinessType::Installer,
            VendorStatus::UnderReview,
            RiskLevel::Medium,
            4,
            true,
            4.2,
            at(2025, 1, 10, 13, 30),
        ),
        vendor(
            "VND-003",
            "Gulf Photovoltaics",
            "Saeed Al-Malki",
            "saeed@gulfpv.example.sa",
            "+966 13 444 5555",
            "Dammam",
            BusinessType::Manufacturer,
            VendorStatus::Approved,
            RiskLevel::Low,
            15,
            true,
            4.8,
            at(2024, 12, 3, 9, 45),
        ),
        vendor(
            "VND-004",
            "Bright Horizon Energy",
            "Tariq Bakr",
            "tariq@brighthorizon.example.sa",
            "+966 14 555 6666",
            "Tabuk",
            BusinessType::ServiceProvider,
            VendorStatus::Rejected,
            RiskLevel::High,
            1,
            false,
            2.9,
            at(2024, 11, 27, 15, 20),
        ),
        vendor(
            "VND-005",
            "Najd Solar Installations",
            "Abdullah Al-Qahtani",
            "abdullah@najdsolar.example.sa",
            "+966 11 666 7777",
            "Riyadh",
            BusinessType::Installer,
            VendorStatus::Pending,
            RiskLevel::Medium,
            3,
            false,
            3.9,
            at(2025, 1, 19, 11, 10),
        ),
        vendor(
            "VND-006",
            "Red Sea Renewables",
            "Maha Al-Harthi",
            "maha@redsearenew.example.sa",
            "+966 12 777 8888",
            "Yanbu",
            BusinessType::Distributor,
            VendorStatus::Approved,
            RiskLevel::Low,
            11,
            true,
            4.5,
            at(2024, 10, 8, 8, 25),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn bnpl(
    id: &str,
    applicant_name: &str,
    email: &str,
    vendor_name: &str,
    product: &str,
    requested_amount: u64,
    term_months: u32,
    monthly_income: u64,
    credit_score: u16,
    status: BnplStatus,
    risk_level: RiskLevel,
    kyc_verified: bool,
    aml_cleared: bool,
    submitted_at: DateTime<Utc>,
) -> BnplApplication {
    BnplApplication {
        id: id.to_string(),
        applicant_name: applicant_name.to_string(),
        email: email.to_string(),
        vendor_name: vendor_name.to_string(),
        product: product.to_string(),
        requested_amount,
        term_months,
        monthly_income,
        credit_score,
        status,
        risk_level,
        kyc_verified,
        aml_cleared,
        submitted_at,
    }
}

pub fn bnpl_applications() -> Vec<BnplApplication> {
    vec![
        bnpl(
            "BNPL-001",
            "Ahmed Al-Rashid",
            "ahmed.rashid@example.sa",
            "SunPower Arabia",
            "10kW Residential System",
            125_000,
            24,
            18_000,
            720,
            BnplStatus::Pending,
            RiskLevel::Low,
            true,
            true,
            at(2025, 1, 20, 9, 30),
        ),
        bnpl(
            "BNPL-002",
            "Fatima Al-Zahra",
            "fatima.zahra@example.sa",
            "Desert Solar Co.",
            "6kW Rooftop Kit",
            85_000,
            18,
            12_000,
            680,
            BnplStatus::UnderReview,
            RiskLevel::Medium,
            true,
            true,
            at(2025, 1, 18, 14, 15),
        ),
        bnpl(
            "BNPL-003",
            "Mohammed Al-Otaibi",
            "mohammed.otaibi@example.sa",
            "Gulf Photovoltaics",
            "15kW Villa System with Storage",
            180_000,
            36,
            25_000,
            780,
            BnplStatus::Approved,
            RiskLevel::Low,
            true,
            true,
            at(2025, 1, 15, 11, 0),
        ),
        bnpl(
            "BNPL-004",
            "Sara Al-Qahtani",
            "sara.qahtani@example.sa",
            "Red Sea Renewables",
            "40kW Commercial Array",
            350_000,
            48,
            15_000,
            590,
            BnplStatus::Rejected,
            RiskLevel::High,
            true,
            false,
            at(2025, 1, 12, 16, 45),
        ),
        bnpl(
            "BNPL-005",
            "Khalid Al-Harbi",
            "khalid.harbi@example.sa",
            "SunPower Arabia",
            "8kW Hybrid Inverter Package",
            95_000,
            24,
            14_000,
            650,
            BnplStatus::ConditionalApproval,
            RiskLevel::Medium,
            false,
            true,
            at(2025, 1, 10, 10, 20),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    event_type: SecurityEventType,
    severity: Severity,
    user_email: &str,
    ip_address: &str,
    location: &str,
    description: &str,
    resolved: bool,
    occurred_at: DateTime<Utc>,
) -> SecurityEvent {
    SecurityEvent {
        id: id.to_string(),
        event_type,
        severity,
        user_email: user_email.to_string(),
        ip_address: ip_address.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        resolved,
        occurred_at,
    }
}

pub fn security_events() -> Vec<SecurityEvent> {
    vec![
        event(
            "SEC-001",
            SecurityEventType::LoginFailed,
            Severity::Medium,
            "noura.mutairi@example.sa",
            "185.23.14.7",
            "Khobar, SA",
            "Five consecutive failed password attempts",
            false,
            at(2025, 1, 21, 3, 12),
        ),
        event(
            "SEC-002",
            SecurityEventType::SuspiciousActivity,
            Severity::Critical,
            "yousef.ghamdi@example.sa",
            "102.89.44.210",
            "Lagos, NG",
            "Admin session opened from an unrecognised country",
            false,
            at(2025, 1, 21, 2, 40),
        ),
        event(
            "SEC-003",
            SecurityEventType::LoginSuccess,
            Severity::Low,
            "ahmed.rashid@example.sa",
            "94.97.12.33",
            "Riyadh, SA",
            "Login from known device",
            true,
            at(2025, 1, 20, 18, 42),
        ),
        event(
            "SEC-004",
            SecurityEventType::PermissionChange,
            Severity::High,
            "yousef.ghamdi@example.sa",
            "94.97.1.8",
            "Medina, SA",
            "Vendor approval permission granted to support role",
            true,
            at(2025, 1, 19, 10, 5),
        ),
        event(
            "SEC-005",
            SecurityEventType::DataExport,
            Severity::Medium,
            "yousef.ghamdi@example.sa",
            "94.97.1.8",
            "Medina, SA",
            "BNPL applications exported to CSV",
            true,
            at(2025, 1, 18, 15, 30),
        ),
        event(
            "SEC-006",
            SecurityEventType::AccountLocked,
            Severity::High,
            "noura.mutairi@example.sa",
            "185.23.14.7",
            "Khobar, SA",
            "Account locked after repeated failures",
            false,
            at(2025, 1, 21, 3, 15),
        ),
        event(
            "SEC-007",
            SecurityEventType::PasswordChange,
            Severity::Low,
            "fatima.zahra@example.sa",
            "188.54.77.2",
            "Jeddah, SA",
            "Password changed by account owner",
            true,
            at(2025, 1, 17, 20, 0),
        ),
        event(
            "SEC-008",
            SecurityEventType::LoginFailed,
            Severity::Low,
            "reem.dosari@example.sa",
            "51.36.90.14",
            "Riyadh, SA",
            "Single failed login attempt",
            true,
            at(2025, 1, 15, 11, 58),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn ticket(
    id: &str,
    subject: &str,
    customer_name: &str,
    customer_email: &str,
    category: TicketCategory,
    priority: TicketPriority,
    status: TicketStatus,
    assigned_to: Option<&str>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> SupportTicket {
    SupportTicket {
        id: id.to_string(),
        subject: subject.to_string(),
        customer_name: customer_name.to_string(),
        customer_email: customer_email.to_string(),
        category,
        priority,
        status,
        assigned_to: assigned_to.map(str::to_string),
        created_at,
        updated_at,
    }
}

pub fn support_tickets() -> Vec<SupportTicket> {
    vec![
        ticket(
            "TKT-001",
            "Inverter shows grid fault after installation",
            "Ahmed Al-Rashid",
            "ahmed.rashid@example.sa",
            TicketCategory::Technical,
            TicketPriority::High,
            TicketStatus::InProgress,
            Some("Support Team A"),
            at(2025, 1, 19, 8, 30),
            at(2025, 1, 20, 12, 0),
        ),
        ticket(
            "TKT-002",
            "Installment charged twice this month",
            "Fatima Al-Zahra",
            "fatima.zahra@example.sa",
            TicketCategory::Billing,
            TicketPriority::Urgent,
            TicketStatus::Open,
            None,
            at(2025, 1, 21, 7, 50),
            at(2025, 1, 21, 7, 50),
        ),
        ticket(
            "TKT-003",
            "Installation date needs to be rescheduled",
            "Reem Al-Dosari",
            "reem.dosari@example.sa",
            TicketCategory::Installation,
            TicketPriority::Medium,
            TicketStatus::WaitingCustomer,
            Some("Field Ops"),
            at(2025, 1, 16, 14, 10),
            at(2025, 1, 18, 9, 25),
        ),
        ticket(
            "TKT-004",
            "Question about BNPL conditional approval",
            "Khalid Al-Harbi",
            "khalid.harbi@example.sa",
            TicketCategory::Financing,
            TicketPriority::Medium,
            TicketStatus::Open,
            Some("Finance Desk"),
            at(2025, 1, 20, 16, 5),
            at(2025, 1, 20, 16, 5),
        ),
        ticket(
            "TKT-005",
            "Cannot update phone number on profile",
            "Layla Hassan",
            "layla.hassan@example.sa",
            TicketCategory::Account,
            TicketPriority::Low,
            TicketStatus::Resolved,
            Some("Support Team B"),
            at(2025, 1, 9, 10, 0),
            at(2025, 1, 10, 11, 30),
        ),
        ticket(
            "TKT-006",
            "Panel output lower than quoted",
            "Mohammed Al-Otaibi",
            "mohammed.otaibi@example.sa",
            TicketCategory::Technical,
            TicketPriority::High,
            TicketStatus::Open,
            None,
            at(2025, 1, 20, 9, 45),
            at(2025, 1, 20, 9, 45),
        ),
        ticket(
            "TKT-007",
            "Request copy of warranty certificate",
            "Noura Al-Mutairi",
            "noura.mutairi@example.sa",
            TicketCategory::Other,
            TicketPriority::Low,
            TicketStatus::Closed,
            Some("Support Team A"),
            at(2024, 12, 28, 13, 0),
            at(2025, 1, 2, 8, 15),
        ),
    ]
}
