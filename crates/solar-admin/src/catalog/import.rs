use std::io::Read;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Parses a CSV export whose headers are the record's snake_case field names.
/// Surrounding whitespace is trimmed and empty optional cells become `None`.
pub fn read_records<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

/// Loads `path` if it exists; `Ok(None)` means the export is absent.
pub fn load_file<T>(path: &Path) -> Result<Option<Vec<T>>, ImportError>
where
    T: DeserializeOwned,
{
    let file = match std::fs::File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ImportError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    read_records(file)
        .map(Some)
        .map_err(|source| ImportError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::{SupportTicket, TicketPriority, TicketStatus, User, UserStatus};
    use std::io::Cursor;

    #[test]
    fn reads_users_with_optional_columns() {
        let csv = "id,name,email,phone,city,role,status,kyc_verified,total_orders,total_spent,joined_at,last_login_at\n\
USR-100, Salma Idris ,salma@example.sa,+966 50 000 0000,Abha,customer,active,true,2,30500,2024-05-01T08:00:00Z,\n\
USR-101,Faisal Nasser,faisal@example.sa,+966 50 000 0001,Hail,installer,pending_verification,false,0,0,2024-06-01T08:00:00Z,2025-01-01T10:00:00Z\n";
        let users: Vec<User> = read_records(Cursor::new(csv)).expect("users parse");

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Salma Idris");
        assert_eq!(users[0].last_login_at, None);
        assert_eq!(users[1].status, UserStatus::PendingVerification);
        assert!(users[1].last_login_at.is_some());
    }

    #[test]
    fn reads_tickets_without_assignee() {
        let csv = "id,subject,customer_name,customer_email,category,priority,status,assigned_to,created_at,updated_at\n\
TKT-900,Meter offline,Huda,huda@example.sa,technical,urgent,open,,2025-01-05T09:00:00Z,2025-01-05T09:00:00Z\n";
        let tickets: Vec<SupportTicket> = read_records(Cursor::new(csv)).expect("tickets parse");

        assert_eq!(tickets[0].assigned_to, None);
        assert_eq!(tickets[0].priority, TicketPriority::Urgent);
        assert_eq!(tickets[0].status, TicketStatus::Open);
    }

    #[test]
    fn rejects_values_outside_the_enumerated_set() {
        let csv = "id,subject,customer_name,customer_email,category,priority,status,assigned_to,created_at,updated_at\n\
TKT-901,Broken,Huda,huda@example.sa,technical,apocalyptic,open,,2025-01-05T09:00:00Z,2025-01-05T09:00:00Z\n";
        let result: Result<Vec<SupportTicket>, _> = read_records(Cursor::new(csv));
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let loaded: Option<Vec<User>> =
            load_file(Path::new("./does-not-exist/users.csv")).expect("missing is fine");
        assert!(loaded.is_none());
    }

    fn to_csv<T: serde::Serialize>(records: &[T]) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for record in records {
            writer.serialize(record).expect("record serializes");
        }
        writer.into_inner().expect("writer flushes")
    }

    #[test]
    fn exported_fixtures_read_back_unchanged() {
        let users = crate::catalog::fixtures::users();
        let read: Vec<User> = read_records(Cursor::new(to_csv(&users))).expect("users parse");
        assert_eq!(read, users);

        let tickets = crate::catalog::fixtures::support_tickets();
        let read: Vec<SupportTicket> =
            read_records(Cursor::new(to_csv(&tickets))).expect("tickets parse");
        assert_eq!(read, tickets);
    }
}
