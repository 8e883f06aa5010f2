use crate::console::{run_dashboard, run_list, DashboardArgs, ListArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use solar_admin::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Solar Marketplace Admin",
    about = "Serve or inspect the solar marketplace admin datasets from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Filter, sort and page one admin dataset
    List(ListArgs),
    /// Print the dashboard summary
    Dashboard(DashboardArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::List(args) => run_list(args),
        Command::Dashboard(args) => run_dashboard(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_admin::DatasetKind;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["solar-admin-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn list_accepts_repeated_filters() {
        let cli = Cli::try_parse_from([
            "solar-admin-api",
            "list",
            "bnpl-applications",
            "--filter",
            "status=pending",
            "--filter",
            "risk_level=low",
            "--sort",
            "requested_amount",
            "--desc",
            "--page-size",
            "2",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.dataset, DatasetKind::BnplApplications);
                assert_eq!(
                    args.filters,
                    vec![
                        ("status".to_string(), "pending".to_string()),
                        ("risk_level".to_string(), "low".to_string())
                    ]
                );
                assert!(args.desc);
                assert_eq!(args.page_size, Some(2));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn list_rejects_unknown_datasets_and_bare_filters() {
        assert!(Cli::try_parse_from(["solar-admin-api", "list", "invoices"]).is_err());
        assert!(
            Cli::try_parse_from(["solar-admin-api", "list", "users", "--filter", "status"])
                .is_err()
        );
    }

    #[test]
    fn list_refuses_filters_that_shadow_listing_options() {
        for filter in ["lang=ar", "search=panel", "page=3"] {
            let parsed = Cli::try_parse_from([
                "solar-admin-api",
                "list",
                "users",
                "--filter",
                filter,
            ]);
            assert!(parsed.is_err(), "{filter} should be refused");
        }
    }
}
