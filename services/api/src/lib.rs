mod cli;
mod console;
mod infra;
mod routes;
mod server;

use solar_admin::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
