mod cli;
mod completion;
mod infra;
mod routes;
mod server;

use csn_profile::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
