mod catalog;
mod cli;
mod output;
mod property;

use inmo::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
