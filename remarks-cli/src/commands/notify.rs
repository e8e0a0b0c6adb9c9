//! Notify command - send a notification to a user

use std::process::ExitCode;

use anyhow::Result;

use super::get_context;

pub fn run(user_id: i64, message: &str) -> Result<ExitCode> {
    let mut ctx = get_context()?;
    ctx.notification_service.notify_user(user_id, message)?;
    Ok(ExitCode::SUCCESS)
}
