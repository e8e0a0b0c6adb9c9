//! Demo command - run the annotated walkthrough

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use remarks_core::services::DemoService;

use crate::output;

pub fn run(json: bool) -> Result<ExitCode> {
    let report = DemoService::new().run()?;

    if json {
        output::json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Demo".bold());
    output::success(&format!(
        "User created: {} <{}>",
        report.user.name, report.user.email
    ));
    println!(
        "Discount for a {} order of {}: {:.2}",
        report.tier, report.amount, report.discount
    );
    Ok(ExitCode::SUCCESS)
}
