//! Upper command - upper-case each argument

use std::process::ExitCode;

use anyhow::Result;
use remarks_core::services::uppercase_all;

use crate::output;

pub fn run(items: &[String], json: bool) -> Result<ExitCode> {
    let upper = uppercase_all(items);

    if json {
        output::json(&upper)?;
    } else {
        for item in &upper {
            println!("{}", item);
        }
    }

    Ok(ExitCode::SUCCESS)
}
