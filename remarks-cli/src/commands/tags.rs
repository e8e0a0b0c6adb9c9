//! Tags command - list the known marker tags

use std::process::ExitCode;

use anyhow::Result;
use remarks_core::AnnotationTag;

use crate::output;

pub fn run(json: bool) -> Result<ExitCode> {
    if json {
        let tags: Vec<_> = AnnotationTag::KNOWN
            .iter()
            .map(|tag| {
                serde_json::json!({
                    "tag": tag.name(),
                    "severity": tag.severity(),
                    "description": tag.description(),
                })
            })
            .collect();
        output::json(&tags)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut table = output::create_table();
    table.set_header(vec!["Marker", "Meaning"]);
    for tag in AnnotationTag::KNOWN.iter() {
        table.add_row(vec![
            output::severity_label(&format!("//;@{}:", tag.name()), tag.severity()).to_string(),
            tag.description().to_string(),
        ]);
    }
    println!("{}", table);
    println!("Plain comments use //; (or ##; in Python). A //;@ line without a tag continues the one above.");
    Ok(ExitCode::SUCCESS)
}
