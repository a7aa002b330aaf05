use std::io::{self, Write};

use anyhow::Result;

use pharmaguard_core::Drug;

fn drug_table() -> Vec<String> {
    Drug::ALL
        .iter()
        .map(|drug| format!("{}\t{}", drug.as_str(), drug.primary_gene()))
        .collect()
}

pub fn run_drugs() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in drug_table() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
