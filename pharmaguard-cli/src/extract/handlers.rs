use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use pharmaguard_core::VariantRecord;
use pharmaguard_vcf::{extract_variants, read_vcf_file};

const TSV_HEADER: &str = "#chrom\tpos\trsid\tref\talt\tgene\tstar";

fn write_records<W: Write>(out: &mut W, records: &[VariantRecord]) -> io::Result<()> {
    writeln!(out, "{}", TSV_HEADER)?;
    for record in records {
        writeln!(out, "{}", record.as_string())?;
    }
    Ok(())
}

pub fn run_extract(matches: &ArgMatches) -> Result<()> {
    let vcf_path = matches
        .get_one::<String>("vcf")
        .context("--vcf is required")?;
    let output_path = matches.get_one::<String>("output");

    let content = read_vcf_file(vcf_path)
        .with_context(|| format!("Failed to read VCF file: {}", vcf_path))?;
    let extraction = extract_variants(&content)
        .with_context(|| format!("Failed to parse VCF file: {}", vcf_path))?;

    eprintln!(
        "{} variants extracted from {} data lines ({} skipped)",
        extraction.records.len(),
        extraction.data_lines,
        extraction.dropped
    );

    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            write_records(&mut file, &extraction.records)?;
            eprintln!("Output written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_records(&mut out, &extraction.records)?;
        }
    }

    Ok(())
}
