use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

use pharmaguard_narrative::utils::apply_env;
use pharmaguard_pipeline::consts::PHARMAGUARD_CONFIG_ENV;
use pharmaguard_pipeline::{AnalysisRequest, Pipeline, PipelineConfig};
use pharmaguard_vcf::read_vcf_file;

/// `--config` wins over the environment variable.
fn config_path(arg: Option<&String>, from_env: Option<String>) -> Option<PathBuf> {
    arg.cloned()
        .or(from_env)
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

fn load_config(path: Option<&Path>, no_narrative: bool) -> Result<PipelineConfig> {
    let mut config = match path {
        Some(path) => PipelineConfig::try_from(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => PipelineConfig::default(),
    };

    apply_env(&mut config.narrative);
    if no_narrative {
        config.narrative.enabled = false;
    }

    Ok(config)
}

pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let vcf_path = matches
        .get_one::<String>("vcf")
        .context("--vcf is required")?;
    let drugs = matches
        .get_one::<String>("drugs")
        .context("--drugs is required")?;
    let patient_id = matches.get_one::<String>("patient-id");
    let output_path = matches.get_one::<String>("output");

    let config_path = config_path(
        matches.get_one::<String>("config"),
        env::var(PHARMAGUARD_CONFIG_ENV).ok(),
    );
    let config = load_config(config_path.as_deref(), matches.get_flag("no-narrative"))?;
    let pipeline = Pipeline::from_config(&config)?;

    let vcf = read_vcf_file(vcf_path)
        .with_context(|| format!("Failed to read VCF file: {}", vcf_path))?;

    let mut request = AnalysisRequest::new(vcf, drugs);
    if let Some(id) = patient_id {
        request = request.with_patient_id(id.as_str());
    }

    eprintln!(
        "Analyzing {} for {} drug(s){}...",
        vcf_path,
        request.drugs.len(),
        if pipeline.has_narrator() {
            " with narratives"
        } else {
            ""
        }
    );

    let result = pipeline.analyze(&request).context("Analysis rejected")?;

    eprintln!(
        "{} genes annotated, {} variants extracted, {} records skipped",
        result.quality_metrics.genes_annotated,
        result.quality_metrics.variants_extracted,
        result.quality_metrics.records_dropped
    );

    let json = serde_json::to_string_pretty(&result)?;
    match output_path {
        Some(p) => {
            let mut file = File::create(Path::new(p))
                .with_context(|| format!("Failed to create output file: {}", p))?;
            writeln!(file, "{}", json)?;
            eprintln!("Output written to {}", p);
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            writeln!(out, "{}", json)?;
        }
    }

    Ok(())
}
