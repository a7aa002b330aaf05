use clap::{Arg, ArgAction, Command};

pub const ANALYZE_CMD: &str = "analyze";

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Annotate a VCF and classify drug risk. Outputs the analysis result as JSON.")
        .arg(
            Arg::new("vcf")
                .long("vcf")
                .required(true)
                .help("Input VCF file (.vcf or .vcf.gz)"),
        )
        .arg(
            Arg::new("drugs")
                .long("drugs")
                .required(true)
                .help("Drugs to evaluate, separated by commas, semicolons, pipes or spaces"),
        )
        .arg(
            Arg::new("patient-id")
                .long("patient-id")
                .required(false)
                .help("Existing session token to reuse as the patient identifier"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .required(false)
                .help("TOML config file (default: $PHARMAGUARD_CONFIG if set)"),
        )
        .arg(
            Arg::new("no-narrative")
                .long("no-narrative")
                .action(ArgAction::SetTrue)
                .help("Skip narrative explanations even if credentials are configured"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Output JSON file (default: stdout)"),
        )
}
