use clap::{Arg, Command};

pub const EXTRACT_CMD: &str = "extract";

pub fn create_extract_cli() -> Command {
    Command::new(EXTRACT_CMD)
        .about("Extract GENE/STAR annotated variants from a VCF. Outputs TSV (chrom, pos, rsid, ref, alt, gene, star).")
        .arg(
            Arg::new("vcf")
                .long("vcf")
                .required(true)
                .help("Input VCF file (.vcf or .vcf.gz)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .required(false)
                .help("Output TSV file (default: stdout)"),
        )
}
