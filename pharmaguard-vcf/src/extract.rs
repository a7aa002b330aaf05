//! Variant extraction over an in-memory VCF buffer.
//!
//! Header lines are collected first and turned into an [`InfoSchema`]; data lines
//! are then tokenized against it. Records missing any of GENE, STAR, an rsID,
//! CHROM, REF or ALT are dropped silently. Structural errors are fatal.

use log::{debug, info};

use pharmaguard_core::VariantRecord;

use crate::consts::*;
use crate::error::{ParseError, Result};
use crate::header::InfoSchema;
use crate::info::InfoField;

/// Output of [`extract_variants`]: the kept records plus counters for quality metrics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantExtraction {
    /// Records in file order.
    pub records: Vec<VariantRecord>,
    /// Header lines, as written.
    pub header: Vec<String>,
    /// Non-empty data lines seen.
    pub data_lines: usize,
    /// Data lines that did not carry a complete pharmacogenomic annotation.
    pub dropped: usize,
}

impl VariantExtraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

///
/// Extract pharmacogenomic variant records from a VCF buffer.
///
/// # Arguments
/// - content: raw bytes of the VCF file
///
/// # Returns
/// - the extracted records, or the first structural error in the file
pub fn extract_variants(content: &[u8]) -> Result<VariantExtraction> {
    let text = std::str::from_utf8(content)?;
    let normalized = text.replace("\r\n", "\n");

    // line numbers are 1-based for error messages
    let lines: Vec<(usize, &str)> = normalized
        .split('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect();

    let header_lines: Vec<(usize, &str)> = lines
        .iter()
        .copied()
        .filter(|(_, line)| line.starts_with(HEADER_PREFIX))
        .collect();
    let schema = InfoSchema::from_header_lines(header_lines.iter().copied())?;
    debug!(
        "VCF header: {} lines, {} INFO definitions",
        header_lines.len(),
        schema.len()
    );

    let mut extraction = VariantExtraction {
        header: header_lines.iter().map(|(_, l)| l.to_string()).collect(),
        ..Default::default()
    };

    for (line_no, line) in lines {
        if line.is_empty() || line.starts_with(HEADER_PREFIX) {
            continue;
        }
        extraction.data_lines += 1;

        match parse_data_line(line, line_no, &schema)? {
            Some(record) => extraction.records.push(record),
            None => {
                debug!("Line {}: no complete GENE/STAR annotation, skipping", line_no);
                extraction.dropped += 1;
            }
        }
    }

    info!(
        "Extracted {} pharmacogenomic variants from {} data lines ({} skipped)",
        extraction.records.len(),
        extraction.data_lines,
        extraction.dropped
    );

    Ok(extraction)
}

/// Column value, or `None` for an empty column or the `.` placeholder.
fn present(value: &str) -> Option<&str> {
    let value = value.trim();
    if value.is_empty() || value == MISSING_VALUE {
        None
    } else {
        Some(value)
    }
}

/// First entry of a delimited column, if present.
fn first_of(value: &str, delimiter: char) -> Option<&str> {
    present(value).and_then(|v| v.split(delimiter).next()).and_then(present)
}

///
/// Tokenize one data line. `Ok(None)` means the line is well formed but
/// lacks something a [`VariantRecord`] needs.
///
fn parse_data_line(line: &str, line_no: usize, schema: &InfoSchema) -> Result<Option<VariantRecord>> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_DATA_COLUMNS {
        return Err(ParseError::MissingColumns {
            line: line_no,
            found: fields.len(),
        });
    }

    let position = fields[POS_COL]
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|pos| *pos >= 1)
        .ok_or_else(|| ParseError::InvalidPosition {
            line: line_no,
            value: fields[POS_COL].to_string(),
        })?;

    let info = InfoField::parse(fields[INFO_COL].trim(), schema, line_no)?;

    let gene = info.first(GENE_KEY);
    let star = info.first(STAR_KEY);
    let rsid = first_of(fields[ID_COL], ';').or_else(|| info.first(RS_KEY));
    let chromosome = present(fields[CHROM_COL]);
    let ref_allele = present(fields[REF_COL]);
    let alt_allele = first_of(fields[ALT_COL], ',');

    let (
        Some(gene),
        Some(star),
        Some(rsid),
        Some(chromosome),
        Some(ref_allele),
        Some(alt_allele),
    ) = (gene, star, rsid, chromosome, ref_allele, alt_allele)
    else {
        return Ok(None);
    };

    Ok(Some(VariantRecord {
        chromosome: chromosome.to_string(),
        position,
        rsid: rsid.to_string(),
        ref_allele: ref_allele.to_string(),
        alt_allele: alt_allele.to_string(),
        gene: gene.to_string(),
        star: star.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    const HEADER: &str = "##fileformat=VCFv4.2\n\
        ##INFO=<ID=GENE,Number=1,Type=String,Description=\"Gene symbol\">\n\
        ##INFO=<ID=STAR,Number=1,Type=String,Description=\"Star allele\">\n\
        ##INFO=<ID=RS,Number=1,Type=String,Description=\"dbSNP id\">\n\
        ##INFO=<ID=DP,Number=1,Type=Integer,Description=\"Depth\">\n\
        #CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

    fn vcf(body: &str) -> Vec<u8> {
        format!("{}{}", HEADER, body).into_bytes()
    }

    #[rstest]
    fn test_extract_basic_records() {
        let content = vcf(
            "chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4\n\
             chr22\t42126611\trs1065852\tC\tT\t.\tPASS\tGENE=CYP2D6;STAR=*10\n",
        );
        let extraction = extract_variants(&content).unwrap();

        assert_eq!(extraction.records.len(), 2);
        assert_eq!(extraction.data_lines, 2);
        assert_eq!(extraction.dropped, 0);
        assert_eq!(extraction.header.len(), 6);

        let first = &extraction.records[0];
        assert_eq!(first.chromosome, "chr22");
        assert_eq!(first.position, 42130692);
        assert_eq!(first.rsid, "rs3892097");
        assert_eq!(first.ref_allele, "G");
        assert_eq!(first.alt_allele, "A");
        assert_eq!(first.gene, "CYP2D6");
        assert_eq!(first.star, "*4");
        assert_eq!(extraction.records[1].star, "*10");
    }

    #[rstest]
    fn test_crlf_line_endings() {
        let content = vcf("chr10\t94781859\trs4244285\tG\tA\t.\tPASS\tGENE=CYP2C19;STAR=*2\n");
        let content = String::from_utf8(content).unwrap().replace('\n', "\r\n");
        let extraction = extract_variants(content.as_bytes()).unwrap();

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].star, "*2");
        assert!(extraction.header.iter().all(|h| !h.ends_with('\r')));
    }

    #[rstest]
    fn test_first_alt_and_first_id() {
        let content = vcf("chr10\t96741053\trs1799853;rs000\tC\tT,G\t.\tPASS\tGENE=CYP2C9;STAR=*2\n");
        let extraction = extract_variants(&content).unwrap();
        let record = &extraction.records[0];

        assert_eq!(record.rsid, "rs1799853");
        assert_eq!(record.alt_allele, "T");
    }

    #[rstest]
    fn test_rsid_falls_back_to_info() {
        let content = vcf("chr12\t21178615\t.\tT\tC\t.\tPASS\tGENE=SLCO1B1;STAR=*5;RS=rs4149056\n");
        let extraction = extract_variants(&content).unwrap();

        assert_eq!(extraction.records[0].rsid, "rs4149056");
    }

    #[rstest]
    #[case::no_gene("chr6\t18130918\trs1142345\tT\tC\t.\tPASS\tSTAR=*3C")]
    #[case::no_star("chr6\t18130918\trs1142345\tT\tC\t.\tPASS\tGENE=TPMT")]
    #[case::no_rsid("chr6\t18130918\t.\tT\tC\t.\tPASS\tGENE=TPMT;STAR=*3C")]
    #[case::no_chrom(".\t18130918\trs1142345\tT\tC\t.\tPASS\tGENE=TPMT;STAR=*3C")]
    #[case::no_ref("chr6\t18130918\trs1142345\t.\tC\t.\tPASS\tGENE=TPMT;STAR=*3C")]
    #[case::no_alt("chr6\t18130918\trs1142345\tT\t.\t.\tPASS\tGENE=TPMT;STAR=*3C")]
    #[case::empty_info("chr6\t18130918\trs1142345\tT\tC\t.\tPASS\t.")]
    fn test_incomplete_records_are_dropped(#[case] line: &str) {
        let extraction = extract_variants(&vcf(line)).unwrap();
        assert!(extraction.is_empty());
        assert_eq!(extraction.data_lines, 1);
        assert_eq!(extraction.dropped, 1);
    }

    #[rstest]
    fn test_headers_only() {
        let extraction = extract_variants(HEADER.as_bytes()).unwrap();
        assert!(extraction.is_empty());
        assert_eq!(extraction.data_lines, 0);
    }

    #[rstest]
    fn test_empty_buffer() {
        let extraction = extract_variants(b"").unwrap();
        assert_eq!(extraction, VariantExtraction::default());
    }

    #[rstest]
    fn test_too_few_columns_is_fatal() {
        let content = vcf(
            "chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4\n\
             chr22\t42126611\trs1065852\tC\n",
        );
        let err = extract_variants(&content).unwrap_err();
        assert!(matches!(err, ParseError::MissingColumns { line: 8, found: 4 }));
    }

    #[rstest]
    #[case("forty")]
    #[case("0")]
    #[case("-3")]
    fn test_bad_position_is_fatal(#[case] pos: &str) {
        let line = format!("chr22\t{}\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4", pos);
        let err = extract_variants(&vcf(&line)).unwrap_err();
        match err {
            ParseError::InvalidPosition { line, value } => {
                assert_eq!(line, 7);
                assert_eq!(value, pos);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_non_numeric_depth_still_extracts() {
        let content = vcf("chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4;DP=NA\n");
        let extraction = extract_variants(&content).unwrap();

        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].star, "*4");
        assert_eq!(extraction.dropped, 0);
    }

    #[rstest]
    fn test_multi_valued_star_takes_first() {
        let content = vcf("chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=*4,*10\n");
        let extraction = extract_variants(&content).unwrap();
        assert_eq!(extraction.records[0].star, "*4");
    }

    #[rstest]
    fn test_encoded_star_label_is_decoded() {
        let content = vcf("chr22\t42130692\trs3892097\tG\tA\t.\tPASS\tGENE=CYP2D6;STAR=%2A4\n");
        let extraction = extract_variants(&content).unwrap();
        assert_eq!(extraction.records[0].star, "*4");
    }

    #[rstest]
    fn test_invalid_utf8_is_fatal() {
        let err = extract_variants(&[0x23, 0xFF, 0xFE, 0x0A]).unwrap_err();
        assert!(matches!(err, ParseError::InvalidUtf8(_)));
    }
}
