use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::consts::GZIP_MAGIC;
use crate::error::Result;

///
/// Read a VCF file into memory, transparently decompressing gzip/bgzf.
///
/// Compression is detected from the gzip magic bytes rather than the file
/// extension, so a `.vcf.gz` upload that was renamed still loads.
///
/// # Arguments
/// - path: path to a `.vcf`, `.vcf.gz` or `.vcf.bgz` file
///
/// # Returns
/// - the uncompressed file contents
pub fn read_vcf_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let capacity = 256 * 1024; // 256KB buffer for large VCF files
    let mut reader = BufReader::with_capacity(capacity, File::open(path)?);

    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;

    if raw.starts_with(&GZIP_MAGIC) {
        debug!("{} is gzip compressed", path.display());
        let mut decoded = Vec::new();
        MultiGzDecoder::new(&raw[..]).read_to_end(&mut decoded)?;
        Ok(decoded)
    } else {
        Ok(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CONTENT: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

    #[rstest]
    fn test_read_plain_vcf() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CONTENT.as_bytes()).unwrap();

        let bytes = read_vcf_file(file.path()).unwrap();
        assert_eq!(bytes, CONTENT.as_bytes());
    }

    #[rstest]
    fn test_read_gzipped_vcf() {
        let mut file = NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(CONTENT.as_bytes()).unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();

        let bytes = read_vcf_file(file.path()).unwrap();
        assert_eq!(bytes, CONTENT.as_bytes());
    }

    #[rstest]
    fn test_missing_file() {
        let result = read_vcf_file("does/not/exist.vcf");
        assert!(matches!(result, Err(crate::ParseError::Io(_))));
    }
}
