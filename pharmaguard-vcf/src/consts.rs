/// Minimum number of tab-delimited columns on a data line (CHROM..INFO).
pub const MIN_DATA_COLUMNS: usize = 8;

pub const CHROM_COL: usize = 0;
pub const POS_COL: usize = 1;
pub const ID_COL: usize = 2;
pub const REF_COL: usize = 3;
pub const ALT_COL: usize = 4;
pub const INFO_COL: usize = 7;

/// Placeholder for an absent value in any VCF column.
pub const MISSING_VALUE: &str = ".";

pub const HEADER_PREFIX: char = '#';
pub const INFO_META_PREFIX: &str = "##INFO=";

// INFO keys of the curated pharmacogenomic dialect
pub const GENE_KEY: &str = "GENE";
pub const STAR_KEY: &str = "STAR";
pub const RS_KEY: &str = "RS";

/// First two bytes of any gzip (and therefore bgzf) stream.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
