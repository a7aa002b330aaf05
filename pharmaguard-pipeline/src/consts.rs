/// Prefix of generated patient identifiers.
pub const PATIENT_ID_PREFIX: &str = "PG-";

/// Random characters after the prefix.
pub const PATIENT_ID_LEN: usize = 10;

/// Characters accepted between drug names in a request.
pub const DRUG_LIST_DELIMITERS: [char; 3] = [',', ';', '|'];

/// Environment variable naming a default config file for callers.
pub const PHARMAGUARD_CONFIG_ENV: &str = "PHARMAGUARD_CONFIG";
