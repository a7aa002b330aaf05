//! Header handling: `##INFO` meta lines configure how INFO values are tokenized.

use fxhash::FxHashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use crate::consts::INFO_META_PREFIX;
use crate::error::{ParseError, Result};

/// The `Number=` attribute of an INFO definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoNumber {
    Count(usize),
    /// `A`: one value per ALT allele
    PerAltAllele,
    /// `R`: one value per allele, REF included
    PerAllele,
    /// `G`: one value per genotype
    PerGenotype,
    /// `.`
    Unbounded,
}

impl FromStr for InfoNumber {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "A" => Ok(InfoNumber::PerAltAllele),
            "R" => Ok(InfoNumber::PerAllele),
            "G" => Ok(InfoNumber::PerGenotype),
            "." => Ok(InfoNumber::Unbounded),
            n => n
                .parse::<usize>()
                .map(InfoNumber::Count)
                .map_err(|_| format!("unsupported Number '{}'", n)),
        }
    }
}

/// The `Type=` attribute of an INFO definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoType {
    Integer,
    Float,
    Flag,
    Character,
    String,
}

impl FromStr for InfoType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Integer" => Ok(InfoType::Integer),
            "Float" => Ok(InfoType::Float),
            "Flag" => Ok(InfoType::Flag),
            "Character" => Ok(InfoType::Character),
            "String" => Ok(InfoType::String),
            t => Err(format!("unsupported Type '{}'", t)),
        }
    }
}

impl Display for InfoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InfoType::Integer => "Integer",
            InfoType::Float => "Float",
            InfoType::Flag => "Flag",
            InfoType::Character => "Character",
            InfoType::String => "String",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoDefinition {
    pub id: String,
    pub number: InfoNumber,
    pub info_type: InfoType,
}

impl InfoDefinition {
    /// Undeclared keys are read as `Number=.,Type=String`.
    pub fn undeclared(id: &str) -> Self {
        InfoDefinition {
            id: id.to_string(),
            number: InfoNumber::Unbounded,
            info_type: InfoType::String,
        }
    }
}

///
/// InfoSchema struct, the INFO grammar assembled from a file's header lines.
///
#[derive(Debug, Clone, Default)]
pub struct InfoSchema {
    definitions: FxHashMap<String, InfoDefinition>,
}

impl InfoSchema {
    ///
    /// Build the schema from header lines.
    ///
    /// # Arguments
    /// - lines: `(line_number, text)` pairs of every line starting with `#`
    ///
    /// # Returns
    /// - the schema, or the first malformed `##INFO` line
    pub fn from_header_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut schema = InfoSchema::default();
        for (line_no, line) in lines {
            if let Some(body) = line.strip_prefix(INFO_META_PREFIX) {
                let definition = parse_info_definition(body).map_err(|reason| {
                    ParseError::MalformedHeader {
                        line: line_no,
                        reason,
                    }
                })?;
                schema
                    .definitions
                    .insert(definition.id.clone(), definition);
            }
        }
        Ok(schema)
    }

    pub fn get(&self, id: &str) -> Option<&InfoDefinition> {
        self.definitions.get(id)
    }

    /// Declared definition, or the `Number=.,Type=String` default.
    pub fn definition_for(&self, id: &str) -> InfoDefinition {
        self.get(id)
            .cloned()
            .unwrap_or_else(|| InfoDefinition::undeclared(id))
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Parse the `<ID=..,Number=..,Type=..,Description="..">` part of an `##INFO` line.
fn parse_info_definition(body: &str) -> std::result::Result<InfoDefinition, String> {
    let inner = body
        .trim()
        .strip_prefix('<')
        .and_then(|b| b.strip_suffix('>'))
        .ok_or_else(|| "expected a <...> block".to_string())?;

    let mut id = None;
    let mut number = InfoNumber::Unbounded;
    let mut info_type = InfoType::String;

    for (key, value) in split_meta_fields(inner)? {
        match key.as_str() {
            "ID" => id = Some(value),
            "Number" => number = value.parse()?,
            "Type" => info_type = value.parse()?,
            _ => {}
        }
    }

    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| "missing ID".to_string())?;

    Ok(InfoDefinition {
        id,
        number,
        info_type,
    })
}

/// Split `key=value` pairs on commas that are not inside a quoted string.
fn split_meta_fields(inner: &str) -> std::result::Result<Vec<(String, String)>, String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        match c {
            // escaped character, e.g. \" inside a Description
            '\\' => {
                current.push(c);
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    if in_quotes {
        return Err("unterminated quoted string".to_string());
    }
    if !current.is_empty() {
        fields.push(current);
    }

    fields
        .into_iter()
        .map(|field| {
            let (key, value) = field
                .split_once('=')
                .ok_or_else(|| format!("attribute '{}' has no value", field))?;
            Ok((key.trim().to_string(), value.trim().trim_matches('"').to_string()))
        })
        .collect()
}
