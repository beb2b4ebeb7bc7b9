//! Machine-readable catalog export.
//!
//! Produces the JSON document behind the hosted error-reference page and a
//! JSON Schema for [`ErrorRecord`], so tooling outside Rust can consume the
//! catalog without parsing this crate. The document layout is versioned
//! separately from the SDK; consumers pin [`CATALOG_SCHEMA_VERSION`].

use std::fs;
use std::path::{Path, PathBuf};

use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};

use crate::catalog::{ErrorCategory, ErrorCode, ErrorRecord, RESERVED_CODES};
use crate::domain::ErrorDomain;

/// Version of the exported document layout, bumped on breaking changes.
pub const CATALOG_SCHEMA_VERSION: &str = "1.0";

/// One catalogued code in the export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogCode {
    pub code: i32,
    pub name: String,
    pub category: ErrorCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_message: Option<String>,
}

/// Category summary with its member codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CatalogCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub codes: Vec<i32>,
}

/// The reserved block of the SDK code space, exported so external tooling
/// can police the gap without hardcoding bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReservedRange {
    pub first: i32,
    pub last: i32,
}

/// The full export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Catalog {
    pub schema_version: String,
    pub sdk_version: String,
    /// Domain whose codes this document enumerates. Always the SDK domain;
    /// gateway and platform code spaces are owned elsewhere.
    pub domain: ErrorDomain,
    pub reserved: ReservedRange,
    pub categories: Vec<CatalogCategory>,
    pub codes: Vec<CatalogCode>,
}

/// Build the export document from the compiled-in catalog.
#[must_use]
pub fn generate_catalog() -> Catalog {
    let categories = ErrorCategory::all()
        .iter()
        .map(|category| CatalogCategory {
            id: category.as_str().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            codes: ErrorCode::all()
                .iter()
                .filter(|code| code.category() == *category)
                .map(|code| code.code())
                .collect(),
        })
        .collect();

    let codes = ErrorCode::all()
        .iter()
        .map(|code| CatalogCode {
            code: code.code(),
            name: code.name().to_string(),
            category: code.category(),
            message: code.message().to_string(),
            user_message: code.user_message().map(str::to_string),
        })
        .collect();

    Catalog {
        schema_version: CATALOG_SCHEMA_VERSION.to_string(),
        sdk_version: env!("CARGO_PKG_VERSION").to_string(),
        domain: ErrorDomain::Sdk,
        reserved: ReservedRange {
            first: *RESERVED_CODES.start(),
            last: *RESERVED_CODES.end(),
        },
        categories,
        codes,
    }
}

/// Files written by [`export_catalog`].
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub output_dir: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Write the catalog document and the record schema into `output_dir`,
/// creating it if needed.
pub fn export_catalog(output_dir: &Path) -> std::io::Result<ExportResult> {
    fs::create_dir_all(output_dir)?;
    let mut files = Vec::new();

    let catalog_path = output_dir.join("error-codes.json");
    fs::write(
        &catalog_path,
        serde_json::to_string_pretty(&generate_catalog())?,
    )?;
    files.push(catalog_path);

    let schema_path = output_dir.join("error-record.schema.json");
    fs::write(
        &schema_path,
        serde_json::to_string_pretty(&schema_for!(ErrorRecord))?,
    )?;
    files.push(schema_path);

    Ok(ExportResult {
        output_dir: output_dir.to_path_buf(),
        files,
    })
}
