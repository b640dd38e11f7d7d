//! Result table rendering

use crate::domain::entities::MatchResult;
use comfy_table::presets::ASCII_FULL;
use comfy_table::Table;

/// Column headers, in display order
pub const HEADERS: [&str; 11] = [
    "HashMatch",
    "ExtMatch",
    "PathMatch",
    "FileName",
    "FileType",
    "AbsPath",
    "FileSize",
    "LastModified",
    "LastAccess",
    "CreatedTime",
    "HASH",
];

/// Shown in the HASH column when no digest was computed
pub const DIGEST_SENTINEL: &str = "N/A";

pub fn verdict_label(matched: bool) -> &'static str {
    if matched {
        "yes"
    } else {
        "no"
    }
}

/// Cells of one row, aligned with [`HEADERS`]
pub fn row_cells(result: &MatchResult) -> [String; 11] {
    let meta = result.metadata();
    let verdict = result.verdict();

    [
        verdict_label(verdict.hash_match).to_string(),
        verdict_label(verdict.ext_match).to_string(),
        verdict_label(verdict.path_match).to_string(),
        meta.file_name().to_string(),
        meta.entry_type().to_string(),
        meta.absolute_path().display().to_string(),
        meta.size_bytes().to_string(),
        meta.modified_at(),
        meta.accessed_at(),
        meta.created_at(),
        meta.digest_hex().unwrap_or(DIGEST_SENTINEL).to_string(),
    ]
}

/// Builds the table; rows are rendered in the order given
pub fn render_matches(rows: &[MatchResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL).set_header(HEADERS);

    for row in rows {
        table.add_row(row_cells(row));
    }

    table
}
