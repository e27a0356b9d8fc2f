//! Code emitter — validated DSL to target-platform source text.
//!
//! Dispatch is a closed match over `ExportFormat` with one renderer per tag.
//! Unknown format tags fail closed to JSON at the tag-parsing boundary
//! (`ExportFormat::from_tag_lenient`) — a deliberate policy, not an omission,
//! and a visible branch rather than an implicit fallthrough.
//!
//! Non-JSON renderers produce a syntactically valid, loadable skeleton for
//! the target platform, parameterized by the strategy's name and metadata.
//! They intentionally do not translate entries/exits/indicators into
//! target-language statements; that is a transpiler's job, not this core's.

mod json;
mod mql4;
mod mql5;
mod pine;
mod python;

use serde::{Deserialize, Serialize};

use crate::dsl::StrategyDsl;

/// Target output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Pine,
    Python,
    Mql4,
    Mql5,
}

impl ExportFormat {
    /// Strict tag parse, case-insensitive. `None` for unknown tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "pine" => Some(Self::Pine),
            "python" => Some(Self::Python),
            "mql4" => Some(Self::Mql4),
            "mql5" => Some(Self::Mql5),
            _ => None,
        }
    }

    /// Lenient tag parse: unknown tags fall closed to JSON.
    pub fn from_tag_lenient(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or(Self::Json)
    }

    /// Stable lowercase tag, matching the serde representation.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pine => "pine",
            Self::Python => "python",
            Self::Mql4 => "mql4",
            Self::Mql5 => "mql5",
        }
    }

    /// File-extension hint for downloadable artifacts.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Pine => "pine",
            Self::Python => "py",
            Self::Mql4 => "mq4",
            Self::Mql5 => "mq5",
        }
    }

    /// All formats in tag order.
    pub fn all() -> &'static [ExportFormat] {
        &[
            Self::Json,
            Self::Pine,
            Self::Python,
            Self::Mql4,
            Self::Mql5,
        ]
    }
}

/// Emitted source text plus its file-extension hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub code: String,
    pub extension: &'static str,
}

/// Emit source text for a validated DSL in the given format.
///
/// Pure: returns text, never touches the filesystem.
pub fn emit(dsl: &StrategyDsl, format: ExportFormat) -> Emitted {
    let code = match format {
        ExportFormat::Json => json::render(dsl),
        ExportFormat::Pine => pine::render(dsl),
        ExportFormat::Python => python::render(dsl),
        ExportFormat::Mql4 => mql4::render(dsl),
        ExportFormat::Mql5 => mql5::render(dsl),
    };
    Emitted {
        code,
        extension: format.extension(),
    }
}

/// Emit with a raw tag string, applying the fail-closed-to-JSON policy.
pub fn emit_tagged(dsl: &StrategyDsl, tag: &str) -> Emitted {
    emit(dsl, ExportFormat::from_tag_lenient(tag))
}
