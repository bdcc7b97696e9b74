//! Pattern classification for route folder names
//!
//! Pure functional parsing of bracket syntax into typed segment kinds.
//! The folder token itself is never rewritten; the host router understands it verbatim.

use serde::Serialize;

/// What a single folder name matches
///
/// # Examples
///
/// ```
/// use trellis_router::segment::pattern::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about"), SegmentKind::Static);
/// assert!(matches!(classify_segment("[id]"), SegmentKind::Dynamic { .. }));
/// assert!(matches!(classify_segment("[id?]"), SegmentKind::OptionalDynamic { .. }));
/// assert!(matches!(classify_segment("[...slug]"), SegmentKind::CatchAll { .. }));
/// assert!(matches!(classify_segment("[[...slug]]"), SegmentKind::OptionalCatchAll { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SegmentKind {
    /// Literal text
    Static,
    /// `[param]`
    Dynamic { param: String },
    /// `[param?]`
    OptionalDynamic { param: String },
    /// `[...param]`
    CatchAll { param: String },
    /// `[[...param]]`
    OptionalCatchAll { param: String },
}

/// Matching shape of a segment, used to detect competing dynamic siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentSlot {
    Literal,
    Param,
    Splat,
}

impl SegmentKind {
    /// True for every bracketed variant
    pub fn is_dynamic(&self) -> bool {
        !matches!(self, SegmentKind::Static)
    }

    /// Parameter name bound by this segment
    pub fn param(&self) -> Option<&str> {
        match self {
            SegmentKind::Static => None,
            SegmentKind::Dynamic { param }
            | SegmentKind::OptionalDynamic { param }
            | SegmentKind::CatchAll { param }
            | SegmentKind::OptionalCatchAll { param } => Some(param),
        }
    }

    /// Matching shape: one literal segment, one parameter segment, or the remainder
    pub fn slot(&self) -> SegmentSlot {
        match self {
            SegmentKind::Static => SegmentSlot::Literal,
            SegmentKind::Dynamic { .. } | SegmentKind::OptionalDynamic { .. } => SegmentSlot::Param,
            SegmentKind::CatchAll { .. } | SegmentKind::OptionalCatchAll { .. } => SegmentSlot::Splat,
        }
    }
}

/// Classifies a folder name (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Optional catch-all**: `[[...name]]`
/// 2. **Catch-all**: `[...name]`
/// 3. **Optional param**: `[name?]`
/// 4. **Required param**: `[name]`
/// 5. **Static**: anything else, including empty brackets
pub fn classify_segment(segment: &str) -> SegmentKind {
    if let Some(param) = segment
        .strip_prefix("[[...")
        .and_then(|s| s.strip_suffix("]]"))
        .filter(|p| !p.is_empty())
    {
        return SegmentKind::OptionalCatchAll {
            param: param.to_string(),
        };
    }

    match segment
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .filter(|inner| !inner.is_empty())
    {
        Some(inner) => {
            if let Some(param) = inner.strip_prefix("...") {
                return SegmentKind::CatchAll {
                    param: param.to_string(),
                };
            }

            if let Some(param) = inner.strip_suffix('?') {
                return SegmentKind::OptionalDynamic {
                    param: param.to_string(),
                };
            }

            SegmentKind::Dynamic {
                param: inner.to_string(),
            }
        }
        None => SegmentKind::Static,
    }
}

/// Whether a folder name is a route group: `(marketing)`
///
/// Groups organize files without adding a URL segment.
pub fn is_group(segment: &str) -> bool {
    segment.len() > 2 && segment.starts_with('(') && segment.ends_with(')')
}
