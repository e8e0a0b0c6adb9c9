//! Comment annotation markers
//!
//! Team convention for comments:
//!
//! ```text
//! //; explains what the code does          (plain marker)
//! //;@TODO: something left to do           (tagged marker)
//! //;@continues the tagged line above      (continuation)
//! ```
//!
//! `##;` is the same marker for `#`-comment languages, and `// ;` is what
//! gofmt turns `//;` into on doc comments. A marker may trail code on the
//! same line.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

fn marker_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?://\s?|##);").expect("marker regex is valid"))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z][A-Z0-9_]*)\s*:\s*(.*)$").expect("tag regex is valid"))
}

/// How loudly a tag should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// The word in a `;@TAG:` marker
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnotationTag {
    Todo,
    Fixme,
    Note,
    Hack,
    Optimize,
    Debug,
    Deprecated,
    Xxx,
    Error,
    Other(String),
}

impl AnnotationTag {
    /// Tags with an agreed meaning, in the order they are documented
    pub const KNOWN: [AnnotationTag; 9] = [
        AnnotationTag::Todo,
        AnnotationTag::Fixme,
        AnnotationTag::Note,
        AnnotationTag::Hack,
        AnnotationTag::Optimize,
        AnnotationTag::Debug,
        AnnotationTag::Deprecated,
        AnnotationTag::Xxx,
        AnnotationTag::Error,
    ];

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "TODO" => AnnotationTag::Todo,
            "FIXME" => AnnotationTag::Fixme,
            "NOTE" => AnnotationTag::Note,
            "HACK" => AnnotationTag::Hack,
            "OPTIMIZE" => AnnotationTag::Optimize,
            "DEBUG" => AnnotationTag::Debug,
            "DEPRECATED" => AnnotationTag::Deprecated,
            "XXX" => AnnotationTag::Xxx,
            "ERROR" => AnnotationTag::Error,
            other => AnnotationTag::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AnnotationTag::Todo => "TODO",
            AnnotationTag::Fixme => "FIXME",
            AnnotationTag::Note => "NOTE",
            AnnotationTag::Hack => "HACK",
            AnnotationTag::Optimize => "OPTIMIZE",
            AnnotationTag::Debug => "DEBUG",
            AnnotationTag::Deprecated => "DEPRECATED",
            AnnotationTag::Xxx => "XXX",
            AnnotationTag::Error => "ERROR",
            AnnotationTag::Other(name) => name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AnnotationTag::Todo => "work that still has to be done",
            AnnotationTag::Fixme => "known defect that must be fixed",
            AnnotationTag::Note => "something a reader should pay attention to",
            AnnotationTag::Hack => "temporary workaround to be replaced",
            AnnotationTag::Optimize => "correct but slower than it should be",
            AnnotationTag::Debug => "debugging aid to remove before release",
            AnnotationTag::Deprecated => "scheduled for removal, use the replacement",
            AnnotationTag::Xxx => "serious problem needing urgent attention",
            AnnotationTag::Error => "error condition reported to the user",
            AnnotationTag::Other(_) => "team-specific tag",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            AnnotationTag::Fixme | AnnotationTag::Hack | AnnotationTag::Xxx | AnnotationTag::Error => {
                Severity::Critical
            }
            AnnotationTag::Todo | AnnotationTag::Optimize | AnnotationTag::Deprecated => {
                Severity::Warning
            }
            AnnotationTag::Note | AnnotationTag::Debug | AnnotationTag::Other(_) => Severity::Info,
        }
    }
}

impl fmt::Display for AnnotationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<String> for AnnotationTag {
    fn from(name: String) -> Self {
        AnnotationTag::from_name(&name)
    }
}

impl From<AnnotationTag> for String {
    fn from(tag: AnnotationTag) -> Self {
        tag.name().to_string()
    }
}

/// A single marker comment found on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Plain(String),
    Tagged { tag: AnnotationTag, text: String },
    Continuation(String),
}

/// Parse the marker comment on a line, if there is one
///
/// A prefix that sits inside a string literal on that line is not a marker.
pub fn parse_marker(line: &str) -> Option<Marker> {
    let prefix = marker_re()
        .find_iter(line)
        .find(|m| !inside_string(&line[..m.start()]))?;
    let rest = &line[prefix.end()..];

    let Some(body) = rest.strip_prefix('@') else {
        return Some(Marker::Plain(rest.trim().to_string()));
    };
    let body = body.trim();

    match tag_re().captures(body) {
        Some(tag_caps) => Some(Marker::Tagged {
            tag: AnnotationTag::from_name(&tag_caps[1]),
            text: tag_caps[2].trim().to_string(),
        }),
        None => Some(Marker::Continuation(body.to_string())),
    }
}

/// True when `before` leaves a `"` string literal open
fn inside_string(before: &str) -> bool {
    let mut open = false;
    let mut escaped = false;
    for c in before.chars() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' if open => escaped = true,
            '"' => open = !open,
            _ => {}
        }
    }
    open
}

/// A tagged marker located in a file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub path: PathBuf,
    /// 1-based line of the tagged marker
    pub line: usize,
    pub tag: AnnotationTag,
    pub text: String,
}

/// Collect every tagged marker in `source`
///
/// Continuation lines directly below a tagged marker are appended to its
/// text. A continuation with no tagged marker right above it is dropped.
pub fn extract_annotations(path: &Path, source: &str) -> Vec<Annotation> {
    let mut annotations: Vec<Annotation> = Vec::new();
    // line number of the marker the next continuation may extend
    let mut open_line: Option<usize> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;

        match parse_marker(raw) {
            Some(Marker::Tagged { tag, text }) => {
                annotations.push(Annotation {
                    path: path.to_path_buf(),
                    line: line_no,
                    tag,
                    text,
                });
                open_line = Some(line_no);
            }
            Some(Marker::Continuation(text)) => {
                let extends_previous = open_line == Some(line_no - 1);
                match annotations.last_mut() {
                    Some(last) if extends_previous => {
                        if !text.is_empty() {
                            if !last.text.is_empty() {
                                last.text.push(' ');
                            }
                            last.text.push_str(&text);
                        }
                        open_line = Some(line_no);
                    }
                    _ => {
                        tracing::trace!(path = %path.display(), line = line_no, "orphan continuation marker");
                        open_line = None;
                    }
                }
            }
            Some(Marker::Plain(_)) | None => open_line = None,
        }
    }

    annotations
}
