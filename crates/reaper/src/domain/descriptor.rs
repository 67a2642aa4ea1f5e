use std::borrow::Cow;
use std::fmt;

/// Command line of a process with its NUL separators turned into spaces.
///
/// Read fresh on every inspection. Pids are reused quickly, so a cached
/// descriptor may describe some other process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptor(String);

impl Descriptor {
    /// Build a descriptor from raw `cmdline` bytes.
    ///
    /// Returns `None` for an empty read, which is what a process still
    /// under construction (or a kernel thread) exposes.
    pub fn from_raw(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        let normalized: Vec<u8> = bytes
            .iter()
            .map(|&b| if b == 0 { b' ' } else { b })
            .collect();
        Some(Self(String::from_utf8_lossy(&normalized).into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The descriptor cut to at most `max_bytes` on a char boundary, with
    /// `…` appended when anything was dropped. The marker is counted in the
    /// budget.
    pub fn excerpt(&self, max_bytes: usize) -> Cow<'_, str> {
        let text = self.0.trim_end();
        if text.len() <= max_bytes {
            return Cow::Borrowed(text);
        }
        let mut end = max_bytes.saturating_sub(ELLIPSIS.len());
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Cow::Owned(format!("{}{ELLIPSIS}", &text[..end]))
    }
}

const ELLIPSIS: &str = "…";

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end())
    }
}
