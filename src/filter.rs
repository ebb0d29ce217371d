pub const VMESS_MARKER: &str = "vmess";

/// Keeps config lines that mention a protocol marker.
#[derive(Debug, Clone, Default)]
pub struct ConfigFilter {
    pub marker: Option<String>,
}

impl ConfigFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = Some(marker.into());
        self
    }

    pub fn vmess_only() -> Self {
        Self::new().with_marker(VMESS_MARKER)
    }

    /// Case-sensitive substring match. No marker matches everything.
    pub fn matches(&self, line: &str) -> bool {
        match &self.marker {
            Some(marker) => line.contains(marker.as_str()),
            None => true,
        }
    }

    pub fn apply(&self, lines: Vec<String>) -> Vec<String> {
        if self.marker.is_none() {
            return lines;
        }
        lines.into_iter().filter(|l| self.matches(l)).collect()
    }
}
