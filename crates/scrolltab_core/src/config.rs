//! Header configuration
//!
//! Dimensions and tab labels supplied by the host screen at construction.

use thiserror::Error;

/// Errors raised when a header or pager configuration is invalid
///
/// These are construction-time failures only; runtime index lookups that can
/// transiently fail are handled as silent no-ops by the page host.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("header requires at least one tab")]
    NoTabs,
    #[error("header dimensions must be positive (height {height}, tab height {tab_height})")]
    NonPositiveDimensions { height: f32, tab_height: f32 },
    #[error("tab height {tab_height} must be smaller than header height {height}")]
    TabTallerThanHeader { height: f32, tab_height: f32 },
    #[error("page count {pages} does not match tab count {tabs}")]
    PageCountMismatch { pages: usize, tabs: usize },
}

/// Header dimensions and tab labels
///
/// `height` is the full header area including the tab bar; `tab_height` is
/// the tab bar alone, the part that stays pinned once the header collapses.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderConfig {
    /// Full header area height
    pub height: f32,
    /// Tab bar height (pinned portion)
    pub tab_height: f32,
    /// One label per tab, in page order
    pub labels: Vec<String>,
}

impl HeaderConfig {
    /// Create a config with the given dimensions and labels
    pub fn new<I, S>(height: f32, tab_height: f32, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            height,
            tab_height,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of tabs
    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    /// The header travel range while collapsing (full height minus the
    /// pinned tab bar)
    pub fn collapse_range(&self) -> f32 {
        self.height - self.tab_height
    }

    /// Validate dimensions and labels
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.labels.is_empty() {
            return Err(ConfigError::NoTabs);
        }
        if self.height <= 0.0 || self.tab_height <= 0.0 {
            return Err(ConfigError::NonPositiveDimensions {
                height: self.height,
                tab_height: self.tab_height,
            });
        }
        if self.tab_height >= self.height {
            return Err(ConfigError::TabTallerThanHeader {
                height: self.height,
                tab_height: self.tab_height,
            });
        }
        Ok(())
    }

    /// Validate that the page set matches the tab set
    pub fn validate_pages(&self, pages: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if pages != self.labels.len() {
            return Err(ConfigError::PageCountMismatch {
                pages,
                tabs: self.labels.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> HeaderConfig {
        HeaderConfig::new(280.0, 44.0, ["Tab A", "Tab B"])
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(config().validate(), Ok(()));
        assert_eq!(config().collapse_range(), 236.0);
        assert_eq!(config().tab_count(), 2);
    }

    #[test]
    fn test_no_tabs_rejected() {
        let cfg = HeaderConfig::new(280.0, 44.0, Vec::<String>::new());
        assert_eq!(cfg.validate(), Err(ConfigError::NoTabs));
    }

    #[test]
    fn test_tab_taller_than_header_rejected() {
        let cfg = HeaderConfig::new(44.0, 280.0, ["A"]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::TabTallerThanHeader { .. })
        ));
    }

    #[test]
    fn test_non_positive_rejected() {
        let cfg = HeaderConfig::new(0.0, 44.0, ["A"]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NonPositiveDimensions { .. })
        ));
    }

    #[test]
    fn test_page_count_mismatch() {
        assert_eq!(
            config().validate_pages(3),
            Err(ConfigError::PageCountMismatch { pages: 3, tabs: 2 })
        );
        assert_eq!(config().validate_pages(2), Ok(()));
    }
}
