//! Error handling for the labelpack library
//!
//! This module provides the crate-wide error type and result alias used by
//! every fallible container operation.

use thiserror::Error;

/// Main error type for the labelpack library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelPackError {
    /// Index out of bounds access
    #[error("Out of bounds: index {index}, size {size}")]
    OutOfBounds {
        /// The invalid index
        index: usize,
        /// The valid size/length
        size: usize,
    },

    /// A label outside the fixed label universe
    #[error("Label out of range: label {label}, universe size {universe}")]
    LabelOutOfRange {
        /// The invalid label
        label: usize,
        /// The size of the label universe
        universe: usize,
    },

    /// Lookup of a label that is not stored in the map
    #[error("Label not found: {label}")]
    LabelNotFound {
        /// The missing label
        label: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },
}

impl LabelPackError {
    /// Create an out of bounds error
    pub fn out_of_bounds(index: usize, size: usize) -> Self {
        Self::OutOfBounds { index, size }
    }

    /// Create a label out of range error
    pub fn label_out_of_range(label: usize, universe: usize) -> Self {
        Self::LabelOutOfRange { label, universe }
    }

    /// Create a label not found error
    pub fn label_not_found(label: usize) -> Self {
        Self::LabelNotFound { label }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::OutOfBounds { .. } => false,
            Self::LabelOutOfRange { .. } => false,
            Self::LabelNotFound { .. } => true,
            Self::Configuration { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfBounds { .. } => "bounds",
            Self::LabelOutOfRange { .. } => "label_range",
            Self::LabelNotFound { .. } => "label_missing",
            Self::Configuration { .. } => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, LabelPackError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, size: usize) -> Result<()> {
    if index >= size {
        Err(LabelPackError::out_of_bounds(index, size))
    } else {
        Ok(())
    }
}

/// Assert that a label lies within the label universe
#[inline]
pub fn check_label(label: usize, universe: usize) -> Result<()> {
    if label >= universe {
        Err(LabelPackError::label_out_of_range(label, universe))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LabelPackError::label_not_found(7);
        assert_eq!(err.category(), "label_missing");
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(10, 10).is_err());
        assert!(check_bounds(15, 10).is_err());
        assert!(check_bounds(0, 0).is_err());
    }

    #[test]
    fn test_label_checking() {
        assert!(check_label(0, 1).is_ok());
        assert!(check_label(14, 15).is_ok());
        assert!(check_label(15, 15).is_err());
        assert!(check_label(usize::MAX, 15).is_err());
    }

    #[test]
    fn test_error_categories() {
        let bounds_err = LabelPackError::out_of_bounds(5, 3);
        assert_eq!(bounds_err.category(), "bounds");
        assert!(!bounds_err.is_recoverable());

        let range_err = LabelPackError::label_out_of_range(99, 15);
        assert_eq!(range_err.category(), "label_range");
        assert!(!range_err.is_recoverable());

        let config_err = LabelPackError::configuration("bad probability");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = LabelPackError::out_of_bounds(10, 5);
        let display = format!("{}", err);
        assert!(display.contains("Out of bounds"));
        assert!(display.contains("10"));
        assert!(display.contains("5"));

        let err = LabelPackError::label_out_of_range(20, 16);
        let display = format!("{}", err);
        assert!(display.contains("Label out of range"));
        assert!(display.contains("20"));
        assert!(display.contains("16"));
    }
}
