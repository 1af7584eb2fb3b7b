use serde::{Deserialize, Serialize};

/// Fraction of the day's range below which a price counts as cheap
const CHEAP_FRACTION: f64 = 0.33;

/// Fraction of the day's range below which a price counts as medium
const MEDIUM_FRACTION: f64 = 0.66;

/// Relative price bucket within a day's min-max range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceLevel {
    Cheap,
    Medium,
    Expensive,
}

impl PriceLevel {
    /// Returns CSS class name for color coding
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Cheap => "level-cheap",
            Self::Medium => "level-medium",
            Self::Expensive => "level-expensive",
        }
    }

    /// Returns human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cheap => "Precio bajo",
            Self::Medium => "Precio medio",
            Self::Expensive => "Precio alto",
        }
    }

    /// Returns color for display (hex code)
    pub fn color(&self, dark_mode: bool) -> &'static str {
        match (self, dark_mode) {
            (Self::Cheap, false) => "#10b981",
            (Self::Cheap, true) => "#34d399",
            (Self::Medium, false) => "#f59e0b",
            (Self::Medium, true) => "#fbbf24",
            (Self::Expensive, false) => "#dc2626",
            (Self::Expensive, true) => "#f87171",
        }
    }
}

/// Band boundaries splitting `[min, max]` into three equal-width buckets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceThresholds {
    /// Upper bound (inclusive) of the cheap band
    pub cheap: f64,
    /// Upper bound (inclusive) of the medium band
    pub medium: f64,
}

impl PriceThresholds {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        let range = max_price - min_price;
        Self {
            cheap: range.mul_add(CHEAP_FRACTION, min_price),
            medium: range.mul_add(MEDIUM_FRACTION, min_price),
        }
    }

    pub fn classify(&self, price: f64) -> PriceLevel {
        if price <= self.cheap {
            PriceLevel::Cheap
        } else if price <= self.medium {
            PriceLevel::Medium
        } else {
            PriceLevel::Expensive
        }
    }
}

/// Buckets `price` relative to the day's range.
///
/// When `min_price == max_price` both thresholds collapse onto `min_price`,
/// so a price equal to it is cheap and anything above is expensive.
pub fn classify_price_level(price: f64, min_price: f64, max_price: f64) -> PriceLevel {
    PriceThresholds::new(min_price, max_price).classify(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_endpoints() {
        assert_eq!(classify_price_level(0.10, 0.10, 0.30), PriceLevel::Cheap);
        assert_eq!(classify_price_level(0.30, 0.10, 0.30), PriceLevel::Expensive);
    }

    #[test]
    fn test_middle_band() {
        assert_eq!(classify_price_level(0.20, 0.10, 0.30), PriceLevel::Medium);
    }

    #[test]
    fn test_zero_range() {
        assert_eq!(classify_price_level(0.15, 0.15, 0.15), PriceLevel::Cheap);
        assert_eq!(classify_price_level(0.16, 0.15, 0.15), PriceLevel::Expensive);
    }

    #[test]
    fn test_thresholds() {
        let thresholds = PriceThresholds::new(0.10, 0.30);
        assert!((thresholds.cheap - 0.166).abs() < 1e-9);
        assert!((thresholds.medium - 0.232).abs() < 1e-9);
    }

    #[test]
    fn test_level_serialization() {
        assert_eq!(serde_json::to_string(&PriceLevel::Cheap).unwrap(), "\"cheap\"");
    }
}
