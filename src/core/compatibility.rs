use serde::{Deserialize, Serialize};

/// Display band for a compatibility percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityBand {
    Perfect,
    Good,
    Average,
    Low,
}

impl CompatibilityBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => CompatibilityBand::Perfect,
            75..=89 => CompatibilityBand::Good,
            60..=74 => CompatibilityBand::Average,
            _ => CompatibilityBand::Low,
        }
    }

    /// Dictionary key for the band's label
    pub fn translation_key(&self) -> &'static str {
        match self {
            CompatibilityBand::Perfect => "perfectMatch",
            CompatibilityBand::Good => "goodMatch",
            CompatibilityBand::Average => "averageMatch",
            CompatibilityBand::Low => "lowMatch",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds() {
        assert_eq!(CompatibilityBand::from_score(100), CompatibilityBand::Perfect);
        assert_eq!(CompatibilityBand::from_score(90), CompatibilityBand::Perfect);
        assert_eq!(CompatibilityBand::from_score(89), CompatibilityBand::Good);
        assert_eq!(CompatibilityBand::from_score(75), CompatibilityBand::Good);
        assert_eq!(CompatibilityBand::from_score(74), CompatibilityBand::Average);
        assert_eq!(CompatibilityBand::from_score(60), CompatibilityBand::Average);
        assert_eq!(CompatibilityBand::from_score(59), CompatibilityBand::Low);
        assert_eq!(CompatibilityBand::from_score(0), CompatibilityBand::Low);
    }
}
