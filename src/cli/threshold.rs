use super::ValidationError;

/// Bases with modification probability below the Canonical threshold are counted as
/// canonical, above the Modified threshold as modified, and in between are filtered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ThresholdType {
    Canonical,
    Modified,
}

impl ThresholdType {
    pub fn idx(&self) -> usize {
        match self {
            Self::Canonical => 0,
            Self::Modified => 1,
        }
    }

    /// Name of the matching command line option
    pub fn arg_name(&self) -> &'static str {
        match self {
            Self::Canonical => "canon_threshold",
            Self::Modified => "mod_threshold",
        }
    }

    pub fn default_prob(&self) -> f64 {
        match self {
            Self::Canonical => 0.33,
            Self::Modified => 0.66,
        }
    }

    pub fn default_threshold(&self) -> u8 {
        scale_prob(self.default_prob())
    }
}

// Caller must ensure 0 <= p <= 1
fn scale_prob(p: f64) -> u8 {
    (p * 255.0) as u8
}

/// Parse a probability literal and scale to [0, 255], truncating toward zero
pub fn parse_threshold(s: &str) -> Result<u8, ValidationError> {
    match s.trim().parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(scale_prob(p)),
        _ => Err(ValidationError::ThresholdOutOfRange(s.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(ThresholdType::Canonical.default_threshold(), 84);
        assert_eq!(ThresholdType::Modified.default_threshold(), 168);
    }

    #[test]
    fn scaling_truncates() {
        assert_eq!(parse_threshold("0").unwrap(), 0);
        assert_eq!(parse_threshold("0.2").unwrap(), 51);
        assert_eq!(parse_threshold("0.5").unwrap(), 127);
        assert_eq!(parse_threshold("0.8").unwrap(), 204);
        assert_eq!(parse_threshold("0.999").unwrap(), 254);
        assert_eq!(parse_threshold("1").unwrap(), 255);
        assert_eq!(parse_threshold("1.0").unwrap(), 255);
    }

    #[test]
    fn scaling_matches_floor() {
        for i in 0..=1000 {
            let p = i as f64 / 1000.0;
            let t = parse_threshold(&format!("{}", p)).unwrap();
            assert_eq!(t as f64, (p * 255.0).floor());
        }
    }

    #[test]
    fn out_of_range() {
        for s in ["-0.1", "1.01", "2", "-1", "abc", "", "nan", "inf", "0.5x"] {
            match parse_threshold(s) {
                Err(ValidationError::ThresholdOutOfRange(x)) => assert_eq!(x, s),
                r => panic!("Unexpected result for '{}': {:?}", s, r),
            }
        }
    }
}
