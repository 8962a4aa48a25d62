use super::ports::PositionFilter;

/// Records every sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PositionFilter for AcceptAll {
    fn accepts(&self, _x: f64, _y: f64) -> bool {
        true
    }
}

/// Skips samples where either coordinate is exactly zero. Robots report
/// `0` before localisation has produced a fix.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectZeroCoordinate;

impl PositionFilter for RejectZeroCoordinate {
    fn accepts(&self, x: f64, y: f64) -> bool {
        x != 0.0 && y != 0.0
    }
}

pub fn position_filter(skip_zero_positions: bool) -> Box<dyn PositionFilter> {
    if skip_zero_positions {
        Box::new(RejectZeroCoordinate)
    } else {
        Box::new(AcceptAll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_zero_coordinate() {
        let filter = RejectZeroCoordinate;
        assert!(filter.accepts(1.0, 2.0));
        assert!(filter.accepts(-0.5, 3.0));
        assert!(!filter.accepts(0.0, 0.0));
        assert!(!filter.accepts(0.0, 4.0));
        assert!(!filter.accepts(4.0, 0.0));
    }

    #[test]
    fn test_config_selects_filter() {
        assert!(!position_filter(true).accepts(0.0, 0.0));
        assert!(position_filter(false).accepts(0.0, 0.0));
    }
}
