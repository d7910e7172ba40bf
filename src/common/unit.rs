//! Measurement unit conversions.
//!
//! All geometry handed to the document model is expressed in EMU (English
//! Metric Units): 914,400 EMU per inch, 12,700 EMU per point.

/// EMUs per inch.
pub const EMUS_PER_INCH: i64 = 914_400;

/// EMUs per point.
pub const EMUS_PER_PT: i64 = 12_700;

/// Convert inches to EMU.
#[inline]
pub fn inches(value: f64) -> i64 {
    (value * EMUS_PER_INCH as f64) as i64
}

/// Convert points to EMU.
#[inline]
pub fn pt(value: f64) -> i64 {
    (value * EMUS_PER_PT as f64) as i64
}

/// Convert a font size in points to the centipoint units of `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(value: f64) -> u32 {
    (value * 100.0).round() as u32
}

/// Convert degrees to the 1/60000-degree units of `a:xfrm/@rot`.
#[inline]
pub fn degrees_to_rot(value: f64) -> i64 {
    (value * 60_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inches() {
        assert_eq!(inches(1.0), 914_400);
        assert_eq!(inches(0.5), 457_200);
        // 16:9 slide size used by every deck
        assert_eq!(inches(13.333), 12_192_655);
        assert_eq!(inches(7.5), 6_858_000);
    }

    #[test]
    fn test_pt() {
        assert_eq!(pt(1.0), 12_700);
        assert_eq!(pt(2.0), 25_400);
        assert_eq!(pt(0.75), 9_525);
    }

    #[test]
    fn test_pt_to_centipoints() {
        assert_eq!(pt_to_centipoints(96.0), 9_600);
        assert_eq!(pt_to_centipoints(10.5), 1_050);
    }

    #[test]
    fn test_degrees_to_rot() {
        assert_eq!(degrees_to_rot(-15.0), -900_000);
        assert_eq!(degrees_to_rot(45.0), 2_700_000);
        assert_eq!(degrees_to_rot(0.0), 0);
    }
}
