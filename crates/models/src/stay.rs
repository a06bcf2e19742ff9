use chrono::NaiveDate;
use serde::Serialize;

/// A validated stay interval. The interval is half-open: the guest occupies
/// `[check_in, check_out)`, so the check-out day is free for the next arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    /// Build a stay range, rejecting ranges where check-out is not strictly
    /// after check-in
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Option<Self> {
        (check_out > check_in).then_some(Self {
            check_in,
            check_out,
        })
    }

    /// Half-open interval intersection: a stored stay `[start, end)` conflicts
    /// with this one iff `end > check_in && start < check_out`. Both
    /// inequalities are strict, so back-to-back stays sharing a turnover day
    /// do not conflict.
    pub fn overlaps(&self, start: NaiveDate, end: NaiveDate) -> bool {
        end > self.check_in && start < self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_and_empty_ranges() {
        assert!(StayRange::new(date(2023, 6, 1), date(2023, 6, 5)).is_some());
        assert!(StayRange::new(date(2023, 6, 5), date(2023, 6, 5)).is_none());
        assert!(StayRange::new(date(2023, 6, 5), date(2023, 6, 1)).is_none());
    }

    #[test]
    fn test_overlap_inside_interval() {
        let stay = StayRange::new(date(2023, 6, 2), date(2023, 6, 4)).unwrap();
        assert!(stay.overlaps(date(2023, 6, 1), date(2023, 6, 5)));
    }

    #[test]
    fn test_overlap_partial_intervals() {
        let stay = StayRange::new(date(2023, 6, 3), date(2023, 6, 10)).unwrap();
        // Existing stay ends inside the requested one
        assert!(stay.overlaps(date(2023, 6, 1), date(2023, 6, 5)));
        // Existing stay starts inside the requested one
        assert!(stay.overlaps(date(2023, 6, 8), date(2023, 6, 12)));
    }

    #[test]
    fn test_back_to_back_stays_do_not_overlap() {
        // Checkout day equals the next check-in day
        let stay = StayRange::new(date(2023, 6, 5), date(2023, 6, 10)).unwrap();
        assert!(!stay.overlaps(date(2023, 6, 1), date(2023, 6, 5)));

        let stay = StayRange::new(date(2023, 6, 1), date(2023, 6, 5)).unwrap();
        assert!(!stay.overlaps(date(2023, 6, 5), date(2023, 6, 10)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        let stay = StayRange::new(date(2023, 6, 1), date(2023, 6, 3)).unwrap();
        assert!(!stay.overlaps(date(2023, 6, 10), date(2023, 6, 12)));
    }

    #[test]
    fn test_nights() {
        let stay = StayRange::new(date(2023, 6, 1), date(2023, 6, 5)).unwrap();
        assert_eq!(stay.nights(), 4);
    }
}
