pub mod api;
pub mod ui;

/// Numbers stats fetches so that only the newest one fills the cards when
/// the period is switched faster than the server answers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatsRequests {
    issued: u64,
}

impl StatsRequests {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn latest(&self) -> u64 {
        self.issued
    }

    pub fn is_latest(&self, seq: u64) -> bool {
        seq == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_period_applies() {
        let mut requests = StatsRequests::default();
        let week = requests.issue();
        let month = requests.issue();
        // the week answer arrives after the month was selected
        assert!(!requests.is_latest(week));
        assert!(requests.is_latest(month));
        assert_eq!(requests.latest(), month);
    }
}
