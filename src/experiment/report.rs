//! Aggregated statistics over repeated trials.

use std::collections::BTreeMap;
use std::fmt;

/// Success count and generation totals over a batch of trials.
///
/// - **SR** (success rate): `successes / runs`
/// - **AES** (average evaluations to solution): mean generations of the
///   successful trials only
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialStats {
    /// Trials run.
    pub runs: usize,
    /// Trials that reached their goal.
    pub successes: usize,
    /// Generations summed over successful trials.
    pub success_generations: usize,
}

impl TrialStats {
    /// Records a successful trial that used `generations` generations.
    pub fn record_success(&mut self, generations: usize) {
        self.runs += 1;
        self.successes += 1;
        self.success_generations += generations;
    }

    /// Records a failed trial. Its generations do not enter AES.
    pub fn record_failure(&mut self) {
        self.runs += 1;
    }

    /// Fraction of successful trials; `0.0` for an empty batch.
    pub fn success_rate(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.successes as f64 / self.runs as f64
        }
    }

    /// Mean generations of successful trials; `None` without successes.
    pub fn average_generations(&self) -> Option<f64> {
        (self.successes > 0).then(|| self.success_generations as f64 / self.successes as f64)
    }
}

impl fmt::Display for TrialStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "runs={}  SR={:.2}  AES={:.2}",
            self.runs,
            self.success_rate(),
            self.average_generations().unwrap_or(f64::NAN)
        )
    }
}

/// N-queens experiment summary.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensReport {
    /// Board size.
    pub n: usize,
    /// Trial statistics.
    pub stats: TrialStats,
}

impl fmt::Display for QueensReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Queens  {}", self.n, self.stats)
    }
}

/// Graph-coloring experiment summary.
///
/// A trial succeeds when its initial phase finds a conflict-free coloring.
/// AES counts the generations of the initial phase plus every successful
/// reduction phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoringReport {
    /// Trial statistics.
    pub stats: TrialStats,
    /// Minimal palette reached → number of successful trials.
    pub palette_histogram: BTreeMap<usize, usize>,
}

impl ColoringReport {
    /// Smallest palette any trial reached.
    pub fn best_palette(&self) -> Option<usize> {
        self.palette_histogram.keys().next().copied()
    }
}

impl fmt::Display for ColoringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MapColoring  {}", self.stats)?;
        if !self.palette_histogram.is_empty() {
            let entries: Vec<String> = self
                .palette_histogram
                .iter()
                .map(|(palette, count)| format!("{palette}: {count}"))
                .collect();
            write!(f, "\nMinimum colors: {}", entries.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_rates() {
        let mut stats = TrialStats::default();
        stats.record_success(10);
        stats.record_success(30);
        stats.record_failure();
        stats.record_failure();
        assert_eq!(stats.runs, 4);
        assert!((stats.success_rate() - 0.5).abs() < 1e-12);
        assert_eq!(stats.average_generations(), Some(20.0));
    }

    #[test]
    fn test_empty_stats() {
        let stats = TrialStats::default();
        assert_eq!(stats.success_rate(), 0.0);
        assert_eq!(stats.average_generations(), None);
        assert_eq!(stats.to_string(), "runs=0  SR=0.00  AES=NaN");
    }

    #[test]
    fn test_queens_report_format() {
        let mut stats = TrialStats::default();
        stats.record_success(41);
        stats.record_success(40);
        let report = QueensReport { n: 8, stats };
        assert_eq!(report.to_string(), "8-Queens  runs=2  SR=1.00  AES=40.50");
    }

    #[test]
    fn test_coloring_report_format() {
        let mut report = ColoringReport::default();
        report.stats.record_success(12);
        report.stats.record_success(8);
        report.stats.record_failure();
        report.palette_histogram.insert(4, 1);
        report.palette_histogram.insert(3, 1);
        assert_eq!(
            report.to_string(),
            "MapColoring  runs=3  SR=0.67  AES=10.00\nMinimum colors: 3: 1, 4: 1"
        );
        assert_eq!(report.best_palette(), Some(3));
    }

    #[test]
    fn test_coloring_report_without_successes() {
        let mut report = ColoringReport::default();
        report.stats.record_failure();
        assert_eq!(report.to_string(), "MapColoring  runs=1  SR=0.00  AES=NaN");
        assert_eq!(report.best_palette(), None);
    }
}
