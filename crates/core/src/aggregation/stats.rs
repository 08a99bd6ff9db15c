//! Gain and loss statistics over a daily margin.

use rust_decimal::Decimal;
use serde::Serialize;

use super::breakdown::BreakdownEntry;
use crate::currency::arithmetic;
use super::series::DailySeries;

/// Split of a period's days by the sign of their margin.
///
/// A day with a margin of exactly zero is neither a gain nor a loss day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GainLossStats {
    /// Days with a strictly positive margin.
    pub gain_days: u32,
    /// Days with a strictly negative margin.
    pub loss_days: u32,
    /// Sum of the positive margins.
    pub total_gains: Decimal,
    /// Sum of the negative margins, kept negative.
    pub total_losses: Decimal,
    /// `(total_gains + total_losses) / days in the period`.
    pub average_margin: Decimal,
    /// Day number with the largest positive margin, or the placeholder.
    pub best_day: BreakdownEntry,
    /// Day number with the most negative margin, or the placeholder.
    pub worst_day: BreakdownEntry,
}

impl GainLossStats {
    /// Computes the statistics of `series.margin`.
    #[must_use]
    pub fn from_series(series: &DailySeries) -> Self {
        Self::from_margins(&series.days, &series.margin)
    }

    /// Computes the statistics of `margin`, labelling days with `days`.
    #[must_use]
    pub fn from_margins(days: &[u32], margin: &[Decimal]) -> Self {
        let mut stats = Self {
            gain_days: 0,
            loss_days: 0,
            total_gains: Decimal::ZERO,
            total_losses: Decimal::ZERO,
            average_margin: Decimal::ZERO,
            best_day: BreakdownEntry::placeholder(),
            worst_day: BreakdownEntry::placeholder(),
        };
        let mut best: Option<(u32, Decimal)> = None;
        let mut worst: Option<(u32, Decimal)> = None;

        for (&day, &value) in days.iter().zip(margin) {
            if value > Decimal::ZERO {
                stats.gain_days += 1;
                stats.total_gains = arithmetic::add(stats.total_gains, value);
                if best.is_none_or(|(_, b)| value > b) {
                    best = Some((day, value));
                }
            } else if value < Decimal::ZERO {
                stats.loss_days += 1;
                stats.total_losses = arithmetic::add(stats.total_losses, value);
                if worst.is_none_or(|(_, w)| value < w) {
                    worst = Some((day, value));
                }
            }
        }

        let day_count = Decimal::from(margin.len());
        stats.average_margin = arithmetic::add(stats.total_gains, stats.total_losses)
            .checked_div(day_count)
            .unwrap_or(Decimal::ZERO);
        if let Some((day, value)) = best {
            stats.best_day = BreakdownEntry::new(day.to_string(), value);
        }
        if let Some((day, value)) = worst {
            stats.worst_day = BreakdownEntry::new(day.to_string(), value);
        }
        stats
    }

    /// Days with any activity sign.
    #[must_use]
    pub const fn active_days(&self) -> u32 {
        self.gain_days + self.loss_days
    }
}
