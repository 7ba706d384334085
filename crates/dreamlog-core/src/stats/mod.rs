//! Monthly sleep-quality and dream-type statistics.
//!
//! A report covers one owner and one calendar month. Posts are classified
//! independently on both axes; a post may count towards one sleep category,
//! one dream category, both or neither. Posts whose date cannot be read are
//! skipped and counted rather than failing the whole report.

mod category;
mod month;

use serde::Serialize;

use crate::domain::DreamPost;
use crate::error::RepoError;
use crate::ports::PostRepository;

pub use category::{DreamKind, SleepQuality};
pub use month::{DateParseError, entry_month, parse_month_selector};

/// Per-category sleep-quality counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SleepTally {
    pub good: u32,
    pub average: u32,
    pub poor: u32,
}

impl SleepTally {
    fn record(&mut self, quality: SleepQuality) {
        match quality {
            SleepQuality::Good => self.good += 1,
            SleepQuality::Average => self.average += 1,
            SleepQuality::Poor => self.poor += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.good + self.average + self.poor
    }
}

/// Per-category dream-type counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DreamTally {
    pub normal: u32,
    pub lucid: u32,
    pub recurring: u32,
    pub nightmare: u32,
}

impl DreamTally {
    fn record(&mut self, kind: DreamKind) {
        match kind {
            DreamKind::Normal => self.normal += 1,
            DreamKind::Lucid => self.lucid += 1,
            DreamKind::Recurring => self.recurring += 1,
            DreamKind::Nightmare => self.nightmare += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.normal + self.lucid + self.recurring + self.nightmare
    }
}

/// Aggregated statistics for one month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyReport {
    /// The selected month, `None` when the selector was missing or invalid.
    pub month: Option<u32>,
    pub sleep: SleepTally,
    pub dream: DreamTally,
    /// Posts ignored because their date is not ISO-8601.
    pub skipped: u32,
}

/// Tally `posts` falling in `month`.
///
/// With `month == None` nothing matches and all counters stay at zero.
pub fn summarize<'a, I>(posts: I, month: Option<u32>) -> MonthlyReport
where
    I: IntoIterator<Item = &'a DreamPost>,
{
    let mut report = MonthlyReport {
        month,
        ..Default::default()
    };

    for post in posts {
        let post_month = match entry_month(&post.date) {
            Ok(m) => m,
            Err(_) => {
                report.skipped += 1;
                continue;
            }
        };

        if Some(post_month) != month {
            continue;
        }

        if let Some(quality) = SleepQuality::classify(&post.quality) {
            report.sleep.record(quality);
        }
        if let Some(kind) = DreamKind::classify(&post.kind) {
            report.dream.record(kind);
        }
    }

    report
}

/// Build the report for an owner's posts from a raw month selector.
pub async fn monthly_report(
    posts: &dyn PostRepository,
    owner_email: &str,
    selector: Option<&str>,
) -> Result<MonthlyReport, RepoError> {
    let month = parse_month_selector(selector);
    let owned = posts.find_by_owner_email(owner_email).await?;
    Ok(summarize(&owned, month))
}
