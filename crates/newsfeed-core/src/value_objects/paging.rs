//! Board list queries: fixed-size pages, sort orders, and creation-date ranges

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::DomainError;

/// Number of boards returned per page
pub const PAGE_SIZE: u32 = 10;

/// A zero-based page of `PAGE_SIZE` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    index: u32,
}

impl PageRequest {
    /// Create from a zero-based page index
    pub const fn new(index: u32) -> Self {
        Self { index }
    }

    /// Create from the 1-based page number used in URLs (page 1 = first page)
    pub fn from_page_number(number: i64) -> Result<Self, DomainError> {
        if number < 1 {
            return Err(DomainError::ValidationError(format!(
                "page number must be at least 1, got {number}"
            )));
        }
        u32::try_from(number - 1)
            .map(Self::new)
            .map_err(|_| DomainError::ValidationError(format!("page number {number} is too large")))
    }

    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Rows to skip
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.index) * i64::from(PAGE_SIZE)
    }

    /// Rows to take
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(PAGE_SIZE)
    }
}

/// Inclusive creation-time window covering whole calendar days (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl DateRange {
    /// Span from the start of `start` (00:00:00) to the end of `end` (23:59:59)
    pub fn from_days(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::ValidationError(format!(
                "start date {start} is after end date {end}"
            )));
        }
        let end_of_day = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        Ok(Self {
            start: Utc.from_utc_datetime(&start.and_time(NaiveTime::MIN)),
            end: Utc.from_utc_datetime(&end.and_time(end_of_day)),
        })
    }

    /// Parse two `YYYY-MM-DD` strings
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        let parse_day = |raw: &str| {
            NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                DomainError::ValidationError(format!("invalid date '{raw}', expected YYYY-MM-DD"))
            })
        };
        Self::from_days(parse_day(start)?, parse_day(end)?)
    }

    #[inline]
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Check if a timestamp falls within the window (both ends inclusive)
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start && at <= self.end
    }
}

/// Ordering of a board listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSort {
    /// Newest first
    #[default]
    Recent,
    /// Most liked first, newest first among ties
    MostLiked,
}

/// What to list from the board store. Soft-deleted boards are never included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardQuery {
    pub sort: BoardSort,
    pub created_within: Option<DateRange>,
    /// `None` returns every visible board
    pub page: Option<PageRequest>,
}

impl BoardQuery {
    /// Every visible board, newest first
    pub fn all() -> Self {
        Self::default()
    }

    /// One page of boards, newest first
    pub fn recent(page: PageRequest) -> Self {
        Self {
            page: Some(page),
            ..Self::default()
        }
    }

    /// One page of boards, most liked first
    pub fn most_liked(page: PageRequest) -> Self {
        Self {
            sort: BoardSort::MostLiked,
            page: Some(page),
            ..Self::default()
        }
    }

    /// One page of boards created inside `range`, newest first
    pub fn created_within(range: DateRange, page: PageRequest) -> Self {
        Self {
            created_within: Some(range),
            page: Some(page),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_number_is_one_based() {
        let first = PageRequest::from_page_number(1).unwrap();
        assert_eq!(first.index(), 0);
        assert_eq!(first.offset(), 0);
        assert_eq!(first.limit(), 10);

        let third = PageRequest::from_page_number(3).unwrap();
        assert_eq!(third.offset(), 20);
    }

    #[test]
    fn test_page_number_zero_or_negative_rejected() {
        assert!(PageRequest::from_page_number(0).unwrap_err().is_validation());
        assert!(PageRequest::from_page_number(-2).unwrap_err().is_validation());
    }

    #[test]
    fn test_date_range_covers_whole_days() {
        let range = DateRange::parse("2024-03-01", "2024-03-02").unwrap();
        assert_eq!(range.start().to_rfc3339(), "2024-03-01T00:00:00+00:00");
        assert_eq!(range.end().to_rfc3339(), "2024-03-02T23:59:59+00:00");

        let late = Utc.with_ymd_and_hms(2024, 3, 2, 23, 30, 0).unwrap();
        let next_day = Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap();
        assert!(range.contains(late));
        assert!(!range.contains(next_day));
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::parse("2024-03-01", "2024-03-01").unwrap();
        assert!(range.start() < range.end());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::parse("2024-03-05", "2024-03-01").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_malformed_date_rejected() {
        assert!(DateRange::parse("03/01/2024", "2024-03-02").is_err());
        assert!(DateRange::parse("2024-03-01", "").is_err());
    }

    #[test]
    fn test_query_constructors() {
        let page = PageRequest::new(2);
        assert_eq!(BoardQuery::all().page, None);
        assert_eq!(BoardQuery::most_liked(page).sort, BoardSort::MostLiked);
        assert_eq!(BoardQuery::recent(page).sort, BoardSort::Recent);
        assert!(BoardQuery::created_within(DateRange::parse("2024-01-01", "2024-01-31").unwrap(), page)
            .created_within
            .is_some());
    }
}
