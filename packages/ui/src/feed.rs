//! # Notification feed aggregation
//!
//! Merges the two upstream feed sources — locate requests and today's
//! work orders — into one normalized, time-windowed notification list for
//! the drawer. The whole pipeline is a pure function of its inputs and the
//! evaluation time; it is recomputed from scratch on every refresh and
//! nothing here is ever mutated in place.
//!
//! Pipeline:
//!
//! 1. Resolve each record's event time from its candidate fields; records
//!    without a parsable timestamp are skipped, not errored.
//! 2. Keep the trailing [`WINDOW_DAYS`]-day window, evaluated at call time.
//! 3. Map to [`FeedNotification`], parsing the composite address line.
//! 4. Concatenate both sources and stable-sort by event time descending —
//!    ties keep concatenation order.
//! 5. Cap the displayed list at [`DISPLAY_CAP`] while reporting the
//!    untruncated total.
//! 6. Group by calendar day, preserving the (already sorted) order.

use api::{LocateRequest, WorkOrder};
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Trailing recency window, in days.
pub const WINDOW_DAYS: i64 = 30;

/// Maximum number of notifications shown in the drawer.
pub const DISPLAY_CAP: usize = 10;

static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{5}").unwrap());

/// Which upstream feed a notification came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Locate,
    Rme,
}

impl NotificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::Locate => "Locate Request",
            NotificationKind::Rme => "RME Work Order",
        }
    }

    /// CSS accent class for the drawer row.
    pub fn accent(&self) -> &'static str {
        match self {
            NotificationKind::Locate => "feed-accent-locate",
            NotificationKind::Rme => "feed-accent-rme",
        }
    }
}

/// Street/city/state/zip breakdown of a composite one-line address.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl ParsedAddress {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty() && self.city.is_empty() && self.state.is_empty() && self.zip.is_empty()
    }
}

/// Best-effort split of `"123 Main St - Springfield, IL 62704"`.
///
/// The heuristic is deliberately exactly what the backend's address
/// composer produces: split on the literal `" - "`; with fewer than two
/// parts the whole string is the street. Otherwise the first 5-digit run
/// in the remainder is the zip, and what is left splits on the comma into
/// city and state.
pub fn parse_address(raw: &str) -> ParsedAddress {
    let parts: Vec<&str> = raw.split(" - ").collect();
    if parts.len() < 2 {
        return ParsedAddress {
            street: raw.trim().to_string(),
            ..ParsedAddress::default()
        };
    }

    let street = parts[0].trim().to_string();
    let mut remainder = parts[1..].join(" - ");

    let zip = ZIP_RE
        .find(&remainder)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();
    if !zip.is_empty() {
        remainder = remainder.replacen(&zip, "", 1);
    }

    let mut city_state = remainder.splitn(2, ',');
    let city = city_state.next().unwrap_or("").trim().to_string();
    let state = city_state.next().unwrap_or("").trim().to_string();

    ParsedAddress { street, city, state, zip }
}

/// The original upstream record, carried through untouched.
#[derive(Clone, Debug, PartialEq)]
pub enum FeedSource {
    Locate(LocateRequest),
    WorkOrder(WorkOrder),
}

/// A normalized entry of the notification drawer.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedNotification {
    /// Namespaced by source: `locate-<id>` / `rme-<id>`.
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub address: ParsedAddress,
    pub work_order: Option<String>,
    pub occurred_at: DateTime<Utc>,
    /// Pre-formatted clock time for the row, e.g. `"3:42 PM"`.
    pub time_label: String,
    pub source: FeedSource,
}

/// One calendar day of notifications.
#[derive(Clone, Debug, PartialEq)]
pub struct DayGroup {
    /// `"Friday, July 31, 2026"`
    pub label: String,
    pub entries: Vec<FeedNotification>,
}

/// The aggregated drawer content.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationFeed {
    /// Count before truncation, for the "N total" summary.
    pub total: usize,
    /// At most [`DISPLAY_CAP`] entries, newest first.
    pub entries: Vec<FeedNotification>,
    /// The same entries grouped by calendar day.
    pub groups: Vec<DayGroup>,
}

/// Build the drawer feed from the two raw source collections.
pub fn aggregate(
    locates: &[LocateRequest],
    work_orders: &[WorkOrder],
    now: DateTime<Utc>,
) -> NotificationFeed {
    let cutoff = now - Duration::days(WINDOW_DAYS);

    let mut all: Vec<FeedNotification> = Vec::new();
    all.extend(locates.iter().filter_map(locate_notification));
    all.extend(work_orders.iter().filter_map(work_order_notification));
    all.retain(|n| n.occurred_at >= cutoff);

    // Stable sort: records sharing a timestamp keep concatenation order.
    all.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));

    let total = all.len();
    let entries: Vec<FeedNotification> = all.into_iter().take(DISPLAY_CAP).collect();
    let groups = group_by_day(&entries);

    NotificationFeed { total, entries, groups }
}

fn locate_notification(locate: &LocateRequest) -> Option<FeedNotification> {
    // `created_at` wins; older records only carry `created_date`.
    let raw_time = locate.created_at.as_deref().or(locate.created_date.as_deref())?;
    let occurred_at = parse_event_time(raw_time)?;

    let description = match locate.customer_name.as_deref() {
        Some(name) if !name.is_empty() => format!("Locate requested for {name}"),
        _ => "Locate requested".to_string(),
    };

    Some(FeedNotification {
        id: format!("locate-{}", locate.id),
        kind: NotificationKind::Locate,
        title: NotificationKind::Locate.label().to_string(),
        description,
        address: locate
            .customer_address
            .as_deref()
            .map(parse_address)
            .unwrap_or_default(),
        work_order: locate.work_order_number.clone(),
        occurred_at,
        time_label: occurred_at.format("%-I:%M %p").to_string(),
        source: FeedSource::Locate(locate.clone()),
    })
}

fn work_order_notification(order: &WorkOrder) -> Option<FeedNotification> {
    let occurred_at = parse_event_time(order.elapsed_time.as_deref()?)?;

    let description = match order.customer_name.as_deref() {
        Some(name) if !name.is_empty() => format!("Work order started for {name}"),
        _ => "Work order started".to_string(),
    };

    Some(FeedNotification {
        id: format!("rme-{}", order.id),
        kind: NotificationKind::Rme,
        title: NotificationKind::Rme.label().to_string(),
        description,
        address: order
            .full_address
            .as_deref()
            .map(parse_address)
            .unwrap_or_default(),
        work_order: order.wo_number.clone(),
        occurred_at,
        time_label: occurred_at.format("%-I:%M %p").to_string(),
        source: FeedSource::WorkOrder(order.clone()),
    })
}

/// Parse the timestamp formats the two backends are known to emit.
fn parse_event_time(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Group time-sorted entries by calendar day. Same-day entries are
/// contiguous after the sort, so only the last group can grow.
fn group_by_day(entries: &[FeedNotification]) -> Vec<DayGroup> {
    let mut groups: Vec<DayGroup> = Vec::new();
    for entry in entries {
        let label = entry.occurred_at.format("%A, %B %-d, %Y").to_string();
        match groups.last_mut() {
            Some(group) if group.label == label => group.entries.push(entry.clone()),
            _ => groups.push(DayGroup {
                label,
                entries: vec![entry.clone()],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn locate(id: &str, created_at: Option<&str>) -> LocateRequest {
        LocateRequest {
            id: id.to_string(),
            created_at: created_at.map(str::to_string),
            created_date: None,
            customer_address: Some("123 Main St - Springfield, IL 62704".to_string()),
            work_order_number: Some("WO-100".to_string()),
            customer_name: Some("Pat Lee".to_string()),
        }
    }

    fn work_order(id: &str, elapsed_time: Option<&str>) -> WorkOrder {
        WorkOrder {
            id: id.to_string(),
            elapsed_time: elapsed_time.map(str::to_string),
            full_address: Some("9 Oak Ave - Dover, DE 19901".to_string()),
            wo_number: Some("WO-200".to_string()),
            customer_name: Some("Sam Hart".to_string()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days)).to_rfc3339()
    }

    #[test]
    fn window_includes_29_days_excludes_31() {
        let locates = vec![locate("in", Some(&days_ago(29))), locate("out", Some(&days_ago(31)))];
        let feed = aggregate(&locates, &[], now());
        assert_eq!(feed.total, 1);
        assert_eq!(feed.entries[0].id, "locate-in");
    }

    #[test]
    fn records_without_timestamp_are_skipped() {
        let locates = vec![locate("a", None), locate("b", Some(&days_ago(1)))];
        let orders = vec![work_order("c", None)];
        let feed = aggregate(&locates, &orders, now());
        assert_eq!(feed.total, 1);
        assert_eq!(feed.entries[0].id, "locate-b");
    }

    #[test]
    fn unparsable_timestamp_is_skipped() {
        let locates = vec![locate("a", Some("not a date"))];
        assert_eq!(aggregate(&locates, &[], now()).total, 0);
    }

    #[test]
    fn created_date_is_the_fallback_field() {
        let mut record = locate("a", None);
        record.created_date = Some(days_ago(2));
        let feed = aggregate(&[record], &[], now());
        assert_eq!(feed.total, 1);
    }

    #[test]
    fn accepts_naive_and_date_only_timestamps() {
        assert!(parse_event_time("2026-07-30 08:15:00").is_some());
        assert!(parse_event_time("2026-07-30").is_some());
        assert!(parse_event_time("2026-07-30T08:15:00Z").is_some());
        assert!(parse_event_time("30/07/2026").is_none());
    }

    #[test]
    fn sorted_newest_first_across_sources() {
        let locates = vec![locate("l1", Some(&days_ago(3))), locate("l2", Some(&days_ago(1)))];
        let orders = vec![work_order("w1", Some(&days_ago(2)))];
        let feed = aggregate(&locates, &orders, now());
        let ids: Vec<&str> = feed.entries.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["locate-l2", "rme-w1", "locate-l1"]);
    }

    #[test]
    fn ties_keep_concatenation_order() {
        let ts = days_ago(1);
        let locates = vec![locate("l1", Some(&ts))];
        let orders = vec![work_order("w1", Some(&ts))];
        let feed = aggregate(&locates, &orders, now());
        let ids: Vec<&str> = feed.entries.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["locate-l1", "rme-w1"]);
    }

    #[test]
    fn caps_display_at_ten_but_reports_full_total() {
        let locates: Vec<LocateRequest> = (0..12)
            .map(|i| locate(&format!("l{i}"), Some(&days_ago(i))))
            .collect();
        let feed = aggregate(&locates, &[], now());
        assert_eq!(feed.total, 12);
        assert_eq!(feed.entries.len(), DISPLAY_CAP);
        // exactly the ten most recent survive
        assert_eq!(feed.entries[0].id, "locate-l0");
        assert_eq!(feed.entries[9].id, "locate-l9");
    }

    #[test]
    fn same_day_entries_share_one_group_in_time_order() {
        let morning = now() - Duration::hours(5);
        let evening = now() - Duration::hours(1);
        let locates = vec![
            locate("early", Some(&morning.to_rfc3339())),
            locate("late", Some(&evening.to_rfc3339())),
        ];
        let feed = aggregate(&locates, &[], now());
        assert_eq!(feed.groups.len(), 1);
        let group = &feed.groups[0];
        assert_eq!(group.label, "Saturday, August 1, 2026");
        assert_eq!(group.entries[0].id, "locate-late");
        assert_eq!(group.entries[1].id, "locate-early");
    }

    #[test]
    fn groups_follow_feed_order_across_days() {
        let locates = vec![
            locate("today", Some(&days_ago(0))),
            locate("yesterday", Some(&days_ago(1))),
            locate("also-today", Some(&(now() - Duration::hours(2)).to_rfc3339())),
        ];
        let feed = aggregate(&locates, &[], now());
        assert_eq!(feed.groups.len(), 2);
        assert_eq!(feed.groups[0].entries.len(), 2);
        assert_eq!(feed.groups[1].entries.len(), 1);
        assert_eq!(feed.groups[1].entries[0].id, "locate-yesterday");
    }

    #[test]
    fn notification_fields_are_mapped() {
        let feed = aggregate(&[locate("7", Some(&days_ago(1)))], &[], now());
        let n = &feed.entries[0];
        assert_eq!(n.id, "locate-7");
        assert_eq!(n.kind, NotificationKind::Locate);
        assert_eq!(n.description, "Locate requested for Pat Lee");
        assert_eq!(n.work_order.as_deref(), Some("WO-100"));
        assert_eq!(n.address.street, "123 Main St");
        assert!(matches!(n.source, FeedSource::Locate(_)));
    }

    #[test]
    fn splits_composite_address() {
        let addr = parse_address("123 Main St - Springfield, IL 62704");
        assert_eq!(addr.street, "123 Main St");
        assert_eq!(addr.city, "Springfield");
        assert_eq!(addr.state, "IL");
        assert_eq!(addr.zip, "62704");
    }

    #[test]
    fn address_without_separator_is_all_street() {
        let addr = parse_address("487 County Road 12");
        assert_eq!(addr.street, "487 County Road 12");
        assert_eq!(addr.city, "");
        assert_eq!(addr.state, "");
        assert_eq!(addr.zip, "");
    }

    #[test]
    fn address_without_zip_still_splits_city_state() {
        let addr = parse_address("9 Oak Ave - Dover, DE");
        assert_eq!(addr.street, "9 Oak Ave");
        assert_eq!(addr.city, "Dover");
        assert_eq!(addr.state, "DE");
        assert_eq!(addr.zip, "");
    }

    #[test]
    fn empty_sources_yield_empty_feed() {
        let feed = aggregate(&[], &[], now());
        assert_eq!(feed.total, 0);
        assert!(feed.entries.is_empty());
        assert!(feed.groups.is_empty());
    }
}
