//! JSON export payload for the overview panel

use chrono::{DateTime, Local, SecondsFormat};
use serde::Serialize;

use crate::domain::model::{AgeStat, LocationStat, MetricSnapshot};

/// Wire shape of the overview export
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OverviewExport<'a> {
    followers: u64,
    reach: u64,
    engagement: f64,
    locations: &'a [LocationStat],
    age_groups: &'a [AgeStat],
    exported_at: String,
}

pub fn overview_json(
    snapshot: &MetricSnapshot,
    locations: &[LocationStat],
    age_groups: &[AgeStat],
    exported_at: DateTime<Local>,
) -> String {
    let export = OverviewExport {
        followers: snapshot.followers,
        reach: snapshot.reach,
        engagement: snapshot.engagement,
        locations,
        age_groups,
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    // The payload is plain data over serializable fields; this cannot fail.
    serde_json::to_string_pretty(&export).unwrap_or_default()
}
