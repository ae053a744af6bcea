//! CSV export
//!
//! The overview payload follows a fixed report layout (metric rows, then
//! audience blocks separated by blank lines) and is assembled by hand.
//! List exports (campaigns, customers) are regular tabular CSV files.

use std::path::Path;

use crate::domain::model::{AgeStat, Campaign, Customer, LocationStat, MetricSnapshot};

/// Render the overview report.
///
/// Layout: `Metric,Value` header and the three headline rows, a blank
/// line, `Top Locations:` with `country,count` rows, a blank line, then
/// `Age Groups:` with `range,count` rows.
pub fn overview_csv(
    snapshot: &MetricSnapshot,
    locations: &[LocationStat],
    age_groups: &[AgeStat],
) -> String {
    let mut out = String::new();
    out.push_str("Metric,Value\n");
    out.push_str(&format!("Followers,{}\n", snapshot.followers));
    out.push_str(&format!("Reach,{}\n", snapshot.reach));
    out.push_str(&format!("Engagement,{}%\n", snapshot.engagement));
    out.push('\n');
    out.push_str("Top Locations:\n");
    for location in locations {
        out.push_str(&format!("{},{}\n", location.country, location.count));
    }
    out.push('\n');
    out.push_str("Age Groups:\n");
    for age in age_groups {
        out.push_str(&format!("{},{}\n", age.range, age.count));
    }
    out
}

/// Write campaigns to a CSV file
pub fn write_campaigns(path: &Path, campaigns: &[Campaign]) -> Result<usize, csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "platform",
        "status",
        "budget",
        "spent",
        "impressions",
        "clicks",
        "conversions",
        "ctr",
        "cpc",
        "roas",
    ])?;

    for campaign in campaigns {
        wtr.write_record([
            campaign.id.clone(),
            campaign.name.clone(),
            campaign.platform.title().to_string(),
            campaign.status.title().to_string(),
            campaign.budget.to_string(),
            campaign.spent.to_string(),
            campaign.impressions.to_string(),
            campaign.clicks.to_string(),
            campaign.conversions.to_string(),
            campaign.ctr.to_string(),
            campaign.cpc.to_string(),
            campaign.roas.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(campaigns.len())
}

/// Write customers to a CSV file
pub fn write_customers(path: &Path, customers: &[Customer]) -> Result<usize, csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "name",
        "email",
        "location",
        "join_date",
        "total_spent",
        "orders",
        "platform",
        "segment",
        "satisfaction",
    ])?;

    for customer in customers {
        wtr.write_record([
            customer.id.clone(),
            customer.name.clone(),
            customer.email.clone(),
            customer.location.clone(),
            customer.join_date.clone(),
            customer.total_spent.to_string(),
            customer.orders.to_string(),
            customer.platform.title().to_string(),
            customer.segment.title().to_string(),
            customer.satisfaction.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(customers.len())
}
