//! Data-provider seams between fixtures and the sections
//!
//! Sections read through these traits so a real backend can be substituted
//! without touching presentation code. The demo implementations return the
//! fixture arrays.

use super::fixtures;
use super::model::{
    AgeShare, AgeStat, AnimationTarget, Campaign, CountryShare, Customer, EngagementEvent,
    GrowthSeries, KeyMetric, LocationStat, PeakTime, Platform, PlatformMetric, ReachSlice,
    ScheduledPost, TeamUser,
};

/// Audience breakdowns and headline targets for the overview panel
pub trait AudienceRepository {
    fn locations(&self) -> Vec<LocationStat>;
    fn age_groups(&self) -> Vec<AgeStat>;
    fn metric_targets(&self) -> AnimationTarget;
    fn activity_calendar(&self) -> [[u8; 7]; 5];
}

pub trait CampaignRepository {
    fn campaigns(&self) -> Vec<Campaign>;
}

pub trait CustomerRepository {
    fn customers(&self) -> Vec<Customer>;
}

pub trait PostRepository {
    fn posts(&self) -> Vec<ScheduledPost>;
}

pub trait EngagementRepository {
    fn events(&self) -> Vec<EngagementEvent>;
}

pub trait PlatformRepository {
    fn platform_metrics(&self) -> Vec<PlatformMetric>;
}

/// Chart datasets for the analytics section
pub trait AnalyticsRepository {
    fn key_metrics(&self) -> Vec<KeyMetric>;
    fn growth_series(&self) -> Vec<GrowthSeries>;
    fn engagement_rates(&self) -> Vec<(Platform, f64)>;
    fn reach_distribution(&self) -> Vec<ReachSlice>;
    fn demographics(&self) -> Vec<AgeShare>;
    fn country_shares(&self) -> Vec<CountryShare>;
    fn peak_times(&self) -> Vec<PeakTime>;
}

pub trait UserRepository {
    fn team_users(&self) -> Vec<TeamUser>;
}

/// Fixture-backed provider implementing every repository trait
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoRepository;

impl AudienceRepository for DemoRepository {
    fn locations(&self) -> Vec<LocationStat> {
        fixtures::locations()
    }

    fn age_groups(&self) -> Vec<AgeStat> {
        fixtures::age_groups()
    }

    fn metric_targets(&self) -> AnimationTarget {
        fixtures::metric_targets()
    }

    fn activity_calendar(&self) -> [[u8; 7]; 5] {
        fixtures::activity_calendar()
    }
}

impl CampaignRepository for DemoRepository {
    fn campaigns(&self) -> Vec<Campaign> {
        fixtures::campaigns()
    }
}

impl CustomerRepository for DemoRepository {
    fn customers(&self) -> Vec<Customer> {
        fixtures::customers()
    }
}

impl PostRepository for DemoRepository {
    fn posts(&self) -> Vec<ScheduledPost> {
        fixtures::posts()
    }
}

impl EngagementRepository for DemoRepository {
    fn events(&self) -> Vec<EngagementEvent> {
        fixtures::engagement_events()
    }
}

impl PlatformRepository for DemoRepository {
    fn platform_metrics(&self) -> Vec<PlatformMetric> {
        fixtures::platform_metrics()
    }
}

impl AnalyticsRepository for DemoRepository {
    fn key_metrics(&self) -> Vec<KeyMetric> {
        fixtures::key_metrics()
    }

    fn growth_series(&self) -> Vec<GrowthSeries> {
        fixtures::growth_series()
    }

    fn engagement_rates(&self) -> Vec<(Platform, f64)> {
        fixtures::engagement_rates()
    }

    fn reach_distribution(&self) -> Vec<ReachSlice> {
        fixtures::reach_distribution()
    }

    fn demographics(&self) -> Vec<AgeShare> {
        fixtures::demographics()
    }

    fn country_shares(&self) -> Vec<CountryShare> {
        fixtures::country_shares()
    }

    fn peak_times(&self) -> Vec<PeakTime> {
        fixtures::peak_times()
    }
}

impl UserRepository for DemoRepository {
    fn team_users(&self) -> Vec<TeamUser> {
        fixtures::team_users()
    }
}
