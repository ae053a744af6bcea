//! Hard-coded demo datasets backing the repositories
//!
//! All values are fixtures; nothing here is computed from real accounts.

use super::model::{
    AgeShare, AgeStat, AnimationTarget, Campaign, CampaignStatus, CountryShare, Customer,
    CustomerSegment, EngagementEvent, EngagementKind, EngagementLevel, GrowthSeries, KeyMetric,
    LocationStat, NotificationKind, PeakTime, Platform, PlatformMetric, PostStatus, ReachSlice,
    ScheduledPost, TeamUser, UserRole, UserStatus,
};

/// Destination of the overview metric animation
pub fn metric_targets() -> AnimationTarget {
    AnimationTarget {
        followers: 278_534,
        reach: 5_192_879,
        engagement: 98.2,
    }
}

/// The handle shown on the profile card
pub const PRIMARY_HANDLE: &str = "@samanthawilliam_";

pub fn seed_notifications() -> Vec<(&'static str, NotificationKind)> {
    vec![
        ("New follower milestone reached!", NotificationKind::Success),
        ("Post scheduled for 2:00 PM", NotificationKind::Info),
    ]
}

pub fn locations() -> Vec<LocationStat> {
    vec![
        LocationStat {
            country: "United States".to_string(),
            count: 197_520,
            percentage: 100,
        },
        LocationStat {
            country: "Brazil".to_string(),
            count: 32_985,
            percentage: 65,
        },
        LocationStat {
            country: "Switzerland".to_string(),
            count: 10_254,
            percentage: 35,
        },
    ]
}

pub fn age_groups() -> Vec<AgeStat> {
    vec![
        AgeStat {
            range: "18-24".to_string(),
            count: 89_234,
            percentage: 85,
        },
        AgeStat {
            range: "25-34".to_string(),
            count: 156_789,
            percentage: 100,
        },
        AgeStat {
            range: "35-44".to_string(),
            count: 32_511,
            percentage: 45,
        },
    ]
}

/// Five weeks of per-day post counts (0..=3) for the activity calendar
pub fn activity_calendar() -> [[u8; 7]; 5] {
    [
        [0, 1, 1, 2, 0, 3, 1],
        [2, 0, 1, 3, 3, 2, 0],
        [1, 3, 0, 2, 1, 2, 2],
        [0, 1, 2, 3, 1, 1, 2],
        [2, 1, 3, 1, 2, 0, 1],
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "1".to_string(),
            name: "Summer Product Launch".to_string(),
            platform: Platform::Facebook,
            status: CampaignStatus::Active,
            budget: 5000,
            spent: 3200,
            impressions: 125_000,
            clicks: 3850,
            conversions: 127,
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-30".to_string(),
            ctr: 3.08,
            cpc: 0.83,
            roas: 4.2,
        },
        Campaign {
            id: "2".to_string(),
            name: "Brand Awareness Q2".to_string(),
            platform: Platform::Instagram,
            status: CampaignStatus::Active,
            budget: 3000,
            spent: 2100,
            impressions: 89_000,
            clicks: 2670,
            conversions: 89,
            start_date: "2025-05-15".to_string(),
            end_date: "2025-07-15".to_string(),
            ctr: 3.0,
            cpc: 0.79,
            roas: 3.8,
        },
        Campaign {
            id: "3".to_string(),
            name: "Holiday Promotion".to_string(),
            platform: Platform::Twitter,
            status: CampaignStatus::Completed,
            budget: 2000,
            spent: 1950,
            impressions: 67_000,
            clicks: 2010,
            conversions: 56,
            start_date: "2025-04-01".to_string(),
            end_date: "2025-04-30".to_string(),
            ctr: 3.0,
            cpc: 0.97,
            roas: 3.1,
        },
        Campaign {
            id: "4".to_string(),
            name: "B2B Lead Generation".to_string(),
            platform: Platform::LinkedIn,
            status: CampaignStatus::Active,
            budget: 4000,
            spent: 1800,
            impressions: 45_000,
            clicks: 1350,
            conversions: 78,
            start_date: "2025-06-01".to_string(),
            end_date: "2025-08-31".to_string(),
            ctr: 3.0,
            cpc: 1.33,
            roas: 5.2,
        },
        Campaign {
            id: "5".to_string(),
            name: "Gen Z Engagement".to_string(),
            platform: Platform::TikTok,
            status: CampaignStatus::Paused,
            budget: 1500,
            spent: 890,
            impressions: 156_000,
            clicks: 4680,
            conversions: 234,
            start_date: "2025-05-01".to_string(),
            end_date: "2025-06-15".to_string(),
            ctr: 3.0,
            cpc: 0.19,
            roas: 2.8,
        },
    ]
}

pub fn customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@email.com".to_string(),
            location: "New York, USA".to_string(),
            join_date: "2024-03-15".to_string(),
            total_spent: 2850,
            orders: 12,
            platform: Platform::Instagram,
            segment: CustomerSegment::Vip,
            satisfaction: 5,
        },
        Customer {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "m.chen@techcorp.com".to_string(),
            location: "San Francisco, USA".to_string(),
            join_date: "2024-01-22".to_string(),
            total_spent: 5200,
            orders: 8,
            platform: Platform::LinkedIn,
            segment: CustomerSegment::Vip,
            satisfaction: 4,
        },
        Customer {
            id: "3".to_string(),
            name: "Emma Rodriguez".to_string(),
            email: "emma.r@gmail.com".to_string(),
            location: "Miami, USA".to_string(),
            join_date: "2025-05-01".to_string(),
            total_spent: 320,
            orders: 3,
            platform: Platform::TikTok,
            segment: CustomerSegment::New,
            satisfaction: 4,
        },
        Customer {
            id: "4".to_string(),
            name: "David Thompson".to_string(),
            email: "david.t@email.com".to_string(),
            location: "Chicago, USA".to_string(),
            join_date: "2023-11-10".to_string(),
            total_spent: 1200,
            orders: 15,
            platform: Platform::Facebook,
            segment: CustomerSegment::AtRisk,
            satisfaction: 3,
        },
        Customer {
            id: "5".to_string(),
            name: "Lisa Wang".to_string(),
            email: "lisa.wang@startup.io".to_string(),
            location: "Seattle, USA".to_string(),
            join_date: "2024-08-03".to_string(),
            total_spent: 890,
            orders: 6,
            platform: Platform::Twitter,
            segment: CustomerSegment::Regular,
            satisfaction: 4,
        },
        Customer {
            id: "6".to_string(),
            name: "James Mitchell".to_string(),
            email: "james.m@email.com".to_string(),
            location: "Austin, USA".to_string(),
            join_date: "2024-12-15".to_string(),
            total_spent: 450,
            orders: 4,
            platform: Platform::Website,
            segment: CustomerSegment::Regular,
            satisfaction: 5,
        },
    ]
}

pub fn posts() -> Vec<ScheduledPost> {
    vec![
        ScheduledPost {
            id: "1".to_string(),
            content: "Exciting news! Our new summer collection is launching next week."
                .to_string(),
            platforms: vec![Platform::Instagram, Platform::Facebook, Platform::Twitter],
            scheduled_at: "2025-06-12T10:00:00Z".to_string(),
            status: PostStatus::Scheduled,
            likes: 0,
            comments: 0,
            shares: 0,
            campaign: Some("Summer Product Launch".to_string()),
        },
        ScheduledPost {
            id: "2".to_string(),
            content: "Milestone alert! We've just hit 10,000 amazing followers!".to_string(),
            platforms: vec![Platform::Instagram, Platform::Facebook, Platform::LinkedIn],
            scheduled_at: "2025-06-10T14:00:00Z".to_string(),
            status: PostStatus::Posted,
            likes: 2847,
            comments: 156,
            shares: 89,
            campaign: Some("Brand Awareness Q2".to_string()),
        },
        ScheduledPost {
            id: "3".to_string(),
            content: "Maintenance notice: scheduled maintenance tonight from 11 PM to 3 AM EST."
                .to_string(),
            platforms: vec![Platform::Twitter, Platform::LinkedIn],
            scheduled_at: "2025-06-09T22:00:00Z".to_string(),
            status: PostStatus::Failed,
            likes: 0,
            comments: 0,
            shares: 0,
            campaign: None,
        },
        ScheduledPost {
            id: "4".to_string(),
            content: "Behind the scenes: a peek into our design studio.".to_string(),
            platforms: vec![Platform::TikTok, Platform::Instagram],
            scheduled_at: "2025-06-13T16:00:00Z".to_string(),
            status: PostStatus::Scheduled,
            likes: 0,
            comments: 0,
            shares: 0,
            campaign: Some("Gen Z Engagement".to_string()),
        },
        ScheduledPost {
            id: "5".to_string(),
            content: "Industry insight: the future of social marketing is authentic storytelling."
                .to_string(),
            platforms: vec![Platform::LinkedIn],
            scheduled_at: "2025-06-11T09:00:00Z".to_string(),
            status: PostStatus::Posted,
            likes: 234,
            comments: 67,
            shares: 45,
            campaign: Some("B2B Lead Generation".to_string()),
        },
        ScheduledPost {
            id: "6".to_string(),
            content: "Customer spotlight: meet Sarah, who transformed her style with our pieces."
                .to_string(),
            platforms: vec![Platform::Instagram, Platform::Facebook],
            scheduled_at: "2025-06-14T12:00:00Z".to_string(),
            status: PostStatus::Draft,
            likes: 0,
            comments: 0,
            shares: 0,
            campaign: None,
        },
    ]
}

pub fn engagement_events() -> Vec<EngagementEvent> {
    vec![
        EngagementEvent {
            id: 1,
            kind: EngagementKind::Like,
            user: "Alice".to_string(),
            post: "Launching our new product next week!".to_string(),
            time: "2025-06-11T09:00:00Z".to_string(),
        },
        EngagementEvent {
            id: 2,
            kind: EngagementKind::Comment,
            user: "Bob".to_string(),
            post: "Thank you for 10k followers!".to_string(),
            time: "2025-06-10T15:00:00Z".to_string(),
        },
        EngagementEvent {
            id: 3,
            kind: EngagementKind::Share,
            user: "Charlie".to_string(),
            post: "Launching our new product next week!".to_string(),
            time: "2025-06-10T16:00:00Z".to_string(),
        },
        EngagementEvent {
            id: 4,
            kind: EngagementKind::Like,
            user: "Dana".to_string(),
            post: "Our servers will be down for maintenance tonight.".to_string(),
            time: "2025-06-09T23:00:00Z".to_string(),
        },
    ]
}

pub fn key_metrics() -> Vec<KeyMetric> {
    vec![
        KeyMetric {
            label: "Total Reach".to_string(),
            value: "556K".to_string(),
            delta: "+8.2% from last month".to_string(),
        },
        KeyMetric {
            label: "Impressions".to_string(),
            value: "2.4M".to_string(),
            delta: "+15.3% from last month".to_string(),
        },
        KeyMetric {
            label: "Engagement".to_string(),
            value: "21.5K".to_string(),
            delta: "+12.7% from last month".to_string(),
        },
        KeyMetric {
            label: "Conversion Rate".to_string(),
            value: "3.8%".to_string(),
            delta: "+0.5% from last month".to_string(),
        },
    ]
}

/// Month labels for the follower-growth series, oldest first
pub const GROWTH_MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];

pub fn growth_series() -> Vec<GrowthSeries> {
    vec![
        GrowthSeries {
            platform: Platform::Facebook,
            followers: vec![42_000, 43_200, 44_100, 44_800, 45_000, 45_200],
        },
        GrowthSeries {
            platform: Platform::Instagram,
            followers: vec![58_000, 61_000, 63_500, 65_200, 66_800, 67_800],
        },
        GrowthSeries {
            platform: Platform::TikTok,
            followers: vec![120_000, 135_000, 145_000, 150_000, 155_000, 156_700],
        },
    ]
}

pub fn engagement_rates() -> Vec<(Platform, f64)> {
    vec![
        (Platform::Facebook, 3.8),
        (Platform::Instagram, 5.2),
        (Platform::Twitter, 2.9),
        (Platform::LinkedIn, 4.1),
        (Platform::TikTok, 8.7),
    ]
}

pub fn reach_distribution() -> Vec<ReachSlice> {
    vec![
        ReachSlice {
            source: "Organic".to_string(),
            count: 320_000,
        },
        ReachSlice {
            source: "Paid".to_string(),
            count: 180_000,
        },
        ReachSlice {
            source: "Viral".to_string(),
            count: 44_000,
        },
        ReachSlice {
            source: "Other".to_string(),
            count: 12_000,
        },
    ]
}

pub fn demographics() -> Vec<AgeShare> {
    vec![
        AgeShare {
            range: "18-24".to_string(),
            percentage: 25,
        },
        AgeShare {
            range: "25-34".to_string(),
            percentage: 35,
        },
        AgeShare {
            range: "35-44".to_string(),
            percentage: 22,
        },
        AgeShare {
            range: "45-54".to_string(),
            percentage: 12,
        },
        AgeShare {
            range: "55+".to_string(),
            percentage: 6,
        },
    ]
}

pub fn country_shares() -> Vec<CountryShare> {
    vec![
        CountryShare {
            country: "United States".to_string(),
            percentage: 45,
            followers: "137.3K".to_string(),
        },
        CountryShare {
            country: "United Kingdom".to_string(),
            percentage: 18,
            followers: "54.9K".to_string(),
        },
        CountryShare {
            country: "Canada".to_string(),
            percentage: 12,
            followers: "36.6K".to_string(),
        },
        CountryShare {
            country: "Australia".to_string(),
            percentage: 8,
            followers: "24.4K".to_string(),
        },
        CountryShare {
            country: "Germany".to_string(),
            percentage: 6,
            followers: "18.3K".to_string(),
        },
    ]
}

pub fn peak_times() -> Vec<PeakTime> {
    vec![
        PeakTime {
            window: "9:00 AM - 11:00 AM".to_string(),
            platform: Platform::LinkedIn,
            level: EngagementLevel::High,
        },
        PeakTime {
            window: "12:00 PM - 2:00 PM".to_string(),
            platform: Platform::Facebook,
            level: EngagementLevel::Medium,
        },
        PeakTime {
            window: "6:00 PM - 8:00 PM".to_string(),
            platform: Platform::Instagram,
            level: EngagementLevel::VeryHigh,
        },
        PeakTime {
            window: "8:00 PM - 10:00 PM".to_string(),
            platform: Platform::TikTok,
            level: EngagementLevel::High,
        },
        PeakTime {
            window: "10:00 AM - 12:00 PM".to_string(),
            platform: Platform::Twitter,
            level: EngagementLevel::Medium,
        },
    ]
}

pub fn team_users() -> Vec<TeamUser> {
    vec![
        TeamUser {
            id: "1".to_string(),
            name: "Alice".to_string(),
            email: "alice@email.com".to_string(),
            role: UserRole::Admin,
            status: UserStatus::Active,
        },
        TeamUser {
            id: "2".to_string(),
            name: "Bob".to_string(),
            email: "bob@email.com".to_string(),
            role: UserRole::Editor,
            status: UserStatus::Active,
        },
        TeamUser {
            id: "3".to_string(),
            name: "Charlie".to_string(),
            email: "charlie@email.com".to_string(),
            role: UserRole::Viewer,
            status: UserStatus::Invited,
        },
        TeamUser {
            id: "4".to_string(),
            name: "Dana".to_string(),
            email: "dana@email.com".to_string(),
            role: UserRole::Editor,
            status: UserStatus::Suspended,
        },
    ]
}

pub fn platform_metrics() -> Vec<PlatformMetric> {
    vec![
        PlatformMetric {
            platform: Platform::Facebook,
            followers: "45.2K".to_string(),
            engagement: "3.8%".to_string(),
            reach: "120K".to_string(),
            posts_this_week: 15,
        },
        PlatformMetric {
            platform: Platform::Instagram,
            followers: "67.8K".to_string(),
            engagement: "5.2%".to_string(),
            reach: "89K".to_string(),
            posts_this_week: 22,
        },
        PlatformMetric {
            platform: Platform::Twitter,
            followers: "23.1K".to_string(),
            engagement: "2.9%".to_string(),
            reach: "67K".to_string(),
            posts_this_week: 18,
        },
        PlatformMetric {
            platform: Platform::LinkedIn,
            followers: "12.4K".to_string(),
            engagement: "4.1%".to_string(),
            reach: "34K".to_string(),
            posts_this_week: 8,
        },
        PlatformMetric {
            platform: Platform::TikTok,
            followers: "156.7K".to_string(),
            engagement: "8.7%".to_string(),
            reach: "234K".to_string(),
            posts_this_week: 12,
        },
    ]
}
