//! Data model for the dashboard's demo analytics

use serde::Serialize;

/// Social platform an account, campaign, or post belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Facebook,
    Instagram,
    Twitter,
    LinkedIn,
    TikTok,
    Website,
}

impl Platform {
    pub const ALL: [Platform; 5] = [
        Platform::Facebook,
        Platform::Instagram,
        Platform::Twitter,
        Platform::LinkedIn,
        Platform::TikTok,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Platform::Facebook => "Facebook",
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::LinkedIn => "LinkedIn",
            Platform::TikTok => "TikTok",
            Platform::Website => "Website",
        }
    }
}

/// Export payload formats offered across the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// Audience share for one country
#[derive(Debug, Clone, Serialize)]
pub struct LocationStat {
    pub country: String,
    pub count: u64,
    #[serde(skip)]
    pub percentage: u8,
}

/// Audience share for one age bracket
#[derive(Debug, Clone, Serialize)]
pub struct AgeStat {
    pub range: String,
    pub count: u64,
    #[serde(skip)]
    pub percentage: u8,
}

/// Headline numbers shown on the overview panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    pub followers: u64,
    pub reach: u64,
    pub engagement: f64,
}

impl MetricSnapshot {
    pub const ZERO: MetricSnapshot = MetricSnapshot {
        followers: 0,
        reach: 0,
        engagement: 0.0,
    };
}

/// Fixed destination for the mount animation; immutable once started
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTarget {
    pub followers: u64,
    pub reach: u64,
    pub engagement: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignStatus {
    Active,
    Paused,
    Completed,
    Draft,
}

impl CampaignStatus {
    pub fn title(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub status: CampaignStatus,
    pub budget: u64,
    pub spent: u64,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub start_date: String,
    pub end_date: String,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSegment {
    Vip,
    Regular,
    New,
    AtRisk,
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 4] = [
        CustomerSegment::Vip,
        CustomerSegment::Regular,
        CustomerSegment::New,
        CustomerSegment::AtRisk,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CustomerSegment::Vip => "VIP",
            CustomerSegment::Regular => "Regular",
            CustomerSegment::New => "New",
            CustomerSegment::AtRisk => "At Risk",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub join_date: String,
    pub total_spent: u64,
    pub orders: u32,
    pub platform: Platform,
    pub segment: CustomerSegment,
    pub satisfaction: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostStatus {
    Scheduled,
    Posted,
    Failed,
    Draft,
}

impl PostStatus {
    pub fn title(&self) -> &'static str {
        match self {
            PostStatus::Scheduled => "scheduled",
            PostStatus::Posted => "posted",
            PostStatus::Failed => "failed",
            PostStatus::Draft => "draft",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScheduledPost {
    pub id: String,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub scheduled_at: String,
    pub status: PostStatus,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub campaign: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementKind {
    Like,
    Comment,
    Share,
}

impl EngagementKind {
    pub fn title(&self) -> &'static str {
        match self {
            EngagementKind::Like => "Like",
            EngagementKind::Comment => "Comment",
            EngagementKind::Share => "Share",
        }
    }
}

/// One recent interaction with a post
#[derive(Debug, Clone)]
pub struct EngagementEvent {
    pub id: u64,
    pub kind: EngagementKind,
    pub user: String,
    pub post: String,
    pub time: String,
}

/// Per-platform headline figures for the dashboard section
#[derive(Debug, Clone)]
pub struct PlatformMetric {
    pub platform: Platform,
    pub followers: String,
    pub engagement: String,
    pub reach: String,
    pub posts_this_week: u32,
}

/// Severity of a notification bar entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
}

/// Headline card on the analytics section
#[derive(Debug, Clone)]
pub struct KeyMetric {
    pub label: String,
    pub value: String,
    pub delta: String,
}

/// Six months of follower counts for one platform
#[derive(Debug, Clone)]
pub struct GrowthSeries {
    pub platform: Platform,
    pub followers: Vec<u64>,
}

/// One slice of the reach-distribution breakdown
#[derive(Debug, Clone)]
pub struct ReachSlice {
    pub source: String,
    pub count: u64,
}

/// Audience share for one age bracket, as a percentage of the whole
#[derive(Debug, Clone)]
pub struct AgeShare {
    pub range: String,
    pub percentage: u8,
}

/// Follower share for one country on the analytics section
#[derive(Debug, Clone)]
pub struct CountryShare {
    pub country: String,
    pub percentage: u8,
    pub followers: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngagementLevel {
    Medium,
    High,
    VeryHigh,
}

impl EngagementLevel {
    pub fn title(&self) -> &'static str {
        match self {
            EngagementLevel::Medium => "Medium",
            EngagementLevel::High => "High",
            EngagementLevel::VeryHigh => "Very High",
        }
    }
}

/// A daily window where one platform's audience is most active
#[derive(Debug, Clone)]
pub struct PeakTime {
    pub window: String,
    pub platform: Platform,
    pub level: EngagementLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    pub fn title(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

impl UserStatus {
    pub fn title(&self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Invited => "Invited",
            UserStatus::Suspended => "Suspended",
        }
    }
}

/// A dashboard team member
#[derive(Debug, Clone)]
pub struct TeamUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
}
