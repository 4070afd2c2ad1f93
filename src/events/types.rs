// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

/// Notices auto-dismiss after this many seconds
pub const NOTICE_DISMISS_SECS: u64 = 5;

// ============================================================================
// STARTUP EVENTS
// ============================================================================

/// Emitted when the static dataset has been loaded
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub boss_count: usize,
}

impl CatalogLoaded {
    pub fn new(boss_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            boss_count,
        }
    }
}

impl DomainEvent for CatalogLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoaded" }
}

/// Emitted when the startup fetch fails; the session continues with an
/// empty catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogLoadFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl CatalogLoadFailed {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl DomainEvent for CatalogLoadFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogLoadFailed" }
}

// ============================================================================
// BOSS CATALOG EVENTS
// ============================================================================

/// Emitted when a boss entry is added to the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub boss_id: u64,
    pub name: String,
}

impl BossAdded {
    pub fn new(boss_id: u64, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            boss_id,
            name,
        }
    }
}

impl DomainEvent for BossAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BossAdded" }
}

/// Emitted when a boss entry is removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub boss_id: u64,
}

impl BossDeleted {
    pub fn new(boss_id: u64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            boss_id,
        }
    }
}

impl DomainEvent for BossDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "BossDeleted" }
}

// ============================================================================
// COMPLETION EVENTS
// ============================================================================

/// Emitted when a boss's completion mark flips
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub boss_id: u64,
    /// Membership state after the toggle
    pub completed: bool,
}

impl CompletionToggled {
    pub fn new(boss_id: u64, completed: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            boss_id,
            completed,
        }
    }
}

impl DomainEvent for CompletionToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CompletionToggled" }
}

/// Emitted when every completion mark is cleared at once
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionsCleared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl CompletionsCleared {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for CompletionsCleared {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for CompletionsCleared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CompletionsCleared" }
}

// ============================================================================
// ITEM AND LEVEL COST EVENTS
// ============================================================================

/// Emitted when an item entry is added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: u64,
    pub name: String,
}

impl ItemAdded {
    pub fn new(item_id: u64, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            name,
        }
    }
}

impl DomainEvent for ItemAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "ItemAdded" }
}

/// Emitted when a level/gold cost entry is added
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelCostAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entry_id: u64,
    pub level: u32,
    pub cost: u32,
}

impl LevelCostAdded {
    pub fn new(entry_id: u64, level: u32, cost: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entry_id,
            level,
            cost,
        }
    }
}

impl DomainEvent for LevelCostAdded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LevelCostAdded" }
}

// ============================================================================
// STATISTICS EVENTS
// ============================================================================

/// Emitted after a mutation so presentation can refresh its counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsRefreshed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl StatsRefreshed {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for StatsRefreshed {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for StatsRefreshed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "StatsRefreshed" }
}

// ============================================================================
// NOTICE CHANNEL
// ============================================================================

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Success,
    Info,
    Error,
}

impl std::fmt::Display for NoticeSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeSeverity::Success => write!(f, "success"),
            NoticeSeverity::Info => write!(f, "info"),
            NoticeSeverity::Error => write!(f, "error"),
        }
    }
}

/// The user-facing message channel
///
/// The host renders the text and dismisses it after `dismiss_after_secs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticePosted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub text: String,
    pub severity: NoticeSeverity,
    pub dismiss_after_secs: u64,
}

impl NoticePosted {
    pub fn new(text: String, severity: NoticeSeverity) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            text,
            severity,
            dismiss_after_secs: NOTICE_DISMISS_SECS,
        }
    }
}

impl DomainEvent for NoticePosted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "NoticePosted" }
}

// ============================================================================
// DURABILITY OBSERVABILITY
// ============================================================================

/// Emitted when a store write was swallowed
///
/// Not surfaced as a notice: the in-memory operation already succeeded
/// and the host decides whether durability loss is worth showing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub key: String,
    pub reason: String,
}

impl PersistenceFailed {
    pub fn new(key: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            key,
            reason,
        }
    }
}

impl DomainEvent for PersistenceFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "PersistenceFailed" }
}

// ============================================================================
// SUBMISSION EVENTS
// ============================================================================

/// What kind of record went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionKind {
    Instance,
    Item,
}

impl std::fmt::Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionKind::Instance => write!(f, "instance"),
            SubmissionKind::Item => write!(f, "item"),
        }
    }
}

/// Emitted when the automation endpoint accepted the record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDispatched {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: SubmissionKind,
    pub record_name: String,
}

impl SubmissionDispatched {
    pub fn new(kind: SubmissionKind, record_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            record_name,
        }
    }
}

impl DomainEvent for SubmissionDispatched {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SubmissionDispatched" }
}

/// Emitted when the dispatch failed and the manual issue path was taken
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionFellBack {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub kind: SubmissionKind,
    pub record_name: String,
    /// Prefilled issue-creation page the host should open
    pub issue_url: String,
}

impl SubmissionFellBack {
    pub fn new(kind: SubmissionKind, record_name: String, issue_url: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            kind,
            record_name,
            issue_url,
        }
    }
}

impl DomainEvent for SubmissionFellBack {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SubmissionFellBack" }
}
