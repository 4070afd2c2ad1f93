// src/integrations/tracker/client.rs
//
// Issue tracker integration
//
// Two outbound paths for a community submission:
// 1. A repository-dispatch call to the tracker's automation endpoint
// 2. A prefilled issue-creation URL for manual submission, used when
//    the dispatch fails
//
// The client never blocks or rolls back a local mutation; callers treat
// both paths as fire-and-forget.

use std::time::Duration;

use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use reqwest::Url;
use serde_json::{json, Value};

use crate::domain::boss::Boss;
use crate::domain::item::Item;
use crate::error::{AppError, AppResult};

const DISPATCH_ACCEPT: &str = "application/vnd.github.v3+json";

/// A human-readable issue report for the manual submission path
#[derive(Debug, Clone)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub label: String,
    /// Prefilled issue-creation page the host should open
    pub url: String,
}

pub struct TrackerClient {
    dispatch_url: Url,
    issue_url: Url,
    http_client: Client,
}

impl TrackerClient {
    /// Build a client for a tracker repository, e.g. "ArkDouglas/swordsupperfilter"
    pub fn new(repo_slug: &str) -> AppResult<Self> {
        let dispatch_url = Url::parse(&format!(
            "https://api.github.com/repos/{}/dispatches",
            repo_slug
        ))
        .map_err(|e| AppError::Other(format!("invalid tracker repository '{}': {}", repo_slug, e)))?;
        let issue_url = Url::parse(&format!("https://github.com/{}/issues/new", repo_slug))
            .map_err(|e| AppError::Other(format!("invalid tracker repository '{}': {}", repo_slug, e)))?;

        let http_client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            dispatch_url,
            issue_url,
            http_client,
        })
    }

    /// Point the client at explicit endpoints (tests, self-hosted trackers)
    pub fn with_endpoints(dispatch_url: &str, issue_url: &str) -> AppResult<Self> {
        let dispatch_url = Url::parse(dispatch_url)
            .map_err(|e| AppError::Other(format!("invalid dispatch url: {}", e)))?;
        let issue_url = Url::parse(issue_url)
            .map_err(|e| AppError::Other(format!("invalid issue url: {}", e)))?;
        let http_client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            dispatch_url,
            issue_url,
            http_client,
        })
    }

    /// Send a structured payload to the automation endpoint
    pub fn dispatch(&self, event_type: &str, record: &Value) -> AppResult<()> {
        let body = json!({
            "event_type": event_type,
            "client_payload": {
                "record": record,
                "timestamp": Utc::now().to_rfc3339(),
            }
        });

        let response = self
            .http_client
            .post(self.dispatch_url.clone())
            .header(ACCEPT, DISPATCH_ACCEPT)
            .json(&body)
            .send()?;

        if !response.status().is_success() {
            return Err(AppError::Other(format!(
                "tracker dispatch returned status {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Build the manual issue report for a boss entry
    pub fn boss_issue_draft(&self, boss: &Boss) -> AppResult<IssueDraft> {
        let title = format!("Add new instance: {}", boss.name);
        let raw_json = serde_json::to_string_pretty(boss)?;
        let body = format!(
            "## New Instance Submission\n\n\
             **Instance Name:** {}\n\
             **Level:** {}\n\
             **Difficulty:** {}\n\
             **Instance Type:** {}\n\
             **Type:** {}\n\
             **Location:** {}\n\
             **Link:** {}\n\
             **Submitted By:** {}\n\n\
             ### Special Properties:\n\
             - **Has Ruined Path:** {}\n\
             - **Has Increased:** {}\n\n\
             ### JSON Data:\n```json\n{}\n```\n\n\
             This instance was submitted through the app and should be added to the database.",
            boss.name,
            boss.level,
            boss.difficulty,
            boss.instance_type,
            boss.kind_label(),
            boss.location.as_deref().unwrap_or("None provided"),
            boss.external_link.as_deref().unwrap_or("None provided"),
            boss.submitted_by.as_deref().unwrap_or("Anonymous"),
            if boss.has_ruined_path { "Yes" } else { "No" },
            if boss.has_increased { "Yes" } else { "No" },
            raw_json,
        );

        self.finish_draft(title, body, "instance-submission")
    }

    /// Build the manual issue report for an item entry
    pub fn item_issue_draft(&self, item: &Item) -> AppResult<IssueDraft> {
        let title = format!("Add new item: {}", item.name);
        let raw_json = serde_json::to_string_pretty(item)?;
        let gold_value = item
            .gold_value
            .map(|v| v.to_string())
            .unwrap_or_else(|| "None".to_string());
        let percent = |value: Option<f32>| value.unwrap_or(0.0);
        let body = format!(
            "## New Item Submission\n\n\
             **Item Name:** {}\n\
             **Type:** {}\n\
             **Rarity:** {}\n\
             **Description:** {}\n\
             **Image URL:** {}\n\
             **Gold Value:** {}\n\
             **Source:** {}\n\n\
             ### Properties:\n\
             - **Crit %:** {}\n\
             - **Dodge %:** {}\n\
             - **Fire Resist %:** {}\n\
             - **Electric Resist %:** {}\n\n\
             ### JSON Data:\n```json\n{}\n```\n\n\
             This item was submitted through the app and should be added to the database.",
            item.name,
            item.item_type,
            item.rarity,
            item.description,
            item.image_url.as_deref().unwrap_or("None provided"),
            gold_value,
            item.source.as_deref().unwrap_or("None provided"),
            percent(item.crit),
            percent(item.dodge),
            percent(item.fire_resist),
            percent(item.elec_resist),
            raw_json,
        );

        self.finish_draft(title, body, "item-submission")
    }

    fn finish_draft(&self, title: String, body: String, label: &str) -> AppResult<IssueDraft> {
        let url = Url::parse_with_params(
            self.issue_url.as_str(),
            &[
                ("title", title.as_str()),
                ("body", body.as_str()),
                ("labels", label),
            ],
        )
        .map_err(|e| AppError::Other(format!("failed to build issue url: {}", e)))?;

        Ok(IssueDraft {
            title,
            body,
            label: label.to_string(),
            url: url.into(),
        })
    }
}
