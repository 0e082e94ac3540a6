//! Narrative response package model and its enumerations.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Type-safe enumeration of response package statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum PackageStatus {
    /// Package is being drafted
    #[default]
    Draft,

    /// Package is waiting for sign-off
    #[serde(rename = "For Review")]
    ForReview,

    /// Package has been signed off
    Approved,

    /// Package has been carried out
    Executed,
}

impl PackageStatus {
    /// All statuses in workflow order.
    pub const ALL: [PackageStatus; 4] = [
        PackageStatus::Draft,
        PackageStatus::ForReview,
        PackageStatus::Approved,
        PackageStatus::Executed,
    ];

    /// Label used in playbook documents and on narrative cards.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageStatus::Draft => "Draft",
            PackageStatus::ForReview => "For Review",
            PackageStatus::Approved => "Approved",
            PackageStatus::Executed => "Executed",
        }
    }
}

impl FromStr for PackageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "draft" => Ok(PackageStatus::Draft),
            "forreview" | "review" => Ok(PackageStatus::ForReview),
            "approved" => Ok(PackageStatus::Approved),
            "executed" => Ok(PackageStatus::Executed),
            _ => Err(format!("Invalid package status: {s}")),
        }
    }
}

/// Imagery and video tasking that can be attached to a response package.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ImageryTask {
    #[serde(rename = "Overhead shot")]
    OverheadShot,

    #[serde(rename = "On-the-ground video")]
    OnTheGroundVideo,

    #[serde(rename = "Personnel interviews")]
    PersonnelInterviews,

    #[serde(rename = "B-roll footage")]
    BRollFootage,
}

impl ImageryTask {
    /// The fixed option list, in display order.
    pub const ALL: [ImageryTask; 4] = [
        ImageryTask::OverheadShot,
        ImageryTask::OnTheGroundVideo,
        ImageryTask::PersonnelInterviews,
        ImageryTask::BRollFootage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageryTask::OverheadShot => "Overhead shot",
            ImageryTask::OnTheGroundVideo => "On-the-ground video",
            ImageryTask::PersonnelInterviews => "Personnel interviews",
            ImageryTask::BRollFootage => "B-roll footage",
        }
    }
}

impl FromStr for ImageryTask {
    type Err = String;

    /// Accepts the document label in any case, or its kebab/snake spelling
    /// (`on-the-ground-video`, `b_roll_footage`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        ImageryTask::ALL
            .into_iter()
            .find(|task| normalize(task.as_str()) == wanted)
            .ok_or_else(|| format!("Invalid imagery task: {s}"))
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// The counter-narrative bundle attached to one narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ResponsePackage {
    /// Draft press release text
    pub press_release: String,

    /// Draft social media posts
    pub social_posts: String,

    /// Selected imagery tasking, in selection order without duplicates
    pub imagery_tasks: Vec<ImageryTask>,

    /// Workflow status of the package
    pub status: PackageStatus,

    /// Imported keys the planner does not model, exported unchanged
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponsePackage {
    /// Replace the imagery selection, dropping repeated tasks but keeping
    /// the order in which they were first selected.
    pub fn set_imagery_tasks(&mut self, tasks: impl IntoIterator<Item = ImageryTask>) {
        self.imagery_tasks.clear();
        for task in tasks {
            if !self.imagery_tasks.contains(&task) {
                self.imagery_tasks.push(task);
            }
        }
    }
}
