//! Records exchanged with the content API
//!
//! The client forwards these as-is: every field is optional on the way in and
//! fields the client does not know about are kept in `extra` and written back
//! out unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::ContentClient;

/// Student project shown on the Showcase page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    /// Backend id
    #[serde(
        alias = "_id",
        with = "crate::serde_utils::lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Project title
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub title: String,
    /// Student who built it
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub student_name: String,
    /// College of the student
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub college: String,
    /// Year of study, e.g. "3rd Year"
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub year: String,
    /// Short description for the card view
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub description: String,
    /// Full description for the detail view
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub full_description: String,
    /// Duration, e.g. "3 Months"
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub duration: String,
    /// Technologies used
    #[serde(with = "crate::serde_utils::lenient_list")]
    pub tech_stack: Vec<String>,
    /// Thumbnail asset path
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub thumbnail: String,
    /// Screenshot asset paths
    #[serde(with = "crate::serde_utils::lenient_list")]
    pub screenshots: Vec<String>,
    /// Deployed demo
    #[serde(
        with = "crate::serde_utils::lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub live_link: Option<String>,
    /// Source repository
    #[serde(
        with = "crate::serde_utils::lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub repo_link: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Absolute thumbnail URL
    pub fn thumbnail_url(&self, client: &ContentClient) -> String {
        client.asset_url(Some(&self.thumbnail))
    }

    /// Absolute screenshot URLs
    pub fn screenshot_urls(&self, client: &ContentClient) -> Vec<String> {
        self.screenshots
            .iter()
            .map(|path| client.asset_url(Some(path)))
            .collect()
    }
}

/// Event listed on the Events page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    /// Backend id
    #[serde(
        alias = "_id",
        with = "crate::serde_utils::lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Event title
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub title: String,
    /// Category, e.g. "Workshop"
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub category: String,
    /// Date as entered by the admin
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub date: String,
    /// Time as entered by the admin
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub time: String,
    /// Venue
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub venue: String,
    /// Organizer
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub organizer: String,
    /// Short description
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub short_desc: String,
    /// Full description
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub full_desc: String,
    /// Main image asset path
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub main_image: String,
    /// Gallery asset paths
    #[serde(with = "crate::serde_utils::lenient_list")]
    pub gallery: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Absolute main image URL
    pub fn main_image_url(&self, client: &ContentClient) -> String {
        client.asset_url(Some(&self.main_image))
    }

    /// Absolute gallery URLs
    pub fn gallery_urls(&self, client: &ContentClient) -> Vec<String> {
        self.gallery
            .iter()
            .map(|path| client.asset_url(Some(path)))
            .collect()
    }
}

/// Job vacancy listed on the Careers page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vacancy {
    /// Backend id
    #[serde(
        alias = "_id",
        with = "crate::serde_utils::lenient_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    /// Job title
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub title: String,
    /// Location, e.g. "Remote"
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub location: String,
    /// Job type, e.g. "Full-time"
    #[serde(rename = "type", with = "crate::serde_utils::lenient_string")]
    pub kind: String,
    /// Description
    #[serde(with = "crate::serde_utils::lenient_string")]
    pub description: String,
    /// Requirements
    #[serde(with = "crate::serde_utils::lenient_list")]
    pub requirements: Vec<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Message from the Contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Enquiry type
    #[serde(rename = "type")]
    pub kind: String,
    /// Message body
    pub message: String,
}

/// Application from the Careers form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    /// Applicant name
    pub name: String,
    /// Applicant email
    pub email: String,
    /// Link to a resume or profile
    pub resume_link: String,
    /// Cover letter
    pub cover_letter: String,
    /// Role applied for
    pub job_role: String,
}

/// College partnership lead from the AI Labs page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnershipLead {
    /// College name
    pub college_name: String,
    /// Contact email
    pub email: String,
    /// Contact phone
    pub phone: String,
}
