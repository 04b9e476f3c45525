// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the campaign backend.
//!
//! The backend exposes two endpoints:
//!
//! - `GET /list-campaigns` returns every campaign with its stored assets.
//! - `POST /process-brief` accepts a multipart brief (plus up to two base
//!   images) and answers with the URLs of the generated creatives.
//!
//! Non-success responses carry a JSON body `{"detail": "..."}` which is
//! surfaced through [`ApiError::user_message`].
//!
//! # Example
//!
//! ```no_run
//! use campaign_studio::api::CampaignClient;
//!
//! # async fn example() -> Result<(), campaign_studio::api::ApiError> {
//! let client = CampaignClient::new("http://127.0.0.1:8000")?;
//! let campaigns = client.list_campaigns().await?;
//! for (name, assets) in &campaigns {
//!     println!("{name}: {} assets", assets.len());
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{BriefOutcome, CampaignClient, CampaignClientBuilder};
pub use error::ApiError;
