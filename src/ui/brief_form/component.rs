// SPDX-License-Identifier: MPL-2.0
//! Update logic and the submission task of the brief form.

use super::messages::{Event, Message};
use super::validation::ValidatedBrief;
use super::State;
use crate::api::{ApiError, BriefOutcome, CampaignClient};
use crate::domain::{BaseImage, GeneratedCreative};
use crate::ui::notifications::Notification;
use iced::Task;

/// Process a brief form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CampaignNameChanged(value) => {
            state.campaign_name = value;
            Event::None
        }
        Message::RegionChanged(value) => {
            state.region = value;
            Event::None
        }
        Message::AudienceChanged(value) => {
            state.audience = value;
            Event::None
        }
        Message::MessageChanged(value) => {
            state.message = value;
            Event::None
        }
        Message::ProductNameChanged(id, value) => {
            state.set_product_name(id, value);
            Event::None
        }
        Message::ProductDescriptionChanged(id, value) => {
            state.set_product_description(id, value);
            Event::None
        }
        Message::AddProduct => {
            state.add_product();
            Event::None
        }
        Message::ColorInputChanged(value) => {
            state.tag_edit(value);
            Event::None
        }
        Message::ColorInputSubmitted => {
            state.commit_color_input();
            Event::None
        }
        Message::RemoveTag(id) => {
            state.remove_tag(id);
            Event::None
        }
        Message::ChooseFile(slot) => Event::PickFile(slot),
        Message::FileChosen(slot, path) => {
            state.set_file(slot, path);
            Event::None
        }
        Message::ClearFile(slot) => {
            state.clear_file(slot);
            Event::None
        }
        Message::ImageDescriptionChanged(slot, value) => {
            state.set_image_description(slot, value);
            Event::None
        }
        Message::RevealSecondSlot => {
            state.reveal_second_slot();
            Event::None
        }
        Message::Submit => handle_submit(state),
        Message::SubmissionFinished(result) => handle_outcome(state, result),
        Message::Download { url, filename } => Event::Download { url, filename },
    }
}

fn handle_submit(state: &mut State) -> Event {
    if state.is_submitting() {
        tracing::debug!("submission already in flight");
        return Event::None;
    }
    match state.validate() {
        Ok(validated) => {
            state.begin_submission();
            Event::Submit(validated)
        }
        Err(err) => {
            tracing::debug!(error = %err, "brief rejected");
            Event::Notify(err.notification())
        }
    }
}

fn handle_outcome(state: &mut State, result: Result<BriefOutcome, ApiError>) -> Event {
    state.finish_submission();
    match result {
        Ok(outcome) if !outcome.image_urls.is_empty() => {
            state.results = outcome
                .image_urls
                .iter()
                .map(GeneratedCreative::from_url)
                .collect();
            Event::Generated(outcome.image_urls)
        }
        Ok(outcome) => {
            let notification = match outcome.message.filter(|m| !m.is_empty()) {
                Some(message) => {
                    Notification::warning("notification-server-message").with_arg("message", message)
                }
                None => Notification::warning("notification-no-images"),
            };
            Event::Notify(notification)
        }
        Err(err) => {
            tracing::error!(error = %err, "brief submission failed");
            Event::RequestFailed(err)
        }
    }
}

/// Reads the chosen base images, then sends the brief.
pub fn submit(client: &CampaignClient, validated: ValidatedBrief) -> Task<Message> {
    let client = client.clone();
    Task::perform(
        async move {
            let images = read_base_images(validated.images).await?;
            client.process_brief(&validated.brief, images).await
        },
        Message::SubmissionFinished,
    )
}

async fn read_base_images(
    pending: Vec<super::PendingImage>,
) -> Result<Vec<BaseImage>, ApiError> {
    let mut images = Vec::with_capacity(pending.len());
    for image in pending {
        let bytes = tokio::fs::read(&image.path).await.map_err(|e| {
            ApiError::Io(format!("{}: {e}", image.path.display()))
        })?;
        let file_name = image
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        images.push(BaseImage {
            slot: image.slot,
            file_name,
            bytes,
            description: image.description,
        });
    }
    Ok(images)
}
