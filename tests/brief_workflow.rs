// SPDX-License-Identifier: MPL-2.0
//! Brief form driven through its public messages, as the app does.

use campaign_studio::api::BriefOutcome;
use campaign_studio::domain::ImageSlot;
use campaign_studio::ui::brief_form::{self, Event, Message, State, ValidationError};
use std::path::PathBuf;

fn send(state: &mut State, message: Message) -> Event {
    brief_form::update(state, message)
}

fn type_text(state: &mut State, text: &str) {
    let mut current = state.color_input().to_string();
    for ch in text.chars() {
        current.push(ch);
        send(state, Message::ColorInputChanged(current.clone()));
        current = state.color_input().to_string();
    }
}

#[test]
fn typing_colors_with_delimiters_builds_tags() {
    let mut state = State::new();
    type_text(&mut state, "Red, Gold ");

    let tags: Vec<&str> = state.tags().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(tags, ["Blue", "White", "Red", "Gold"]);
    assert_eq!(state.color_input(), "");
}

#[test]
fn tags_feed_brand_colors_in_order() {
    let mut state = State::new();
    let white = state.tags()[1].id;
    send(&mut state, Message::RemoveTag(white));
    type_text(&mut state, "Navy");
    send(&mut state, Message::ColorInputSubmitted);

    match send(&mut state, Message::Submit) {
        Event::Submit(validated) => {
            assert_eq!(validated.brief.brand_colors, ["Blue", "Navy"]);
        }
        other => panic!("expected submission, got {other:?}"),
    }
}

#[test]
fn added_product_rows_are_numbered_sequentially() {
    let mut state = State::new();
    send(&mut state, Message::AddProduct);
    send(&mut state, Message::AddProduct);

    let ids: Vec<u64> = state.products().iter().map(|row| row.id).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn only_complete_product_rows_are_sent() {
    let mut state = State::new();
    send(&mut state, Message::AddProduct);
    send(&mut state, Message::ProductNameChanged(2, "Leash".into()));
    send(&mut state, Message::AddProduct);
    send(&mut state, Message::ProductNameChanged(3, "Bowl".into()));
    send(&mut state, Message::ProductDescriptionChanged(3, "Steel bowl".into()));

    match send(&mut state, Message::Submit) {
        Event::Submit(validated) => {
            let names: Vec<&str> = validated.brief.products.keys().map(String::as_str).collect();
            assert_eq!(names, ["Dog Collar", "Bowl"]);
        }
        other => panic!("expected submission, got {other:?}"),
    }
}

#[test]
fn no_complete_product_blocks_submission() {
    let mut state = State::new();
    send(&mut state, Message::ProductDescriptionChanged(1, String::new()));

    match send(&mut state, Message::Submit) {
        Event::Notify(notification) => {
            assert_eq!(notification.message_key(), ValidationError::NoProducts.i18n_key());
        }
        other => panic!("expected validation notification, got {other:?}"),
    }
    assert!(!state.is_submitting());
}

#[test]
fn second_image_needs_description_once_revealed() {
    let mut state = State::new();
    send(&mut state, Message::RevealSecondSlot);
    send(
        &mut state,
        Message::FileChosen(ImageSlot::Second, Some(PathBuf::from("/tmp/side.png"))),
    );

    match send(&mut state, Message::Submit) {
        Event::Notify(notification) => {
            assert_eq!(notification.arg("number"), Some("2"));
        }
        other => panic!("expected validation notification, got {other:?}"),
    }

    send(
        &mut state,
        Message::ImageDescriptionChanged(ImageSlot::Second, "Side view".into()),
    );
    match send(&mut state, Message::Submit) {
        Event::Submit(validated) => {
            assert_eq!(validated.images.len(), 1);
            assert_eq!(validated.images[0].slot, ImageSlot::Second);
        }
        other => panic!("expected submission, got {other:?}"),
    }
}

#[test]
fn full_round_trip_renders_cards() {
    let mut state = State::new();
    assert!(matches!(send(&mut state, Message::Submit), Event::Submit(_)));
    assert!(matches!(send(&mut state, Message::Submit), Event::None));

    let event = send(
        &mut state,
        Message::SubmissionFinished(Ok(BriefOutcome {
            image_urls: vec![
                "https://x/y/photo_1024x768_a.png?raw=1".into(),
                "https://x/y/story_1080x1920_b.png?raw=1".into(),
            ],
            message: Some("done".into()),
        })),
    );

    assert!(matches!(event, Event::Generated(ref urls) if urls.len() == 2));
    let labels: Vec<&str> = state.results().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, ["1024:768", "1080:1920"]);
    assert!(!state.is_submitting());
}
