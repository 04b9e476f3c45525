// SPDX-License-Identifier: MPL-2.0
//! Brief form screen: describe a campaign and have creatives generated.
//!
//! The form holds the campaign fields, a growing list of product rows, the
//! brand color tags and two optional base-image slots. Submitting validates
//! the draft locally, then sends one multipart `POST /process-brief` and
//! renders the returned images as cards.
//!
//! The draft lives as long as the window; switching screens keeps it.

mod component;
mod messages;
pub mod tags;
pub mod validation;
mod view;

pub use component::{submit, update};
pub use messages::{Event, Message};
pub use tags::{ColorTag, TagEdit};
pub use validation::{PendingImage, ValidatedBrief, ValidationError};
pub use view::{view, ViewContext};

use crate::domain::{Brief, GeneratedCreative, ImageSlot};
use std::path::{Path, PathBuf};

const DEFAULT_CAMPAIGN_NAME: &str = "Summer Launch 2025";
const DEFAULT_REGION: &str = "North America";
const DEFAULT_AUDIENCE: &str = "Dog owners, pet lovers";
const DEFAULT_MESSAGE: &str = "The perfect collar for your best friend!";
const DEFAULT_PRODUCT_NAME: &str = "Dog Collar";
const DEFAULT_PRODUCT_DESCRIPTION: &str = "A durable and stylish collar for medium-sized dogs.";
const DEFAULT_BRAND_COLORS: [&str; 2] = ["Blue", "White"];

/// One editable product row. The id doubles as its "Product N" label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub id: u64,
    pub name: String,
    pub description: String,
}

/// An optional base image upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaseImageSlot {
    pub path: Option<PathBuf>,
    pub description: String,
}

impl BaseImageSlot {
    /// Name of the chosen file, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
    }
}

/// Local UI state for the brief form.
#[derive(Debug, Clone)]
pub struct State {
    pub campaign_name: String,
    pub region: String,
    pub audience: String,
    pub message: String,
    products: Vec<ProductRow>,
    next_product_id: u64,
    tags: Vec<ColorTag>,
    next_tag_id: u64,
    color_input: String,
    base_images: [BaseImageSlot; 2],
    second_slot_visible: bool,
    results: Vec<GeneratedCreative>,
    submitting: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Creates the form pre-filled with the sample campaign.
    #[must_use]
    pub fn new() -> Self {
        let mut state = Self {
            campaign_name: String::new(),
            region: String::new(),
            audience: String::new(),
            message: String::new(),
            products: Vec::new(),
            next_product_id: 1,
            tags: Vec::new(),
            next_tag_id: 1,
            color_input: String::new(),
            base_images: [BaseImageSlot::default(), BaseImageSlot::default()],
            second_slot_visible: false,
            results: Vec::new(),
            submitting: false,
        };
        state.set_default_values();
        state
    }

    /// Resets fields, products and tags to the sample campaign.
    ///
    /// The product counter restarts at 1.
    pub fn set_default_values(&mut self) {
        self.campaign_name = DEFAULT_CAMPAIGN_NAME.to_string();
        self.region = DEFAULT_REGION.to_string();
        self.audience = DEFAULT_AUDIENCE.to_string();
        self.message = DEFAULT_MESSAGE.to_string();

        self.products.clear();
        self.next_product_id = 1;
        self.push_product(DEFAULT_PRODUCT_NAME, DEFAULT_PRODUCT_DESCRIPTION);

        self.tags.clear();
        for color in DEFAULT_BRAND_COLORS {
            self.add_tag(color);
        }
    }

    /// Appends an empty product row with a fresh id.
    pub fn add_product(&mut self) -> u64 {
        self.push_product("", "")
    }

    fn push_product(&mut self, name: &str, description: &str) -> u64 {
        let id = self.next_product_id;
        self.next_product_id += 1;
        self.products.push(ProductRow {
            id,
            name: name.to_string(),
            description: description.to_string(),
        });
        id
    }

    fn product_mut(&mut self, id: u64) -> Option<&mut ProductRow> {
        self.products.iter_mut().find(|row| row.id == id)
    }

    pub fn set_product_name(&mut self, id: u64, name: String) {
        if let Some(row) = self.product_mut(id) {
            row.name = name;
        }
    }

    pub fn set_product_description(&mut self, id: u64, description: String) {
        if let Some(row) = self.product_mut(id) {
            row.description = description;
        }
    }

    #[must_use]
    pub fn products(&self) -> &[ProductRow] {
        &self.products
    }

    #[must_use]
    pub fn next_product_id(&self) -> u64 {
        self.next_product_id
    }

    /// Adds a trimmed tag. Blank text is never added.
    pub fn add_tag(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_tag_id;
        self.next_tag_id += 1;
        self.tags.push(ColorTag {
            id,
            text: text.to_string(),
        });
        Some(id)
    }

    /// Removes only the chip with this id.
    pub fn remove_tag(&mut self, id: u64) {
        self.tags.retain(|tag| tag.id != id);
    }

    #[must_use]
    pub fn tags(&self) -> &[ColorTag] {
        &self.tags
    }

    #[must_use]
    pub fn color_input(&self) -> &str {
        &self.color_input
    }

    /// Applies an edit of the color input, committing a tag on a delimiter.
    pub fn tag_edit(&mut self, new_text: String) {
        let outcome = tags::classify_edit(&self.color_input, &new_text);
        self.apply_tag_edit(outcome);
    }

    /// Commits the color input as on Enter.
    pub fn commit_color_input(&mut self) {
        let outcome = tags::classify_submit(&self.color_input);
        self.apply_tag_edit(outcome);
    }

    fn apply_tag_edit(&mut self, outcome: TagEdit) {
        match outcome {
            TagEdit::Commit(tag) => {
                self.add_tag(&tag);
                self.color_input.clear();
            }
            TagEdit::Ignore => {}
            TagEdit::Update(text) => self.color_input = text,
        }
    }

    #[must_use]
    pub fn slot(&self, slot: ImageSlot) -> &BaseImageSlot {
        &self.base_images[slot.index()]
    }

    fn slot_mut(&mut self, slot: ImageSlot) -> &mut BaseImageSlot {
        &mut self.base_images[slot.index()]
    }

    /// Records the dialog result. A cancelled dialog keeps the selection.
    pub fn set_file(&mut self, slot: ImageSlot, path: Option<PathBuf>) {
        if let Some(path) = path {
            self.slot_mut(slot).path = Some(path);
        }
    }

    pub fn clear_file(&mut self, slot: ImageSlot) {
        self.slot_mut(slot).path = None;
    }

    pub fn set_image_description(&mut self, slot: ImageSlot, description: String) {
        self.slot_mut(slot).description = description;
    }

    /// Shows the second slot for good.
    pub fn reveal_second_slot(&mut self) {
        self.second_slot_visible = true;
    }

    #[must_use]
    pub fn second_slot_visible(&self) -> bool {
        self.second_slot_visible
    }

    #[must_use]
    pub fn results(&self) -> &[GeneratedCreative] {
        &self.results
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Checks the draft without any I/O.
    pub fn validate(&self) -> Result<ValidatedBrief, ValidationError> {
        let products = Brief::products_from_rows(
            self.products
                .iter()
                .map(|row| (row.name.as_str(), row.description.as_str())),
        );
        if products.is_empty() {
            return Err(ValidationError::NoProducts);
        }

        for slot in ImageSlot::ALL {
            let entry = self.slot(slot);
            if entry.path.is_some() && entry.description.trim().is_empty() {
                return Err(ValidationError::MissingImageDescription(slot));
            }
        }

        let images = ImageSlot::ALL
            .into_iter()
            .filter_map(|slot| {
                let entry = self.slot(slot);
                let path = entry.path.clone()?;
                (!entry.description.is_empty()).then(|| PendingImage {
                    slot,
                    path,
                    description: entry.description.clone(),
                })
            })
            .collect();

        let brief = Brief {
            campaign_name: self.campaign_name.clone(),
            region: self.region.clone(),
            audience: self.audience.clone(),
            message: self.message.clone(),
            brand_colors: self.tags.iter().map(|tag| tag.text.trim().to_string()).collect(),
            products,
        };

        Ok(ValidatedBrief { brief, images })
    }

    fn begin_submission(&mut self) {
        self.submitting = true;
        self.results.clear();
    }

    fn finish_submission(&mut self) {
        self.submitting = false;
    }
}
