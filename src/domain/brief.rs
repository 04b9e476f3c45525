// SPDX-License-Identifier: MPL-2.0
//! Campaign brief submitted to `POST /process-brief`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-product details keyed by product name in [`Brief::products`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub description: String,
}

/// Structured campaign description the backend generates creatives from.
///
/// Field order matches the JSON the backend model expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub campaign_name: String,
    pub region: String,
    pub audience: String,
    pub message: String,
    pub brand_colors: Vec<String>,
    pub products: IndexMap<String, Product>,
}

impl Brief {
    /// Builds the product mapping from `(name, description)` rows.
    ///
    /// Rows with an empty name or description are dropped. A repeated name
    /// overwrites the earlier description but keeps its original position.
    pub fn products_from_rows<'a, I>(rows: I) -> IndexMap<String, Product>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut products = IndexMap::new();
        for (name, description) in rows {
            if name.is_empty() || description.is_empty() {
                continue;
            }
            products.insert(
                name.to_string(),
                Product {
                    description: description.to_string(),
                },
            );
        }
        products
    }

    /// Serializes the brief as the `brief_data` form field.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One of the two optional base-image upload slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    First,
    Second,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::First, ImageSlot::Second];

    /// 1-based slot number shown to the user and used in form field names.
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            ImageSlot::First => 1,
            ImageSlot::Second => 2,
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.number()) - 1
    }

    /// Multipart field carrying the file bytes.
    #[must_use]
    pub fn file_field(self) -> &'static str {
        match self {
            ImageSlot::First => "base_image_1",
            ImageSlot::Second => "base_image_2",
        }
    }

    /// Multipart field carrying the description.
    #[must_use]
    pub fn description_field(self) -> &'static str {
        match self {
            ImageSlot::First => "base_image_desc_1",
            ImageSlot::Second => "base_image_desc_2",
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// A base image ready to be uploaded alongside the brief.
#[derive(Clone, PartialEq, Eq)]
pub struct BaseImage {
    pub slot: ImageSlot,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub description: String,
}

impl fmt::Debug for BaseImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseImage")
            .field("slot", &self.slot)
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("description", &self.description)
            .finish()
    }
}
