// SPDX-License-Identifier: MPL-2.0
//! Domain layer: the data exchanged with the campaign backend and the pure
//! rules applied to it.
//!
//! Nothing in here performs I/O, so every rule can be tested without a
//! running server or a window.
//!
//! # Modules
//!
//! - [`campaign`]: Gallery payload ([`Asset`](campaign::Asset), [`CampaignMap`](campaign::CampaignMap))
//! - [`brief`]: Brief payload ([`Brief`](brief::Brief), [`Product`](brief::Product),
//!   [`BaseImage`](brief::BaseImage), [`ImageSlot`](brief::ImageSlot))
//! - [`creative`]: Generated image URL rules ([`download_url`](creative::download_url),
//!   [`display_filename`](creative::display_filename), [`aspect_label`](creative::aspect_label))

pub mod brief;
pub mod campaign;
pub mod creative;

pub use brief::{BaseImage, Brief, ImageSlot, Product};
pub use campaign::{Asset, CampaignMap};
pub use creative::GeneratedCreative;
