//! Image grid preview that expands into a fullscreen, swipeable carousel.
//!
//! [`ImageSwiper`] is an embeddable component: the host forwards its
//! [`Message`]s to [`ImageSwiper::update`], batches
//! [`ImageSwiper::subscription`] into its own and renders
//! [`ImageSwiper::view`].

pub mod image_swiper;
pub mod localize;
pub mod message;
mod views;

pub use image_swiper::ImageSwiper;
pub use message::Message;
pub use swiper_config::SwiperOptions;
pub use swiper_types::{GalleryImage, NavigationStyle};
