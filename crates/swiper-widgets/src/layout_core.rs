//! Shared layout math for the swiper widgets

use std::ops::Range;

use cosmic::iced::{
    Length, Point, Rectangle, Size,
    alignment::{Horizontal, Vertical},
};
use shared::{ItemAlignment, Track};

/// Scale factor applied to `fr` values so fractional tracks keep their ratio
/// as integer fill portions.
const FRACTION_SCALE: f32 = 10.0;

/// Bounds of slide `index` when the first slide sits at `offset_px` from the
/// left edge of `viewport`. Every slide is exactly one viewport wide.
pub fn slide_bounds(viewport: Rectangle, index: usize, offset_px: f32) -> Rectangle {
    Rectangle::new(
        Point::new(
            viewport.x + offset_px + index as f32 * viewport.width,
            viewport.y,
        ),
        viewport.size(),
    )
}

/// Indices of the slides that intersect the viewport.
pub fn visible_slides(count: usize, offset_px: f32, width: f32) -> Range<usize> {
    if count == 0 || width <= 0.0 {
        return 0..0;
    }

    let first = (-offset_px / width).floor().max(0.0) as usize;
    let last = ((width - offset_px) / width).ceil().max(0.0) as usize;

    first.min(count)..last.min(count)
}

/// Fit an image inside a cell keeping its aspect ratio, centered.
/// Images smaller than the cell keep their natural size.
pub fn fit_centered(cell: Rectangle, image_width: f32, image_height: f32) -> Rectangle {
    if image_width <= 0.0 || image_height <= 0.0 || cell.width <= 0.0 || cell.height <= 0.0 {
        return cell;
    }

    let scale = (cell.width / image_width)
        .min(cell.height / image_height)
        .min(1.0);
    let width = image_width * scale;
    let height = image_height * scale;

    Rectangle::new(
        Point::new(
            cell.x + (cell.width - width) / 2.0,
            cell.y + (cell.height - height) / 2.0,
        ),
        Size::new(width, height),
    )
}

/// Width of a column track.
pub fn column_length(track: Track) -> Length {
    match track {
        Track::Fraction(fr) => Length::FillPortion(fraction_portion(fr)),
        Track::Pixels(px) => Length::Fixed(px),
        Track::Auto => Length::Shrink,
    }
}

/// Height of a row track. The preview is content-sized vertically, so `fr`
/// rows behave like `auto` rows.
pub fn row_length(track: Track) -> Length {
    match track {
        Track::Pixels(px) => Length::Fixed(px),
        Track::Fraction(_) | Track::Auto => Length::Shrink,
    }
}

fn fraction_portion(fr: f32) -> u16 {
    (fr * FRACTION_SCALE).round().clamp(1.0, u16::MAX as f32) as u16
}

pub fn horizontal(alignment: ItemAlignment) -> Horizontal {
    match alignment {
        ItemAlignment::Stretch | ItemAlignment::Start => Horizontal::Left,
        ItemAlignment::Center => Horizontal::Center,
        ItemAlignment::End => Horizontal::Right,
    }
}

pub fn vertical(alignment: ItemAlignment) -> Vertical {
    match alignment {
        ItemAlignment::Stretch | ItemAlignment::Start => Vertical::Top,
        ItemAlignment::Center => Vertical::Center,
        ItemAlignment::End => Vertical::Bottom,
    }
}
