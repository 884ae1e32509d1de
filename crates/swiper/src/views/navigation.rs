//! Navigation strip of the fullscreen viewer.
//!
//! Every image gets one entry (thumbnail, dot or number). The strip scrolls
//! horizontally with a hidden scrollbar and can be dragged like a swipe.

use cosmic::{
    Element,
    iced::{Alignment, Background, Border, Color, ContentFit, Length},
    iced_widget::scrollable::{Direction, Scrollbar, Viewport},
    theme,
    widget::{Space, container, image, mouse_area, row, scrollable, text, tooltip},
};
use swiper_types::NavigationStyle;
use swiper_widgets::drag_surface;

use crate::{ImageSwiper, Message, fl};

pub(crate) const ENTRY_SPACING: f32 = 4.0;
const THUMBNAIL_SIZE: f32 = 30.0;
const MARKER_SIZE: f32 = 24.0;
const ACTIVE_DOT_RADIUS: f32 = 5.0;
const DOT_RADIUS: f32 = 3.0;
const ACTIVE_BORDER: f32 = 2.0;
const ACTIVE_COLOR: Color = Color::from_rgb(0.0, 0.0, 1.0);
const INACTIVE_COLOR: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Width of one entry of the strip.
pub(crate) fn entry_size(style: NavigationStyle) -> f32 {
    match style {
        NavigationStyle::Thumbnails => THUMBNAIL_SIZE,
        NavigationStyle::Dots | NavigationStyle::Numbers => MARKER_SIZE,
    }
}

impl ImageSwiper {
    pub(crate) fn navigation_view(&self) -> Option<Element<'_, Message>> {
        let style = self.navigation?;
        let current = self.carousel.index();

        let entries: Vec<Element<'_, Message>> = (0..self.carousel.total())
            .map(|index| {
                let active = index == current;
                let entry = match style {
                    NavigationStyle::Thumbnails => self.thumbnail_entry(index, active),
                    NavigationStyle::Dots => dot_entry(active),
                    NavigationStyle::Numbers => number_entry(index, active),
                };

                let entry = mouse_area(entry)
                    .on_press(Message::EntryPressed(index))
                    .on_release(Message::EntryReleased(index));
                tooltip(
                    entry,
                    text(fl!("go-to-image", number = index + 1)),
                    tooltip::Position::Top,
                )
                .into()
            })
            .collect();

        let strip = scrollable(
            row::with_children(entries)
                .spacing(ENTRY_SPACING)
                .align_y(Alignment::Center),
        )
        .id(self.strip_id.clone())
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .width(Length::Shrink)
        .on_scroll(|viewport: Viewport| Message::StripViewport {
            offset: viewport.absolute_offset().x,
            content_width: viewport.content_bounds().width,
            visible_width: viewport.bounds().width,
        });

        // Every press on the strip starts a strip drag; an entry jumps only
        // when pressed and released in place.
        let surface = drag_surface(strip)
            .yield_to_content(false)
            .on_press(|x, source, visible_width| Message::StripPressed {
                x,
                source,
                visible_width,
            })
            .on_touch_move(Message::StripMoved)
            .on_touch_release(Message::StripReleased);

        Some(
            container(surface)
                .width(Length::Fill)
                .padding(8)
                .align_x(Alignment::Center)
                .into(),
        )
    }

    fn thumbnail_entry(&self, index: usize, active: bool) -> Element<'_, Message> {
        let picture = image(self.handles[index].clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill);

        let border = if active {
            Border {
                color: ACTIVE_COLOR,
                width: ACTIVE_BORDER,
                radius: 0.0.into(),
            }
        } else {
            Border::default()
        };

        container(picture)
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .class(theme::Container::custom(move |_theme| container::Style {
                border,
                ..Default::default()
            }))
            .into()
    }
}

/// Every dot is white; only the radius marks the active one.
fn dot_radius(active: bool) -> f32 {
    if active { ACTIVE_DOT_RADIUS } else { DOT_RADIUS }
}

fn dot_entry<'a>(active: bool) -> Element<'a, Message> {
    let radius = dot_radius(active);

    let dot = container(Space::new(
        Length::Fixed(radius * 2.0),
        Length::Fixed(radius * 2.0),
    ))
    .class(theme::Container::custom(move |_theme| container::Style {
        background: Some(Background::Color(Color::WHITE)),
        border: Border {
            radius: radius.into(),
            ..Default::default()
        },
        ..Default::default()
    }));

    container(dot)
        .width(Length::Fixed(MARKER_SIZE))
        .height(Length::Fixed(MARKER_SIZE))
        .center(Length::Fixed(MARKER_SIZE))
        .into()
}

fn number_entry<'a>(index: usize, active: bool) -> Element<'a, Message> {
    let color = if active { Color::WHITE } else { INACTIVE_COLOR };

    container(
        text((index + 1).to_string())
            .size(12)
            .class(theme::Text::Color(color)),
    )
    .width(Length::Fixed(MARKER_SIZE))
    .height(Length::Fixed(MARKER_SIZE))
    .center(Length::Fixed(MARKER_SIZE))
    .into()
}
