use std::time::Instant;

use cosmic::{
    Element,
    iced::{Alignment, Background, Border, Color, Length},
    iced_widget::stack,
    theme,
    widget::{button, column, container, horizontal_space, icon, row, text, tooltip, vertical_space},
};
use swiper_widgets::{Slide, drag_surface, slide_strip};

use crate::{ImageSwiper, Message, fl};

const CONTROL_BACKGROUND: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

impl ImageSwiper {
    /// Fullscreen viewer: the slide strip under the close button, the
    /// previous/next arrows and the navigation strip.
    pub(crate) fn viewer_view(&self) -> Element<'_, Message> {
        let slides = self
            .handles
            .iter()
            .zip(&self.sizes)
            .map(|(handle, size)| {
                Slide::new(handle.clone(), size.map(|dims| (dims.width, dims.height)))
            })
            .collect();

        let strip = slide_strip(slides, self.slide_offset(Instant::now()))
            .dragging(self.gesture.is_active())
            .background(Color::BLACK);

        let close = tooltip(
            control(icon::from_name("window-close-symbolic"), Message::Close),
            text(fl!("close-fullscreen")),
            tooltip::Position::Bottom,
        );

        let top = row()
            .push(horizontal_space())
            .push(close)
            .padding(12)
            .width(Length::Fill);

        let mut middle = row().align_y(Alignment::Center).padding(12);
        if self.shows_prev() {
            middle = middle.push(tooltip(
                control(icon::from_name("go-previous-symbolic"), Message::Prev),
                text(fl!("previous-image")),
                tooltip::Position::Right,
            ));
        }
        middle = middle.push(horizontal_space());
        if self.shows_next() {
            middle = middle.push(tooltip(
                control(icon::from_name("go-next-symbolic"), Message::Next),
                text(fl!("next-image")),
                tooltip::Position::Left,
            ));
        }

        let mut controls = column()
            .push(top)
            .push(vertical_space())
            .push(middle)
            .push(vertical_space())
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(navigation) = self.navigation_view() {
            controls = controls.push(navigation);
        }

        let viewer = drag_surface(stack![strip, controls])
            .on_press(|x, source, _width| Message::SwipePressed { x, source })
            .on_touch_move(Message::SwipeMoved)
            .on_touch_release(Message::SwipeReleased);

        container(viewer)
            .width(Length::Fill)
            .height(Length::Fill)
            .class(theme::Container::custom(|_theme| container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..Default::default()
            }))
            .into()
    }
}

/// Icon button on a translucent round backdrop.
fn control<'a>(icon: icon::Named, message: Message) -> Element<'a, Message> {
    let button = button::icon(icon.size(24))
        .padding(8)
        .class(theme::Button::Icon)
        .on_press(message);

    container(button)
        .class(theme::Container::custom(|_theme| container::Style {
            icon_color: Some(Color::WHITE),
            background: Some(Background::Color(CONTROL_BACKGROUND)),
            border: Border {
                radius: 20.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }))
        .into()
}
