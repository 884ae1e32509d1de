use cosmic::{
    Element,
    iced::{ContentFit, Length},
    theme,
    widget::{Id, button, container, image, text, tooltip},
};
use shared::ItemAlignment;
use swiper_widgets::grid_preview;

use crate::{ImageSwiper, Message, fl};

impl ImageSwiper {
    /// Preview cells for the first `number_shown` images, the "more" cell
    /// when images are hidden, then any caller supplied children.
    pub(crate) fn grid_view<'a>(&'a self, children: Vec<Element<'a, Message>>) -> Element<'a, Message> {
        let stretch = self.style.grid.justify_items == ItemAlignment::Stretch;
        let shown = self.carousel.shown_count(self.options.number_shown);

        let mut grid = grid_preview(self.style.clone());

        for (index, handle) in self.handles.iter().take(shown).enumerate() {
            let mut picture = image(handle.clone()).content_fit(ContentFit::Contain);
            if stretch {
                picture = picture.width(Length::Fill);
            }
            if self.style.grid.fills_cell_height(index) {
                picture = picture.height(Length::Fill);
            }

            let cell = button::custom(picture)
                .padding(0)
                .class(theme::Button::Image)
                .on_press(Message::OpenAt(index));

            grid = grid.push(tooltip(
                cell,
                text(fl!("open-image", number = index + 1)),
                tooltip::Position::Bottom,
            ));
        }

        let more = self.more_count();
        if more > 0 {
            let label = text(fl!("more-images", count = more)).size(16);
            grid = grid.push(
                button::custom(container(label).padding(12))
                    .class(theme::Button::Text)
                    .on_press(Message::OpenMore),
            );
        }

        let grid = grid.extend(children);

        match self.options.id.as_deref() {
            Some(id) => container(grid).id(Id::new(id.to_string())).into(),
            None => grid.into(),
        }
    }
}
