//! Grid arrangement of the preview cells.
//!
//! Cells are placed row-major into the column tracks of a [`GridStyle`];
//! rows beyond the explicit track list are content sized. Each cell is
//! aligned inside its track according to `justify_items` and `align_items`.

use cosmic::{
    Element,
    iced::{Background, Color, Length},
    theme,
    widget::{Space, column, container, row},
};
use palette::Srgba;
use swiper_config::GridStyle;

use crate::layout_core as core;

pub fn to_color(color: Srgba) -> Color {
    Color::from_rgba(color.red, color.green, color.blue, color.alpha)
}

pub struct GridPreview<'a, M> {
    style: GridStyle,
    cells: Vec<Element<'a, M>>,
    width: Length,
}

impl<'a, M: 'a> GridPreview<'a, M> {
    pub fn new(style: GridStyle) -> Self {
        Self {
            style,
            cells: Vec::new(),
            width: Length::Fill,
        }
    }

    pub fn push(mut self, cell: impl Into<Element<'a, M>>) -> Self {
        self.cells.push(cell.into());
        self
    }

    pub fn extend(mut self, cells: impl IntoIterator<Item = Element<'a, M>>) -> Self {
        self.cells.extend(cells);
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn into_element(self) -> Element<'a, M> {
        let grid = &self.style.grid;
        let cols = grid.column_count();
        let rows = grid.row_count(self.cells.len());
        let align_x = core::horizontal(grid.justify_items);
        let align_y = core::vertical(grid.align_items);

        let mut cells = self.cells.into_iter();
        let mut body = column().spacing(grid.gap.row).width(self.width);

        for r in 0..rows {
            let row_height = core::row_length(grid.row_track(r));
            let mut line = row().spacing(grid.gap.column).width(Length::Fill);

            for c in 0..cols {
                let column_width = core::column_length(grid.column_track(c));
                let cell: Element<'a, M> = match cells.next() {
                    Some(content) => container(content)
                        .width(column_width)
                        .height(row_height)
                        .align_x(align_x)
                        .align_y(align_y)
                        .into(),
                    None => Space::new(column_width, row_height).into(),
                };
                line = line.push(cell);
            }

            body = body.push(line);
        }

        let text_color = to_color(self.style.color);
        let background = to_color(self.style.background_color);

        container(body)
            .width(self.width)
            .class(theme::Container::custom(move |_theme| container::Style {
                text_color: Some(text_color),
                icon_color: Some(text_color),
                background: Some(Background::Color(background)),
                ..Default::default()
            }))
            .into()
    }
}

pub fn grid_preview<'a, M: 'a>(style: GridStyle) -> GridPreview<'a, M> {
    GridPreview::new(style)
}

impl<'a, M: 'a> From<GridPreview<'a, M>> for Element<'a, M> {
    fn from(grid: GridPreview<'a, M>) -> Self {
        grid.into_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color() {
        let color = to_color(Srgba::new(1.0, 0.5, 0.0, 0.25));
        assert_eq!(color, Color::from_rgba(1.0, 0.5, 0.0, 0.25));
    }
}
