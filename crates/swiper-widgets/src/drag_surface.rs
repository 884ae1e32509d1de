//! A wrapper widget that reports where a drag starts.
//!
//! Mouse presses are reported with their x position; the caller follows the
//! rest of a mouse drag with a window-wide subscription. Touch drags stay with
//! the element that was touched, so the finger is tracked here and its moves
//! and lift are reported directly.

use cosmic::{
    Element, Renderer,
    iced::{
        Length, Rectangle, Size, Vector,
        advanced::{
            Clipboard, Layout, Shell, Widget,
            layout::{Limits, Node},
            overlay, renderer,
            widget::{Operation, Tree, tree},
        },
        event::{Event, Status},
        mouse::{self, Button, Cursor},
        touch,
    },
};
use swiper_types::PointerSource;

#[derive(Debug, Default)]
struct State {
    finger: Option<touch::Finger>,
}

pub struct DragSurface<'a, M> {
    content: Element<'a, M>,
    on_press: Option<Box<dyn Fn(f32, PointerSource, f32) -> M + 'a>>,
    on_touch_move: Option<Box<dyn Fn(f32) -> M + 'a>>,
    on_touch_release: Option<M>,
    yield_to_content: bool,
}

impl<'a, M: Clone + 'a> DragSurface<'a, M> {
    pub fn new(content: impl Into<Element<'a, M>>) -> Self {
        Self {
            content: content.into(),
            on_press: None,
            on_touch_move: None,
            on_touch_release: None,
            yield_to_content: true,
        }
    }

    /// Called with the x position, the pointer kind and the surface width
    /// when a mouse button or finger goes down.
    pub fn on_press<F>(mut self, f: F) -> Self
    where
        F: Fn(f32, PointerSource, f32) -> M + 'a,
    {
        self.on_press = Some(Box::new(f));
        self
    }

    pub fn on_touch_move<F>(mut self, f: F) -> Self
    where
        F: Fn(f32) -> M + 'a,
    {
        self.on_touch_move = Some(Box::new(f));
        self
    }

    pub fn on_touch_release(mut self, message: M) -> Self {
        self.on_touch_release = Some(message);
        self
    }

    /// When `true` (the default) a press the content already handled, such
    /// as a button click, does not start a drag. When `false` every press
    /// inside the surface starts one.
    pub fn yield_to_content(mut self, yield_to_content: bool) -> Self {
        self.yield_to_content = yield_to_content;
        self
    }

    fn press(
        &self,
        x: f32,
        source: PointerSource,
        width: f32,
        shell: &mut Shell<'_, M>,
    ) -> Status {
        match self.on_press {
            Some(ref on_press) => {
                shell.publish(on_press(x, source, width));
                Status::Captured
            }
            None => Status::Ignored,
        }
    }
}

pub fn drag_surface<'a, M: Clone + 'a>(content: impl Into<Element<'a, M>>) -> DragSurface<'a, M> {
    DragSurface::new(content)
}

impl<'a, M: Clone + 'a> Widget<M, cosmic::Theme, Renderer> for DragSurface<'a, M> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<Tree> {
        vec![Tree::new(&self.content)]
    }

    fn diff(&mut self, tree: &mut Tree) {
        tree.diff_children(std::slice::from_mut(&mut self.content));
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(&self, tree: &mut Tree, renderer: &Renderer, limits: &Limits) -> Node {
        self.content
            .as_widget()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &cosmic::Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, M>,
        viewport: &Rectangle,
    ) -> Status {
        let content_status = self.content.as_widget_mut().on_event(
            &mut tree.children[0],
            event.clone(),
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );

        let bounds = layout.bounds();
        let state = tree.state.downcast_mut::<State>();

        match event {
            Event::Mouse(mouse::Event::ButtonPressed(Button::Left)) => {
                if content_status == Status::Captured && self.yield_to_content {
                    return Status::Captured;
                }
                if let Some(position) = cursor.position_over(bounds) {
                    return self.press(position.x, PointerSource::Mouse, bounds.width, shell);
                }
            }

            Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if content_status == Status::Captured && self.yield_to_content {
                    return Status::Captured;
                }
                if state.finger.is_none() && bounds.contains(position) {
                    let status =
                        self.press(position.x, PointerSource::Touch, bounds.width, shell);
                    if status == Status::Captured {
                        state.finger = Some(id);
                    }
                    return status;
                }
            }

            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if state.finger == Some(id) {
                    if let Some(ref on_touch_move) = self.on_touch_move {
                        shell.publish(on_touch_move(position.x));
                    }
                    return Status::Captured;
                }
            }

            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if state.finger == Some(id) {
                    state.finger = None;
                    if let Some(ref message) = self.on_touch_release {
                        shell.publish(message.clone());
                    }
                    return Status::Captured;
                }
            }

            _ => {}
        }

        content_status
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn Operation,
    ) {
        self.content
            .as_widget()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        translation: Vector,
    ) -> Option<overlay::Element<'b, M, cosmic::Theme, Renderer>> {
        self.content
            .as_widget_mut()
            .overlay(&mut tree.children[0], layout, renderer, translation)
    }
}

impl<'a, M: Clone + 'a> From<DragSurface<'a, M>> for Element<'a, M> {
    fn from(surface: DragSurface<'a, M>) -> Self {
        Element::new(surface)
    }
}
