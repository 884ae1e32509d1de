#[cfg(test)]
mod tests {
    use swiper::{GalleryImage, ImageSwiper, Message, NavigationStyle, SwiperOptions};
    use swiper_types::PointerSource;

    fn gallery(count: usize) -> SwiperOptions {
        let images = (0..count)
            .map(|i| GalleryImage::new(format!("/sin/imagen/{i}.jpg"), format!("Imagen {i}")))
            .collect();
        SwiperOptions::new(images)
    }

    fn swipe(swiper: &mut ImageSwiper, from: f32, to: f32) {
        let _ = swiper.update(Message::SwipePressed {
            x: from,
            source: PointerSource::Touch,
        });
        let _ = swiper.update(Message::SwipeMoved(to));
        let _ = swiper.update(Message::SwipeReleased);
    }

    #[test]
    fn test_more_affordance_opens_at_current_index() {
        let (mut swiper, _) = ImageSwiper::new(gallery(5).number_shown(3));
        assert_eq!(swiper.more_count(), 2);

        let _ = swiper.update(Message::OpenMore);
        assert!(swiper.is_open());
        assert_eq!(swiper.current_index(), 0);
    }

    #[test]
    fn test_swipe_sequence() {
        let (mut swiper, _) = ImageSwiper::new(gallery(4));
        let _ = swiper.update(Message::OpenAt(1));

        swipe(&mut swiper, 400.0, 250.0);
        assert_eq!(swiper.current_index(), 2);

        swipe(&mut swiper, 400.0, 350.0);
        assert_eq!(swiper.current_index(), 2);
        assert_eq!(swiper.drag_offset(), 0.0);

        swipe(&mut swiper, 100.0, 300.0);
        assert_eq!(swiper.current_index(), 1);
    }

    #[test]
    fn test_navigation_clamps_at_ends() {
        let (mut swiper, _) = ImageSwiper::new(gallery(2));
        let _ = swiper.update(Message::OpenAt(0));
        let _ = swiper.update(Message::Prev);
        assert_eq!(swiper.current_index(), 0);

        let _ = swiper.update(Message::Next);
        let _ = swiper.update(Message::Next);
        assert_eq!(swiper.current_index(), 1);
        assert!(!swiper.shows_next());
    }

    #[test]
    fn test_replacing_images_keeps_valid_index() {
        let (mut swiper, _) = ImageSwiper::new(gallery(6));
        let _ = swiper.update(Message::OpenAt(5));

        let _ = swiper.set_options(gallery(3).navigation(NavigationStyle::Numbers));
        assert_eq!(swiper.current_index(), 2);
        assert!(swiper.is_open());

        let _ = swiper.set_options(gallery(0));
        assert!(!swiper.is_open());
        let _ = swiper.update(Message::OpenMore);
        assert!(!swiper.is_open());
    }

    #[test]
    fn test_empty_swiper_ignores_navigation() {
        let (mut swiper, _) = ImageSwiper::new(gallery(0));
        let _ = swiper.update(Message::OpenAt(0));
        let _ = swiper.update(Message::Next);
        assert!(!swiper.is_open());
        assert_eq!(swiper.current_index(), 0);
        assert_eq!(swiper.more_count(), 0);
    }
}
