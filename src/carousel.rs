// 🎠 Carousel - Timer-Driven Image Rotator with Lightbox
// Pure state machine; the TUI and server front ends do the rendering

use std::time::Duration;

/// Autoplay advances one slide every interval while armed
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(2500);

/// Keys the carousel reacts to while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
}

/// Scrolling-strip rotator over an ordered image list.
///
/// Two orthogonal state machines live here: the strip position (advanced by
/// the autoplay tick or manual stepping, wrapping seamlessly by resetting
/// with animation suppressed) and the lightbox overlay (opened on item
/// activation, stepped with arrow keys, closed with Escape). Opening the
/// lightbox does not stop the strip from ticking.
#[derive(Debug, Clone)]
pub struct Carousel {
    images: Vec<String>,
    slide: usize,
    animate: bool,
    paused: bool,
    item_width: u16,
    lightbox: Option<usize>,
}

impl Carousel {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            slide: 0,
            animate: true,
            paused: false,
            item_width: 0,
            lightbox: None,
        }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Image currently at the front of the strip; None for an empty list
    pub fn visible(&self) -> Option<&str> {
        self.images.get(self.slide).map(|s| s.as_str())
    }

    pub fn slide(&self) -> usize {
        self.slide
    }

    /// False exactly on the frame where the strip wrapped back to the start,
    /// so the reset renders as a reposition instead of a reverse scroll
    pub fn animate(&self) -> bool {
        self.animate
    }

    // ------------------------------------------------------------------
    // Measurement and pause
    // ------------------------------------------------------------------

    /// Record the measured item width; autoplay stays disarmed until the
    /// layout has been measured at least once
    pub fn set_item_width(&mut self, width: u16) {
        self.item_width = width;
    }

    /// Pointer-hover pause; freezes autoplay without touching position
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The advance timer is armed only while not paused, the layout has
    /// been measured, and there is something to rotate
    pub fn autoplay_armed(&self) -> bool {
        !self.paused && self.item_width > 0 && !self.images.is_empty()
    }

    // ------------------------------------------------------------------
    // Strip position
    // ------------------------------------------------------------------

    /// One autoplay interval elapsed; advances only while armed
    pub fn tick(&mut self) {
        if self.autoplay_armed() {
            self.advance();
        }
    }

    /// Manual forward step; works even while paused
    pub fn step_forward(&mut self) {
        if !self.images.is_empty() {
            self.advance();
        }
    }

    /// Manual backward step; the strip does not wrap backwards
    pub fn step_back(&mut self) {
        self.slide = self.slide.saturating_sub(1);
        self.animate = true;
    }

    fn advance(&mut self) {
        self.slide += 1;
        if self.slide >= self.images.len() {
            self.slide = 0;
            self.animate = false;
        } else {
            self.animate = true;
        }
    }

    /// Called after the wrap frame has been presented; re-enables animation
    pub fn settle(&mut self) {
        self.animate = true;
    }

    // ------------------------------------------------------------------
    // Lightbox overlay
    // ------------------------------------------------------------------

    /// Open the lightbox at an item index. Any integer resolves into range
    /// by wrapping, so activating a duplicated strip item is safe. No-op on
    /// an empty list.
    pub fn open_at(&mut self, index: isize) {
        if self.images.is_empty() {
            return;
        }
        let len = self.images.len() as isize;
        self.lightbox = Some(index.rem_euclid(len) as usize);
    }

    pub fn close(&mut self) {
        self.lightbox = None;
    }

    pub fn is_open(&self) -> bool {
        self.lightbox.is_some()
    }

    /// Image shown in the open lightbox, if any
    pub fn lightbox_image(&self) -> Option<&str> {
        self.lightbox.and_then(|i| self.images.get(i)).map(|s| s.as_str())
    }

    pub fn lightbox_index(&self) -> Option<usize> {
        self.lightbox
    }

    /// Keyboard navigation; ignored while the lightbox is closed
    pub fn handle_key(&mut self, key: Key) {
        let Some(index) = self.lightbox else {
            return;
        };
        let len = self.images.len();
        match key {
            Key::Escape => self.lightbox = None,
            Key::ArrowRight => self.lightbox = Some((index + 1) % len),
            Key::ArrowLeft => self.lightbox = Some((index + len - 1) % len),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(n: usize) -> Carousel {
        let images = (0..n).map(|i| format!("img-{}.jpg", i)).collect();
        let mut c = Carousel::new(images);
        c.set_item_width(32);
        c
    }

    #[test]
    fn test_empty_list_is_inert() {
        let mut c = Carousel::new(vec![]);
        c.set_item_width(32);

        assert!(!c.autoplay_armed());
        assert!(c.visible().is_none());

        c.tick();
        c.step_forward();
        c.step_back();
        c.open_at(5);
        c.handle_key(Key::ArrowRight);

        assert_eq!(c.slide(), 0);
        assert!(!c.is_open());
    }

    #[test]
    fn test_autoplay_disarmed_until_measured() {
        let mut c = Carousel::new(vec!["a.jpg".into(), "b.jpg".into()]);
        assert!(!c.autoplay_armed());
        c.tick();
        assert_eq!(c.slide(), 0);

        c.set_item_width(32);
        assert!(c.autoplay_armed());
        c.tick();
        assert_eq!(c.slide(), 1);
    }

    #[test]
    fn test_tick_advances_by_exactly_one() {
        let mut c = carousel(3);
        c.tick();
        assert_eq!(c.slide(), 1);
        c.tick();
        assert_eq!(c.slide(), 2);
    }

    #[test]
    fn test_pause_freezes_and_resume_continues() {
        let mut c = carousel(3);
        c.tick();
        assert_eq!(c.slide(), 1);

        c.set_paused(true);
        assert!(!c.autoplay_armed());
        c.tick();
        c.tick();
        assert_eq!(c.slide(), 1);

        c.set_paused(false);
        c.tick();
        assert_eq!(c.slide(), 2);
    }

    #[test]
    fn test_wrap_resets_without_animated_jump() {
        let mut c = carousel(3);
        c.tick();
        c.tick();
        assert!(c.animate());

        // Third tick wraps: position resets, animation suppressed
        c.tick();
        assert_eq!(c.slide(), 0);
        assert!(!c.animate());

        // Next frame re-enables animation
        c.settle();
        assert!(c.animate());
        c.tick();
        assert_eq!(c.slide(), 1);
        assert!(c.animate());
    }

    #[test]
    fn test_manual_step_back_saturates_at_start() {
        let mut c = carousel(3);
        c.step_back();
        assert_eq!(c.slide(), 0);

        c.step_forward();
        c.step_forward();
        c.step_back();
        assert_eq!(c.slide(), 1);
    }

    #[test]
    fn test_manual_step_works_while_paused() {
        let mut c = carousel(3);
        c.set_paused(true);
        c.step_forward();
        assert_eq!(c.slide(), 1);
    }

    #[test]
    fn test_open_at_wraps_any_index_into_range() {
        let mut c = carousel(3);

        c.open_at(3);
        assert_eq!(c.lightbox_index(), Some(0));

        c.open_at(7);
        assert_eq!(c.lightbox_index(), Some(1));

        c.open_at(-1);
        assert_eq!(c.lightbox_index(), Some(2));
    }

    #[test]
    fn test_lightbox_keys_step_and_close() {
        let mut c = carousel(3);
        c.open_at(0);

        c.handle_key(Key::ArrowRight);
        assert_eq!(c.lightbox_index(), Some(1));

        c.handle_key(Key::ArrowLeft);
        c.handle_key(Key::ArrowLeft);
        assert_eq!(c.lightbox_index(), Some(2));

        c.handle_key(Key::ArrowRight);
        assert_eq!(c.lightbox_index(), Some(0));
        assert_eq!(c.lightbox_image(), Some("img-0.jpg"));

        c.handle_key(Key::Escape);
        assert!(!c.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut c = carousel(3);
        c.handle_key(Key::ArrowRight);
        c.handle_key(Key::Escape);
        assert!(!c.is_open());
        assert_eq!(c.slide(), 0);
    }

    #[test]
    fn test_lightbox_does_not_stop_autoplay() {
        let mut c = carousel(3);
        c.open_at(0);

        c.tick();
        assert_eq!(c.slide(), 1);
        assert_eq!(c.lightbox_index(), Some(0));

        c.handle_key(Key::ArrowRight);
        c.tick();
        assert_eq!(c.slide(), 2);
        assert_eq!(c.lightbox_index(), Some(1));
    }
}
