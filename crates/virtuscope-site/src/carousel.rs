use crate::error::SiteError;
use std::time::Duration;

/// How often an autoplaying carousel advances.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);

/// Which slide of a carousel is showing.
///
/// Moving past either end wraps around.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Carousel {
    len: usize,
    current: usize,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self, SiteError> {
        if len == 0 {
            return Err(SiteError::EmptyCarousel);
        }
        Ok(Self {
            len,
            current: 0,
            autoplay: false,
        })
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn previous(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    /// Jumps to a slide, as the dot indicators do.
    pub fn go_to(&mut self, index: usize) -> Result<(), SiteError> {
        if index >= self.len {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Called every [`AUTOPLAY_INTERVAL`]; advances only when autoplay is on.
    pub fn tick(&mut self) -> bool {
        if self.autoplay {
            self.next();
        }
        self.autoplay
    }

    /// The "3 / 5" position label.
    pub fn position(&self) -> String {
        format!("{} / {}", self.current + 1, self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert_eq!(Carousel::new(0), Err(SiteError::EmptyCarousel));
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.previous(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = Carousel::new(1).unwrap();
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
    }

    #[test]
    fn go_to_checks_bounds() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.go_to(3).unwrap();
        assert_eq!(carousel.position(), "4 / 4");
        assert_eq!(
            carousel.go_to(4),
            Err(SiteError::SlideOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn tick_advances_only_with_autoplay() {
        let mut carousel = Carousel::new(2).unwrap();
        assert!(!carousel.tick());
        assert_eq!(carousel.current(), 0);

        carousel.set_autoplay(true);
        assert!(carousel.tick());
        assert_eq!(carousel.current(), 1);
        assert!(carousel.tick());
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn autoplay_can_be_set_up_front() {
        let mut carousel = Carousel::new(5).unwrap().with_autoplay(true);
        assert!(carousel.is_autoplay());
        assert_eq!(carousel.slide_count(), 5);
        assert_eq!(AUTOPLAY_INTERVAL, Duration::from_secs(5));

        assert!(carousel.tick());
        assert_eq!(carousel.position(), "2 / 5");

        carousel.set_autoplay(false);
        assert!(!carousel.is_autoplay());
        assert!(!carousel.tick());
    }
}
