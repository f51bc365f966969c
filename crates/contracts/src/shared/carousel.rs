/// Index of a wrapping carousel.
///
/// `len` is fixed at construction; an empty carousel stays at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jumps to `index`; out-of-range values are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_both_ways() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        carousel.select(1);
        carousel.select(7);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn test_empty_carousel() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
    }
}
