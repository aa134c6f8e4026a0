//! Index bookkeeping for the carousel.
//!
//! [`CarouselState`] owns the ordered item list and the active index. It never
//! leaves the `0 <= index < len` range: moves past either end either wrap (when
//! looping) or do nothing, and explicit jumps outside the range are rejected.

/// Carousel navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel requires at least one item")]
    Empty,

    #[error("slide index {index} is out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },
}

/// One image shown by the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Image URL, relative to the site root
    pub image_source: String,
    /// Accessible description of the image
    pub alt_text: String,
}

impl DisplayItem {
    pub fn new(image_source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_source: image_source.into(),
            alt_text: alt_text.into(),
        }
    }
}

/// Ordered, non-empty item list with an active index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState<T> {
    items: Vec<T>,
    current: usize,
    looping: bool,
}

impl<T> CarouselState<T> {
    /// Create a state positioned on the first item.
    ///
    /// Fails with [`CarouselError::Empty`] when `items` is empty.
    pub fn new(items: Vec<T>, looping: bool) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            items,
            current: 0,
            looping,
        })
    }

    /// Index of the active item
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Active item
    pub fn current(&self) -> &T {
        &self.items[self.current]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move forward one item. Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        let last = self.len() - 1;
        let target = if self.current < last {
            self.current + 1
        } else if self.looping {
            0
        } else {
            return false;
        };

        self.set(target)
    }

    /// Move back one item. Returns `true` if the index changed.
    pub fn previous(&mut self) -> bool {
        let target = if self.current > 0 {
            self.current - 1
        } else if self.looping {
            self.len() - 1
        } else {
            return false;
        };

        self.set(target)
    }

    /// Jump to `index`. Returns `Ok(true)` if the index changed.
    ///
    /// Out-of-range indices are rejected and leave the state untouched.
    pub fn go_to(&mut self, index: usize) -> Result<bool, CarouselError> {
        if index >= self.len() {
            return Err(CarouselError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(self.set(index))
    }

    fn set(&mut self, index: usize) -> bool {
        let changed = self.current != index;
        self.current = index;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc(looping: bool) -> CarouselState<char> {
        CarouselState::new(vec!['a', 'b', 'c'], looping).unwrap()
    }

    #[test]
    fn test_new_starts_at_first_item() {
        let state = abc(true);
        assert_eq!(state.current_index(), 0);
        assert_eq!(*state.current(), 'a');
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_new_rejects_empty_items() {
        let result = CarouselState::<char>::new(Vec::new(), true);
        assert_eq!(result.unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn test_next_wraps_when_looping() {
        let mut state = abc(true);
        let seen: Vec<usize> = (0..3)
            .map(|_| {
                state.next();
                state.current_index()
            })
            .collect();

        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_previous_wraps_when_looping() {
        let mut state = abc(true);
        assert!(state.previous());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_next_stops_at_end_without_loop() {
        let mut state = abc(false);
        state.go_to(2).unwrap();

        assert!(!state.next());
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_previous_stops_at_start_without_loop() {
        let mut state = abc(false);

        assert!(!state.previous());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_single_item_never_moves() {
        let mut state = CarouselState::new(vec!['a'], true).unwrap();

        assert!(!state.next());
        assert!(!state.previous());
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_go_to_sets_exact_index() {
        let mut state = abc(true);
        state.next();

        assert_eq!(state.go_to(0), Ok(true));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.go_to(2), Ok(true));
        assert_eq!(*state.current(), 'c');
    }

    #[test]
    fn test_go_to_same_index_reports_unchanged() {
        let mut state = abc(true);
        assert_eq!(state.go_to(0), Ok(false));
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let mut state = abc(true);
        state.go_to(1).unwrap();

        assert_eq!(
            state.go_to(3),
            Err(CarouselError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(state.go_to(usize::MAX).is_err());
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CarouselError::Empty.to_string(),
            "carousel requires at least one item"
        );
        assert_eq!(
            CarouselError::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "slide index 5 is out of range for 3 items"
        );
    }

    #[test]
    fn test_display_item_new() {
        let item = DisplayItem::new("/images/a.svg", "First banner");
        assert_eq!(item.image_source, "/images/a.svg");
        assert_eq!(item.alt_text, "First banner");
    }
}
