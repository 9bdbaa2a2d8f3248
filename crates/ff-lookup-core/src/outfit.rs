//! Outfit panel display mode

/// Whether the outfit panel shows the figure or the slot list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutfitView {
    #[default]
    Image,
    Detail,
}

impl OutfitView {
    pub fn toggled(self) -> Self {
        match self {
            OutfitView::Image => OutfitView::Detail,
            OutfitView::Detail => OutfitView::Image,
        }
    }

    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn label(&self) -> &'static str {
        match self {
            OutfitView::Image => "image",
            OutfitView::Detail => "details",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_and_returns() {
        let mut view = OutfitView::default();
        assert_eq!(view, OutfitView::Image);
        view.toggle();
        assert_eq!(view, OutfitView::Detail);
        view.toggle();
        assert_eq!(view, OutfitView::Image);
    }
}
