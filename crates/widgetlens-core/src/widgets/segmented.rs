//! Segmented control widget.

use super::{ControlCore, InstanceId, ViewCore, WidgetTrait};
use crate::color::Rgba;
use crate::kind::WidgetKind;
use kurbo::Size;
use serde::Serialize;
use uuid::Uuid;

/// A horizontal row of mutually exclusive segments.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentedControl {
    pub(crate) id: InstanceId,
    pub view: ViewCore,
    pub control: ControlCore,
    segments: Vec<String>,
    selected_segment_index: Option<usize>,
    pub selected_segment_tint_color: Option<Rgba>,
}

impl SegmentedControl {
    const SEGMENT_WIDTH: f64 = 80.0;
    const HEIGHT: f64 = 32.0;
    /// Upper bound on the segment count.
    pub const MAX_SEGMENTS: usize = 64;

    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            view: ViewCore::default(),
            control: ControlCore::default(),
            segments: items.into_iter().map(Into::into).collect(),
            selected_segment_index: None,
            selected_segment_tint_color: None,
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn selected_segment_index(&self) -> Option<usize> {
        self.selected_segment_index
    }

    /// Select a segment; negative or out-of-range indices clear the selection.
    pub fn set_selected_segment_index(&mut self, index: i64) {
        self.selected_segment_index = usize::try_from(index)
            .ok()
            .filter(|&index| index < self.segments.len());
    }

    /// Grow or shrink the segment list, titling new segments by position.
    ///
    /// Counts above [`Self::MAX_SEGMENTS`] are capped.
    pub fn set_number_of_segments(&mut self, count: i64) {
        let count = usize::try_from(count).unwrap_or(0).min(Self::MAX_SEGMENTS);
        if count < self.segments.len() {
            self.segments.truncate(count);
        } else {
            for index in self.segments.len()..count {
                self.segments.push(format!("Segment {}", index + 1));
            }
        }
        if self
            .selected_segment_index
            .is_some_and(|index| index >= self.segments.len())
        {
            self.selected_segment_index = self.segments.len().checked_sub(1);
        }
    }
}

impl WidgetTrait for SegmentedControl {
    fn id(&self) -> InstanceId {
        self.id
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::SegmentedControl
    }

    fn view(&self) -> &ViewCore {
        &self.view
    }

    fn view_mut(&mut self) -> &mut ViewCore {
        &mut self.view
    }

    fn intrinsic_size(&self) -> Size {
        Size::new(self.segments.len() as f64 * Self::SEGMENT_WIDTH, Self::HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_segments() {
        let mut control = SegmentedControl::new(["First", "Second"]);
        control.set_number_of_segments(4);
        assert_eq!(control.segments(), ["First", "Second", "Segment 3", "Segment 4"]);
    }

    #[test]
    fn test_shrink_segments_clamps_selection() {
        let mut control = SegmentedControl::new(["First", "Second", "Third"]);
        control.set_selected_segment_index(2);
        control.set_number_of_segments(2);
        assert_eq!(control.selected_segment_index(), Some(1));
        control.set_number_of_segments(0);
        assert_eq!(control.selected_segment_index(), None);
    }

    #[test]
    fn test_segment_count_is_capped() {
        let mut control = SegmentedControl::new(["First"]);
        control.set_number_of_segments(i64::MAX);
        assert_eq!(control.segments().len(), SegmentedControl::MAX_SEGMENTS);
        assert_eq!(
            control.intrinsic_size().width,
            SegmentedControl::MAX_SEGMENTS as f64 * SegmentedControl::SEGMENT_WIDTH
        );
    }

    #[test]
    fn test_out_of_range_selection_clears() {
        let mut control = SegmentedControl::new(["First", "Second"]);
        control.set_selected_segment_index(0);
        control.set_selected_segment_index(5);
        assert_eq!(control.selected_segment_index(), None);
    }
}
