use std::ops::Range;

/// Height of a box in rows: top edge, number, bottom edge
pub const BOX_HEIGHT: u16 = 3;
/// Columns between neighbouring boxes
pub const BOX_GAP: u16 = 1;
const MIN_BOX_WIDTH: u16 = 3;
const MAX_BOX_WIDTH: u16 = 9;
/// Columns kept free on each side of the row for the scroll markers
const MARGIN: u16 = 2;

/// Where everything goes for a given terminal size and row length.
///
/// Rows too long for the terminal show a window of boxes that follows the
/// keyboard cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub title_y: u16,
    pub boxes_x: u16,
    pub boxes_y: u16,
    pub box_width: u16,
    pub labels_y: u16,
    pub info_y: u16,
    pub controls_y: u16,
    pub message_y: u16,
    count: usize,
    /// First slot shown
    first: usize,
    /// Number of slots shown
    visible: usize,
}

impl Layout {
    pub fn compute(term_width: u16, term_height: u16, count: usize, focus: usize) -> Self {
        let n = count.clamp(1, u16::MAX as usize) as u16;
        let usable = term_width.saturating_sub(MARGIN * 2);
        let box_width = (usable.saturating_sub(BOX_GAP.saturating_mul(n - 1)) / n)
            .clamp(MIN_BOX_WIDTH, MAX_BOX_WIDTH);
        let stride = box_width + BOX_GAP;
        let visible = (((usable + BOX_GAP) / stride).max(1) as usize).min(count);

        let first = if visible < count {
            focus.saturating_sub(visible / 2).min(count - visible)
        } else {
            0
        };
        let row_width = Self::row_width_for(visible, box_width);
        let boxes_x = term_width.saturating_sub(row_width) / 2;

        // title, subtitle, blank, boxes, labels, blank, info, blank, controls, blank, message
        let content_height = 2 + 1 + BOX_HEIGHT + 1 + 1 + 1 + 1 + 1 + 1 + 1;
        let title_y = if term_height > content_height + 2 {
            (term_height - content_height) / 3
        } else {
            0
        };
        let boxes_y = title_y + 3;
        let labels_y = boxes_y + BOX_HEIGHT;

        Self {
            title_y,
            boxes_x,
            boxes_y,
            box_width,
            labels_y,
            info_y: labels_y + 2,
            controls_y: labels_y + 4,
            message_y: labels_y + 6,
            count,
            first,
            visible,
        }
    }

    fn row_width_for(count: usize, box_width: u16) -> u16 {
        let n = count as u16;
        n * box_width + n.saturating_sub(1) * BOX_GAP
    }

    /// Width of the drawn part of the row
    pub fn row_width(&self) -> u16 {
        Self::row_width_for(self.visible, self.box_width)
    }

    /// Slots currently on screen
    pub fn visible_slots(&self) -> Range<usize> {
        self.first..self.first + self.visible
    }

    /// Whether a (possibly fractional, mid-slide) slot lies inside the window
    pub fn shows(&self, slot: f32) -> bool {
        self.visible > 0 && slot >= self.first as f32 && slot <= (self.first + self.visible - 1) as f32
    }

    pub fn hidden_left(&self) -> bool {
        self.first > 0
    }

    pub fn hidden_right(&self) -> bool {
        self.first + self.visible < self.count
    }

    /// Left column of a (possibly fractional, mid-slide) slot
    pub fn slot_x(&self, slot: f32) -> u16 {
        let x = self.boxes_x as f32 + (slot - self.first as f32) * (self.box_width + BOX_GAP) as f32;
        x.round().max(0.0) as u16
    }

    /// The box under a terminal cell, if any. Gaps between boxes hit nothing.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        if row < self.boxes_y
            || row >= self.boxes_y + BOX_HEIGHT
            || column < self.boxes_x
            || column >= self.boxes_x + self.row_width()
        {
            return None;
        }
        let offset = column - self.boxes_x;
        let stride = self.box_width + BOX_GAP;
        let index = (offset / stride) as usize;
        (index < self.visible && offset % stride < self.box_width).then_some(self.first + index)
    }
}
