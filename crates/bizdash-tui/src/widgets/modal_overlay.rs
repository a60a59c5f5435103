//! Shared modal overlay plumbing: centering, dimming, shadow.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette;

/// Center a fixed-size rect within an area, clamped to the area.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim every cell of `area` so the modal above stands out.
pub fn dim_background(buf: &mut Buffer, area: Rect) {
    let dim_style = Style::default()
        .fg(palette::TEXT_MUTED)
        .bg(palette::DEEPEST_BG);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// 1-cell shadow along the right and bottom edges of `modal`.
pub fn render_shadow(buf: &mut Buffer, modal: Rect) {
    let shadow_style = Style::default().fg(palette::SHADOW).bg(palette::SHADOW);

    let right_x = modal.right();
    for y in modal.y.saturating_add(1)..modal.bottom().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    let bottom_y = modal.bottom();
    for x in modal.x.saturating_add(1)..modal.right().saturating_add(1) {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Dim `screen`, then clear a centered `width` x `height` rect with a
/// shadow and return it for the modal to draw into.
pub fn prepare(buf: &mut Buffer, screen: Rect, width: u16, height: u16) -> Rect {
    dim_background(buf, screen);
    // Leave room for the shadow
    let modal = centered_rect(
        width,
        height,
        Rect {
            width: screen.width.saturating_sub(1),
            height: screen.height.saturating_sub(1),
            ..screen
        },
    );
    render_shadow(buf, modal);
    Clear.render(modal, buf);
    modal
}
