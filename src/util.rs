use crate::consts;
use ratatui::layout::{Flex, Layout, Rect, Size};
use std::error::Error;
use std::fmt;

/// Return the rectangle of size [`consts::DISPLAY_SIZE`] centered in
/// `buffer_area`
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Return a rectangle of the given size centered in `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [r] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [r] = Layout::vertical([size.height]).flex(Flex::Center).areas(r);
    r
}

/// Formats an error together with all of its sources, separated by colons
#[derive(Clone, Copy, Debug)]
pub(crate) struct DisplayChain<'a>(pub(crate) &'a (dyn Error + 'static));

impl fmt::Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(e) = source {
            write!(f, ": {e}")?;
            source = e.source();
        }
        Ok(())
    }
}
