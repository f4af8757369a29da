use crate::player::PlayerColor;

/// Fixed-size 2D drawing surface measured in pixels.
///
/// Dimensions are chosen when the surface is created and stay constant for a
/// match. Games redraw the whole frame every tick with [`Surface::clear`]
/// followed by [`Surface::fill_rect`] calls.
pub trait Surface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Clear the full surface.
    fn clear(&mut self);

    /// Fill the axis-aligned rectangle at `(x, y)` with the given color.
    /// Parts outside the surface are clipped.
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: PlayerColor);
}
