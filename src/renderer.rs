use super::config::SimConfig;

/// Narrow interface the core draws through. The core never depends on
/// rendering succeeding; implementations swallow their own failures.
pub trait Renderer {
    /// Draw the base state: region boundaries and the last-known-position
    /// marker.
    fn draw_base(&mut self, config: &SimConfig);

    /// Mark where the target was actually found, in basemap pixels.
    fn mark_found(&mut self, position: (u32, u32));
}

/// Renderer for batch and headless runs.
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn draw_base(&mut self, _config: &SimConfig) {}

    fn mark_found(&mut self, _position: (u32, u32)) {}
}
