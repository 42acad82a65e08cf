use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Panels and widgets receive their data as props (struct fields) and render
/// into a `Frame` within a given `Rect`. The three portal panels implement
/// this trait; the grid keeps its selection in a separate state struct
/// following Ratatui's `StatefulWidget` pattern instead.
///
/// `render` takes `&mut self` so components can update internal presentation
/// state (scroll offsets, cached layout) during the render pass.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
