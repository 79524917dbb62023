//! Side panel visibility and outside-click dismissal
//!
//! While the panel is open it owns a pointer listener. The listener only
//! exists inside [`PanelVisibility`]'s open state: closing the panel drops
//! it, and [`pointer_subscription`] is only returned while it is alive.

use super::arrow_button::ARROW_BUTTON_SIZE;
use iced::event::{self, Event};
use iced::{mouse, touch, Point, Subscription};
use tracing::debug;

/// Width of the slide-in form region
pub const PANEL_WIDTH: f32 = 616.0;

/// Horizontal padding on each side of the toggle button
pub const TOGGLE_GUTTER: f32 = 14.0;

/// Pointer events the open panel listens to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Left,
    Pressed,
    /// Touch presses carry their own position
    PressedAt(Point),
}

/// Screen region owned by the panel
///
/// The panel is docked to the left window edge at full height. The toggle
/// column to its right belongs to the panel too, so pressing the toggle while
/// open is never treated as an outside click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub panel_width: f32,
    pub toggle_width: f32,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            panel_width: PANEL_WIDTH,
            toggle_width: ARROW_BUTTON_SIZE + 2.0 * TOGGLE_GUTTER,
        }
    }
}

impl PanelGeometry {
    /// Right edge of the region while the panel is open
    pub fn open_extent(&self) -> f32 {
        self.panel_width + self.toggle_width
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x < self.open_extent() && point.y >= 0.0
    }
}

/// Pointer listener state, alive only while the panel is open
#[derive(Debug, Clone, Default)]
struct OutsideClickListener {
    cursor: Option<Point>,
}

impl OutsideClickListener {
    /// Returns `true` if the event is a press outside `geometry`
    fn on_event(&mut self, event: PointerEvent, geometry: &PanelGeometry) -> bool {
        match event {
            PointerEvent::Moved(position) => {
                self.cursor = Some(position);
                false
            }
            PointerEvent::Left => {
                self.cursor = None;
                false
            }
            PointerEvent::Pressed => self
                .cursor
                .map_or(false, |position| !geometry.contains(position)),
            PointerEvent::PressedAt(position) => {
                self.cursor = Some(position);
                !geometry.contains(position)
            }
        }
    }
}

/// Open/closed state of the side panel
#[derive(Debug, Clone, Default)]
pub struct PanelVisibility {
    listener: Option<OutsideClickListener>,
}

impl PanelVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.listener.is_some()
    }

    /// Whether the outside-click listener is registered
    pub fn is_listening(&self) -> bool {
        self.listener.is_some()
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.listener = Some(OutsideClickListener::default());
            debug!("Settings panel opened");
        }
    }

    pub fn close(&mut self) {
        if self.listener.take().is_some() {
            debug!("Settings panel closed");
        }
    }

    /// Feed a pointer event; closes the panel on a press outside `geometry`
    pub fn handle_pointer(&mut self, event: PointerEvent, geometry: &PanelGeometry) {
        let outside = match self.listener.as_mut() {
            Some(listener) => listener.on_event(event, geometry),
            // Events already queued when the panel closed
            None => false,
        };

        if outside {
            debug!("Pointer pressed outside settings panel");
            self.close();
        }
    }
}

/// Global pointer listener for an open panel
pub fn pointer_subscription() -> Subscription<PointerEvent> {
    event::listen_with(pointer_event)
}

fn pointer_event(event: Event, _status: event::Status) -> Option<PointerEvent> {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => Some(PointerEvent::Moved(position)),
        Event::Mouse(mouse::Event::CursorLeft) => Some(PointerEvent::Left),
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(PointerEvent::Pressed),
        Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(PointerEvent::PressedAt(position))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_even_times_restores_state() {
        let mut visibility = PanelVisibility::new();
        assert!(!visibility.is_open());

        for round in 1..=6 {
            visibility.toggle();
            assert_eq!(visibility.is_open(), round % 2 == 1);
        }
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_listener_tracks_visibility() {
        let mut visibility = PanelVisibility::new();
        assert!(!visibility.is_listening());

        visibility.toggle();
        assert!(visibility.is_listening());

        visibility.close();
        assert!(!visibility.is_listening());

        // Closing twice is a no-op
        visibility.close();
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_press_outside_closes() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();
        visibility.toggle();

        visibility.handle_pointer(PointerEvent::Moved(Point::new(1000.0, 300.0)), &geometry);
        assert!(visibility.is_open());

        visibility.handle_pointer(PointerEvent::Pressed, &geometry);
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_press_inside_keeps_open() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();
        visibility.toggle();

        visibility.handle_pointer(PointerEvent::Moved(Point::new(200.0, 300.0)), &geometry);
        visibility.handle_pointer(PointerEvent::Pressed, &geometry);
        assert!(visibility.is_open());

        // Toggle column counts as inside
        let on_toggle = Point::new(geometry.panel_width + geometry.toggle_width / 2.0, 40.0);
        visibility.handle_pointer(PointerEvent::PressedAt(on_toggle), &geometry);
        assert!(visibility.is_open());
    }

    #[test]
    fn test_press_without_cursor_is_ignored() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();
        visibility.toggle();

        visibility.handle_pointer(PointerEvent::Pressed, &geometry);
        assert!(visibility.is_open());

        visibility.handle_pointer(PointerEvent::Moved(Point::new(900.0, 10.0)), &geometry);
        visibility.handle_pointer(PointerEvent::Left, &geometry);
        visibility.handle_pointer(PointerEvent::Pressed, &geometry);
        assert!(visibility.is_open());
    }

    #[test]
    fn test_touch_outside_closes() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();
        visibility.toggle();

        visibility.handle_pointer(PointerEvent::PressedAt(Point::new(1200.0, 500.0)), &geometry);
        assert!(!visibility.is_open());
    }

    #[test]
    fn test_events_after_close_are_ignored() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();

        visibility.handle_pointer(PointerEvent::PressedAt(Point::new(1200.0, 500.0)), &geometry);
        assert!(!visibility.is_open());
        assert!(!visibility.is_listening());
    }

    #[test]
    fn test_reopen_forgets_cursor() {
        let geometry = PanelGeometry::default();
        let mut visibility = PanelVisibility::new();

        visibility.toggle();
        visibility.handle_pointer(PointerEvent::Moved(Point::new(1200.0, 500.0)), &geometry);
        visibility.toggle();
        visibility.toggle();

        // Stale position from the previous open state must not close it
        visibility.handle_pointer(PointerEvent::Pressed, &geometry);
        assert!(visibility.is_open());
    }

    #[test]
    fn test_geometry_bounds() {
        let geometry = PanelGeometry::default();
        assert_eq!(geometry.open_extent(), PANEL_WIDTH + ARROW_BUTTON_SIZE + 28.0);
        assert!(geometry.contains(Point::new(0.0, 0.0)));
        assert!(!geometry.contains(Point::new(geometry.open_extent(), 0.0)));
        assert!(!geometry.contains(Point::new(-1.0, 10.0)));
    }
}
