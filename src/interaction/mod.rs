use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Hit-test target recorded for every marker drawn during a redraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopupAnchor {
    pub series_id: String,
    /// Data-space value of the marked point.
    pub x: f64,
    pub y: f64,
    /// Pixel position the popup is anchored to.
    pub anchor_x: f64,
    pub anchor_y: f64,
}

impl PopupAnchor {
    #[must_use]
    pub fn distance_sq_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.anchor_x - x;
        let dy = self.anchor_y - y;
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchEventKind {
    Down,
    Move,
    Up,
}

/// Pointer or touch input in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub kind: TouchEventKind,
    pub x: f64,
    pub y: f64,
}

impl TouchEvent {
    #[must_use]
    pub fn down(x: f64, y: f64) -> Self {
        Self {
            kind: TouchEventKind::Down,
            x,
            y,
        }
    }

    #[must_use]
    pub fn moved(x: f64, y: f64) -> Self {
        Self {
            kind: TouchEventKind::Move,
            x,
            y,
        }
    }

    #[must_use]
    pub fn up(x: f64, y: f64) -> Self {
        Self {
            kind: TouchEventKind::Up,
            x,
            y,
        }
    }
}

/// Host-side popup used to show the value of a touched point.
///
/// Implementations usually wrap a dialog plus the text widget inside it.
pub trait PopupSink {
    fn show_popup(&mut self, anchor: &PopupAnchor, text: &str);
}

/// Returns the anchor nearest to `(x, y)` within `radius` pixels.
///
/// Equal distances resolve to the anchor recorded first.
#[must_use]
pub fn hit_test_popup_anchors(
    anchors: &[PopupAnchor],
    x: f64,
    y: f64,
    radius: f64,
) -> Option<&PopupAnchor> {
    if !x.is_finite() || !y.is_finite() || !radius.is_finite() || radius < 0.0 {
        return None;
    }
    let limit = radius * radius;

    anchors
        .iter()
        .enumerate()
        .map(|(index, anchor)| (index, anchor, anchor.distance_sq_to(x, y)))
        .filter(|(_, _, distance)| distance.is_finite() && *distance <= limit)
        .min_by_key(|(index, _, distance)| (OrderedFloat(*distance), *index))
        .map(|(_, anchor, _)| anchor)
}

#[cfg(test)]
mod tests {
    use super::{PopupAnchor, hit_test_popup_anchors};

    fn anchor(id: &str, anchor_x: f64, anchor_y: f64) -> PopupAnchor {
        PopupAnchor {
            series_id: id.to_owned(),
            x: 0.0,
            y: 0.0,
            anchor_x,
            anchor_y,
        }
    }

    #[test]
    fn hit_test_picks_nearest_anchor_inside_radius() {
        let anchors = vec![anchor("a", 10.0, 10.0), anchor("b", 30.0, 10.0)];
        let hit = hit_test_popup_anchors(&anchors, 26.0, 12.0, 8.0).expect("hit");
        assert_eq!(hit.series_id, "b");
        assert!(hit_test_popup_anchors(&anchors, 20.0, 40.0, 8.0).is_none());
    }

    #[test]
    fn hit_test_ties_resolve_to_first_recorded() {
        let anchors = vec![anchor("first", 0.0, 0.0), anchor("second", 10.0, 0.0)];
        let hit = hit_test_popup_anchors(&anchors, 5.0, 0.0, 5.0).expect("hit");
        assert_eq!(hit.series_id, "first");
    }
}
