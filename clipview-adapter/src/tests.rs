use crate::*;

use alloc::vec::Vec;
use clipview::{ClipViewOptions, Point, Rect, Size};

#[derive(Clone, Debug, Default)]
struct RecordingLayer {
    offsets: Vec<Point>,
    opaque: Option<bool>,
}

impl RecordingLayer {
    fn last_offset(&self) -> Option<Point> {
        self.offsets.last().copied()
    }
}

impl ScrollLayer for RecordingLayer {
    fn set_content_offset(&mut self, offset: Point) {
        self.offsets.push(offset);
    }

    fn set_opaque(&mut self, opaque: bool) {
        self.opaque = Some(opaque);
    }
}

fn controller() -> Controller<RecordingLayer> {
    Controller::new(
        ClipViewOptions::new()
            .with_initial_viewport(Some(Size::new(800.0, 600.0)))
            .with_initial_content_size(Some(Size::new(2000.0, 2000.0)))
            .with_scroll_duration_ms(300),
        RecordingLayer::default(),
    )
}

#[test]
fn construction_configures_and_positions_the_layer() {
    let c = controller();
    assert_eq!(c.layer().opaque, Some(false));
    assert_eq!(c.layer().last_offset(), Some(Point::ZERO));
}

#[test]
fn layer_matches_origin_after_immediate_scroll() {
    let mut c = controller();
    c.scroll_to_visible(&Rect::new(1800.0, 1800.0, 50.0, 50.0), false, 0)
        .unwrap();
    assert_eq!(c.view().origin(), Point::new(1050.0, 1250.0));
    assert_eq!(c.layer().last_offset(), Some(c.view().origin()));
}

#[test]
fn layer_stays_synced_through_an_animation() {
    let mut c = controller();
    c.scroll_to_visible(&Rect::new(1800.0, 1800.0, 50.0, 50.0), true, 0)
        .unwrap();

    for now_ms in (0..=360).step_by(60) {
        c.tick(now_ms);
        assert_eq!(c.layer().last_offset(), Some(c.view().origin()));
    }
    assert!(!c.is_animating());
    assert_eq!(c.view().origin(), Point::new(1050.0, 1250.0));
}

#[test]
fn redundant_pushes_are_suppressed() {
    let mut c = controller();
    let pushes = c.layer().offsets.len();

    c.scroll_to(Point::ZERO);
    c.tick(16);
    c.tick(32);
    assert_eq!(c.layer().offsets.len(), pushes);
}

#[test]
fn continuous_scroll_cancels_animation() {
    let mut c = controller();
    c.animate_to(Point::new(1000.0, 0.0), 0);
    c.tick(100);

    let before = c.view().origin();
    c.on_wheel(0.0, 120.0, ScrollSource::Continuous, 116);
    assert!(!c.is_animating());
    assert_eq!(c.view().origin(), Point::new(before.x, before.y + 120.0));
    assert_eq!(c.layer().last_offset(), Some(c.view().origin()));
}

#[test]
fn discrete_wheel_steps_extend_the_animation_target() {
    let mut c = controller();
    let first = c.on_wheel(0.0, 100.0, ScrollSource::Discrete, 0);
    assert!(c.is_animating());
    assert_eq!(first, Point::new(0.0, 100.0));

    let second = c.on_wheel(0.0, 100.0, ScrollSource::Discrete, 16);
    assert_eq!(second, Point::new(0.0, 200.0));

    let mut resting = Point::ZERO;
    for now_ms in (16..=400).step_by(16) {
        if let Some(origin) = c.tick(now_ms) {
            resting = origin;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(resting, Point::new(0.0, 200.0));
}

#[test]
fn opaque_flag_reaches_layer_without_moving_origin() {
    let mut c = controller();
    c.animate_to(Point::new(500.0, 500.0), 0);
    c.tick(100);
    let before = c.view().origin();

    c.set_opaque(true);
    assert_eq!(c.layer().opaque, Some(true));
    assert_eq!(c.view().origin(), before);
    assert!(c.is_animating());
}

#[test]
fn stale_frame_token_does_not_advance() {
    let mut c = controller();
    c.animate_to(Point::new(500.0, 0.0), 0);
    let token = c.frame_token();

    c.animate_to(Point::new(0.0, 500.0), 50);
    let before = c.view().origin();
    assert_eq!(c.tick_frame(token, 100), None);
    assert_eq!(c.view().origin(), before);
}

#[test]
fn resize_reclamps_and_resyncs() {
    let mut c = controller();
    c.scroll_to(Point::new(1200.0, 1400.0));

    c.on_content_resize(Size::new(1000.0, 1000.0));
    assert_eq!(c.view().origin(), Point::new(200.0, 400.0));
    assert_eq!(c.layer().last_offset(), Some(c.view().origin()));
}

#[test]
fn frame_state_restore_resyncs_layer() {
    let mut c = controller();
    c.scroll_to(Point::new(300.0, 400.0));
    let frame = c.frame_state();

    let mut other = Controller::new(ClipViewOptions::new(), RecordingLayer::default());
    other.restore_frame_state(frame, 0);
    assert_eq!(other.view().origin(), Point::new(300.0, 400.0));
    assert_eq!(other.layer().last_offset(), Some(Point::new(300.0, 400.0)));
}
