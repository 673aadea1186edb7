//! Integration tests for meterkit-core.
//!
//! These tests verify the public API works correctly end-to-end.

use meterkit_core::{
    Canvas, Color, Constraints, CountdownTimer, DisplayMetrics, DrawCommand, MeasureMode, Padding,
    Point, RecordingCanvas, Rect, Size, TextStyle, Timer, TimerEvent,
};

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_roundtrip_hex() {
    let original = Color::from_rgb8(0, 100, 100);
    let parsed = Color::from_hex(&original.to_hex()).expect("valid hex");
    assert_eq!(parsed, original);
}

// =============================================================================
// Layout Integration Tests
// =============================================================================

#[test]
fn test_constraints_modes_follow_parent_box() {
    let exact = Constraints::tight(Size::new(320.0, 48.0));
    assert_eq!(exact.width_mode(), MeasureMode::Exactly(320.0));

    let bounded = Constraints::loose(Size::new(320.0, 48.0));
    assert_eq!(bounded.height_mode(), MeasureMode::AtMost(48.0));

    let free = Constraints::unbounded();
    assert_eq!(free.width_mode(), MeasureMode::Unspecified);
}

#[test]
fn test_padding_interior() {
    let bounds = Rect::new(0.0, 0.0, 200.0, 40.0);
    let padding = Padding::new(10.0, 4.0, 30.0, 4.0);
    let interior = Rect::from_edges(
        padding.left,
        padding.top,
        bounds.width - padding.right,
        bounds.height - padding.bottom,
    );
    assert_eq!(interior.width, 200.0 - padding.horizontal());
    assert_eq!(interior.height, 40.0 - padding.vertical());
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_recorded_frame_serializes_to_json() {
    let mut canvas = RecordingCanvas::new();
    canvas.fill_rect(Rect::new(0.0, 0.0, 50.0, 10.0), Color::BLACK);
    canvas.draw_text("25%", Point::new(0.0, 10.0), &TextStyle::default());

    let json = serde_json::to_string(canvas.commands()).expect("serializable");
    let back: Vec<DrawCommand> = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back.as_slice(), canvas.commands());
}

// =============================================================================
// Density Integration Tests
// =============================================================================

#[test]
fn test_display_metrics_xhdpi() {
    let xhdpi = DisplayMetrics::new(2.0, 2.0);
    assert_eq!(xhdpi.dp_to_px(10.0), 20.5);
    assert_eq!(xhdpi.sp_to_px(10.0), 20.0);
}

// =============================================================================
// Timer Integration Tests
// =============================================================================

#[test]
fn test_countdown_timer_frame_loop() {
    let mut timer = CountdownTimer::new();
    timer.start(100, 10_000);

    // Simulate a 60 Hz host loop for eleven seconds.
    let mut ticks = 0;
    let mut finished = false;
    for _ in 0..660 {
        for event in timer.advance(16) {
            match event {
                TimerEvent::Tick { .. } => ticks += 1,
                TimerEvent::Finish => finished = true,
            }
        }
    }

    assert_eq!(ticks, 100);
    assert!(finished);
    assert!(!timer.is_active());
}
