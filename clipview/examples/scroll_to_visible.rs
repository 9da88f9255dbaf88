// Example: animated scroll-to-visible driven by a simulated frame clock.
use clipview::{ClipView, ClipViewOptions, Rect, Size};

fn main() {
    let mut view = ClipView::new(
        ClipViewOptions::new()
            .with_initial_viewport(Some(Size::new(800.0, 600.0)))
            .with_initial_content_size(Some(Size::new(2000.0, 2000.0)))
            .with_scroll_duration_ms(300),
    );

    // Reveal a rect near the bottom-right corner with a deceleration curve.
    view.scroll_to_visible(&Rect::new(1800.0, 1800.0, 50.0, 50.0), true, 0)
        .unwrap();

    let mut now_ms = 0u64;
    let mut frame = 0u64;

    loop {
        // Simulate a 60fps "tick".
        now_ms += 16;
        frame += 1;

        let origin = view.tick(now_ms);

        if frame % 4 == 0 {
            println!(
                "t={now_ms}ms origin=({:.1}, {:.1}) animating={}",
                view.origin().x,
                view.origin().y,
                view.is_animating()
            );
        }

        // Simulate a second request interrupting the first: at ~120ms,
        // reveal a rect back near the top instead.
        if (120..120 + 16).contains(&now_ms) {
            view.scroll_to_visible(&Rect::new(0.0, 300.0, 100.0, 100.0), true, now_ms)
                .unwrap();
        }

        if origin.is_none() && !view.is_animating() && frame > 1 {
            break;
        }
    }

    println!(
        "done: origin=({:.1}, {:.1})",
        view.origin().x,
        view.origin().y
    );
}
