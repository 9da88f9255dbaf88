// Example: discrete wheel clicks coalescing into one decaying glide,
// with the compositing layer kept in sync every frame.
use clipview::{ClipViewOptions, Point, Size};
use clipview_adapter::{Controller, ScrollLayer, ScrollSource};

struct PrintLayer;

impl ScrollLayer for PrintLayer {
    fn set_content_offset(&mut self, offset: Point) {
        println!("layer <- offset=({:.1}, {:.1})", offset.x, offset.y);
    }

    fn set_opaque(&mut self, opaque: bool) {
        println!("layer <- opaque={opaque}");
    }
}

fn main() {
    let mut c = Controller::new(
        ClipViewOptions::new()
            .with_initial_viewport(Some(Size::new(800.0, 600.0)))
            .with_initial_content_size(Some(Size::new(800.0, 4000.0))),
        PrintLayer,
    );

    // Three wheel clicks in quick succession: each extends the in-flight
    // deceleration target instead of restarting the glide from scratch.
    let mut now_ms = 0u64;
    for _ in 0..3 {
        let target = c.on_wheel(0.0, 120.0, ScrollSource::Discrete, now_ms);
        println!("t={now_ms}ms wheel click -> target=({:.1}, {:.1})", target.x, target.y);
        now_ms += 48;
        for _ in 0..3 {
            now_ms += 16;
            c.tick(now_ms);
        }
    }

    // Let the glide run out.
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }

    println!(
        "at rest: origin=({:.1}, {:.1})",
        c.view().origin().x,
        c.view().origin().y
    );
}
