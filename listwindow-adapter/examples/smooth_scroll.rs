// Example: tween-driven smooth scrolling through the Controller.
use listwindow::{Align, ItemSource, ListWindowOptions};
use listwindow_adapter::{Controller, Easing};

fn main() {
    let mut c: Controller = Controller::new(ListWindowOptions::new(400.0, 50.0));
    c.engine_mut().set_items((0..10_000u64).map(ItemSource::new));

    let to = c.smooth_scroll_to_index(2_000, Align::Center, 0, 240, Easing::SmoothStep);
    println!("tween target={to}");

    // The host would run this from its frame loop, applying the returned
    // position to the real scroll container.
    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(position) = c.tick(now_ms) {
            println!("t={now_ms}ms position={position:.1}");
        }
    }

    println!("final range={:?}", c.engine().visible_range());
}
