// Example: minimal fixed-height usage and scroll-to helpers.
use listwindow::{Align, ItemSource, ListWindow, ListWindowOptions};

fn main() {
    let mut engine: ListWindow =
        ListWindow::new(ListWindowOptions::new(500.0, 50.0).with_overscan(2));
    engine.set_items((0..1_000_000u64).map(ItemSource::new));

    let window = engine.window();
    println!("total_size={}", window.total_size);
    println!("range={:?}", window.range);
    println!("first_item={:?}", window.items.first());

    engine.on_scroll(123_456.0, 0);
    println!("after scroll: range={:?}", engine.visible_range());

    let target = engine.scroll_to_index(999_999, Align::End);
    println!("after scroll_to_index: target={target}");
}
