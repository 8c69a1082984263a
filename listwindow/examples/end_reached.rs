// Example: end-reached pagination with the once-per-epoch latch.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use listwindow::{ItemSource, ListWindow, ListWindowOptions};

fn main() {
    let pages = Arc::new(AtomicUsize::new(1));
    let mut engine: ListWindow = ListWindow::new(
        ListWindowOptions::new(400.0, 50.0)
            .with_end_reached_threshold(100.0)
            .with_on_end_reached(Some({
                let pages = Arc::clone(&pages);
                move || {
                    let page = pages.fetch_add(1, Ordering::Relaxed) + 1;
                    println!("end reached -> load page {page}");
                }
            })),
    );

    engine.set_items((0..200u64).map(ItemSource::new));

    // Fifty rapid scroll events near the end fire the callback once.
    for i in 0..50 {
        engine.on_scroll(9_520.0 + (i % 5) as f64, i);
    }

    // Appending the next page re-arms the latch for the new data length.
    engine.set_items((0..400u64).map(ItemSource::new));
    engine.scroll_to_bottom();
    println!("pages loaded: {}", pages.load(Ordering::Relaxed));
}
