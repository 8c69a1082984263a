// Example: dynamic heights with a synchronous measurement capability.
use listwindow::{ItemSource, ListWindow, ListWindowOptions, SizeObserver};

/// Stands in for a real resize observer; a UI host would register DOM/widget
/// observation here and call `report_measured_size` from its callbacks.
struct LoggingObserver;

impl SizeObserver<u64> for LoggingObserver {
    fn observe(&mut self, key: &u64) {
        println!("observe item {key}");
    }

    fn unobserve(&mut self, key: &u64) {
        println!("unobserve item {key}");
    }
}

fn main() {
    let mut engine: ListWindow = ListWindow::with_capabilities(
        ListWindowOptions::new(200.0, 40.0).with_dynamic_height(true),
        None,
        Some(Box::new(LoggingObserver)),
    );
    engine.set_items((0..100u64).map(ItemSource::new));
    println!("estimated total={}", engine.total_size());

    // Rendered items report their real sizes back; offsets downstream of
    // each measurement shift accordingly.
    engine.report_measured_size(3, 80.0);
    println!("measured total={}", engine.total_size());
    println!("offset(4)={}", engine.item_position(4).offset);

    engine.teardown();
}
