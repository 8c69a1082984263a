// Example: prepending a page of items without the viewport jumping.
use std::collections::HashMap;

use listwindow::{ItemSource, ListWindowOptions};
use listwindow_adapter::Controller;

fn main() {
    let mut c: Controller = Controller::new(ListWindowOptions::new(300.0, 30.0));
    let mut keys: Vec<u64> = (1000..1100).collect();
    c.engine_mut().set_items(keys.iter().copied().map(ItemSource::new));
    c.engine_mut().scroll_to_position(1_500.0);

    let anchor = c.capture_first_visible_anchor().expect("something visible");
    println!("anchored to key={} at +{}px", anchor.key, anchor.offset_in_viewport);

    // Load an older page above the current content.
    let mut next: Vec<u64> = (900..1000).collect();
    next.append(&mut keys);
    c.engine_mut().set_items(next.iter().copied().map(ItemSource::new));

    let index_of: HashMap<u64, usize> = next.iter().enumerate().map(|(i, &k)| (k, i)).collect();
    c.apply_anchor(&anchor, |k| index_of.get(k).copied());

    println!("scroll after prepend={}", c.engine().scroll_position());
    println!("range after prepend={:?}", c.engine().visible_range());
}
