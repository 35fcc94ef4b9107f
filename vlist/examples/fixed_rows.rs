// Example: fixed-height rows, scrolling and scroll-to.
use vlist::{Align, ListOptions, UniformSizes, Viewport, VirtualList};

fn main() -> Result<(), vlist::ConfigError> {
    let sizes = UniformSizes::new(1_000, 65)?;
    let mut list = VirtualList::with_viewport(
        sizes,
        ListOptions::new().with_overscan(3),
        Viewport::new(0, 600),
    );
    println!("initial={:?}", list.window());

    if let Some(w) = list.set_scroll_offset(650) {
        println!("after scroll: rows {:?} at offset_y={}", w.indices(), w.offset_y);
    }

    // Same rows, nothing to re-render.
    println!("redundant scroll publishes: {:?}", list.set_scroll_offset(651));

    let off = list.scroll_to_index(5_000, Align::End);
    println!("scroll_to_index(5000) clamped: offset={off} window={:?}", list.window());
    Ok(())
}
