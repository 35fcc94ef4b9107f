// Example: estimated rows refined by measurement.
use vlist::{ListOptions, MeasuredSizes, SizeModel, Viewport, VirtualList};

fn main() -> Result<(), vlist::ConfigError> {
    let sizes = MeasuredSizes::new(200, |i| if i % 10 == 0 { 40 } else { 24 })?;
    let mut list = VirtualList::with_viewport(sizes, ListOptions::new(), Viewport::new(480, 300));
    println!("estimated: total={} window={:?}", list.total_height(), list.window());

    // Rows above the viewport grew: the offset follows so the screen does not jump.
    list.measure_many([(0, Some(64)), (1, Some(30)), (2, None)]);
    println!(
        "measured: total={} offset={} window={:?}",
        list.total_height(),
        list.viewport().scroll_offset,
        list.window()
    );

    let w = list.window();
    for index in w.indices().take(3) {
        println!(
            "row {index}: start={} size={}",
            list.sizes().item_start(index),
            list.sizes().item_size(index)
        );
    }
    Ok(())
}
