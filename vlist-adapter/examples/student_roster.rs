// Example: a student roster table mounted in a simulated scroll container.
use vlist_adapter::{
    Align, Frame, HostEvent, ListConfig, ListView, ListenerId, MeasureError, ScrollHost,
};

struct Student {
    id: u32,
    name: String,
    grade: char,
}

/// Stands in for a DOM element: tracks listeners and the native scroll position.
#[derive(Default)]
struct SimulatedContainer {
    listeners: Vec<ListenerId>,
    scroll_top: f64,
    client_height: f64,
}

impl ScrollHost for SimulatedContainer {
    fn subscribe(&mut self) -> ListenerId {
        let id = ListenerId(self.listeners.len() as u64 + 1);
        self.listeners.push(id);
        id
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|l| *l != id);
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll_top
    }

    fn client_height(&self) -> f64 {
        self.client_height
    }

    fn scroll_to(&mut self, offset: f64) {
        self.scroll_top = offset;
    }
}

fn print_frame(frame: &Frame<String>) {
    match frame {
        Frame::Rows {
            total_height,
            offset_y,
            rows,
        } => {
            println!("track={total_height}px block@{offset_y}px rows={}", rows.len());
            for row in rows.iter().take(3) {
                println!("  [{}] @{}px {}", row.index, row.start, row.node);
            }
        }
        Frame::Empty { message } => println!("(empty) {message}"),
    }
}

fn main() -> Result<(), vlist_adapter::ConfigError> {
    let students: Vec<Student> = (0..10_000)
        .map(|id| Student {
            id,
            name: format!("Student {id:05}"),
            grade: ['A', 'B', 'C', 'D'][id as usize % 4],
        })
        .collect();
    let render = |s: &Student, _: usize| format!("#{} {} ({})", s.id, s.name, s.grade);

    let mut container = SimulatedContainer {
        client_height: 600.0,
        ..SimulatedContainer::default()
    };

    // Fixed 65px rows.
    let config = ListConfig::fixed(65).with_empty_message("No students found");
    let mut view = ListView::mount(&mut container, students, &config)?;
    print_frame(&view.render(render));

    if view.handle(HostEvent::Scroll { offset: 650.0, now_ms: 16 }).is_some() {
        print_frame(&view.render(render));
    }

    let offset = view.scroll_to_index(9_999, Align::End);
    println!("jumped to last student at offset {offset}");
    print_frame(&view.render(render));

    // Dropping the view releases its scroll listener.
    drop(view);

    // Rows with notes are taller; measure after render.
    let config = ListConfig::estimated(48).with_overscan(2);
    let mut notes_view = ListView::mount(&mut container, (0..500u32).collect::<Vec<_>>(), &config)?;
    let mut measure = |index: usize| -> Result<u32, MeasureError> {
        if index % 7 == 0 {
            Err(MeasureError::Detached { index })
        } else {
            Ok(48 + (index as u32 % 3) * 20)
        }
    };
    let pass = notes_view.measure_rendered(&mut measure);
    println!(
        "measured {} rows, {} fell back to the estimate, window={:?}",
        pass.measured,
        pass.failures.len(),
        notes_view.window()
    );

    notes_view.set_items(Vec::<u32>::new());
    print_frame(&notes_view.render(|i, _| i.to_string()));
    Ok(())
}
