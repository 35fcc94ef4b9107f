use crate::MeasureError;

/// Handle for a scroll listener registered on a host container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The scrollable container a list is mounted in (e.g. a DOM element).
///
/// Offsets and heights are raw host numbers; the view sanitizes them.
pub trait ScrollHost {
    /// Registers the list's scroll listener.
    fn subscribe(&mut self) -> ListenerId;

    fn unsubscribe(&mut self, id: ListenerId);

    fn scroll_offset(&self) -> f64;

    fn client_height(&self) -> f64;

    /// Moves the container's native scroll position.
    fn scroll_to(&mut self, offset: f64);
}

impl<H: ScrollHost + ?Sized> ScrollHost for &mut H {
    fn subscribe(&mut self) -> ListenerId {
        (**self).subscribe()
    }

    fn unsubscribe(&mut self, id: ListenerId) {
        (**self).unsubscribe(id)
    }

    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn client_height(&self) -> f64 {
        (**self).client_height()
    }

    fn scroll_to(&mut self, offset: f64) {
        (**self).scroll_to(offset)
    }
}

/// Events the host forwards to a mounted view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    Scroll { offset: f64, now_ms: u64 },
    Resize { height: f64 },
}

/// Reads the rendered height of a row.
pub trait Measure {
    fn measure(&mut self, index: usize) -> Result<u32, MeasureError>;
}

impl<F> Measure for F
where
    F: FnMut(usize) -> Result<u32, MeasureError>,
{
    fn measure(&mut self, index: usize) -> Result<u32, MeasureError> {
        self(index)
    }
}
