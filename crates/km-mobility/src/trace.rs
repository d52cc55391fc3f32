//! Course-change notification: an ordered list of synchronous sinks.

use std::fmt;

use km_core::SinkId;
use tracing::trace;

use crate::MobilityModel;

/// A course-change sink.
///
/// Receives the model whose position and/or velocity just changed.  Sinks are
/// `Fn` because dispatch happens through a shared borrow of the model; sinks
/// that accumulate state wrap it in `Cell`/`RefCell`.
pub type CourseChangeCallback = Box<dyn Fn(&dyn MobilityModel)>;

/// The subscriber list owned by every model.
///
/// # Dispatch
///
/// [`notify`][Self::notify] runs every connected sink once, in connection
/// order, on the caller's stack.  There is no queueing and no coalescing:
/// three `notify` calls within one simulated instant produce three rounds of
/// callbacks.
///
/// # Example
///
/// ```rust,ignore
/// let hits = Rc::new(Cell::new(0));
/// let h = hits.clone();
/// let id = model.connect_course_change(Box::new(move |_| h.set(h.get() + 1)));
/// model.set_position(Vector::new(1.0, 0.0, 0.0));
/// assert_eq!(hits.get(), 1);
/// model.disconnect_course_change(id);
/// ```
#[derive(Default)]
pub struct CourseChangeTrace {
    sinks:   Vec<(SinkId, CourseChangeCallback)>,
    next_id: u64,
}

impl CourseChangeTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `sink`; it runs after every sink connected before it.
    pub fn connect<F>(&mut self, sink: F) -> SinkId
    where
        F: Fn(&dyn MobilityModel) + 'static,
    {
        self.connect_boxed(Box::new(sink))
    }

    pub fn connect_boxed(&mut self, sink: CourseChangeCallback) -> SinkId {
        let id = SinkId(self.next_id);
        self.next_id += 1;
        self.sinks.push((id, sink));
        id
    }

    /// Remove the sink registered under `id`.  Returns `false` if it was
    /// already gone.
    pub fn disconnect(&mut self, id: SinkId) -> bool {
        let before = self.sinks.len();
        self.sinks.retain(|(sid, _)| *sid != id);
        self.sinks.len() != before
    }

    /// Invoke every sink with `changed`, in connection order.
    pub fn notify(&self, changed: &dyn MobilityModel) {
        trace!(model = changed.name(), sinks = self.sinks.len(), "course change");
        for (_, sink) in &self.sinks {
            sink(changed);
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl fmt::Debug for CourseChangeTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CourseChangeTrace")
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
