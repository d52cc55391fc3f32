//! Composite model: a child moving relative to a moving parent.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use km_core::{SimTime, Vector};

use crate::{MobilityCore, MobilityModel};

/// Position and velocity are the sums of a parent (e.g. a vehicle) and a
/// child expressed in the parent's frame (e.g. a handset inside it).
///
/// # Course changes
///
/// Every course change announced by either constituent is re-announced by
/// the composite, one for one, before the composite operation that caused it
/// returns.  Mutate the constituents through [`with_parent`] /
/// [`with_child`] so relaying happens; direct access is read-only.
///
/// # Streams
///
/// `assign_streams` gives the parent the first block and the child the next,
/// returning the sum.
///
/// [`with_parent`]: Self::with_parent
/// [`with_child`]: Self::with_child
pub struct HierarchicalModel {
    core:    MobilityCore,
    parent:  Box<dyn MobilityModel>,
    child:   Box<dyn MobilityModel>,
    pending: Rc<Cell<u32>>,
}

impl HierarchicalModel {
    pub fn new(mut parent: Box<dyn MobilityModel>, mut child: Box<dyn MobilityModel>) -> Self {
        let pending = Rc::new(Cell::new(0u32));
        for model in [&mut parent, &mut child] {
            let counter = Rc::clone(&pending);
            model.connect_course_change(Box::new(move |_: &dyn MobilityModel| {
                counter.set(counter.get() + 1)
            }));
        }
        Self { core: MobilityCore::new(), parent, child, pending }
    }

    pub fn parent(&self) -> &dyn MobilityModel {
        self.parent.as_ref()
    }

    pub fn child(&self) -> &dyn MobilityModel {
        self.child.as_ref()
    }

    /// Mutate the parent, then relay whatever course changes it announced.
    pub fn with_parent<R>(&mut self, f: impl FnOnce(&mut dyn MobilityModel) -> R) -> R {
        let out = f(self.parent.as_mut());
        self.relay();
        out
    }

    /// Mutate the child, then relay whatever course changes it announced.
    pub fn with_child<R>(&mut self, f: impl FnOnce(&mut dyn MobilityModel) -> R) -> R {
        let out = f(self.child.as_mut());
        self.relay();
        out
    }

    fn relay(&self) {
        for _ in 0..self.pending.replace(0) {
            self.notify_course_change();
        }
    }
}

impl MobilityModel for HierarchicalModel {
    fn core(&self) -> &MobilityCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut MobilityCore {
        &mut self.core
    }

    fn position(&self) -> Vector {
        self.parent.position() + self.child.position()
    }

    /// Keep the parent where it is and move the child so the sum lands on
    /// `position`.
    fn set_position(&mut self, position: Vector) {
        let offset = position - self.parent.position();
        self.child.set_position(offset);
        self.relay();
    }

    fn velocity(&self) -> Vector {
        self.parent.velocity() + self.child.velocity()
    }

    fn assign_streams(&mut self, start: i64) -> i64 {
        let used = self.parent.assign_streams(start);
        used + self.child.assign_streams(start + used)
    }

    fn update(&mut self, now: SimTime) {
        self.parent.update(now);
        self.child.update(now);
        self.relay();
    }

    fn name(&self) -> &'static str {
        "Hierarchical"
    }
}

impl fmt::Debug for HierarchicalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HierarchicalModel")
            .field("parent", &self.parent.name())
            .field("child", &self.child.name())
            .field("core", &self.core)
            .finish()
    }
}
