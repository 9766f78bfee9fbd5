pub mod controls;
pub mod pointer;
pub mod viewport;

pub use controls::wire_control_handlers;
pub use pointer::wire_page_input;
pub use viewport::{wire_page_lifecycle, wire_resize};

use crate::controls::DomControl;
use crate::frame::Clock;
use crate::overlay::DomStage;
use reveal_core::Page;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles every event closure needs.
#[derive(Clone)]
pub struct Wiring {
    pub page: Rc<RefCell<Page>>,
    pub stage: Rc<RefCell<DomStage>>,
    pub control: Rc<RefCell<DomControl>>,
    pub clock: Clock,
}
