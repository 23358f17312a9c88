//! Integration tests for systems
//!
//! Tests system registration, ordering, duplicates, and shared ownership.

use std::cell::RefCell;
use std::rc::Rc;

use entente_storage::{Manager, System, SystemPtr};

struct Recorder {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl System for Recorder {
    fn update(&self, _manager: &mut Manager, _elapsed: f32) {
        self.log.borrow_mut().push(self.name);
    }
}

fn recorder(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> SystemPtr {
    Rc::new(Recorder {
        name,
        log: Rc::clone(log),
    })
}

#[test]
fn external_pass_visits_in_insertion_order() {
    let mut manager = Manager::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    manager.add_system(recorder("s1", &log));
    manager.add_system(recorder("s2", &log));
    manager.add_system(recorder("s3", &log));

    // Drive the systems the way an external loop would.
    let systems: Vec<SystemPtr> = manager.systems().to_vec();
    for system in &systems {
        system.update(&mut manager, 0.016);
    }

    assert_eq!(*log.borrow(), vec!["s1", "s2", "s3"]);
}

#[test]
fn duplicate_system_runs_twice() {
    let mut manager = Manager::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let s1 = recorder("s1", &log);

    manager.add_system(Rc::clone(&s1));
    manager.add_system(recorder("s2", &log));
    manager.add_system(Rc::clone(&s1));

    manager.update(0.016);

    assert_eq!(*log.borrow(), vec!["s1", "s2", "s1"]);
    assert!(Rc::ptr_eq(&manager.systems()[0], &manager.systems()[2]));
}

#[test]
fn system_shared_between_managers() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let shared = recorder("shared", &log);

    let mut first = Manager::new();
    let mut second = Manager::new();
    first.add_system(Rc::clone(&shared));
    second.add_system(Rc::clone(&shared));

    first.update(1.0);
    second.update(1.0);

    assert_eq!(log.borrow().len(), 2);
    assert_eq!(Rc::strong_count(&shared), 3);
}

#[test]
fn update_without_systems_is_a_no_op() {
    let mut manager = Manager::new();
    manager.update(1.0);
    assert_eq!(manager.system_count(), 0);
}
