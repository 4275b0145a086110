//! Global creation hooks.
//!
//! Hooks are process-wide, so everything runs inside a single test to keep the
//! steps ordered.

use std::{
    panic::Location,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use errorbox::{
    ErasedError, Error, IntoErasedError, erased, error_kind,
    hooks::{Hooks, error_creation::ErrorCreationHook},
    make_error, make_optional_error,
};

error_kind! {
    pub struct Audited: "audited";
}

#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<(String, u32)>>>,
}

impl ErrorCreationHook for Recorder {
    fn on_creation(&self, error: &ErasedError, location: &'static Location<'static>) {
        self.seen
            .lock()
            .unwrap()
            .push((error.details().to_owned(), location.line()));
    }
}

fn details(recorder: &Recorder) -> Vec<String> {
    recorder
        .seen
        .lock()
        .unwrap()
        .iter()
        .map(|(details, _)| details.clone())
        .collect()
}

#[test]
fn test_creation_hooks() {
    assert!(!Hooks::is_installed());

    let recorder = Recorder::default();
    let audited = Arc::new(AtomicUsize::new(0));

    let audited_hook = audited.clone();
    Hooks::new()
        .creation_hook(recorder.clone())
        .kind_hook::<Audited, _>(
            move |error: &ErasedError, _location: &'static Location<'static>| {
                assert!(error.is::<Audited>());
                audited_hook.fetch_add(1, Ordering::SeqCst);
            },
        )
        .install()
        .unwrap();
    assert!(Hooks::is_installed());

    // A second install is rejected and hands the hooks back
    let rejected = Hooks::new().creation_hook(recorder.clone()).install();
    let Err(rejected) = rejected else {
        panic!("second install must fail");
    };
    assert_eq!(rejected.to_string(), "hooks are already installed globally");

    // Fresh boxing runs the hooks once, with the caller's location
    let line = line!() + 1;
    let first = ErasedError::new(Error::new("first"));
    assert_eq!(*recorder.seen.lock().unwrap(), vec![("first".to_owned(), line)]);

    // Cloning and re-wrapping do not run hooks
    let copy = first.clone();
    let _ = make_error::<()>(copy.clone());
    let _ = make_optional_error(&copy);
    let _ = copy.into_erased_error();
    let _ = ErasedError::new_unhooked(Error::new("silent"));
    assert_eq!(details(&recorder), vec!["first"]);

    // Every construction path that boxes a new value runs them
    let _ = erased!("from macro");
    let _ = make_error::<u8>(Error::new("from make_error"));
    let _: ErasedError = Error::new("from into").into();
    assert_eq!(
        details(&recorder),
        vec!["first", "from macro", "from make_error", "from into"]
    );

    // Kind hooks only fire for their kind
    assert_eq!(audited.load(Ordering::SeqCst), 0);
    let _ = ErasedError::new(Audited::new("checked"));
    assert_eq!(audited.load(Ordering::SeqCst), 1);
    assert_eq!(details(&recorder).last().map(String::as_str), Some("checked"));

    // Replacing swaps the whole set
    let replaced = Arc::new(AtomicUsize::new(0));
    let replaced_hook = replaced.clone();
    assert!(
        Hooks::new()
            .creation_hook(
                move |_: &ErasedError, _: &'static Location<'static>| {
                    replaced_hook.fetch_add(1, Ordering::SeqCst);
                }
            )
            .replace()
    );
    let before = details(&recorder).len();
    let _ = ErasedError::new(Audited::new("after replace"));
    assert_eq!(details(&recorder).len(), before);
    assert_eq!(audited.load(Ordering::SeqCst), 1);
    assert_eq!(replaced.load(Ordering::SeqCst), 1);

    // Uninstalling stops all hooks
    assert!(Hooks::uninstall());
    assert!(!Hooks::uninstall());
    let _ = ErasedError::new(Error::new("unobserved"));
    assert_eq!(replaced.load(Ordering::SeqCst), 1);

    // The rejected hooks can be installed once the slot is free
    rejected.0.install().unwrap();
    let _ = ErasedError::new(Error::new("late"));
    assert_eq!(details(&recorder).last().map(String::as_str), Some("late"));
    assert!(Hooks::uninstall());
}
