//! Identity tokens across kinds, instances and erasure.

use std::collections::{HashMap, HashSet};

use errorbox::{ClassId, ConcreteError, Error, ErasedError, HasClassId, erased, error_kind};

error_kind! {
    /// Raised when a lookup finds nothing.
    pub struct NotFound: "not_found";
}

error_kind! {
    pub struct Timeout: "timeout";
}

struct Unit;

impl ConcreteError for Unit {
    fn details(&self) -> &str {
        "unit"
    }
}

#[test]
fn test_same_kind_same_token_regardless_of_constructor() {
    let tokens = [
        Error::empty().class_id(),
        Error::new("details").class_id(),
        Error::typed("type", "details").class_id(),
        Error::new("a").with_details("b").with_info("c").class_id(),
        Error::new("copied").clone().class_id(),
    ];
    assert!(tokens.iter().all(|t| *t == ClassId::of::<Error>()));

    let not_found = [
        NotFound::empty().class_id(),
        NotFound::new("x").class_id(),
        NotFound::default().with_info("y").class_id(),
    ];
    assert!(not_found.iter().all(|t| *t == ClassId::of::<NotFound>()));
}

#[test]
fn test_different_kinds_different_tokens() {
    let tokens: HashSet<ClassId> = [
        Error::new("e").class_id(),
        NotFound::new("e").class_id(),
        Timeout::new("e").class_id(),
        Unit.class_id(),
    ]
    .into_iter()
    .collect();
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_same_type_facet_does_not_merge_kinds() {
    // A plain error that happens to use the same `type` string is still a
    // different kind.
    let imitation = Error::typed(NotFound::ERROR_TYPE, "user 1");
    let real = NotFound::new("user 1");
    assert_eq!(imitation.error_type(), real.error_type());
    assert_ne!(imitation.class_id(), real.class_id());
}

#[test]
fn test_token_survives_erasure() {
    let concrete = Timeout::new("upstream").with_info("after 30s");
    let token = concrete.class_id();

    let erased = ErasedError::new(concrete);
    assert_eq!(erased.class_id(), token);
    assert!(erased.is::<Timeout>());
    assert!(erased.is_kind(token));
    assert!(!erased.is_kind(ClassId::of::<NotFound>()));

    let copy = erased.clone();
    assert_eq!(copy.class_id(), token);
}

#[test]
fn test_erased_equality_is_by_kind() {
    let a = erased!(NotFound::new("a"));
    let b = erased!(NotFound::new("b").with_info("different"));
    let c = erased!(Timeout::new("a"));

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_dispatch_on_kind() {
    fn classify(error: &ErasedError) -> &'static str {
        let kinds: HashMap<ClassId, &'static str> = [
            (ClassId::of::<NotFound>(), "retry elsewhere"),
            (ClassId::of::<Timeout>(), "retry later"),
        ]
        .into_iter()
        .collect();
        kinds.get(&error.class_id()).copied().unwrap_or("give up")
    }

    assert_eq!(classify(&erased!(NotFound::new("key"))), "retry elsewhere");
    assert_eq!(classify(&erased!(Timeout::new("read"))), "retry later");
    assert_eq!(classify(&erased!("anything else")), "give up");
}

#[test]
fn test_class_id_debug_names_the_kind() {
    let rendered = format!("{:?}", ErasedError::new(NotFound::new("x")).class_id());
    assert!(rendered.contains("NotFound"), "{rendered}");
    assert!(ClassId::of::<Timeout>().type_name().ends_with("Timeout"));
}
