//! The result vocabulary: optional errors, success results and error arms.

use errorbox::{
    ClassId, Error, ErasedError, NO_ERROR, OptionalError, OptionalErrorExt, Result, ResultExt,
    SuccessResult, bail, erased, error_kind, make_error, make_optional_error, make_result_error,
    success,
};

error_kind! {
    pub struct Invalid: "invalid";
}

fn check_positive(value: i64) -> SuccessResult {
    if value <= 0 {
        return make_result_error(Invalid::new("value must be positive").with_info(value.to_string()));
    }
    success()
}

fn validate(name: &str) -> OptionalError {
    if name.is_empty() {
        return make_optional_error(Invalid::new("name is empty"));
    }
    NO_ERROR
}

fn parse(input: &str) -> Result<u8> {
    let Ok(value) = input.parse::<u8>() else {
        bail!("cannot parse {input:?} as a byte");
    };
    if value == 0 {
        bail!(Invalid::new("zero is reserved"));
    }
    Ok(value)
}

#[test]
fn test_make_optional_error_is_present() {
    let optional = make_optional_error(Error::typed("t", "d").with_info("i"));
    assert!(optional.is_some());
    assert_ne!(optional, NO_ERROR);

    let error = optional.unwrap();
    assert_eq!(error.details(), "d");
    assert_eq!(error.info(), "i");
    assert_eq!(error.error_type(), "t");
}

#[test]
fn test_no_error_is_distinguishable() {
    assert!(validate("ok").is_no_error());
    assert_eq!(validate("ok"), NO_ERROR);

    let failed = validate("");
    assert!(!failed.is_no_error());
    assert_eq!(failed.as_ref().map(ErasedError::class_id), Some(ClassId::of::<Invalid>()));
}

#[test]
fn test_success_result() {
    assert_eq!(check_positive(3), Ok(true));

    let error = check_positive(-4).unwrap_err();
    assert_eq!(error.details(), "value must be positive");
    assert_eq!(error.info(), "-4");
    assert!(error.is::<Invalid>());
}

#[test]
fn test_success_path_has_no_error_arm() {
    let result: Result<&str> = Ok("value");
    assert!(result.as_ref().err().is_none());
    assert!(result.into_optional_error().is_no_error());
}

#[test]
fn test_make_error_accepts_concrete_and_erased() {
    let concrete = Invalid::new("bad input").with_info("field=email");
    let from_concrete = make_error::<u32>(concrete.clone()).unwrap_err();
    let from_erased = make_error::<String>(from_concrete.clone()).unwrap_err();
    let from_ref = make_error::<()>(&from_concrete).unwrap_err();

    for error in [&from_concrete, &from_erased, &from_ref] {
        assert_eq!(error.class_id(), ClassId::of::<Invalid>());
        assert_eq!(error.error_type(), "invalid");
        assert_eq!(error.details(), "bad input");
        assert_eq!(error.info(), "field=email");
        assert!(error.ptr_eq(&from_concrete));
    }
}

#[test]
fn test_bail_with_format_and_value() {
    assert_eq!(parse("7"), Ok(7));

    let format_error = parse("x").unwrap_err();
    assert_eq!(format_error.details(), "cannot parse \"x\" as a byte");
    assert!(format_error.is::<Error>());

    let value_error = parse("0").unwrap_err();
    assert!(value_error.is::<Invalid>());
    assert_eq!(value_error.details(), "zero is reserved");
}

#[test]
fn test_bail_reuses_erased_error() {
    fn forward(error: &ErasedError) -> Result<()> {
        bail!(error.clone());
    }

    let original = erased!("upstream failed");
    let forwarded = forward(&original).unwrap_err();
    assert!(forwarded.ptr_eq(&original));
}

#[test]
fn test_optional_error_into_result() {
    let ok: OptionalError = NO_ERROR;
    assert_eq!(ok.into_result(5u8), Ok(5));
    assert_eq!(NO_ERROR.into_success_result(), Ok(true));

    let failed = validate("");
    let result = failed.into_result(5u8);
    assert_eq!(result.unwrap_err().details(), "name is empty");
}

#[test]
fn test_erase_err_on_foreign_results() {
    fn read_number(input: &str) -> std::result::Result<i32, Error> {
        input
            .trim()
            .parse()
            .map_err(|_| Error::typed("parse", "not a number").with_info(input))
    }

    let erased: Result<i32> = read_number(" 12 ").erase_err();
    assert_eq!(erased, Ok(12));

    let erased = read_number("twelve").erase_err().unwrap_err();
    assert_eq!(erased.error_type(), "parse");
    assert_eq!(erased.info(), "twelve");
}
