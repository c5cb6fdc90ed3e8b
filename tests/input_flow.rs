//! End-to-end test of a small input-validation flow
//!
//! Reads a number, rejects non-numbers, zero, negatives and even values, and
//! checks how each failure renders for users, logs and JSON sinks.

use std::io::{self, BufRead};

use parking_lot::Mutex;
use seer::{ResultExt, SeerError, SeerResult, config};

static CONFIG_LOCK: Mutex<()> = Mutex::new(());

fn read_odd(input: &mut impl BufRead) -> SeerResult<i64> {
    let mut line = String::new();
    input.read_line(&mut line).wrap_err("collectInput")?;
    let value = line.trim().parse::<i64>().wrap_err("collectInput")?;

    if value <= 0 {
        return Err(seer::new!(
            "validateInput",
            format!("negative number or zero: {value}"),
            422
        ));
    }
    if value % 2 == 0 {
        return Err(seer::new!("validateInput", format!("even number: {value}"), 422));
    }
    Ok(value)
}

fn run(input: &str) -> SeerResult<i64> {
    read_odd(&mut io::Cursor::new(input)).map_err(|e| seer::wrap!("run", e))
}

#[test]
fn test_accepts_odd_number() {
    let _guard = CONFIG_LOCK.lock();
    assert_eq!(run("7\n").unwrap(), 7);
}

#[test]
fn test_rejects_even_number() {
    let _guard = CONFIG_LOCK.lock();
    let err = run("4\n").unwrap_err();

    assert_eq!(err.operation(), "run");
    assert_eq!(err.code(), 500);

    let (inner, is_seer) = err.unwrap_original();
    assert!(is_seer);
    let inner = inner.unwrap().downcast_ref::<SeerError>().unwrap();
    assert_eq!(inner.operation(), "validateInput");
    assert_eq!(inner.message(), "even number: 4");
    assert_eq!(inner.code(), 422);
    assert_eq!(inner.provenance().unwrap().caller(), "read_odd");

    // The outer value only carries the default message, so raw_error shows the
    // inner rendering instead
    assert!(err.raw_error().contains("(read_odd::validateInput)"));
}

#[test]
fn test_non_numeric_input_keeps_parse_error() {
    let _guard = CONFIG_LOCK.lock();
    let err = run("seven\n").unwrap_err();

    let inner = err.chain().next().unwrap();
    let inner = inner.downcast_ref::<SeerError>().unwrap();
    assert_eq!(inner.operation(), "collectInput");
    assert_eq!(inner.raw_error(), "invalid digit found in string");
    // wrap_err has no macro, the caller comes from the stack
    assert_eq!(inner.provenance().unwrap().caller(), "read_odd");

    let (leaf, is_seer) = inner.unwrap_original();
    assert!(!is_seer);
    assert!(leaf.unwrap().is::<std::num::ParseIntError>());
}

#[test]
fn test_log_and_json_forms_without_provenance() {
    let _guard = CONFIG_LOCK.lock();
    config::set_collect_provenance(false);
    let err = run("-3\n").unwrap_err();
    config::reset();

    assert_eq!(
        err.to_string(),
        "run\n\tWrapped error: validateInput"
    );
    assert_eq!(err.detailed_string(), "run: an error occurred");
    assert_eq!(err.raw_error(), "validateInput");

    let json: serde_json::Value = serde_json::from_str(&err.to_json_string()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "operation": "run",
            "message": "an error occurred",
            "previous_error": "validateInput",
        })
    );
}

#[test]
fn test_converts_into_anyhow() -> anyhow::Result<()> {
    let _guard = CONFIG_LOCK.lock();
    let result: anyhow::Result<i64> = run("2\n").map_err(anyhow::Error::from);
    let err = result.unwrap_err();

    let seer_err = err.downcast_ref::<SeerError>().unwrap();
    assert_eq!(seer_err.operation(), "run");
    assert_eq!(err.chain().count(), 2);

    let value = run("9\n")?;
    assert_eq!(value, 9);
    Ok(())
}
