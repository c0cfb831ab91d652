// End-to-end tests for the multiply/divide flow against a stub producer.

use std::process::Command;

use crate::common;

fn run_calc(producer_url: &str, args: &[&str]) -> std::process::Output {
    Command::new(common::calc_bin())
        .args(args)
        .env("PRODUCER_URL", producer_url)
        .output()
        .expect("failed to run calc")
}

#[test]
fn multiply_whole_operands() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["multiply", "4", "7"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "4 * 7 = 28\n");
}

#[test]
fn divide_exact_quotient() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["divide", "10", "2"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "10 / 2 = 5\n");
}

#[test]
fn divide_inexact_quotient_keeps_full_precision() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["divide", "10", "3"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "10 / 3 = 3.3333333333333335\n"
    );
}

#[test]
fn fractional_operand_is_preserved() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["multiply", "2.5", "4"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2.5 * 4 = 10\n");
}

#[test]
fn negative_operand_round_trips() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["multiply", "-4", "7"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "-4 * 7 = -28\n");
}

#[test]
fn strict_json_mode_produces_the_same_line() {
    let producer = common::spawn_producer();
    let output = run_calc(&producer, &["multiply", "4", "7", "--strict-json"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "4 * 7 = 28\n");
}
