use std::fs;

use predicates::prelude::*;

use crate::{ROOT, Workspace, lines};

#[test]
fn prints_entries_in_lexicographic_order() {
    let ws = Workspace::with_sources(&["b.c", "a.h", "c.txt"]);

    ws.lister().assert().success().stdout(predicate::str::diff(lines(&["a.h", "b.c", "c.txt"]))).stderr("");
}

#[test]
fn empty_directory_prints_nothing() {
    let ws = Workspace::with_sources(&[]);

    ws.lister().assert().success().stdout("");
}

#[test]
fn missing_root_fails_without_listing() {
    let ws = Workspace::new();

    ws.lister()
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains(ROOT).and(predicate::str::starts_with("Error:")));
}

#[test]
fn root_that_is_a_file_fails() {
    let ws = Workspace::new();
    let root = ws.src_dir();
    fs::create_dir_all(root.parent().unwrap()).unwrap();
    fs::write(&root, "not a directory").unwrap();

    ws.lister().assert().failure().stdout("");
}

#[test]
fn subdirectories_are_listed_but_not_descended() {
    let ws = Workspace::with_sources(&["stm32f4xx_hal.c", "Legacy/stm32f4xx_hal_can.c"]);

    ws.lister()
        .assert()
        .success()
        .stdout(predicate::str::diff(lines(&["Legacy", "stm32f4xx_hal.c"])))
        .stdout(predicate::str::contains("stm32f4xx_hal_can.c").not());
}

#[test]
fn hidden_entries_are_included() {
    let ws = Workspace::with_sources(&["stm32f4xx_hal.c", ".gitkeep"]);

    ws.lister().assert().success().stdout(predicate::str::diff(lines(&[".gitkeep", "stm32f4xx_hal.c"])));
}

#[test]
fn order_is_byte_order_not_case_folded() {
    let ws = Workspace::with_sources(&["stm32f4xx_hal_rcc.c", "HAL_Readme.txt", "stm32f4xx_hal_rcc_ex.c", "stm32f4xx_hal.c"]);

    ws.lister().assert().success().stdout(predicate::str::diff(lines(&[
        "HAL_Readme.txt",
        "stm32f4xx_hal.c",
        "stm32f4xx_hal_rcc.c",
        "stm32f4xx_hal_rcc_ex.c",
    ])));
}

#[test]
fn repeated_runs_are_identical() {
    let ws = Workspace::with_sources(&["stm32f4xx_hal_gpio.c", "stm32f4xx_hal_dma.c", "stm32f4xx_hal_adc.c"]);

    let first = ws.lister().assert().success().get_output().stdout.clone();
    let second = ws.lister().assert().success().get_output().stdout.clone();

    assert_eq!(first, second);
    assert_eq!(
        String::from_utf8(first).unwrap(),
        lines(&["stm32f4xx_hal_adc.c", "stm32f4xx_hal_dma.c", "stm32f4xx_hal_gpio.c"])
    );
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let ws = Workspace::with_sources(&["a.h"]);

    ws.lister()
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::diff(lines(&["a.h"])))
        .stderr(predicate::str::contains("listed 1 entries"));
}

#[test]
fn missing_root_reports_each_cause_once() {
    let ws = Workspace::new();

    let output = ws.lister().assert().failure().get_output().clone();
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(stderr.lines().count(), 1);
    assert_eq!(stderr.matches("Failed to read directory").count(), 1);
}
