//! Listing Loader Tests.

use std::fmt::Write as _;
use std::io::Write as _;

use mipsim_core::Cpu;
use mipsim_core::common::SimError;
use mipsim_core::core::cpu::HaltReason;
use mipsim_core::sim::{load_file, load_program, parse_instruction, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;

const ADD: &str = "00000000000000000000000000100000";
const ADDI_100: &str = "00100000000000000000000001100100";

#[test]
fn parse_instruction_ignores_whitespace() {
    let inst = parse_instruction("000000 00001 00010 00011 00000 100000", 1).unwrap();
    assert_eq!(inst.len(), 32);
    assert_eq!(inst.slice(26, 31).to_integer(), 32);
}

#[rstest]
#[case("0000")]
#[case("000000000000000000000000001000001")]
#[case("0000000000000000000000000010000x")]
fn parse_instruction_rejects_malformed(#[case] text: &str) {
    assert!(matches!(
        parse_instruction(text, 7),
        Err(SimError::MalformedInstruction { line: 7, .. })
    ));
}

#[test]
fn parse_program_skips_comments_and_blank_lines() {
    let listing = format!(
        "# header\n\n{ADD}   # add $0, $0, $0\n// note\n  {ADDI_100} // addi\n"
    );
    let program = parse_program(&listing);
    assert_eq!(program.instructions.len(), 2);
    assert!(program.errors.is_empty());
}

#[test]
fn parse_program_reports_bad_lines_by_number() {
    let listing = format!("{ADD}\nnot binary\n{ADDI_100}\n0101\n");
    let program = parse_program(&listing);
    assert_eq!(program.instructions.len(), 2);
    let lines: Vec<usize> = program
        .errors
        .iter()
        .filter_map(|err| match err {
            SimError::MalformedInstruction { line, .. } => Some(*line),
            _ => None,
        })
        .collect();
    assert_eq!(lines, vec![2, 4]);
}

#[test]
fn load_program_fills_instruction_memory() {
    let mut cpu = Cpu::default();
    let report = load_program(&mut cpu, &format!("{ADDI_100}\n{ADD}\n"));
    assert_eq!(report.loaded, 2);
    assert_eq!(report.rejected, 0);
    assert_eq!(cpu.execute().unwrap(), HaltReason::EndOfProgram);
    assert_eq!(cpu.get_register(0).unwrap().to_integer(), 200);
}

#[test]
fn load_program_rejects_past_capacity() {
    let mut listing = String::new();
    for i in 0..201u32 {
        let _ = writeln!(listing, "001000 00000 00000 {i:016b}");
    }
    let mut cpu = Cpu::default();
    let report = load_program(&mut cpu, &listing);
    assert_eq!(report.loaded, 200);
    assert_eq!(report.rejected, 1);
    assert_eq!(cpu.instruction_count(), 200);
    let last = cpu.instructions().last().unwrap();
    assert_eq!(last.slice(16, 31).to_integer(), 199);
}

#[test]
fn load_file_reads_listing_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# doubled").unwrap();
    writeln!(file, "{ADD}").unwrap();
    file.flush().unwrap();

    let mut cpu = Cpu::default();
    cpu.set_register(0, &mipsim_core::common::BitVector::from_value(32, 21))
        .unwrap();
    let report = load_file(&mut cpu, file.path()).unwrap();
    assert_eq!(report.loaded, 1);
    let _ = cpu.execute().unwrap();
    assert_eq!(cpu.get_register(0).unwrap().to_integer(), 42);
}

#[test]
fn load_file_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut cpu = Cpu::default();
    let err = load_file(&mut cpu, dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
