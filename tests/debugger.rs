use toysim::toy::{Machine, ToyError, program::parse_image};
use toysim::ui::{Debugger, Mode, Script, run_plain};

/// 10: r1 <- 20; jump r1.  20: r2 <- 05; print r2; halt.
const JUMP_AND_PRINT: &str = "10: 7120\n11: E100\n\n20: 7205\n21: 92FF\n22: 0000\n";

fn machine(image: &str, inputs: Vec<u16>) -> Machine {
    Machine::new(parse_image(image).expect("image"), inputs).expect("machine")
}

fn debug(image: &str, script: &[&str]) -> (Debugger, Script) {
    let mut dbg = Debugger::new(machine(image, Vec::new()));
    let mut console = Script::new(script.iter().copied());
    dbg.run(&mut console).expect("debugger");
    (dbg, console)
}

fn count(console: &Script, prefix: &str) -> usize {
    console.texts().iter().filter(|l| l.starts_with(prefix)).count()
}

#[test]
fn plain_run_prints_store_to_console() {
    let mut m = machine("10: 7100\n11: 91FF\n12: 0000\n", Vec::new());
    let mut console = Script::default();
    run_plain(&mut m, &mut console, false).unwrap();
    assert_eq!(
        console.texts(),
        vec!["------ Program Start ------", "> 0000", "------- Program End -------"]
    );
    assert_eq!(m.cpu.cycles, 2);
    assert_eq!(m.mem.words()[0xFF], 0x0000);
}

#[test]
fn every_store_prints_one_line() {
    let mut m = machine("10: 7107\n11: 91FF\n12: 91FF\n13: 91FF\n14: 0000", Vec::new());
    let mut console = Script::default();
    run_plain(&mut m, &mut console, false).unwrap();
    assert_eq!(count(&console, "> 0007"), 3);
}

#[test]
fn console_input_is_reprompted_until_valid() {
    let mut m = machine("10: 81FF\n11: 91FF\n12: 0000", Vec::new());
    let mut console = Script::new(["12", "zz zz", "10000", "abcd"]);
    run_plain(&mut m, &mut console, false).unwrap();
    assert_eq!(console.errors().len(), 3);
    assert!(console.texts().contains(&"> ABCD"));
    assert_eq!(m.cpu.read(1), 0xABCD);
}

#[test]
fn queued_inputs_come_before_the_console() {
    let mut m = machine("10: 81FF\n11: 91FF\n12: 81FF\n13: 91FF\n14: 0000", vec![0x0001]);
    let mut console = Script::new(["0002"]);
    run_plain(&mut m, &mut console, false).unwrap();
    let out: Vec<_> = console.texts().into_iter().filter(|l| l.starts_with('>')).collect();
    assert_eq!(out, vec!["> 0001", "> 0002"]);
}

#[test]
fn closed_input_while_waiting_is_fatal() {
    let mut m = machine("10: 81FF\n11: 0000", Vec::new());
    let mut console = Script::default();
    assert!(matches!(
        run_plain(&mut m, &mut console, false),
        Err(ToyError::InputClosed)
    ));
}

#[test]
fn verbose_plain_run_traces_each_instruction() {
    let mut m = machine("10: 7100\n11: 0000", Vec::new());
    let mut console = Script::default();
    run_plain(&mut m, &mut console, true).unwrap();
    assert!(console.texts().contains(&"[0010] 7100  loadi r1, 0x00"));
    assert!(console.texts().contains(&"[0011] 0000  halt"));
}

#[test]
fn breakpoint_stops_once_then_deleted_runs_to_end() {
    let (dbg, console) = debug(
        JUMP_AND_PRINT,
        &["break 20", "run", "info", "delete 1", "continue", "quit"],
    );
    let t = console.texts();
    assert!(t.contains(&"Breakpoint 1 at 0x20"));
    assert_eq!(count(&console, "Breakpoint 1, 0x20"), 1);
    assert!(t.contains(&"[0020] 7205  loadi r2, 0x05"));
    assert!(t.contains(&"1    0x20"));
    assert!(t.contains(&"Deleted breakpoint 1 at 0x20"));
    assert!(t.contains(&"> 0005"));
    assert!(t.contains(&"Program exited normally (4 cycles)."));

    assert_eq!(dbg.mode, Mode::Stopped);
    assert!(!dbg.is_started());
    assert_eq!(dbg.machine.cpu.pc, 0x10);
    assert_eq!(dbg.machine.cpu.r, [0; 16]);
    assert_eq!(dbg.machine.mem.words()[0xFF], 0);
}

#[test]
fn halt_resets_so_a_second_run_hits_again() {
    let (_, console) = debug(JUMP_AND_PRINT, &["b 20", "r", "c", "r", "c", "q"]);
    assert_eq!(count(&console, "Breakpoint 1, 0x20"), 2);
    assert_eq!(count(&console, "Program exited normally"), 2);
}

#[test]
fn breakpoint_at_entry_stops_before_first_instruction() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["b 10", "r", "reg", "q"]);
    assert_eq!(count(&console, "Breakpoint 1, 0x10"), 1);
    assert!(console.texts().contains(&"pc: 10  cycles: 0"));
    assert_eq!(dbg.mode, Mode::Step);
}

#[test]
fn step_executes_one_instruction_at_a_time() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["s", "s", "reg", "q"]);
    let t = console.texts();
    assert!(t.contains(&"[0011] E100  jr    r1"));
    assert!(t.contains(&"[0020] 7205  loadi r2, 0x05"));
    assert!(t.contains(&"pc: 20  cycles: 2"));
    assert!(t.contains(&"R0: 0000  R1: 0020  R2: 0000  R3: 0000"));
    assert!(dbg.is_started());
}

#[test]
fn run_after_start_asks_before_restarting() {
    let (_, console) = debug(JUMP_AND_PRINT, &["s", "run", "n", "reg", "run", "y", "q"]);
    let t = console.texts();
    assert!(t.contains(&"pc: 11  cycles: 1"));
    assert_eq!(count(&console, "> 0005"), 1);
    assert!(t.contains(&"Program exited normally (4 cycles)."));
}

#[test]
fn next_asks_before_starting() {
    let (_, console) = debug(JUMP_AND_PRINT, &["next", "n", "reg", "next", "y", "reg", "q"]);
    let t = console.texts();
    assert!(t.contains(&"pc: 10  cycles: 0"));
    assert!(t.contains(&"pc: 11  cycles: 1"));
}

#[test]
fn continue_needs_a_running_program() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["c", "q"]);
    assert_eq!(console.errors(), vec!["The program is not being run."]);
    assert_eq!(dbg.machine.cpu.cycles, 0);
}

#[test]
fn full_breakpoint_table_rejects_seventeenth() {
    let mut script: Vec<String> = (0x30..0x40).map(|a| format!("b {a:X}")).collect();
    script.extend(["b 40", "d 3", "b 40", "d 3", "d 99", "q"].map(String::from));
    let refs: Vec<&str> = script.iter().map(String::as_str).collect();
    let (dbg, console) = debug(JUMP_AND_PRINT, &refs);

    assert_eq!(count(&console, "Breakpoint 16 at 0x3F"), 1);
    assert_eq!(
        console.errors(),
        vec!["error: breakpoint table is full", "error: no breakpoint number 99"]
    );
    assert!(console.texts().contains(&"Breakpoint 3 at 0x40"));
    assert!(console.texts().contains(&"Deleted breakpoint 3 at 0x40"));
    assert_eq!(dbg.breakpoints.iter().count(), 15);
}

#[test]
fn bad_arguments_are_reported_and_ignored() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["b 1FF", "b", "d x", "list 20..10", "bogus", "b 21", "q"]);
    assert_eq!(console.errors().len(), 4);
    assert!(console.texts().contains(&"Breakpoint 1 at 0x21"));
    assert_eq!(dbg.breakpoints.iter().collect::<Vec<_>>(), vec![(1, 0x21)]);
}

#[test]
fn duplicate_breakpoint_is_not_added() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["b 20", "b 0x20", "q"]);
    assert_eq!(console.errors(), vec!["Breakpoint 1 already at 0x20"]);
    assert_eq!(dbg.breakpoints.iter().count(), 1);
}

#[test]
fn verbose_traces_while_running() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["v", "r", "nv", "q"]);
    let t = console.texts();
    assert!(t.contains(&"Verbose on."));
    assert!(t.contains(&"[0010] 7120  loadi r1, 0x20"));
    assert!(t.contains(&"[0022] 0000  halt"));
    assert!(!dbg.verbose);
}

#[test]
fn list_shows_memory_range() {
    let (_, console) = debug(JUMP_AND_PRINT, &["l 10..12", "q"]);
    assert_eq!(
        console.texts(),
        vec!["=> 10: 7120  loadi r1, 0x20", "   11: E100  jr    r1", "   12: 0000  halt"]
    );
}

#[test]
fn closed_console_ends_the_session() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &[]);
    assert!(console.lines.is_empty());
    assert_eq!(dbg.mode, Mode::Stopped);
}

#[test]
fn illegal_indirect_address_aborts() {
    // r1 <- FF; r2 <- 01; r1 <- r1 + r2; r3 <- mem[r1]
    let mut dbg = Debugger::new(machine("10: 71FF\n11: 7201\n12: 1112\n13: A301\n14: 0000", Vec::new()));
    let mut console = Script::new(["run"]);
    assert!(matches!(
        dbg.run(&mut console),
        Err(ToyError::IllegalAddress(0x0100))
    ));
}

#[test]
fn next_stops_at_breakpoint_on_entry_pc() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["b 10", "next", "y", "reg", "q"]);
    assert_eq!(count(&console, "Breakpoint 1, 0x10"), 1);
    assert!(console.texts().contains(&"[0010] 7120  loadi r1, 0x20"));
    assert!(console.texts().contains(&"pc: 10  cycles: 0"));
    assert!(dbg.is_started());
    assert_eq!(dbg.mode, Mode::Step);
}

#[test]
fn step_from_stopped_stops_at_breakpoint_on_entry_pc() {
    let (dbg, console) = debug(JUMP_AND_PRINT, &["b 10", "s", "s", "reg", "q"]);
    assert_eq!(count(&console, "Breakpoint 1, 0x10"), 1);
    assert!(console.texts().contains(&"pc: 11  cycles: 1"));
    assert_eq!(dbg.machine.cpu.read(1), 0x20);
}

#[test]
fn first_step_traces_the_entry_instruction() {
    let (_, console) = debug(JUMP_AND_PRINT, &["s", "q"]);
    assert_eq!(
        console.texts(),
        vec!["[0010] 7120  loadi r1, 0x20", "[0011] E100  jr    r1"]
    );
}
