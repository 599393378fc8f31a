//! Search session lifecycle through the command pipeline.

use core_actions::{CommandParser, CommandResult, DispatchResult, dispatch};
use core_config::Config;
use core_run::ScriptedSandbox;
use core_state::EditorState;
use core_text::Buffer;
use pretty_assertions::assert_eq;

const SRC: &str = "\
def add(a, b):
    # sum of two values
    return a + b

def mul(a, b):
    # product of two values
    return a * b

print(add(2, 3))
print(mul(2, 3))";

fn fixture() -> (EditorState, ScriptedSandbox, Config) {
    (
        EditorState::new(Buffer::from_str("t", SRC)),
        ScriptedSandbox::new(vec![]),
        Config::default(),
    )
}

fn exec(
    raw: &str,
    state: &mut EditorState,
    sandbox: &mut ScriptedSandbox,
    config: &Config,
) -> DispatchResult {
    match CommandParser::parse(raw) {
        CommandResult::Action(action) => dispatch(action, state, sandbox, config),
        CommandResult::Help(text) | CommandResult::Error(text) => DispatchResult::status(text),
    }
}

#[test]
fn jn_without_any_jump_reports_no_session() {
    let (mut s, mut sb, cfg) = fixture();
    let r = exec("jn", &mut s, &mut sb, &cfg);
    assert_eq!(r.status, "No active search - use jump first");
    assert_eq!(s.active_line, 0);
}

#[test]
fn failed_jump_starts_no_session() {
    let (mut s, mut sb, cfg) = fixture();
    let r = exec("jump func missing", &mut s, &mut sb, &cfg);
    assert_eq!(r.status, "Function 'missing' not found");
    assert!(s.search.is_none());
    let r = exec("jn", &mut s, &mut sb, &cfg);
    assert_eq!(r.status, "No active search - use jump first");
}

#[test]
fn comment_search_cycles_and_wraps() {
    let (mut s, mut sb, cfg) = fixture();
    let r = exec("jump com two values", &mut s, &mut sb, &cfg);
    assert_eq!(r.status, "Jumped to comment 'two values' at line 2 (1 of 2 matches)");
    assert_eq!(s.active_line, 1);

    assert_eq!(exec("jn", &mut s, &mut sb, &cfg).status, "Match 2 of 2: line 6");
    assert_eq!(s.active_line, 5);

    // Wraps back to the first match.
    assert_eq!(exec("jn", &mut s, &mut sb, &cfg).status, "Match 1 of 2: line 2");
    assert_eq!(s.active_line, 1);

    // And backward wraps to the last.
    assert_eq!(exec("jp", &mut s, &mut sb, &cfg).status, "Match 2 of 2: line 6");
}

#[test]
fn full_cycle_returns_to_first_match() {
    let (mut s, mut sb, cfg) = fixture();
    exec("jump def", &mut s, &mut sb, &cfg);
    let first = s.active_line;
    let count = s.search.as_ref().unwrap().match_count();
    for _ in 0..count {
        exec("jn", &mut s, &mut sb, &cfg);
    }
    assert_eq!(s.active_line, first);
}

#[test]
fn new_jump_replaces_previous_session() {
    let (mut s, mut sb, cfg) = fixture();
    exec("jump func add", &mut s, &mut sb, &cfg);
    exec("jump func mul", &mut s, &mut sb, &cfg);
    assert_eq!(s.active_line, 4);
    let session = s.search.as_ref().unwrap();
    assert_eq!(session.term, "mul");
    assert_eq!(session.match_count(), 1);
}

#[test]
fn load_clears_search_session() {
    let (mut s, mut sb, cfg) = fixture();
    exec("jump func add", &mut s, &mut sb, &cfg);
    assert!(s.search.is_some());
    s.replace_buffer("x = 1", None);
    let r = exec("jn", &mut s, &mut sb, &cfg);
    assert_eq!(r.status, "No active search - use jump first");
}
