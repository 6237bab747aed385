//! The walkthrough transcript.

#[test]
fn test_run_events_transcript() {
    let lines = hark::demo::run_events();

    let expected = vec![
        "--- emitting \"foo\" without param ---",
        "[scenario 1] listener 1 triggered for \"foo\"",
        "[scenario 1] listener 2 triggered for \"foo\"",
        "[scenario 2] listener with param: <none>",
        "--- emitting \"foo\" with param ---",
        "[scenario 1] listener 1 triggered for \"foo\"",
        "[scenario 1] listener 2 triggered for \"foo\"",
        "[scenario 2] listener with param: Hello world!",
        "--- emitting \"bar\" multiple times ---",
        "emitting \"bar\" attempt #1",
        "[scenario 3] one-time \"bar\" listener triggered",
        "emitting \"bar\" attempt #2",
        "emitting \"bar\" attempt #3",
        "--- emitting \"baz\" after removing its listener ---",
        "emit(\"baz\") -> false",
        "--- emitting \"multi\" after removing all its listeners ---",
        "emit(\"multi\") -> false",
        "--- listener count for \"check\": 2",
        "raw listeners for \"check\": 2",
        "--- emitting \"args\" with multiple arguments ---",
        "[scenario 7] received multiple args: 1 two three=3",
        "--- emitting \"prep\" to test prepend_listener ---",
        "[scenario 8] prep: first listener",
        "[scenario 8] prep: last listener",
        "--- emitting \"boot\" twice to test prepend_once_listener ---",
        "[scenario 9] prepend-once fired first",
        "[scenario 9] normal boot listener",
        "[scenario 9] normal boot listener",
        "--- event names currently registered: [\"foo\", \"check\", \"args\", \"prep\", \"boot\"]",
        "--- all listeners removed ---",
        "should emit nothing now:",
        "emit(\"foo\") -> false",
        "emit(\"boot\") -> false",
        "emit(\"args\") -> false",
        "warning: possible listener leak detected: 3 listeners added to \"warn\" (max 2); \
         use set_max_listeners() to raise the limit",
    ];
    assert_eq!(lines, expected);
}
