// Host-side tests for the typed-text role rotation.

use fx_core::constants::*;
use fx_core::{FxParams, TypePhase, Typewriter};

fn run(tw: &mut Typewriter, steps: usize) -> Vec<(String, u32, TypePhase)> {
    (0..steps)
        .map(|_| {
            let s = tw.step();
            (s.text, s.delay_ms, s.phase)
        })
        .collect()
}

#[test]
fn full_cycle_follows_type_pause_delete_pause() {
    let mut tw = Typewriter::new(["ab", "c"]).unwrap();
    let got = run(&mut tw, 7);
    let expected = vec![
        ("a".to_string(), TYPE_CHAR_MS, TypePhase::Typing),
        ("ab".to_string(), PAUSE_FULL_MS, TypePhase::PausingAtFull),
        ("a".to_string(), DELETE_CHAR_MS, TypePhase::Deleting),
        ("".to_string(), PAUSE_EMPTY_MS, TypePhase::PausingAtEmpty),
        ("c".to_string(), PAUSE_FULL_MS, TypePhase::PausingAtFull),
        ("".to_string(), PAUSE_EMPTY_MS, TypePhase::PausingAtEmpty),
        ("a".to_string(), TYPE_CHAR_MS, TypePhase::Typing),
    ];
    assert_eq!(got, expected);
}

#[test]
fn default_roles_cycle_back_to_the_first() {
    let params = FxParams::default();
    let mut tw = Typewriter::new(params.roles.iter().cloned()).unwrap();
    // Each role takes 2 * len steps (type up, delete down).
    let steps: usize = params.roles.iter().map(|r| 2 * r.chars().count()).sum();
    let mut shown = Vec::new();
    for _ in 0..steps {
        let s = tw.step();
        if s.phase == TypePhase::PausingAtFull {
            shown.push(s.text);
        }
    }
    assert_eq!(shown, params.roles);
    assert_eq!(tw.role_index(), 0);
    assert_eq!(tw.current_role(), "Backend Developer");
}

#[test]
fn displayed_text_is_always_a_prefix_of_the_current_role() {
    let roles = ["API Architect", "System Designer"];
    let mut tw = Typewriter::new(roles).unwrap();
    for _ in 0..200 {
        let role = tw.current_role().to_string();
        let s = tw.step();
        assert!(role.starts_with(&s.text), "{:?} not a prefix of {:?}", s.text, role);
    }
}
