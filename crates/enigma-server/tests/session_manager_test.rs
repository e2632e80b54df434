//! Session Manager tests

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use enigma_core::{EnigmaError, MachineConfig};
use enigma_server::{
    Environment, SessionError, SessionId, SessionManager, SessionRequest, SessionResponse,
};
use proptest::prelude::*;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

// Test environment with a seeded RNG
#[derive(Clone)]
struct TestEnv {
    rng: Arc<Mutex<ChaCha8Rng>>,
}

impl TestEnv {
    fn with_seed(seed: u64) -> Self {
        Self { rng: Arc::new(Mutex::new(ChaCha8Rng::seed_from_u64(seed))) }
    }
}

impl Environment for TestEnv {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        self.rng.lock().expect("rng mutex poisoned").fill_bytes(buffer);
    }
}

// Environment whose RNG is stuck on zero
#[derive(Clone)]
struct StuckEnv;

impl Environment for StuckEnv {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn random_bytes(&self, buffer: &mut [u8]) {
        buffer.fill(0);
    }
}

fn i_ii_iii() -> MachineConfig {
    MachineConfig::new(&["I", "II", "III"], "B")
}

#[test]
fn session_manager_new_has_no_sessions() {
    let manager = SessionManager::<TestEnv>::new();
    assert_eq!(manager.session_count(), 0);
    assert!(!manager.has_session(&SessionId::default()));
}

#[test]
fn create_session_succeeds() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("alpha");

    manager.create_session(id.clone(), &i_ii_iii(), &env).unwrap();
    assert!(manager.has_session(&id));
    assert_eq!(manager.positions(&id).unwrap(), ['A', 'A', 'A']);
    assert_eq!(manager.metadata(&id).unwrap().messages_encoded, 0);
}

#[test]
fn create_session_replaces_existing() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("alpha");

    manager.create_session(id.clone(), &i_ii_iii(), &env).unwrap();
    manager.encode(&id, "AAAA", &env).unwrap();

    manager.create_session(id.clone(), &i_ii_iii(), &env).unwrap();
    assert_eq!(manager.session_count(), 1);
    assert_eq!(manager.encode(&id, "AAAAA", &env).unwrap().encoded, "BDZGO");
}

#[test]
fn failed_create_keeps_existing_session() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("alpha");

    manager.create_session(id.clone(), &i_ii_iii(), &env).unwrap();
    manager.encode(&id, "AA", &env).unwrap();

    let bad = MachineConfig::new(&["I", "II", "IX"], "B");
    let result = manager.create_session(id.clone(), &bad, &env);
    assert!(matches!(
        result,
        Err(SessionError::Machine(EnigmaError::UnknownComponentName { .. }))
    ));
    assert_eq!(manager.positions(&id).unwrap(), ['C', 'A', 'A']);
}

#[test]
fn encode_lazily_creates_default_session() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::default();

    let response = manager.encode(&id, "HELLO WORLD", &env).unwrap();
    assert!(manager.has_session(&id));
    assert_eq!(response.original, "HELLO WORLD");
    assert_eq!(response.encoded, "MFNCZ BBFZM");
    assert_eq!(response.rotor_positions, ['K', 'A', 'A']);
    assert_eq!(manager.machine(&id).unwrap().config(), &MachineConfig::default());
}

#[test]
fn custom_default_config_is_used_lazily() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::with_default_config(i_ii_iii());

    let response = manager.encode(&SessionId::new("lazy"), "AAAAA", &env).unwrap();
    assert_eq!(response.encoded, "BDZGO");
    assert_eq!(manager.default_config(), &i_ii_iii());
}

#[test]
fn decode_after_reset_recovers_plaintext() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("alpha");
    let config = i_ii_iii().with_positions("QEV").with_plugs(&["AB", "XY"]);

    manager.create_session(id.clone(), &config, &env).unwrap();
    let cipher = manager.encode(&id, "ATTACK AT DAWN", &env).unwrap().encoded;

    manager.reset(&id).unwrap();
    let plain = manager.decode(&id, &cipher, &env).unwrap().encoded;
    assert_eq!(plain, "ATTACK AT DAWN");
    assert_eq!(manager.metadata(&id).unwrap().messages_encoded, 2);
}

#[test]
fn non_creating_operations_reject_unknown_session() {
    let mut manager = SessionManager::<TestEnv>::new();
    let id = SessionId::new("missing");

    assert!(manager.reset(&id).unwrap_err().is_not_found());
    assert!(manager.positions(&id).unwrap_err().is_not_found());
    assert!(manager.delete_session(&id).unwrap_err().is_not_found());
    assert_eq!(manager.session_count(), 0);
}

#[test]
fn delete_session_removes_machine() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("alpha");

    manager.create_session(id.clone(), &i_ii_iii(), &env).unwrap();
    manager.delete_session(&id).unwrap();
    assert!(!manager.has_session(&id));
    assert!(manager.reset(&id).is_err());
}

#[test]
fn sessions_are_isolated() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let a = SessionId::new("a");
    let b = SessionId::new("b");

    manager.create_session(a.clone(), &i_ii_iii(), &env).unwrap();
    manager.create_session(b.clone(), &i_ii_iii(), &env).unwrap();

    manager.encode(&a, "AAAAAAAAAA", &env).unwrap();
    assert_eq!(manager.encode(&b, "AAAAA", &env).unwrap().encoded, "BDZGO");
    assert_eq!(manager.positions(&a).unwrap(), ['K', 'A', 'A']);
}

#[test]
fn open_session_ids_are_deterministic_per_seed() {
    let ids = |seed| {
        let env = TestEnv::with_seed(seed);
        let mut manager = SessionManager::new();
        (0..3).map(|_| manager.open_session(&i_ii_iii(), &env).unwrap()).collect::<Vec<_>>()
    };

    let first = ids(7);
    assert_eq!(first, ids(7));
    assert_ne!(first, ids(8));
    assert_ne!(first[0], first[1]);
}

#[test]
fn open_session_survives_repeating_rng() {
    let env = StuckEnv;
    let mut manager = SessionManager::new();

    let a = manager.open_session(&i_ii_iii(), &env).unwrap();
    let b = manager.open_session(&i_ii_iii(), &env).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.as_str(), "0000000000000000");
    assert_eq!(b.as_str(), "0000000000000000-1");
}

#[test]
fn handle_dispatches_requests() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();
    let id = SessionId::new("s1");

    let response = manager
        .handle(SessionRequest::Create { session_id: id.clone(), config: i_ii_iii() }, &env)
        .unwrap();
    assert_eq!(response, SessionResponse::Created { session_id: id.clone() });

    let response = manager
        .handle(
            SessionRequest::Encode { session_id: id.clone(), message: "AAAAA".to_string() },
            &env,
        )
        .unwrap();
    let SessionResponse::Encoded(encoded) = response else {
        panic!("expected encoded response, got {response:?}");
    };
    assert_eq!(encoded.encoded, "BDZGO");

    let response = manager.handle(SessionRequest::Reset { session_id: id.clone() }, &env).unwrap();
    assert_eq!(response, SessionResponse::Reset { session_id: id.clone() });
    assert_eq!(manager.positions(&id).unwrap(), ['A', 'A', 'A']);

    let response = manager.handle(SessionRequest::Delete { session_id: id.clone() }, &env).unwrap();
    assert_eq!(response, SessionResponse::Deleted { session_id: id.clone() });

    let err = manager.handle(SessionRequest::Reset { session_id: id }, &env).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn handle_accepts_json_requests() {
    let env = TestEnv::with_seed(1);
    let mut manager = SessionManager::new();

    let requests = [
        r#"{"op": "create", "rotor_sequence": ["I", "II", "III"], "initial_positions": "ADU"}"#,
        r#"{"op": "encode", "message": "AAA"}"#,
    ];
    let mut last = None;
    for json in requests {
        let request: SessionRequest = serde_json::from_str(json).unwrap();
        last = Some(manager.handle(request, &env).unwrap());
    }

    let Some(SessionResponse::Encoded(response)) = last else {
        panic!("expected encoded response");
    };
    assert_eq!(response.rotor_positions, ['X', 'F', 'B']);
}

proptest! {
    #[test]
    fn prop_reset_restores_initial_positions(
        positions in "[A-Z]{3}",
        message in "[A-Z ]{0,60}",
    ) {
        let env = TestEnv::with_seed(3);
        let mut manager = SessionManager::new();
        let id = SessionId::new("p");
        let config = i_ii_iii().with_positions(&positions);

        manager.create_session(id.clone(), &config, &env).unwrap();
        let first = manager.encode(&id, &message, &env).unwrap();
        manager.reset(&id).unwrap();

        let expected: Vec<char> = positions.chars().rev().collect();
        prop_assert_eq!(manager.positions(&id).unwrap(), expected);
        prop_assert_eq!(manager.encode(&id, &message, &env).unwrap(), first);
    }
}
