//! Property tests for the engine.

use enigma_core::{Enigma, MachineConfig};
use proptest::prelude::*;

const ROTORS: [&str; 5] = ["I", "II", "III", "IV", "V"];

/// Three distinct rotors I-V, any reflector, ring settings, window letters
/// and up to ten disjoint plug leads.
fn config_strategy() -> impl Strategy<Value = MachineConfig> {
    (
        Just(ROTORS.to_vec()).prop_shuffle(),
        prop::sample::select(vec!["A", "B", "C"]),
        prop::collection::vec(1u8..=26, 3),
        "[A-Z]{3}",
        Just((b'A'..=b'Z').map(char::from).collect::<Vec<_>>()).prop_shuffle(),
        0usize..=10,
    )
        .prop_map(|(rotors, reflector, rings, positions, letters, leads)| {
            let plugs: Vec<String> =
                letters.chunks(2).take(leads).map(|pair| pair.iter().collect()).collect();
            MachineConfig::new(&rotors[..3], reflector)
                .with_ring_settings(&rings)
                .with_positions(&positions)
                .with_plugs(&plugs)
        })
}

proptest! {
    #[test]
    fn prop_encode_is_reciprocal(config in config_strategy(), message in "[A-Z]{0,200}") {
        let mut sender = Enigma::new(&config).unwrap();
        let mut receiver = Enigma::new(&config).unwrap();

        let ciphertext = sender.encode(&message);
        prop_assert_eq!(receiver.decode(&ciphertext), message);
        prop_assert_eq!(sender.window(), receiver.window());
    }

    #[test]
    fn prop_no_letter_encodes_to_itself(config in config_strategy(), message in "[A-Z]{1,100}") {
        let mut m = Enigma::new(&config).unwrap();
        let ciphertext = m.encode(&message);
        for (plain, cipher) in message.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    #[test]
    fn prop_reset_is_idempotent(config in config_strategy(), message in "[A-Za-z ]{0,80}") {
        let mut m = Enigma::new(&config).unwrap();
        let first = m.encode(&message);
        m.reset();
        m.reset();
        prop_assert_eq!(m.window(), config.initial_positions.clone());
        prop_assert_eq!(m.encode(&message), first);
    }

    #[test]
    fn prop_non_letters_keep_place_and_state(config in config_strategy(), message in "[A-Z0-9 ,.!?]{0,80}") {
        let mut with_noise = Enigma::new(&config).unwrap();
        let mut letters_only = Enigma::new(&config).unwrap();

        let noisy = with_noise.encode(&message);
        let stripped: String = message.chars().filter(char::is_ascii_uppercase).collect();
        let clean = letters_only.encode(&stripped);

        prop_assert_eq!(noisy.chars().count(), message.chars().count());
        for (original, out) in message.chars().zip(noisy.chars()) {
            if !original.is_ascii_uppercase() {
                prop_assert_eq!(original, out);
            }
        }
        let noisy_letters: String = noisy.chars().filter(char::is_ascii_uppercase).collect();
        prop_assert_eq!(noisy_letters, clean);
        prop_assert_eq!(with_noise.window(), letters_only.window());
    }

    #[test]
    fn prop_case_insensitive_input(config in config_strategy(), message in "[a-zA-Z]{0,60}") {
        let mut lower = Enigma::new(&config).unwrap();
        let mut upper = Enigma::new(&config).unwrap();
        prop_assert_eq!(lower.encode(&message), upper.encode(&message.to_ascii_uppercase()));
    }
}
