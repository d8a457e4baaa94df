use hex_literal::hex;
use rand::SeedableRng as _;
use srtp_icm::cipher::{self, self_test, Cipher as _, CipherAlgo, V128};
use srtp_icm::{AesIcm, Error};

const SALT: [u8; 14] = hex!("f0f1f2f3f4f5f6f7f8f9fafbfcfd");

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn key_and_salt(key: &[u8]) -> Vec<u8> {
    [key, &SALT[..]].concat()
}

/// SRTP packet nonce: SSRC in bits 64..96, packet index in bits 16..64.
fn packet_nonce(ssrc: u32, index: u64) -> [u8; 16] {
    let mut nonce = *V128::from_packet_index(index).as_bytes();
    nonce[4..8].copy_from_slice(&ssrc.to_be_bytes());
    nonce
}

fn check_kat(algo: &'static CipherAlgo, key: &[u8], expected: &[u8]) {
    init_logging();
    let key = key_and_salt(key);
    let mut cipher = algo.alloc(key.len()).expect("could not allocate cipher");
    assert_eq!(cipher.algo().id, algo.id);
    cipher.init(&key).expect("could not initialize cipher");
    cipher.set_iv(&[0; 16]).expect("could not set iv");

    let mut data = [0u8; 32];
    assert_eq!(cipher.encrypt(&mut data).expect("could not encrypt"), 32);
    assert_eq!(&data[..], expected);
    cipher.destroy();
}

#[test] fn test_kat_aes_128_icm() {
    check_kat(&cipher::AES_128_ICM, &hex!("2b7e151628aed2a6abf7158809cf4f3c"), &hex!(
        "e03ead0935c95e80e166b16dd92b4eb4"
        "d23513162b02d0f72a43a2fe4a5f97ab"));
}
#[cfg(feature = "aes192")]
#[test] fn test_kat_aes_192_icm() {
    check_kat(&cipher::AES_192_ICM, &hex!("eab234764e517b2d3d160d587d8c86219740f65f99b6bcf7"), &hex!(
        "35096cba4610028dc1b57503804ce37c"
        "5de986291dcce161d5165ec4568f5c9a"));
}
#[test] fn test_kat_aes_256_icm() {
    check_kat(&cipher::AES_256_ICM,
        &hex!("57f82fe3613fd170a85ec93c40b1f0922ec4cb0dc025b58272147cc438944a98"), &hex!(
        "92bdd28a93c3f52511c677d08b5515a4"
        "9da71b2378a854f67050756ded165bac"));
}

#[test]
fn test_alloc_rejects_bad_key_lengths() {
    for key_len in [0, 16, 24, 29, 31, 32, 45, 47, 60] {
        assert!(matches!(cipher::AES_128_ICM.alloc(key_len), Err(Error::BadParameter(_))),
            "key length {}", key_len);
    }
}

#[test]
fn test_srtp_packet_counter() {
    init_logging();
    let mut icm = AesIcm::new(30).unwrap();
    icm.init(&key_and_salt(&[0x11; 16])).unwrap();

    let ssrc = 0xcafe_babe;
    let index = 0x0000_0001_0203;
    icm.set_iv(&packet_nonce(ssrc, index)).unwrap();

    let counter = icm.counter().as_bytes();
    assert_eq!(&counter[..4], &SALT[..4]);
    assert_eq!(&counter[4..8], &[0xf4u8 ^ 0xca, 0xf5 ^ 0xfe, 0xf6 ^ 0xba, 0xf7 ^ 0xbe]);
    assert_eq!(icm.counter().packet_index(), 0xf8f9_fafb_fcfd ^ index);
    assert_eq!(icm.counter().block_counter(), 0);
}

#[test]
fn test_packet_stream_round_trip() {
    init_logging();
    let key = key_and_salt(&hex!("57f82fe3613fd170a85ec93c40b1f0922ec4cb0dc025b58272147cc438944a98"));
    let mut sender = cipher::AES_256_ICM.alloc(key.len()).unwrap();
    let mut receiver = cipher::AES_256_ICM.alloc(key.len()).unwrap();
    sender.init(&key).unwrap();
    receiver.init(&key).unwrap();

    for index in 0..20u64 {
        let payload = format!("packet number {} with some media payload", index).into_bytes();
        let nonce = packet_nonce(0x1234_5678, index);

        let mut packet = payload.clone();
        sender.set_iv(&nonce).unwrap();
        sender.encrypt(&mut packet).unwrap();
        assert_ne!(packet, payload);

        receiver.set_iv(&nonce).unwrap();
        receiver.decrypt(&mut packet).unwrap();
        assert_eq!(packet, payload);
    }
}

#[test]
fn test_independent_contexts_on_threads() {
    let key = key_and_salt(&[0x5a; 16]);
    let handles = (0..4).map(|_| {
        let key = key.clone();
        std::thread::spawn(move || {
            let mut cipher = cipher::AES_128_ICM.alloc(key.len()).unwrap();
            cipher.init(&key).unwrap();
            let mut keystream = vec![0u8; 1000];
            for index in 0..10 {
                cipher.set_iv(&packet_nonce(1, index)).unwrap();
                cipher.output(&mut keystream[index as usize * 100..][..100]).unwrap();
            }
            keystream
        })
    }).collect::<Vec<_>>();

    let keystreams = handles.into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();
    assert!(keystreams.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_self_tests() {
    init_logging();
    self_test::run_all().unwrap();

    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3711);
    for algo in cipher::ALL_ALGOS.iter() {
        algo.self_test().unwrap();
        self_test::run_random(algo, &mut rng, 32).unwrap();
    }
}
