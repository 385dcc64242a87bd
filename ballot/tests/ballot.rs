use mixder_ballot::{Error, pack_ballot, pack_ciphertext, unpack_ballot, unpack_ciphertext};
use num_bigint::BigInt;

fn big(hex: &str) -> BigInt {
    BigInt::parse_bytes(hex.as_bytes(), 16).unwrap()
}

#[test]
fn ballot_with_group_sized_ciphertexts() {
    let mut ciphertexts = vec![
        vec![
            big("c90fdaa22168c234c4c6628b80dc1cd129024e088a67cc74020bbea63b139b22514a0879"),
            big("8e3404ddef9519b3cd3a431b302b0a6df25f14374fe1356d6d51c245e485b576625e7ec6"),
        ],
        vec![big("01"), big("7fffffffffffffffffffffff")],
    ];
    ciphertexts.push(ciphertexts[0].clone());

    let der = pack_ballot(&ciphertexts).unwrap();
    // long form length for the outer SEQUENCE
    assert_eq!([0x30u8, 0x81], der[..2]);
    assert_eq!(ciphertexts, unpack_ballot(&der).unwrap());
}

#[test]
fn ciphertext_is_not_a_ballot() {
    let ciphertext = pack_ciphertext(&[BigInt::from(3), BigInt::from(4)]);
    assert!(matches!(
        unpack_ballot(&ciphertext),
        Err(Error::MalformedBallot(_))
    ));
    assert_eq!(
        vec![BigInt::from(3), BigInt::from(4)],
        unpack_ciphertext(&ciphertext).unwrap()
    );
}

#[test]
fn ballot_with_non_universal_components_is_rejected() {
    let valid = pack_ballot(&[vec![BigInt::from(5), BigInt::from(7)]]).unwrap();
    assert_eq!(
        vec![vec![BigInt::from(5), BigInt::from(7)]],
        unpack_ballot(&valid).unwrap()
    );

    // same bytes with INTEGER 5 retagged [APPLICATION 2] and INTEGER 7 [PRIVATE 2]
    let mut retagged = valid.clone();
    let len = retagged.len();
    assert_eq!([0x02u8, 0x01, 0x05, 0x02, 0x01, 0x07], retagged[len - 6..]);
    retagged[len - 6] = 0x42;
    retagged[len - 3] = 0xc2;
    assert!(matches!(
        unpack_ballot(&retagged),
        Err(Error::MalformedBallot(_))
    ));
}
